use std::cmp::Ordering;

/// One `.`/`-` separated piece of a version string
#[derive(Debug, Clone, PartialEq, Eq)]
enum Component {
    /// All-digit component, stored without leading zeros so any length compares numerically
    Number(String),
    Text(String),
}

impl Component {
    fn parse(part: &str) -> Self {
        if !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) {
            Component::Number(part.trim_start_matches('0').to_string())
        } else {
            Component::Text(part.to_string())
        }
    }
}

impl Ord for Component {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Component::Number(a), Component::Number(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            // A component that failed integer conversion sorts after a real integer
            (Component::Number(_), Component::Text(_)) => Ordering::Less,
            (Component::Text(_), Component::Number(_)) => Ordering::Greater,
            (Component::Text(a), Component::Text(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Component {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Tuple-style sort key: numeric where possible, lexical otherwise
///
/// This approximates version precedence and is not semver- or PEP 440-correct:
/// `1.0.0-rc1` sorts after `1.0.0`, for example. It is the deterministic
/// default and the only ordering Maven coordinates ever use.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeuristicKey(Vec<Component>);

impl HeuristicKey {
    pub fn parse(version: &str) -> Self {
        Self(version.split(['.', '-']).map(Component::parse).collect())
    }
}
