use regex::Regex;
use std::sync::LazyLock;

static PEP440_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        ^\s*v?
        (?:(?P<epoch>[0-9]+)!)?
        (?P<release>[0-9]+(?:\.[0-9]+)*)
        (?:[-_.]?(?P<pre_l>alpha|a|beta|b|preview|pre|c|rc)[-_.]?(?P<pre_n>[0-9]+)?)?
        (?:
            (?:-(?P<post_n1>[0-9]+))
            |
            (?:[-_.]?(?P<post_l>post|rev|r)[-_.]?(?P<post_n2>[0-9]+)?)
        )?
        (?:[-_.]?(?P<dev_l>dev)[-_.]?(?P<dev_n>[0-9]+)?)?
        (?:\+(?P<local>[a-z0-9]+(?:[-_.][a-z0-9]+)*))?
        \s*$",
    )
    .expect("PEP 440 pattern is valid")
});

/// Comparison slot that can sit below or above every concrete value
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Bound<T> {
    NegInf,
    Value(T),
    PosInf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum PreKind {
    Alpha,
    Beta,
    ReleaseCandidate,
}

impl PreKind {
    fn parse(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "a" | "alpha" => PreKind::Alpha,
            "b" | "beta" => PreKind::Beta,
            _ => PreKind::ReleaseCandidate,
        }
    }
}

/// Local version label piece; any number outranks any text
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum LocalSegment {
    Text(String),
    Number(u64),
}

/// A PEP 440 version reduced to its precedence key
///
/// Field order is comparison order: epoch, release (trailing zeros dropped),
/// pre-release, post-release, development release, local label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pep440Version {
    epoch: u64,
    release: Vec<u64>,
    pre: Bound<(PreKind, u64)>,
    post: Bound<u64>,
    dev: Bound<u64>,
    local: Bound<Vec<LocalSegment>>,
}

fn number(captures: &regex::Captures<'_>, name: &str) -> Option<Option<u64>> {
    match captures.name(name) {
        None => Some(None),
        Some(m) => m.as_str().parse().ok().map(Some),
    }
}

impl Pep440Version {
    /// Parses a version; `None` if it is not PEP 440 (or a number overflows `u64`)
    pub fn parse(version: &str) -> Option<Self> {
        let captures = PEP440_PATTERN.captures(version)?;

        let epoch = number(&captures, "epoch")?.unwrap_or(0);

        let mut release = captures
            .name("release")?
            .as_str()
            .split('.')
            .map(|part| part.parse::<u64>().ok())
            .collect::<Option<Vec<_>>>()?;
        while release.last() == Some(&0) {
            release.pop();
        }

        let pre = match captures.name("pre_l") {
            Some(label) => Some((
                PreKind::parse(label.as_str()),
                number(&captures, "pre_n")?.unwrap_or(0),
            )),
            None => None,
        };

        let post = if captures.name("post_n1").is_some() {
            number(&captures, "post_n1")?
        } else if captures.name("post_l").is_some() {
            Some(number(&captures, "post_n2")?.unwrap_or(0))
        } else {
            None
        };

        let dev = if captures.name("dev_l").is_some() {
            Some(number(&captures, "dev_n")?.unwrap_or(0))
        } else {
            None
        };

        let local = captures.name("local").map(|label| {
            label
                .as_str()
                .split(['-', '_', '.'])
                .map(|part| match part.parse::<u64>() {
                    Ok(n) if part.bytes().all(|b| b.is_ascii_digit()) => LocalSegment::Number(n),
                    _ => LocalSegment::Text(part.to_lowercase()),
                })
                .collect::<Vec<_>>()
        });

        Some(Self {
            epoch,
            release,
            // A bare dev release sorts before any pre-release of the same version
            pre: match (pre, post, dev) {
                (None, None, Some(_)) => Bound::NegInf,
                (None, _, _) => Bound::PosInf,
                (Some(pre), _, _) => Bound::Value(pre),
            },
            post: post.map_or(Bound::NegInf, Bound::Value),
            dev: dev.map_or(Bound::PosInf, Bound::Value),
            local: local.map_or(Bound::NegInf, Bound::Value),
        })
    }
}
