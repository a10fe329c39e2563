use crate::inventory::services::format_query_cutoff;
use crate::ports::outbound::ListingQuery;
use chrono::{DateTime, Utc};

/// Result cap for inspection queries
pub const DEBUG_ITEM_LIMIT: usize = 100;

/// Builder for the `items.find(...)` request body sent to the AQL endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AqlQuery {
    repository: String,
    name_patterns: Vec<String>,
    downloaded_since: Option<String>,
    include_type: bool,
    include_stats: bool,
    limit: Option<usize>,
}

/// JSON string literal, so repository names and patterns cannot break the query
fn quoted(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

impl AqlQuery {
    pub fn new(repository: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            name_patterns: Vec::new(),
            downloaded_since: None,
            include_type: false,
            include_stats: false,
            limit: None,
        }
    }

    /// Query for a listing request
    ///
    /// Inspection queries drop every filter, include item types and stats,
    /// and are capped at [`DEBUG_ITEM_LIMIT`].
    pub fn for_listing(query: &ListingQuery) -> Self {
        let aql = Self::new(query.repository.clone());
        if query.debug {
            return aql
                .include_type(true)
                .include_stats(true)
                .limit(DEBUG_ITEM_LIMIT);
        }

        let aql = aql
            .name_patterns(query.ecosystem.artifact_patterns())
            .include_stats(query.include_stats);
        match query.downloaded_since {
            Some(cutoff) => aql.downloaded_since(cutoff),
            None => aql,
        }
    }

    pub fn name_patterns(mut self, patterns: &[&str]) -> Self {
        self.name_patterns = patterns.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn downloaded_since(mut self, cutoff: DateTime<Utc>) -> Self {
        self.downloaded_since = Some(format_query_cutoff(cutoff));
        self
    }

    pub fn include_type(mut self, include: bool) -> Self {
        self.include_type = include;
        self
    }

    pub fn include_stats(mut self, include: bool) -> Self {
        self.include_stats = include;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn criteria(&self) -> String {
        let mut criteria = vec![format!("\"repo\": {}", quoted(&self.repository))];

        if !self.name_patterns.is_empty() {
            let alternatives: Vec<String> = self
                .name_patterns
                .iter()
                .map(|pattern| format!("{{\"name\": {{\"$match\": {}}}}}", quoted(pattern)))
                .collect();
            criteria.push(format!("\"$or\": [{}]", alternatives.join(", ")));
        }

        if let Some(cutoff) = &self.downloaded_since {
            criteria.push(format!(
                "\"stat.downloaded\": {{\"$gte\": {}}}",
                quoted(cutoff)
            ));
        }

        criteria.join(", ")
    }

    fn included_fields(&self) -> String {
        let mut fields = vec!["name", "path", "repo"];
        if self.include_type {
            fields.push("type");
        }
        if self.include_stats {
            fields.extend(["stat.downloaded", "stat.downloads"]);
        }
        fields
            .iter()
            .map(|field| format!("\"{}\"", field))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for AqlQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "items.find({{{}}}).include({})",
            self.criteria(),
            self.included_fields()
        )?;
        if let Some(limit) = self.limit {
            write!(f, ".limit({})", limit)?;
        }
        Ok(())
    }
}
