use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Shown in place of an absent description.
pub const NO_DESCRIPTION: &str = "No description provided.";
/// Category for repositories without a detected language.
pub const MULTI_LANG: &str = "multi-lang";

/// A repository record as listed by the remote API. Read-only to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub open_issues: u64,
    pub watchers_count: u64,
    /// ISO-8601 timestamp exactly as received.
    pub updated_at: String,
    pub html_url: String,
    pub fork: bool,
}

impl Repository {
    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or(NO_DESCRIPTION)
    }

    /// Language used for filtering and display; absent maps to [`MULTI_LANG`].
    pub fn normalized_language(&self) -> &str {
        self.language.as_deref().unwrap_or(MULTI_LANG)
    }

    /// Parses `updated_at` as RFC 3339; timestamps without an offset and bare dates count as UTC.
    pub fn updated_at_parsed(&self) -> Option<DateTime<FixedOffset>> {
        let raw = self.updated_at.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed);
        }
        let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })?;
        Some(naive.and_utc().fixed_offset())
    }

    /// Date part of `updated_at` (first ten characters).
    pub fn updated_date(&self) -> &str {
        match self.updated_at.char_indices().nth(10) {
            Some((idx, _)) => &self.updated_at[..idx],
            None => &self.updated_at,
        }
    }

    /// `needle` must already be lowercase.
    pub(crate) fn matches_query(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|text| text.to_lowercase().contains(needle))
    }
}
