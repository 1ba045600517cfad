use std::cmp::Reverse;

use crate::facets::ALL_LANGUAGES;
use crate::Repository;

/// Ordering applied to the visible repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Most starred first.
    #[default]
    Stars,
    /// Most recently updated first.
    Updated,
}

impl SortKey {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "stars" => Some(Self::Stars),
            "updated" => Some(Self::Updated),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stars => "stars",
            Self::Updated => "updated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LanguageFilter {
    #[default]
    All,
    /// Exact match against [`Repository::normalized_language`].
    Only(String),
}

impl LanguageFilter {
    /// Maps a selector value to a filter; the `all` sentinel disables filtering.
    pub fn parse(value: &str) -> Self {
        if value == ALL_LANGUAGES {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_LANGUAGES,
            Self::Only(language) => language,
        }
    }

    fn admits(&self, repo: &Repository) -> bool {
        match self {
            Self::All => true,
            Self::Only(language) => repo.normalized_language() == language,
        }
    }
}

/// Current filter and sort selection of the repository browser.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub query: String,
    pub language: LanguageFilter,
    pub sort_key: SortKey,
}

/// Applies the language filter, then the text query, then a stable sort.
///
/// The result depends only on `repos` and `selection`; equal sort keys keep fetch order.
pub fn filter_and_sort<'a>(repos: &'a [Repository], selection: &Selection) -> Vec<&'a Repository> {
    let needle = selection.query.to_lowercase();
    let mut visible: Vec<&Repository> = repos
        .iter()
        .filter(|repo| selection.language.admits(repo))
        .filter(|repo| needle.is_empty() || repo.matches_query(&needle))
        .collect();

    match selection.sort_key {
        SortKey::Stars => visible.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count)),
        // Unparsable timestamps sort after every parsable one.
        SortKey::Updated => visible.sort_by_cached_key(|repo| Reverse(repo.updated_at_parsed())),
    }
    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_parses_known_values_only() {
        assert_eq!(SortKey::parse("stars"), Some(SortKey::Stars));
        assert_eq!(SortKey::parse(" updated "), Some(SortKey::Updated));
        assert_eq!(SortKey::parse("name"), None);
    }

    #[test]
    fn language_filter_sentinel() {
        assert_eq!(LanguageFilter::parse("all"), LanguageFilter::All);
        assert_eq!(
            LanguageFilter::parse("All"),
            LanguageFilter::Only("All".to_string())
        );
        assert_eq!(LanguageFilter::parse("Rust").as_str(), "Rust");
    }
}
