use std::collections::BTreeSet;

use crate::Repository;

/// Selector value meaning "do not filter on language".
pub const ALL_LANGUAGES: &str = "all";
const ALL_LANGUAGES_LABEL: &str = "All languages";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub value: String,
    pub label: String,
}

/// Distinct languages present in `repos`, sorted ascending (case-sensitive).
///
/// Absent and empty languages are not collected.
pub fn available_languages(repos: &[Repository]) -> Vec<String> {
    repos
        .iter()
        .filter_map(|repo| repo.language.as_deref())
        .filter(|language| !language.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(ToOwned::to_owned)
        .collect()
}

/// Selector options: the `all` sentinel followed by each language.
pub fn language_options(languages: &[String]) -> Vec<LanguageOption> {
    let mut options = Vec::with_capacity(languages.len() + 1);
    options.push(LanguageOption {
        value: ALL_LANGUAGES.to_string(),
        label: ALL_LANGUAGES_LABEL.to_string(),
    });
    options.extend(languages.iter().map(|language| LanguageOption {
        value: language.clone(),
        label: language.clone(),
    }));
    options
}
