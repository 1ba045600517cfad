use crate::Repository;

/// Maximum number of highlights on the landing page.
pub const CURATED_LIMIT: usize = 4;

/// Result of reducing a fetched collection to the landing page highlights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CuratedSet<'a> {
    /// Nothing left after excluding forks.
    Empty,
    /// At most [`CURATED_LIMIT`] non-fork repositories, most starred first.
    Highlights(Vec<&'a Repository>),
}

/// Excludes forks, orders by stars descending (ties keep fetch order) and keeps the top entries.
pub fn curated_selection(repos: &[Repository]) -> CuratedSet<'_> {
    let mut picks: Vec<&Repository> = repos.iter().filter(|repo| !repo.fork).collect();
    if picks.is_empty() {
        return CuratedSet::Empty;
    }
    picks.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    picks.truncate(CURATED_LIMIT);
    CuratedSet::Highlights(picks)
}
