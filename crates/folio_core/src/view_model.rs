use crate::curate::{curated_selection, CuratedSet};
use crate::pipeline::filter_and_sort;
use crate::{BootLoader, LanguageOption, Page, Repository, Selection};

/// Placeholder when filters exclude every repository.
pub const NO_MATCHES: &str = "No repositories matched.";
/// Placeholder when the curated set is empty.
pub const NOTHING_TO_DISPLAY: &str = "No repositories to display (yet!).";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub page: Page,
    pub loader: Option<LoaderView>,
    pub terminal_lines: Vec<String>,
    pub grid: GridView,
    /// Empty on the landing page.
    pub language_options: Vec<LanguageOption>,
    pub selection: Selection,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderView {
    pub percent: u32,
    pub status: Option<String>,
    pub log: Vec<String>,
    pub hidden: bool,
}

impl LoaderView {
    pub(crate) fn from_loader(loader: &BootLoader) -> Self {
        Self {
            percent: loader.percent(),
            status: loader.status().map(ToOwned::to_owned),
            log: loader.log_lines().map(ToOwned::to_owned).collect(),
            hidden: loader.is_hidden(),
        }
    }
}

/// Content of the card container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridView {
    Loading,
    Cards(Vec<CardView>),
    /// Not an error: nothing to show for the current data or selection.
    Placeholder(String),
    Error(String),
}

impl GridView {
    /// Landing page highlights.
    pub fn curated(repos: &[Repository]) -> Self {
        match curated_selection(repos) {
            CuratedSet::Empty => GridView::Placeholder(NOTHING_TO_DISPLAY.to_string()),
            CuratedSet::Highlights(picks) => {
                GridView::Cards(picks.into_iter().map(CardView::summary).collect())
            }
        }
    }

    /// Repository browser grid, rebuilt from scratch for `selection`.
    pub fn browser(repos: &[Repository], selection: &Selection) -> Self {
        let visible = filter_and_sort(repos, selection);
        if visible.is_empty() {
            return GridView::Placeholder(NO_MATCHES.to_string());
        }
        GridView::Cards(visible.into_iter().map(CardView::detailed).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub name: String,
    pub description: String,
    pub language: String,
    pub stars: u64,
    pub url: String,
    /// Date of the last update; browser cards only.
    pub updated: Option<String>,
    /// Browser cards only.
    pub stats: Option<CardStats>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStats {
    pub open_issues: u64,
    pub forks: u64,
    pub watchers: u64,
}

impl CardView {
    fn summary(repo: &Repository) -> Self {
        Self {
            name: repo.name.clone(),
            description: repo.description_or_default().to_string(),
            language: repo.normalized_language().to_string(),
            stars: repo.stargazers_count,
            url: repo.html_url.clone(),
            updated: None,
            stats: None,
        }
    }

    fn detailed(repo: &Repository) -> Self {
        Self {
            updated: Some(repo.updated_date().to_string()),
            stats: Some(CardStats {
                open_issues: repo.open_issues,
                forks: repo.forks_count,
                watchers: repo.watchers_count,
            }),
            ..Self::summary(repo)
        }
    }
}
