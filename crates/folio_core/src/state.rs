use crate::facets::available_languages;
use crate::view_model::{AppViewModel, GridView, LoaderView};
use crate::{BootLoader, LoaderProfile, RepoRequest, Repository, Selection, TerminalFeed};

/// Page size requested by the repository browser.
pub const BROWSER_PAGE_SIZE: u32 = 100;

/// Which page controller this state drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Curated highlights, boot loader and terminal feed.
    #[default]
    Landing,
    /// Full repository list with filters.
    Browser,
}

impl Page {
    pub fn repo_request(self) -> RepoRequest {
        match self {
            Page::Landing => RepoRequest {
                per_page: None,
                recently_updated_first: true,
            },
            Page::Browser => RepoRequest {
                per_page: Some(BROWSER_PAGE_SIZE),
                recently_updated_first: false,
            },
        }
    }

    pub fn failure_message(self, reason: &str) -> String {
        match self {
            Page::Landing => format!("Unable to pull GitHub data: {reason}"),
            Page::Browser => format!("Unable to load repositories: {reason}"),
        }
    }
}

/// Optional page elements. A missing element turns its feature into a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    pub loader: Option<LoaderProfile>,
    pub terminal: Option<TerminalFeed>,
}

impl Surface {
    pub fn for_page(page: Page) -> Self {
        match page {
            Page::Landing => Self {
                loader: Some(LoaderProfile::landing()),
                terminal: Some(TerminalFeed::landing()),
            },
            Page::Browser => Self {
                loader: Some(LoaderProfile::browser()),
                terminal: None,
            },
        }
    }

    pub fn bare() -> Self {
        Self {
            loader: None,
            terminal: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Pending,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    page: Page,
    loader: Option<BootLoader>,
    terminal: Option<TerminalFeed>,
    fetch: FetchStatus,
    repos: Vec<Repository>,
    languages: Vec<String>,
    selection: Selection,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Page::default())
    }
}

impl AppState {
    pub fn new(page: Page) -> Self {
        Self::with_surface(page, Surface::for_page(page))
    }

    pub fn with_surface(page: Page, surface: Surface) -> Self {
        Self {
            page,
            loader: surface.loader.map(BootLoader::new),
            terminal: surface.terminal,
            fetch: FetchStatus::Idle,
            repos: Vec::new(),
            languages: Vec::new(),
            selection: Selection::default(),
            dirty: false,
        }
    }

    /// Browser state seeded with an already fetched collection.
    pub fn with_repos(repos: Vec<Repository>) -> Self {
        let mut state = Self::with_surface(Page::Browser, Surface::bare());
        state.store_repos(repos);
        state.dirty = false;
        state
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn fetch_status(&self) -> &FetchStatus {
        &self.fetch
    }

    pub fn repos(&self) -> &[Repository] {
        &self.repos
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// True once the fetch settled and the loader (if any) is gone.
    pub fn is_settled(&self) -> bool {
        let fetched = matches!(self.fetch, FetchStatus::Loaded | FetchStatus::Failed(_));
        let loader_gone = self.loader.as_ref().is_none_or(BootLoader::is_hidden);
        fetched && loader_gone
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            page: self.page,
            loader: self.loader.as_ref().map(LoaderView::from_loader),
            terminal_lines: self
                .terminal
                .as_ref()
                .map(|feed| feed.lines().to_vec())
                .unwrap_or_default(),
            grid: self.grid(),
            language_options: match self.page {
                Page::Landing => Vec::new(),
                Page::Browser => crate::facets::language_options(&self.languages),
            },
            selection: self.selection.clone(),
            dirty: self.dirty,
        }
    }

    fn grid(&self) -> GridView {
        match &self.fetch {
            FetchStatus::Idle | FetchStatus::Pending => GridView::Loading,
            FetchStatus::Failed(reason) => GridView::Error(self.page.failure_message(reason)),
            FetchStatus::Loaded => match self.page {
                Page::Landing => GridView::curated(&self.repos),
                Page::Browser => GridView::browser(&self.repos, &self.selection),
            },
        }
    }

    /// Returns whether a redraw is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn loader_mut(&mut self) -> Option<&mut BootLoader> {
        self.loader.as_mut()
    }

    pub(crate) fn terminal_mut(&mut self) -> Option<&mut TerminalFeed> {
        self.terminal.as_mut()
    }

    pub(crate) fn set_fetch_status(&mut self, status: FetchStatus) {
        self.fetch = status;
        self.dirty = true;
    }

    /// Replaces the collection wholesale and rebuilds the language facets.
    pub(crate) fn store_repos(&mut self, repos: Vec<Repository>) {
        if self.page == Page::Browser {
            self.languages = available_languages(&repos);
            // Rebuilding the selector drops any stale language choice.
            self.selection.language = crate::LanguageFilter::All;
        }
        self.repos = repos;
        self.fetch = FetchStatus::Loaded;
        self.dirty = true;
    }

    pub(crate) fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }
}
