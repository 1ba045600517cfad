//! Folio core: pure state machine, repository pipeline and view-model helpers.
mod curate;
mod effect;
mod facets;
mod loader;
mod msg;
mod pipeline;
mod repo;
mod state;
mod terminal;
mod update;
mod view_model;

pub use curate::{curated_selection, CuratedSet, CURATED_LIMIT};
pub use effect::{Effect, RepoRequest};
pub use facets::{available_languages, language_options, LanguageOption, ALL_LANGUAGES};
pub use loader::{
    BootLoader, LoaderProfile, LoaderStep, COMPLETE_STATUS, MAX_VISIBLE_LOG_LINES,
};
pub use msg::Msg;
pub use pipeline::{filter_and_sort, LanguageFilter, Selection, SortKey};
pub use repo::{Repository, MULTI_LANG, NO_DESCRIPTION};
pub use state::{AppState, FetchStatus, Page, Surface, BROWSER_PAGE_SIZE};
pub use terminal::{TerminalFeed, FEED_INTERVAL};
pub use update::update;
pub use view_model::{
    AppViewModel, CardStats, CardView, GridView, LoaderView, NOTHING_TO_DISPLAY, NO_MATCHES,
};
