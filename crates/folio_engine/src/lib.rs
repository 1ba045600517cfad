//! Folio engine: repository listing IO and effect execution.
mod engine;
mod fetch;
mod types;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, ReqwestFetcher, RepoFetcher};
pub use types::{
    EngineEvent, FailureKind, FetchError, FetchRequest, ListingSort, RepoRecord, RequestId,
};
