use crate::Repository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Page finished loading; kicks off the loader and the fetch.
    PageLoaded,
    /// Loader timer fired with the host-chosen progress increment.
    LoaderTick { increment: u32 },
    /// Settle delay after 100% elapsed.
    LoaderSettled,
    /// Overall loader deadline elapsed.
    LoaderDeadline,
    /// Terminal feed timer fired.
    TerminalTick,
    /// Repository fetch settled; the error carries a human-readable reason.
    ReposFetched(Result<Vec<Repository>, String>),
    /// Search box text changed.
    QueryChanged(String),
    /// Language selector changed (raw option value).
    LanguageChanged(String),
    /// Sort selector changed (raw option value).
    SortChanged(String),
}
