use folio_core::{update, AppState, Msg, Page};

#[test]
fn stray_messages_leave_fresh_state_untouched() {
    for page in [Page::Landing, Page::Browser] {
        let state = AppState::new(page);

        // Settle before the loader reached 100%.
        let (next, effects) = update(state.clone(), Msg::LoaderSettled);
        assert_eq!(state, next);
        assert!(effects.is_empty());

        let (next, effects) = update(next, Msg::LoaderTick { increment: 0 });
        assert_eq!(state.view().grid, next.view().grid);
        assert!(effects.is_empty());
    }
}

#[test]
fn filter_inputs_are_noops_on_landing_page() {
    let state = AppState::new(Page::Landing);
    for msg in [
        Msg::QueryChanged("rust".into()),
        Msg::LanguageChanged("Go".into()),
        Msg::SortChanged("updated".into()),
    ] {
        let (next, effects) = update(state.clone(), msg);
        assert_eq!(state, next);
        assert!(effects.is_empty());
    }
}
