//! Property-based invariant tests for the repository pipeline.
//!
//! Verifies:
//! 1. Curated set: at most four entries, no forks, stars descending
//! 2. Curated set is `Empty` exactly when every repository is a fork
//! 3. Default selection keeps every repository
//! 4. Language filter keeps exactly the matching repositories
//! 5. Both sort keys are stable and descending
//! 6. Facets are strictly ascending and drawn from the input
//! 7. Determinism: same input and selection render the same grid

use folio_core::{
    available_languages, curated_selection, filter_and_sort, CuratedSet, GridView,
    LanguageFilter, Repository, Selection, SortKey, CURATED_LIMIT,
};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_language() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("Rust".to_string())),
        Just(Some("Go".to_string())),
        Just(Some("C".to_string())),
        Just(Some("multi-lang".to_string())),
    ]
}

fn arb_timestamp() -> impl Strategy<Value = String> {
    prop_oneof![
        (2019u32..=2025, 1u32..=12, 1u32..=28, 0u32..24)
            .prop_map(|(y, m, d, h)| format!("{y:04}-{m:02}-{d:02}T{h:02}:00:00Z")),
        Just("not a date".to_string()),
    ]
}

fn arb_repo() -> impl Strategy<Value = Repository> {
    (
        "[a-z]{1,8}",
        proptest::option::of("[a-zA-Z ]{0,12}"),
        arb_language(),
        0u64..50,
        arb_timestamp(),
        any::<bool>(),
    )
        .prop_map(|(name, description, language, stars, updated_at, fork)| Repository {
            html_url: format!("https://github.com/someone/{name}"),
            name,
            description,
            language,
            stargazers_count: stars,
            updated_at,
            fork,
            ..Repository::default()
        })
}

fn arb_repos() -> impl Strategy<Value = Vec<Repository>> {
    proptest::collection::vec(arb_repo(), 0..24)
}

fn position(repos: &[Repository], target: &Repository) -> usize {
    repos
        .iter()
        .position(|repo| std::ptr::eq(repo, target))
        .expect("result borrows from input")
}

proptest! {
    #[test]
    fn curated_invariants(repos in arb_repos()) {
        match curated_selection(&repos) {
            CuratedSet::Empty => prop_assert!(repos.iter().all(|repo| repo.fork)),
            CuratedSet::Highlights(picks) => {
                prop_assert!(!picks.is_empty());
                prop_assert!(picks.len() <= CURATED_LIMIT);
                prop_assert!(picks.iter().all(|repo| !repo.fork));
                for pair in picks.windows(2) {
                    prop_assert!(pair[0].stargazers_count >= pair[1].stargazers_count);
                }
            }
        }
    }

    #[test]
    fn default_selection_excludes_nothing(repos in arb_repos()) {
        let visible = filter_and_sort(&repos, &Selection::default());
        prop_assert_eq!(visible.len(), repos.len());
    }

    #[test]
    fn language_filter_is_exact(repos in arb_repos(), language in "(Rust|Go|C|multi-lang)") {
        let selection = Selection {
            language: LanguageFilter::Only(language.clone()),
            ..Selection::default()
        };
        let visible = filter_and_sort(&repos, &selection);
        let expected = repos
            .iter()
            .filter(|repo| repo.normalized_language() == language)
            .count();
        prop_assert_eq!(visible.len(), expected);
        prop_assert!(visible.iter().all(|repo| repo.normalized_language() == language));
    }

    #[test]
    fn sorts_are_stable_and_descending(repos in arb_repos()) {
        let by_stars = filter_and_sort(&repos, &Selection::default());
        for pair in by_stars.windows(2) {
            prop_assert!(pair[0].stargazers_count >= pair[1].stargazers_count);
            if pair[0].stargazers_count == pair[1].stargazers_count {
                prop_assert!(position(&repos, pair[0]) < position(&repos, pair[1]));
            }
        }

        let selection = Selection {
            sort_key: SortKey::Updated,
            ..Selection::default()
        };
        let by_recency = filter_and_sort(&repos, &selection);
        for pair in by_recency.windows(2) {
            let (a, b) = (pair[0].updated_at_parsed(), pair[1].updated_at_parsed());
            match (a, b) {
                (Some(a), Some(b)) => prop_assert!(a >= b),
                (None, Some(_)) => prop_assert!(false, "unparsable timestamp sorted first"),
                _ => {}
            }
            if a == b {
                prop_assert!(position(&repos, pair[0]) < position(&repos, pair[1]));
            }
        }
    }

    #[test]
    fn facets_are_sorted_and_distinct(repos in arb_repos()) {
        let languages = available_languages(&repos);
        for pair in languages.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for language in &languages {
            prop_assert!(repos.iter().any(|repo| repo.language.as_deref() == Some(language.as_str())));
        }
    }

    #[test]
    fn render_is_deterministic(repos in arb_repos(), query in "[a-z]{0,2}") {
        let selection = Selection { query, ..Selection::default() };
        prop_assert_eq!(
            GridView::browser(&repos, &selection),
            GridView::browser(&repos, &selection)
        );
    }
}
