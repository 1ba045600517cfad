use std::fmt::Write;

use folio_core::{AppViewModel, CardView, GridView, LoaderView, Page};

/// Renders the whole page as plain text. Pure: same view, same text.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();

    if let Some(loader) = view.loader.as_ref().filter(|loader| !loader.hidden) {
        render_loader(&mut out, loader);
        return out;
    }

    let title = match view.page {
        Page::Landing => "== featured projects ==",
        Page::Browser => "== repositories ==",
    };

    for line in &view.terminal_lines {
        let _ = writeln!(out, "> {line}");
    }
    if !view.terminal_lines.is_empty() {
        out.push('\n');
    }

    if view.page == Page::Browser {
        render_controls(&mut out, view);
    }

    let _ = writeln!(out, "{title}");
    match &view.grid {
        GridView::Loading => out.push_str("loading...\n"),
        GridView::Placeholder(text) | GridView::Error(text) => {
            let _ = writeln!(out, "{text}");
        }
        GridView::Cards(cards) => {
            for card in cards {
                render_card(&mut out, card);
            }
        }
    }
    out
}

fn render_loader(out: &mut String, loader: &LoaderView) {
    let _ = writeln!(out, "[{:>3}%] {}", loader.percent, progress_bar(loader.percent));
    if let Some(status) = &loader.status {
        let _ = writeln!(out, "{status}");
    }
    for line in &loader.log {
        let _ = writeln!(out, "  > {line}");
    }
}

fn progress_bar(percent: u32) -> String {
    const WIDTH: usize = 20;
    let filled = (percent.min(100) as usize * WIDTH) / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(WIDTH - filled))
}

fn render_controls(out: &mut String, view: &AppViewModel) {
    let selected = view.selection.language.as_str();
    let languages = view
        .language_options
        .iter()
        .map(|option| {
            if option.value == selected {
                format!("*{}", option.label)
            } else {
                option.label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");
    let _ = writeln!(out, "languages: {languages}");
    let _ = writeln!(
        out,
        "search: {:?}  sort: {}",
        view.selection.query,
        view.selection.sort_key.as_str()
    );
    out.push('\n');
}

fn render_card(out: &mut String, card: &CardView) {
    let _ = write!(out, "{}  [{}]  ★ {}", card.name, card.language, card.stars);
    if let Some(updated) = &card.updated {
        let _ = write!(out, "  ⟳ {updated}");
    }
    out.push('\n');
    let _ = writeln!(out, "    {}", card.description);
    if let Some(stats) = card.stats {
        let _ = writeln!(
            out,
            "    Issues: {}  Forks: {}  Watchers: {}",
            stats.open_issues, stats.forks, stats.watchers
        );
    }
    let _ = writeln!(out, "    {}", card.url);
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{update, AppState, Msg, Repository, Surface};

    fn repo(name: &str, language: Option<&str>, stars: u64) -> Repository {
        Repository {
            name: name.into(),
            language: language.map(ToOwned::to_owned),
            stargazers_count: stars,
            updated_at: "2024-02-03T04:05:06Z".into(),
            html_url: format!("https://github.com/o/{name}"),
            ..Repository::default()
        }
    }

    #[test]
    fn browser_render_lists_controls_and_cards() {
        let state = AppState::with_repos(vec![repo("tool", Some("Rust"), 3), repo("misc", None, 1)]);
        let (state, _) = update(state, Msg::LanguageChanged("Rust".into()));
        let text = render(&state.view());

        assert!(text.contains("languages: All languages | *Rust"));
        assert!(text.contains("tool  [Rust]  ★ 3  ⟳ 2024-02-03"));
        assert!(text.contains("No description provided."));
        assert!(text.contains("Issues: 0  Forks: 0  Watchers: 0"));
        assert!(!text.contains("misc"));
        assert_eq!(text, render(&state.view()));
    }

    #[test]
    fn loader_hides_page_until_done() {
        let (state, _) = update(AppState::new(Page::Landing), Msg::PageLoaded);
        let (state, _) = update(state, Msg::LoaderTick { increment: 50 });
        let text = render(&state.view());
        assert!(text.starts_with("[ 50%] [##########..........]"));
        assert!(text.contains("  > [ INIT ] mounting /dev/xbox360-wireless"));
        assert!(!text.contains("featured projects"));
    }

    #[test]
    fn fetch_error_is_rendered_inline() {
        let (state, _) = update(
            AppState::with_surface(Page::Landing, Surface::bare()),
            Msg::PageLoaded,
        );
        let (state, _) = update(state, Msg::ReposFetched(Err("request timed out".into())));
        let text = render(&state.view());
        assert!(text.contains("Unable to pull GitHub data: request timed out"));
    }
}
