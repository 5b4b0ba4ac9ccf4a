use eventmap::browser::EventBrowser;
use eventmap::catalog;
use eventmap::config::env_loader::load_config;
use eventmap::debounce::Debouncer;
use eventmap::filter::CriteriaEditor;
use eventmap::timeline;
use eventmap::tracing::setup_tracing;
use eventmap::tracked::{FileStorage, TrackedEventsStore};
use std::env;
use std::process::ExitCode;
use tokio::sync::mpsc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    setup_tracing(config.log_level);

    let store = TrackedEventsStore::load(FileStorage::new(&config.data_dir));
    let mut browser = EventBrowser::new(catalog::bundled().to_vec(), store);
    let today = timeline::today();

    let search_term = env::args().skip(1).collect::<Vec<String>>().join(" ");

    if !search_term.is_empty() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(config.search_debounce, move |criteria| {
            let _ = tx.send(criteria);
        });
        let mut editor = CriteriaEditor::default();

        // Typed one character at a time, only the full term gets applied.
        for (end, _) in search_term.char_indices().skip(1) {
            editor.set_search_term(&search_term[..end]);
            debouncer.call(editor.criteria().clone());
        }
        editor.set_search_term(search_term.as_str());
        debouncer.call(editor.criteria().clone());

        if let Some(criteria) = rx.recv().await {
            browser.apply_criteria(criteria);
        }
    }

    browser
        .sidebar_events()
        .iter()
        .for_each(|event| info!("Matching: {} ({})", event.title, event.date));

    let grid = browser.grid(today);

    if grid.is_empty() {
        warn!("No upcoming events match");
    }

    grid.iter().for_each(|(category, events)| {
        info!("{}: {} upcoming events", category, events.len());

        events.iter().for_each(|event| {
            info!(
                "  {} {} {}",
                event.date,
                event.time.format("%H:%M"),
                event.title
            )
        });
    });

    browser
        .tracked_page(today)
        .iter()
        .for_each(|event| info!("Tracked: {} on {}", event.title, event.date));

    ExitCode::SUCCESS
}
