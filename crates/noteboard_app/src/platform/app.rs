use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use page_logging::page_info;
use serde_json::Value;

use noteboard_core::{update, CourseIndex, DraftField, Effect, FormFields, Msg, PageState};
use noteboard_engine::{decode_bootstrap, CatalogSource, PageBootstrap, PageDataAttrs};

use super::effects::EffectRunner;
use super::logging;
use super::widgets::{BasicSelect, SelectAdapter};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("usage: noteboard_app <bootstrap.json> <base-url>")]
    Usage,
    #[error("failed to read {path}: {source}")]
    ReadBootstrap {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("bootstrap file is not a JSON object: {0}")]
    BootstrapFormat(#[from] serde_json::Error),
    #[error(transparent)]
    Bootstrap(#[from] noteboard_engine::BootstrapError),
}

/// Terminal stand-in for the notes page: stdin events drive the same state
/// machine a browser binding would, and filter submissions are simulated as
/// a reload with the new active filter.
pub fn run_app() -> Result<(), AppError> {
    let mut args = std::env::args().skip(1);
    let bootstrap_path = args.next().ok_or(AppError::Usage)?;
    let base_url = args.next().ok_or(AppError::Usage)?;

    logging::initialize();

    let bootstrap = load_bootstrap(Path::new(&bootstrap_path))?;
    let runner = EffectRunner::new(base_url);
    let mut page = Page::load(&bootstrap);
    page.render();

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let line = line.trim();
        if line == "quit" {
            break;
        }
        let Some(msg) = page.parse_command(line) else {
            eprintln!(
                "commands: subject [S] | number [N] | more | open | close | esc | \
                 edit <id> | author/title/body/class <text> | show | quit"
            );
            continue;
        };

        let effects = page.dispatch(msg);
        let awaiting_fetch = effects
            .iter()
            .any(|effect| matches!(effect, Effect::FetchPage { .. }));
        if let Some(url) = runner.run(effects, page.form()) {
            // A real page would navigate away here; the demo reloads in
            // place with the server's would-be response state.
            page_info!("navigating to {url}");
            page.reload(&url);
        }
        if awaiting_fetch {
            page.await_fetch(&runner);
        }
        page.render();
    }
    Ok(())
}

struct Page {
    state: PageState,
    subject_select: BasicSelect,
    number_select: BasicSelect,
}

impl Page {
    fn load(bootstrap: &PageBootstrap) -> Self {
        let index = match &bootstrap.catalog {
            CatalogSource::Codes(codes) => CourseIndex::from_codes(codes),
            CatalogSource::Catalog(pairs) => CourseIndex::from_catalog(pairs.iter().cloned()),
        };
        let form = FormFields {
            search: bootstrap.search.clone(),
            author_filter: bootstrap.author_filter.clone(),
            date_filter: bootstrap.date_filter.clone(),
            sort_by: bootstrap.sort_by.clone(),
        };
        let state = PageState::new(index, &bootstrap.active_filter, form, bootstrap.current_page);
        let mut page = Self {
            state,
            subject_select: BasicSelect::new(),
            number_select: BasicSelect::new(),
        };
        page.sync_widgets();
        page
    }

    fn form(&self) -> &FormFields {
        self.state.form()
    }

    fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let (state, effects) = update(self.state.clone(), msg);
        self.state = state;
        self.sync_widgets();
        effects
    }

    /// Simulated full-page navigation: the next page render would carry the
    /// submitted filter as its active one.
    fn reload(&mut self, url: &url::Url) {
        let class_filter = url
            .query_pairs()
            .find(|(key, _)| key == "class_filter")
            .map(|(_, value)| value.into_owned())
            .unwrap_or_else(|| "All".to_string());
        let index = self.state.index().clone();
        let form = self.state.form().clone();
        self.state = PageState::new(index, &class_filter, form, 1);
        self.sync_widgets();
    }

    fn await_fetch(&mut self, runner: &EffectRunner) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while Instant::now() < deadline {
            if let Some(msg) = runner.poll() {
                self.dispatch(msg);
                return;
            }
            thread::sleep(Duration::from_millis(20));
        }
        eprintln!("no response from the server yet; still loading");
    }

    fn sync_widgets(&mut self) {
        let view = self.state.view();
        self.subject_select.set_options(&view.subject_options);
        self.number_select.set_options(&view.number_options);
    }

    fn parse_command(&mut self, line: &str) -> Option<Msg> {
        let (verb, rest) = match line.split_once(' ') {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        match verb {
            "subject" => {
                if !rest.is_empty() && !self.subject_select.select(rest) {
                    eprintln!("unknown subject {rest:?}");
                    return Some(Msg::NoOp);
                }
                Some(Msg::SubjectChanged(rest.to_string()))
            }
            "number" => {
                if !rest.is_empty() && !self.number_select.select(rest) {
                    eprintln!("unknown number {rest:?}");
                    return Some(Msg::NoOp);
                }
                Some(Msg::NumberChanged(rest.to_string()))
            }
            "more" => Some(Msg::LoadMoreClicked),
            "open" => Some(Msg::CreateModalOpened),
            "close" => Some(Msg::CreateModalDismissed),
            "esc" => Some(Msg::EscapePressed),
            "edit" => rest
                .parse()
                .ok()
                .map(|note_id| Msg::EditToggled { note_id }),
            "author" => Some(draft_edit(DraftField::Author, rest)),
            "title" => Some(draft_edit(DraftField::Title, rest)),
            "body" => Some(draft_edit(DraftField::Body, rest)),
            "class" => Some(draft_edit(DraftField::ClassCode, rest)),
            "show" => Some(Msg::NoOp),
            _ => None,
        }
    }

    fn render(&self) {
        let view = self.state.view();
        println!("active filter: {}", self.state.active_filter());
        println!("subjects: {}", format_options(self.subject_select.rows()));
        println!("numbers:  {}", format_options(self.number_select.rows()));
        println!(
            "page {} | fragments loaded: {} | load more: {}",
            self.state.current_page(),
            view.fragments.len(),
            if !view.load_more_visible {
                "hidden"
            } else if view.load_more_enabled {
                "ready"
            } else {
                "loading"
            }
        );
        if view.create_modal_open {
            let draft = &view.create_draft;
            println!(
                "create modal open (scroll locked) | author={:?} title={:?} class={:?} body={:?}",
                draft.author, draft.title, draft.class_code, draft.body
            );
        }
        if !view.open_editors.is_empty() {
            println!("editing notes: {:?}", view.open_editors);
        }
    }
}

fn draft_edit(field: DraftField, value: &str) -> Msg {
    Msg::DraftFieldEdited {
        field,
        value: value.to_string(),
    }
}

fn format_options(rows: &[noteboard_core::OptionRow]) -> String {
    rows.iter()
        .map(|row| {
            if row.selected {
                format!("[{}]", row.label)
            } else {
                row.label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reads the bootstrap attributes from a JSON file keyed by attribute name,
/// the same bundle a browser binding would read off the page element.
fn load_bootstrap(path: &Path) -> Result<PageBootstrap, AppError> {
    let content = fs::read_to_string(path).map_err(|source| AppError::ReadBootstrap {
        path: path.display().to_string(),
        source,
    })?;
    let value: Value = serde_json::from_str(&content)?;

    let string_attr = |name: &str| -> Option<String> {
        value.get(name).and_then(Value::as_str).map(str::to_string)
    };
    let attrs = PageDataAttrs {
        page: string_attr("data-page").unwrap_or_else(|| "1".to_string()),
        classes: string_attr("data-classes"),
        catalog: string_attr("data-catalog"),
        subjects: string_attr("data-subjects"),
        active_filter: string_attr("data-active-filter").unwrap_or_else(|| "All".to_string()),
        search: string_attr("data-search"),
        author_filter: string_attr("data-author-filter"),
        date_filter: string_attr("data-date-filter"),
        sort_by: string_attr("data-sort-by"),
    };
    Ok(decode_bootstrap(&attrs)?)
}
