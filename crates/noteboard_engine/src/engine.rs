use std::sync::{mpsc, Arc};
use std::thread;

use crate::fetch::{FetchSettings, PageFetcher, ReqwestPageFetcher};
use crate::{EngineEvent, PageQuery};

enum EngineCommand {
    FetchPage { query: PageQuery },
}

/// Handle to the background fetch loop: commands in, completion events out.
/// One thread owns a tokio runtime; the page loop stays synchronous and
/// polls `try_recv`.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(base_url: impl Into<String>, settings: FetchSettings) -> Self {
        let base_url = base_url.into();
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestPageFetcher::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                let base_url = base_url.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), &base_url, command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn fetch_page(&self, query: PageQuery) {
        let _ = self.cmd_tx.send(EngineCommand::FetchPage { query });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn PageFetcher,
    base_url: &str,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchPage { query } => {
            let page = query.page;
            let result = fetcher.fetch_page(base_url, &query).await;
            let _ = event_tx.send(EngineEvent::PageCompleted { page, result });
        }
    }
}
