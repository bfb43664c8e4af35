use super::CoinglyphApp;
use crate::catalog::{Catalog, CatalogSource, CatalogState, load_catalog};
use egui::Context;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

const LOAD_POLL_INTERVAL: Duration = Duration::from_millis(50);

enum CatalogLoadResult {
    Success(Catalog),
    Error(String),
}

pub(super) struct PendingCatalogLoad {
    rx: Receiver<CatalogLoadResult>,
    source: CatalogSource,
}

impl CoinglyphApp {
    /// Start loading `source` on a worker thread. Any load already in flight is abandoned.
    pub(crate) fn start_catalog_load(&mut self, source: CatalogSource) {
        let generation = self.next_generation;
        self.next_generation = self.next_generation.wrapping_add(1).max(1);
        let limits = self.config.effective_limits();
        let worker_source = source.clone();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let msg = match load_catalog(&worker_source, &limits, generation) {
                Ok(catalog) => CatalogLoadResult::Success(catalog),
                Err(err) => CatalogLoadResult::Error(format!("{err:#}")),
            };
            let _ = tx.send(msg);
        });

        if let Some(dir) = source.root_dir() {
            self.last_catalog_dir = Some(dir.to_path_buf());
        }
        self.set_status(format!("Loading {}…", source.label()));
        self.catalog = CatalogState::Loading;
        self.view.invalidate();
        self.ui.preview = None;
        self.pending_load = Some(PendingCatalogLoad {
            rx,
            source: source.clone(),
        });
        self.source = source;
    }

    pub(crate) fn reload_catalog(&mut self) {
        self.start_catalog_load(self.source.clone());
    }

    pub(crate) fn poll_catalog_loader(&mut self, ctx: &Context) {
        let Some(task) = self.pending_load.take() else {
            return;
        };
        match task.rx.try_recv() {
            Ok(CatalogLoadResult::Success(catalog)) => {
                // Image URIs embed the generation; the old textures are unreachable now.
                ctx.forget_all_images();
                let count = catalog.len();
                self.catalog = CatalogState::Ready(catalog);
                self.view.invalidate();
                self.set_status(format!("Loaded {count} icons from {}", task.source.label()));
            }
            Ok(CatalogLoadResult::Error(err)) => {
                log::error!("Failed to load {}: {err}", task.source.label());
                self.set_status(format!("Failed to load {}", task.source.label()));
                self.catalog = CatalogState::Failed(err);
            }
            Err(TryRecvError::Empty) => {
                self.pending_load = Some(task);
                ctx.request_repaint_after(LOAD_POLL_INTERVAL);
            }
            Err(TryRecvError::Disconnected) => {
                let msg = format!("Loading {} failed: worker disconnected.", task.source.label());
                log::error!("{msg}");
                self.set_status(msg.clone());
                self.catalog = CatalogState::Failed(msg);
            }
        }
    }
}
