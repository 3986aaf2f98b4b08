// src/app/mod.rs: popular-movies grid, one background catalog load, sorted poster grid, detail panel

// ---- Standard lib imports ----
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

// ---- Crates ----
use eframe::egui as eg;
use tracing::{info, warn};

// ---- Local modules ----
pub mod decode;
pub mod detail;
pub mod error;
pub mod fetch;
pub mod movie;
pub mod prefs;
pub mod presenter;
pub mod sort;
pub mod ui;

pub use error::{LoadError, NetworkError, ParseError, ReleaseDateError, StateError};
pub use fetch::{MovieSource, TmdbFetcher};
pub use movie::MovieRecord;
pub use presenter::{MoviesPresenter, SavedState, ScreenState};
pub use sort::{KeyOrder, SortCriterion};

use crate::config::AppConfig;
use detail::SelectedMovie;
use prefs::{PrefsFile, SortPreference};

const WINDOW_TITLE: &str = "Popular Movies";
const LOADING_REPAINT_MS: u64 = 100;

pub struct MoviesApp {
    presenter: MoviesPresenter,
    prefs: Arc<PrefsFile>,
    state_path: PathBuf,

    // restored list handed to the presenter on the first frame
    restored: Option<SavedState>,
    did_init: bool,

    sort_pick: SortCriterion,
    selected: Option<SelectedMovie>,
    was_focused: bool,
    shown_title: String,
}

impl MoviesApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        cfg: &AppConfig,
        source: Arc<dyn MovieSource>,
        restored: Option<SavedState>,
    ) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let prefs = Arc::new(PrefsFile::new(cfg.prefs_path.clone()));
        let presenter = MoviesPresenter::new(
            source,
            prefs.clone(),
            KeyOrder::from_numeric_flag(cfg.numeric_sort),
        )
        .with_image_base(cfg.image_base_url.clone());

        Self {
            sort_pick: prefs.sort_criterion(),
            presenter,
            prefs,
            state_path: cfg.state_path.clone(),
            restored,
            did_init: false,
            selected: None,
            was_focused: false,
            shown_title: String::new(),
        }
    }

    fn persist_state(&self) {
        let saved = self.presenter.export_state();
        if saved.is_empty() {
            return;
        }
        match write_saved_state(&self.state_path, &saved) {
            Ok(()) => info!(
                "Saved {} movies to {}",
                saved.movies().len(),
                self.state_path.display()
            ),
            Err(e) => warn!("Could not save screen state: {e}"),
        }
    }

    fn sync_window_title(&mut self, ctx: &eg::Context) {
        let wanted = self
            .selected
            .as_ref()
            .map_or(WINDOW_TITLE, |sel| sel.detail.title.as_str());
        if self.shown_title != wanted {
            self.shown_title = wanted.to_string();
            ctx.send_viewport_cmd(eg::ViewportCommand::Title(self.shown_title.clone()));
        }
    }
}

// ---- screen state file ----
pub fn read_saved_state(path: &Path) -> Option<SavedState> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => {
            info!("No saved screen state at {}", path.display());
            return None;
        }
    };
    match SavedState::from_json(&raw) {
        Ok(saved) => Some(saved),
        Err(e) => {
            warn!("{}: {e}", path.display());
            None
        }
    }
}

pub fn write_saved_state(path: &Path, saved: &SavedState) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| format!("create {}: {e}", parent.display()))?;
    }
    let json = saved.to_json().map_err(|e| e.to_string())?;
    fs::write(path, json).map_err(|e| format!("write {}: {e}", path.display()))
}

// ========== App impl ==========
impl eframe::App for MoviesApp {
    fn update(&mut self, ctx: &eg::Context, _frame: &mut eframe::Frame) {
        // First frame
        if !self.did_init {
            self.did_init = true;
            self.presenter.activate(self.restored.take());
        }

        if self.presenter.poll() {
            ctx.request_repaint();
        }
        if self.presenter.state() == ScreenState::Loading {
            ctx.request_repaint_after(Duration::from_millis(LOADING_REPAINT_MS));
        }

        // Focus regained: the prefs file may have been edited meanwhile
        let focused = ctx.input(|i| i.focused);
        if focused && !self.was_focused {
            self.sort_pick = self.presenter.resume();
        }
        self.was_focused = focused;

        if ctx.input(|i| i.viewport().close_requested()) {
            self.persist_state();
            self.presenter.teardown();
        }

        self.sync_window_title(ctx);

        eg::TopBottomPanel::top("topbar").show(ctx, |ui| {
            ui.add_space(4.0);
            self.ui_render_topbar(ui);
            ui.add_space(4.0);
        });

        if self.selected.is_some() {
            self.ui_render_detail_panel(ctx);
        }

        eg::CentralPanel::default().show(ctx, |ui| match self.presenter.state() {
            ScreenState::Empty | ScreenState::Loading => self.ui_render_loading(ui),
            // failures show an empty grid, nothing more
            ScreenState::Populated | ScreenState::Failed => self.ui_render_grid(ui),
        });
    }
}
