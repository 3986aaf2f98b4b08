// src/app/presenter.rs
//! Grid screen state: one background load, then a sorted list bound to the grid.
//!
//! Lifecycle per instance: `Empty -> Loading -> Populated | Failed`.
//! A restored list skips `Loading` entirely. `Failed` is terminal.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::decode::decode_with_base;
use super::error::{LoadError, StateError};
use super::fetch::MovieSource;
use super::movie::MovieRecord;
use super::prefs::SortPreference;
use super::sort::{sort_movies, KeyOrder, SortCriterion};
use crate::config::DEFAULT_IMAGE_BASE_URL;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenState {
    Empty,
    Loading,
    Populated,
    Failed,
}

/// The grid's list, verbatim, for re-creating the screen without a fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    movies: Vec<MovieRecord>,
}

impl SavedState {
    pub fn new(movies: Vec<MovieRecord>) -> Self {
        Self { movies }
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn to_json(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, StateError> {
        Ok(serde_json::from_str(raw)?)
    }
}

type LoadResult = Result<Vec<MovieRecord>, LoadError>;

/// Fetch then decode. Runs on the worker thread.
pub fn load_catalog(source: &dyn MovieSource, image_base: &str) -> LoadResult {
    let body = source.fetch()?;
    Ok(decode_with_base(&body, image_base)?)
}

pub struct MoviesPresenter {
    source: Arc<dyn MovieSource>,
    prefs: Arc<dyn SortPreference>,
    order: KeyOrder,
    image_base: String,

    movies: Vec<MovieRecord>,
    state: ScreenState,

    // single-shot handoff from the worker; None once consumed or torn down
    done_rx: Option<Receiver<LoadResult>>,
    activated: bool,
    torn_down: bool,
}

impl MoviesPresenter {
    pub fn new(
        source: Arc<dyn MovieSource>,
        prefs: Arc<dyn SortPreference>,
        order: KeyOrder,
    ) -> Self {
        Self {
            source,
            prefs,
            order,
            image_base: DEFAULT_IMAGE_BASE_URL.to_string(),
            movies: Vec::new(),
            state: ScreenState::Empty,
            done_rx: None,
            activated: false,
            torn_down: false,
        }
    }

    pub fn with_image_base(mut self, image_base: impl Into<String>) -> Self {
        self.image_base = image_base.into();
        self
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// First activation of the screen. A non-empty restored list is used as-is
    /// (re-sorted); otherwise one background load is started. Later calls are no-ops.
    pub fn activate(&mut self, restored: Option<SavedState>) {
        if self.activated || self.torn_down {
            return;
        }
        self.activated = true;

        match restored.filter(|saved| !saved.is_empty()) {
            Some(saved) => {
                info!("Restoring {} movies without a fetch", saved.movies.len());
                self.import_state(saved);
            }
            None => self.start_load(),
        }
    }

    fn start_load(&mut self) {
        let (done_tx, done_rx) = mpsc::sync_channel::<LoadResult>(1);
        let source = Arc::clone(&self.source);
        let image_base = self.image_base.clone();

        let spawned = thread::Builder::new()
            .name("catalog-fetch".into())
            .spawn(move || {
                let result = load_catalog(source.as_ref(), &image_base);
                // receiver is gone if the screen was torn down; drop the result
                let _ = done_tx.send(result);
            });

        match spawned {
            Ok(_) => {
                self.done_rx = Some(done_rx);
                self.state = ScreenState::Loading;
                info!("Catalog load started");
            }
            Err(e) => {
                error!("Could not start catalog worker: {e}");
                self.state = ScreenState::Failed;
            }
        }
    }

    /// Drain the worker's result, if it has arrived. Foreground thread only.
    /// Returns true when the screen changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = &self.done_rx else {
            return false;
        };
        let outcome = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => Err(LoadError::WorkerLost),
        };
        self.done_rx = None;

        match outcome {
            Ok(movies) => {
                info!("Catalog loaded: {} movies", movies.len());
                self.movies.extend(movies);
                self.apply_sort();
                self.state = ScreenState::Populated;
            }
            Err(err) => {
                error!("Catalog load failed: {err}");
                self.state = ScreenState::Failed;
            }
        }
        true
    }

    /// Screen regained focus: the preference may have changed meanwhile.
    pub fn resume(&mut self) -> SortCriterion {
        let criterion = self.prefs.sort_criterion();
        if self.state == ScreenState::Populated {
            sort_movies(&mut self.movies, criterion, self.order);
        }
        criterion
    }

    fn apply_sort(&mut self) {
        let criterion = self.prefs.sort_criterion();
        sort_movies(&mut self.movies, criterion, self.order);
    }

    /// The record at a grid position, handed over by value.
    pub fn select(&self, position: usize) -> Option<MovieRecord> {
        let movie = self.movies.get(position).cloned();
        if movie.is_none() {
            warn!("Selection {position} is outside a grid of {}", self.movies.len());
        }
        movie
    }

    pub fn export_state(&self) -> SavedState {
        SavedState::new(self.movies.clone())
    }

    /// Replace the list wholesale. Any in-flight load is abandoned.
    pub fn import_state(&mut self, saved: SavedState) {
        self.done_rx = None;
        self.activated = true;
        self.movies = saved.movies;
        self.apply_sort();
        self.state = ScreenState::Populated;
    }

    /// Advisory: a load still in flight will finish, but its result is discarded.
    pub fn teardown(&mut self) {
        if self.done_rx.take().is_some() {
            info!("Screen torn down mid-load; result will be discarded");
        }
        self.torn_down = true;
    }
}
