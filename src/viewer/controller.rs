use std::sync::Arc;
use std::time::Duration;

use log::warn;
use tauri::{AppHandle, Emitter};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use super::state::ViewerState;

/// Auto-advance period while the viewer is open.
const AUTOPLAY_INTERVAL: Duration = Duration::from_secs(2);

/// The single full-screen viewer. At most one album is open at a time;
/// every manual or automatic index change restarts the auto-advance timer
/// so manual navigation never races a stale tick.
#[derive(Clone)]
pub struct ViewerController {
    app_handle: AppHandle,
    state: Arc<Mutex<Option<ViewerState>>>,
    ticker: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl ViewerController {
    pub fn new(app_handle: AppHandle) -> Self {
        Self {
            app_handle,
            state: Arc::new(Mutex::new(None)),
            ticker: Arc::new(Mutex::new(None)),
        }
    }

    pub async fn open(&self, album_id: String, image_count: usize) -> ViewerState {
        let opened = ViewerState::open(album_id, image_count);
        *self.state.lock().await = Some(opened.clone());
        emit_changed(&self.app_handle, &opened);
        self.restart_autoplay(&opened).await;
        opened
    }

    /// Dismiss the viewer. No persisted side effect; the ticker must not
    /// outlive the view it was driving.
    pub async fn close(&self) {
        self.cancel_ticker().await;
        if self.state.lock().await.take().is_some() {
            if let Err(err) = self.app_handle.emit("viewer-closed", ()) {
                warn!("Failed to emit viewer-closed: {err}");
            }
        }
    }

    pub async fn next(&self) -> Option<ViewerState> {
        self.step(ViewerState::next).await
    }

    pub async fn prev(&self) -> Option<ViewerState> {
        self.step(ViewerState::prev).await
    }

    pub async fn current(&self) -> Option<ViewerState> {
        self.state.lock().await.clone()
    }

    /// Keyboard dispatch. Bindings are only live while the viewer is
    /// open; a key arriving afterwards is reported as unhandled.
    pub async fn handle_key(&self, key: &str) -> bool {
        if self.state.lock().await.is_none() {
            return false;
        }
        match key {
            "ArrowRight" => self.next().await.is_some(),
            "ArrowLeft" => self.prev().await.is_some(),
            "Escape" => {
                self.close().await;
                true
            }
            _ => false,
        }
    }

    async fn step(&self, apply: fn(&mut ViewerState)) -> Option<ViewerState> {
        let snapshot = {
            let mut guard = self.state.lock().await;
            let viewer = guard.as_mut()?;
            apply(viewer);
            viewer.clone()
        };
        emit_changed(&self.app_handle, &snapshot);
        // Manual navigation resets the auto-advance phase.
        self.restart_autoplay(&snapshot).await;
        Some(snapshot)
    }

    async fn restart_autoplay(&self, current: &ViewerState) {
        self.cancel_ticker().await;
        if !current.should_autoplay() {
            return;
        }

        let state = self.state.clone();
        let app_handle = self.app_handle.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = time::interval(AUTOPLAY_INTERVAL);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; skip it.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let snapshot = {
                    let mut guard = state.lock().await;
                    let Some(viewer) = guard.as_mut() else { break };
                    viewer.next();
                    viewer.clone()
                };
                emit_changed(&app_handle, &snapshot);
            }
        });

        *self.ticker.lock().await = Some(handle);
    }

    async fn cancel_ticker(&self) {
        if let Some(handle) = self.ticker.lock().await.take() {
            handle.abort();
        }
    }
}

fn emit_changed(app_handle: &AppHandle, state: &ViewerState) {
    if let Err(err) = app_handle.emit("viewer-changed", state) {
        warn!("Failed to emit viewer-changed: {err}");
    }
}
