use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use log::warn;
use serde::Serialize;
use tauri::{AppHandle, Emitter};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::state::CarouselState;

/// Period between image flips.
const TICK_INTERVAL: Duration = Duration::from_secs(3);

/// How long the crossfade runs before the hidden layer may be swapped.
/// Must stay shorter than the tick period so the buffer is ready in time.
const CROSSFADE_DELAY: Duration = Duration::from_secs(1);

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
struct CarouselFrameEvent {
    album_id: String,
    state: CarouselState,
}

struct CarouselInstance {
    state: Arc<Mutex<CarouselState>>,
    cancel: CancellationToken,
    ticker: Option<JoinHandle<()>>,
}

/// One cycle animation per visible album tile, keyed by album id.
#[derive(Clone)]
pub struct CarouselController {
    app_handle: AppHandle,
    instances: Arc<Mutex<HashMap<String, CarouselInstance>>>,
}

impl CarouselController {
    pub fn new(app_handle: AppHandle) -> Self {
        Self {
            app_handle,
            instances: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Start (or restart) the cycle for one album tile. Single-image
    /// albums get a static instance with no ticker.
    pub async fn start(&self, album_id: String, image_count: usize) -> CarouselState {
        self.stop(&album_id).await;

        let state = Arc::new(Mutex::new(CarouselState::new(image_count)));
        let snapshot = state.lock().await.clone();
        let cancel = CancellationToken::new();

        let ticker = if snapshot.should_cycle() {
            Some(tokio::spawn(cycle_loop(
                self.app_handle.clone(),
                album_id.clone(),
                state.clone(),
                cancel.clone(),
            )))
        } else {
            None
        };

        self.instances.lock().await.insert(
            album_id,
            CarouselInstance {
                state,
                cancel,
                ticker,
            },
        );
        snapshot
    }

    pub async fn frame(&self, album_id: &str) -> Option<CarouselState> {
        let instances = self.instances.lock().await;
        match instances.get(album_id) {
            Some(instance) => Some(instance.state.lock().await.clone()),
            None => None,
        }
    }

    /// Tear down one album's ticker. A ticker left running after its tile
    /// unmounts would keep mutating state for a dead view.
    pub async fn stop(&self, album_id: &str) {
        if let Some(instance) = self.instances.lock().await.remove(album_id) {
            shutdown(instance);
        }
    }

    pub async fn stop_all(&self) {
        let mut instances = self.instances.lock().await;
        for (_, instance) in instances.drain() {
            shutdown(instance);
        }
    }
}

fn shutdown(instance: CarouselInstance) {
    instance.cancel.cancel();
    if let Some(ticker) = instance.ticker {
        ticker.abort();
    }
}

async fn cycle_loop(
    app_handle: AppHandle,
    album_id: String,
    state: Arc<Mutex<CarouselState>>,
    cancel: CancellationToken,
) {
    let mut ticker = time::interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; the cycle starts one period in.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let snapshot = {
                    let mut guard = state.lock().await;
                    guard.advance();
                    guard.clone()
                };
                emit_frame(&app_handle, "carousel-frame-changed", &album_id, snapshot);

                tokio::select! {
                    _ = time::sleep(CROSSFADE_DELAY) => {
                        let snapshot = {
                            let mut guard = state.lock().await;
                            guard.preload_hidden();
                            guard.clone()
                        };
                        emit_frame(&app_handle, "carousel-buffer-loaded", &album_id, snapshot);
                    }
                    _ = cancel.cancelled() => break,
                }
            }
            _ = cancel.cancelled() => break,
        }
    }
}

fn emit_frame(app_handle: &AppHandle, event: &str, album_id: &str, state: CarouselState) {
    let payload = CarouselFrameEvent {
        album_id: album_id.to_string(),
        state,
    };
    if let Err(err) = app_handle.emit(event, payload) {
        warn!("Failed to emit {event} for album {album_id}: {err}");
    }
}
