use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use log::{info, warn};
use tauri::{AppHandle, Emitter, State};

use crate::compress::compress_batch;
use crate::profile::ProfileStore;
use crate::AppState;

use super::models::{Album, AlbumDraft};
use super::store::{AlbumStore, AppendReceipt};

#[tauri::command]
pub async fn list_albums(state: State<'_, AppState>) -> Result<Vec<Album>, String> {
    Ok(state.albums.albums())
}

/// Compress the selected files and prepend the new album. All-or-nothing:
/// a single unreadable file fails the whole upload and nothing is stored.
#[tauri::command]
pub async fn create_album(
    app_handle: AppHandle,
    state: State<'_, AppState>,
    draft: AlbumDraft,
    image_paths: Vec<PathBuf>,
) -> Result<AppendReceipt, String> {
    if image_paths.is_empty() {
        return Err("최소 한 장 이상의 사진을 선택해주세요.".to_string());
    }

    let images = compress_batch(image_paths)
        .await
        .map_err(|e| e.to_string())?;

    let album = Album::from_upload(draft, images, Utc::now());
    info!(
        "Created album '{}' with {} images",
        album.title,
        album.images.len()
    );

    let receipt = state.albums.append(album);
    emit_albums_updated(&app_handle, &state);
    Ok(receipt)
}

/// Destroy every album and the stored profile image. `confirmed` carries
/// the user's answer to the webview's yes/no prompt; unconfirmed calls
/// change nothing. Returns whether the wipe happened.
#[tauri::command]
pub async fn clear_all_data(
    app_handle: AppHandle,
    state: State<'_, AppState>,
    confirmed: bool,
) -> Result<bool, String> {
    if !confirmed {
        return Ok(false);
    }

    // Tear down every animation over the data we are about to destroy.
    state.viewer.close().await;
    state.carousel.stop_all().await;

    clear_stores(&state.albums, &state.profile, confirmed).map_err(|e| e.to_string())?;
    info!("Cleared all album data and the stored profile image");

    emit_albums_updated(&app_handle, &state);
    if let Err(err) = app_handle.emit("profile-image-updated", state.profile.image()) {
        warn!("Failed to emit profile-image-updated: {err}");
    }
    Ok(true)
}

pub(crate) fn clear_stores(
    albums: &AlbumStore,
    profile: &ProfileStore,
    confirmed: bool,
) -> Result<bool> {
    if !confirmed {
        return Ok(false);
    }
    albums.clear()?;
    profile.reset()?;
    Ok(true)
}

fn emit_albums_updated(app_handle: &AppHandle, state: &State<'_, AppState>) {
    if let Err(err) = app_handle.emit("albums-updated", state.albums.albums()) {
        warn!("Failed to emit albums-updated: {err}");
    }
}
