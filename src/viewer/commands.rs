use tauri::State;

use crate::AppState;

use super::state::ViewerState;

#[tauri::command]
pub async fn open_viewer(
    state: State<'_, AppState>,
    album_id: String,
) -> Result<ViewerState, String> {
    let album = state
        .albums
        .get(&album_id)
        .ok_or_else(|| format!("unknown album '{album_id}'"))?;
    Ok(state.viewer.open(album_id, album.images.len()).await)
}

#[tauri::command]
pub async fn close_viewer(state: State<'_, AppState>) -> Result<(), String> {
    state.viewer.close().await;
    Ok(())
}

#[tauri::command]
pub async fn viewer_next(state: State<'_, AppState>) -> Result<Option<ViewerState>, String> {
    Ok(state.viewer.next().await)
}

#[tauri::command]
pub async fn viewer_prev(state: State<'_, AppState>) -> Result<Option<ViewerState>, String> {
    Ok(state.viewer.prev().await)
}

#[tauri::command]
pub async fn viewer_handle_key(state: State<'_, AppState>, key: String) -> Result<bool, String> {
    Ok(state.viewer.handle_key(&key).await)
}

#[tauri::command]
pub async fn get_viewer_state(
    state: State<'_, AppState>,
) -> Result<Option<ViewerState>, String> {
    Ok(state.viewer.current().await)
}
