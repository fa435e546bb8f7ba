use tauri::State;

use crate::AppState;

use super::state::CarouselState;

#[tauri::command]
pub async fn start_carousel(
    state: State<'_, AppState>,
    album_id: String,
) -> Result<CarouselState, String> {
    let album = state
        .albums
        .get(&album_id)
        .ok_or_else(|| format!("unknown album '{album_id}'"))?;
    Ok(state.carousel.start(album_id, album.images.len()).await)
}

#[tauri::command]
pub async fn stop_carousel(state: State<'_, AppState>, album_id: String) -> Result<(), String> {
    state.carousel.stop(&album_id).await;
    Ok(())
}

#[tauri::command]
pub async fn get_carousel_frame(
    state: State<'_, AppState>,
    album_id: String,
) -> Result<Option<CarouselState>, String> {
    Ok(state.carousel.frame(&album_id).await)
}
