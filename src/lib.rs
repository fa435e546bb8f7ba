pub mod albums;
pub mod carousel;
pub mod compress;
pub mod content;
pub mod profile;
pub mod store;
pub mod viewer;

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use albums::commands::{clear_all_data, create_album, list_albums};
use albums::AlbumStore;
use carousel::commands::{get_carousel_frame, start_carousel, stop_carousel};
use carousel::CarouselController;
use content::commands::{
    get_certifications, get_goals, get_hobbies, get_life_history, get_projects, get_skills,
};
use log::warn;
use profile::{ProfileStore, ProfileUpdate};
use serde::{Deserialize, Serialize};
use store::{FileSlotStore, SharedSlotStore};
use tauri::{Emitter, Manager, State};
use viewer::commands::{
    close_viewer, get_viewer_state, open_viewer, viewer_handle_key, viewer_next, viewer_prev,
};
use viewer::ViewerController;

pub(crate) const GITHUB_URL: &str = "https://github.com/Jeonghun-k";
const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Active page of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum View {
    Home,
    About,
    Specs,
    Project,
}

pub struct AppState {
    pub(crate) albums: AlbumStore,
    pub(crate) profile: ProfileStore,
    pub(crate) carousel: CarouselController,
    pub(crate) viewer: ViewerController,
    pub(crate) view: RwLock<View>,
}

#[tauri::command]
fn get_view(state: State<AppState>) -> View {
    *state.view.read().unwrap()
}

#[tauri::command]
fn set_view(
    view: View,
    state: State<AppState>,
    app_handle: tauri::AppHandle,
) -> Result<(), String> {
    *state.view.write().unwrap() = view;
    app_handle.emit("view-changed", view).map_err(|e| e.to_string())
}

#[tauri::command]
fn get_profile_image(state: State<AppState>) -> String {
    state.profile.image()
}

#[tauri::command]
fn set_profile_image(
    path: PathBuf,
    state: State<AppState>,
    app_handle: tauri::AppHandle,
) -> Result<ProfileUpdate, String> {
    let update = state.profile.set_from_file(&path).map_err(|e| e.to_string())?;
    if let Err(err) = app_handle.emit("profile-image-updated", &update) {
        warn!("Failed to emit profile-image-updated: {err}");
    }
    Ok(update)
}

/// URL of the external QR renderer for the GitHub profile. Building the
/// address is all the core does; fetching it is the webview's business and
/// failure there is cosmetic.
#[tauri::command]
fn qr_code_url() -> Result<String, String> {
    let mut endpoint = url::Url::parse(QR_ENDPOINT).map_err(|e| e.to_string())?;
    endpoint
        .query_pairs_mut()
        .append_pair("size", "200x200")
        .append_pair("color", "000000")
        .append_pair("bgcolor", "ffffff")
        .append_pair("data", GITHUB_URL);
    Ok(endpoint.into())
}

#[tauri::command]
fn open_github_profile() -> Result<(), String> {
    tauri_plugin_opener::open_url(GITHUB_URL, None::<&str>).map_err(|e| e.to_string())
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Vanderlust starting up...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let result = (|| -> anyhow::Result<()> {
                let app_data_dir = app
                    .path()
                    .app_data_dir()
                    .map_err(|err| anyhow::anyhow!(err))?;
                std::fs::create_dir_all(&app_data_dir)?;

                let slots: SharedSlotStore =
                    Arc::new(FileSlotStore::new(app_data_dir.join("storage")));
                let albums = AlbumStore::load(slots.clone());
                let profile = ProfileStore::load(slots);

                app.manage(AppState {
                    albums,
                    profile,
                    carousel: CarouselController::new(app.handle().clone()),
                    viewer: ViewerController::new(app.handle().clone()),
                    view: RwLock::new(View::Home),
                });

                Ok(())
            })();

            result.map_err(|err| err.into())
        })
        .invoke_handler(tauri::generate_handler![
            list_albums,
            create_album,
            clear_all_data,
            start_carousel,
            stop_carousel,
            get_carousel_frame,
            open_viewer,
            close_viewer,
            viewer_next,
            viewer_prev,
            viewer_handle_key,
            get_viewer_state,
            get_profile_image,
            set_profile_image,
            get_skills,
            get_certifications,
            get_goals,
            get_projects,
            get_life_history,
            get_hobbies,
            get_view,
            set_view,
            qr_code_url,
            open_github_profile,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
