//! The persisted profile image.
//!
//! A single data-URI slot, independent of the album collection, with a
//! bundled placeholder used whenever the slot is absent or unreadable.

use std::path::Path;
use std::sync::RwLock;

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::{error, warn};
use serde::Serialize;

use crate::compress::decode_data_uri;
use crate::store::SharedSlotStore;

pub const PROFILE_SLOT: &str = "vanderlust_profile_img";

/// Placeholder shipped with the frontend assets.
pub const DEFAULT_PROFILE_IMAGE: &str = "/me.jpg";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub image: String,
    pub persisted: bool,
    pub warning: Option<String>,
}

pub struct ProfileStore {
    slot: SharedSlotStore,
    image: RwLock<Option<String>>,
}

impl ProfileStore {
    /// Load the stored image; a value that does not decode is treated as
    /// absent so the placeholder takes over.
    pub fn load(slot: SharedSlotStore) -> Self {
        let image = match slot.read(PROFILE_SLOT) {
            Ok(Some(stored)) => match decode_data_uri(&stored) {
                Ok(_) => Some(stored),
                Err(err) => {
                    warn!("Stored profile image does not decode, using the placeholder: {err}");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!("Failed to read stored profile image: {err:#}");
                None
            }
        };

        Self {
            slot,
            image: RwLock::new(image),
        }
    }

    /// Current image, falling back to the bundled placeholder.
    pub fn image(&self) -> String {
        self.image
            .read()
            .unwrap()
            .clone()
            .unwrap_or_else(|| DEFAULT_PROFILE_IMAGE.to_string())
    }

    /// Replace the profile image from a file on disk. The new image stays
    /// for the session even when persisting it fails; the update reports
    /// whether it survived to disk.
    pub fn set_from_file(&self, path: &Path) -> Result<ProfileUpdate> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read profile image {}", path.display()))?;
        let format = image::guess_format(&bytes).context("unrecognized profile image format")?;
        image::load_from_memory(&bytes).context("failed to decode profile image")?;

        let uri = format!(
            "data:{};base64,{}",
            format.to_mime_type(),
            STANDARD.encode(&bytes)
        );
        *self.image.write().unwrap() = Some(uri.clone());

        let (persisted, warning) = match self.slot.write(PROFILE_SLOT, &uri) {
            Ok(()) => (true, None),
            Err(err) => {
                error!("Failed to persist profile image: {err}");
                (
                    false,
                    Some("이미지 용량이 너무 커서 저장되지 않을 수 있습니다.".to_string()),
                )
            }
        };

        Ok(ProfileUpdate {
            image: uri,
            persisted,
            warning,
        })
    }

    /// Drop the in-memory image and its slot; part of the destructive
    /// whole-collection clear.
    pub fn reset(&self) -> Result<()> {
        *self.image.write().unwrap() = None;
        self.slot.remove(PROFILE_SLOT)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;

    use image::{DynamicImage, ImageFormat, RgbImage};

    use super::*;
    use crate::store::{MemorySlotStore, SlotStore};

    fn png_file(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(16, 16, image::Rgb([10, 20, 30])));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        let path = dir.path().join("portrait.png");
        std::fs::write(&path, buf.into_inner()).unwrap();
        path
    }

    #[test]
    fn falls_back_to_the_placeholder_when_nothing_is_stored() {
        let store = ProfileStore::load(Arc::new(MemorySlotStore::new()));
        assert_eq!(store.image(), DEFAULT_PROFILE_IMAGE);
    }

    #[test]
    fn falls_back_to_the_placeholder_when_the_stored_value_does_not_decode() {
        let slot = Arc::new(MemorySlotStore::new());
        slot.write(PROFILE_SLOT, "data:image/jpeg;base64,AAAA").unwrap();

        let store = ProfileStore::load(slot);
        assert_eq!(store.image(), DEFAULT_PROFILE_IMAGE);
    }

    #[test]
    fn set_from_file_persists_and_round_trips() {
        let dir = tempfile::TempDir::new().unwrap();
        let slot = Arc::new(MemorySlotStore::new());
        let store = ProfileStore::load(slot.clone());

        let update = store.set_from_file(&png_file(&dir)).unwrap();
        assert!(update.persisted);
        assert!(update.image.starts_with("data:image/png;base64,"));
        assert_eq!(store.image(), update.image);

        let reloaded = ProfileStore::load(slot);
        assert_eq!(reloaded.image(), update.image);
    }

    #[test]
    fn persistence_failure_keeps_the_image_for_the_session() {
        let dir = tempfile::TempDir::new().unwrap();
        let slot = Arc::new(MemorySlotStore::with_quota(16));
        let store = ProfileStore::load(slot.clone());

        let update = store.set_from_file(&png_file(&dir)).unwrap();
        assert!(!update.persisted);
        assert!(update.warning.is_some());
        assert_eq!(store.image(), update.image);
        assert!(slot.read(PROFILE_SLOT).unwrap().is_none());
    }

    #[test]
    fn unreadable_files_are_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("not-an-image.png");
        std::fs::write(&path, b"garbage").unwrap();

        let store = ProfileStore::load(Arc::new(MemorySlotStore::new()));
        assert!(store.set_from_file(&path).is_err());
        assert_eq!(store.image(), DEFAULT_PROFILE_IMAGE);
    }

    #[test]
    fn reset_removes_the_slot_and_restores_the_placeholder() {
        let dir = tempfile::TempDir::new().unwrap();
        let slot = Arc::new(MemorySlotStore::new());
        let store = ProfileStore::load(slot.clone());

        store.set_from_file(&png_file(&dir)).unwrap();
        store.reset().unwrap();

        assert_eq!(store.image(), DEFAULT_PROFILE_IMAGE);
        assert!(slot.read(PROFILE_SLOT).unwrap().is_none());
    }
}
