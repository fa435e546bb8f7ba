use std::sync::RwLock;

use anyhow::Result;
use log::{error, warn};
use serde::Serialize;

use crate::store::{SharedSlotStore, WriteError};

use super::models::Album;

/// Storage slot holding the serialized album collection.
pub const ALBUMS_SLOT: &str = "vanderlust_trips_v3";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PersistOutcome {
    Saved,
    QuotaExceeded,
    Failed,
}

/// Result of an append. The album always lands in memory; `outcome` tells
/// the caller whether it also survived to disk.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendReceipt {
    pub album: Album,
    pub outcome: PersistOutcome,
    pub warning: Option<String>,
}

/// The process-wide album collection, newest-first, mirrored to its
/// storage slot after every mutation.
pub struct AlbumStore {
    slot: SharedSlotStore,
    albums: RwLock<Vec<Album>>,
}

impl AlbumStore {
    /// Load the collection from storage. Missing or unparseable data
    /// yields an empty collection; startup never fails on bad storage.
    pub fn load(slot: SharedSlotStore) -> Self {
        let albums = match slot.read(ALBUMS_SLOT) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Album>>(&raw) {
                Ok(albums) => albums,
                Err(err) => {
                    warn!("Stored album collection does not parse, starting empty: {err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("Failed to read stored album collection, starting empty: {err:#}");
                Vec::new()
            }
        };

        Self {
            slot,
            albums: RwLock::new(albums),
        }
    }

    pub fn albums(&self) -> Vec<Album> {
        self.albums.read().unwrap().clone()
    }

    pub fn get(&self, id: &str) -> Option<Album> {
        self.albums
            .read()
            .unwrap()
            .iter()
            .find(|album| album.id == id)
            .cloned()
    }

    /// Prepend the album and persist the whole collection in the same
    /// turn. A quota failure does NOT roll back the in-memory prepend:
    /// the album stays for the session and the receipt carries a warning
    /// that it may not survive a reload.
    pub fn append(&self, album: Album) -> AppendReceipt {
        let snapshot = {
            let mut albums = self.albums.write().unwrap();
            albums.insert(0, album.clone());
            albums.clone()
        };

        let (outcome, warning) = match self.persist(&snapshot) {
            Ok(()) => (PersistOutcome::Saved, None),
            Err(err) if err.is_quota_exceeded() => {
                warn!("Album collection no longer fits its slot: {err}");
                (
                    PersistOutcome::QuotaExceeded,
                    Some(
                        "저장 용량이 부족하여 변경사항을 저장할 수 없습니다. 일부 앨범을 삭제해주세요."
                            .to_string(),
                    ),
                )
            }
            Err(err) => {
                error!("Failed to persist album collection: {err}");
                (PersistOutcome::Failed, None)
            }
        };

        AppendReceipt {
            album,
            outcome,
            warning,
        }
    }

    /// Wipe the in-memory collection and its storage slot. The caller
    /// owns the confirmation gate; this is irreversible.
    pub fn clear(&self) -> Result<()> {
        self.albums.write().unwrap().clear();
        self.slot.remove(ALBUMS_SLOT)
    }

    fn persist(&self, albums: &[Album]) -> Result<(), WriteError> {
        let serialized = serde_json::to_string(albums).map_err(|err| {
            WriteError::Io(anyhow::Error::new(err).context("failed to serialize album collection"))
        })?;
        self.slot.write(ALBUMS_SLOT, &serialized)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::albums::models::{AlbumDraft, DEFAULT_LOCATION};
    use crate::store::MemorySlotStore;

    fn album(id_minute: u32, images: usize) -> Album {
        let created_at = Utc.with_ymd_and_hms(2025, 12, 3, 10, id_minute, 0).unwrap();
        Album::from_upload(
            AlbumDraft {
                title: format!("Album {id_minute}"),
                ..AlbumDraft::default()
            },
            (0..images).map(|i| format!("data:image-{i}")).collect(),
            created_at,
        )
    }

    #[test]
    fn starts_empty_when_slot_is_missing() {
        let store = AlbumStore::load(Arc::new(MemorySlotStore::new()));
        assert!(store.albums().is_empty());
    }

    #[test]
    fn starts_empty_when_slot_does_not_parse() {
        let slot = Arc::new(MemorySlotStore::new());
        slot.write(ALBUMS_SLOT, "{ not an album collection").unwrap();

        let store = AlbumStore::load(slot);
        assert!(store.albums().is_empty());
    }

    #[test]
    fn append_prepends_and_round_trips_through_storage() {
        let slot = Arc::new(MemorySlotStore::new());
        let store = AlbumStore::load(slot.clone());

        let receipt = store.append(album(1, 3));
        assert_eq!(receipt.outcome, PersistOutcome::Saved);
        assert_eq!(store.albums()[0].images.len(), 3);
        assert_eq!(store.albums()[0].location, DEFAULT_LOCATION);

        let reloaded = AlbumStore::load(slot);
        assert_eq!(reloaded.albums(), store.albums());
    }

    #[test]
    fn collection_stays_newest_first_in_memory_and_on_disk() {
        let slot = Arc::new(MemorySlotStore::new());
        let store = AlbumStore::load(slot.clone());

        store.append(album(1, 1));
        store.append(album(2, 1));
        store.append(album(3, 1));

        let titles: Vec<_> = store.albums().iter().map(|a| a.title.clone()).collect();
        assert_eq!(titles, vec!["Album 3", "Album 2", "Album 1"]);

        let persisted: Vec<Album> =
            serde_json::from_str(&slot.read(ALBUMS_SLOT).unwrap().unwrap()).unwrap();
        assert_eq!(persisted, store.albums());
    }

    #[test]
    fn quota_failure_keeps_the_album_in_memory_and_the_slot_intact() {
        let slot = Arc::new(MemorySlotStore::with_quota(400));
        let store = AlbumStore::load(slot.clone());

        let first = store.append(album(1, 1));
        assert_eq!(first.outcome, PersistOutcome::Saved);
        let persisted_before = slot.read(ALBUMS_SLOT).unwrap().unwrap();

        let second = store.append(album(2, 30));
        assert_eq!(second.outcome, PersistOutcome::QuotaExceeded);
        assert!(second.warning.is_some());

        // The session still sees both albums...
        assert_eq!(store.albums().len(), 2);
        // ...but the slot kept its last valid value.
        assert_eq!(slot.read(ALBUMS_SLOT).unwrap().unwrap(), persisted_before);
    }

    #[test]
    fn clear_empties_memory_and_removes_the_slot() {
        let slot = Arc::new(MemorySlotStore::new());
        let store = AlbumStore::load(slot.clone());

        store.append(album(1, 2));
        store.clear().unwrap();

        assert!(store.albums().is_empty());
        assert!(slot.read(ALBUMS_SLOT).unwrap().is_none());
    }

    #[test]
    fn titled_upload_with_blank_details_round_trips_as_a_single_album() {
        let slot = Arc::new(MemorySlotStore::new());
        let store = AlbumStore::load(slot.clone());
        assert!(store.albums().is_empty());

        let created_at = Utc.with_ymd_and_hms(2025, 12, 3, 10, 0, 0).unwrap();
        let images = vec!["data:a".to_string(), "data:b".to_string(), "data:c".to_string()];
        let draft = AlbumDraft {
            title: "Paris Trip".into(),
            ..AlbumDraft::default()
        };
        store.append(Album::from_upload(draft, images, created_at));

        let reloaded = AlbumStore::load(slot);
        let albums = reloaded.albums();
        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].title, "Paris Trip");
        assert_eq!(albums[0].location, DEFAULT_LOCATION);
        assert_eq!(albums[0].date, "2025.12");
        assert_eq!(albums[0].images.len(), 3);
    }

    #[test]
    fn get_finds_albums_by_id() {
        let store = AlbumStore::load(Arc::new(MemorySlotStore::new()));
        let receipt = store.append(album(1, 2));

        assert_eq!(store.get(&receipt.album.id), Some(receipt.album));
        assert!(store.get("missing").is_none());
    }
}
