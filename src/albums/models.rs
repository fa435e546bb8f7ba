use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "나만의 앨범";
pub const DEFAULT_LOCATION: &str = "Unknown Location";

/// A named, dated, ordered collection of images with descriptive text.
/// Immutable after creation; destroyed only by the whole-collection clear.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: String,
    pub title: String,
    pub location: String,
    pub date: String,
    /// Encoded images in display order, which is also the carousel cycle
    /// order. Always non-empty.
    pub images: Vec<String>,
    pub description: String,
}

/// User-entered fields of the upload form; any of them may be blank.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumDraft {
    pub title: String,
    pub location: String,
    pub date: String,
    pub description: String,
}

impl Album {
    /// Build an album from the upload form, filling blank fields with
    /// placeholder text. The id is derived from the creation timestamp.
    pub fn from_upload(
        draft: AlbumDraft,
        images: Vec<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let image_count = images.len();
        Self {
            id: created_at.timestamp_millis().to_string(),
            title: non_blank(draft.title, || DEFAULT_TITLE.to_string()),
            location: non_blank(draft.location, || DEFAULT_LOCATION.to_string()),
            date: non_blank(draft.date, || created_at.format("%Y.%m").to_string()),
            images,
            description: non_blank(draft.description, || {
                format!("{image_count}장의 사진이 담긴 기록")
            }),
        }
    }
}

fn non_blank(value: String, fallback: impl FnOnce() -> String) -> String {
    if value.trim().is_empty() {
        fallback()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 3, 10, 30, 0).unwrap()
    }

    #[test]
    fn blank_fields_get_placeholders() {
        let album = Album::from_upload(
            AlbumDraft::default(),
            vec!["data:a".into(), "data:b".into()],
            created_at(),
        );

        assert_eq!(album.title, DEFAULT_TITLE);
        assert_eq!(album.location, DEFAULT_LOCATION);
        assert_eq!(album.date, "2025.12");
        assert_eq!(album.description, "2장의 사진이 담긴 기록");
        assert_eq!(album.images.len(), 2);
    }

    #[test]
    fn entered_fields_are_kept() {
        let draft = AlbumDraft {
            title: "Paris Trip".into(),
            location: "Paris, France".into(),
            date: "2023.12".into(),
            description: "A week in Paris".into(),
        };
        let album = Album::from_upload(draft, vec!["data:a".into()], created_at());

        assert_eq!(album.title, "Paris Trip");
        assert_eq!(album.location, "Paris, France");
        assert_eq!(album.date, "2023.12");
        assert_eq!(album.description, "A week in Paris");
    }

    #[test]
    fn id_is_derived_from_the_creation_timestamp() {
        let album = Album::from_upload(AlbumDraft::default(), vec!["data:a".into()], created_at());
        assert_eq!(album.id, created_at().timestamp_millis().to_string());
    }
}
