pub mod commands;
pub mod models;
pub mod store;

pub use models::{Album, AlbumDraft};
pub use store::{AlbumStore, AppendReceipt, PersistOutcome, ALBUMS_SLOT};
