//! Match data provider: payload types, the HTTP client, and offline sources.

pub mod http;
pub mod source;
pub mod types;

pub use http::{OpenDotaClient, OPENDOTA_BASE_URL};
pub use source::{DirectoryMatchSource, MatchSource};
pub use types::{MatchRecord, PlayerMatchEntry, Side, UNKNOWN_PLAYER};
