//! Match sources: anything that can turn a match ID into a [`MatchRecord`].

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{
    cli::types::MatchId,
    error::{FantasyError, Result},
    opendota::types::MatchRecord,
};

/// Black-box provider of match records.
///
/// A failed fetch is reported as an error; callers decide whether to skip.
#[async_trait]
pub trait MatchSource: Send + Sync {
    async fn fetch_match(&self, match_id: MatchId) -> Result<MatchRecord>;
}

/// Reads previously saved match payloads from `<dir>/<match_id>.json`.
#[derive(Debug, Clone)]
pub struct DirectoryMatchSource {
    dir: PathBuf,
}

impl DirectoryMatchSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, match_id: MatchId) -> PathBuf {
        self.dir.join(format!("{}.json", match_id))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl MatchSource for DirectoryMatchSource {
    async fn fetch_match(&self, match_id: MatchId) -> Result<MatchRecord> {
        let path = self.path_for(match_id);
        debug!(path = %path.display(), "reading saved match");

        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(FantasyError::MatchUnavailable {
                    match_id: match_id.as_u64(),
                    status: Some(404),
                })
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&contents)?)
    }
}
