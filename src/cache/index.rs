//! Directory scanning and id allocation
//!
//! The cache directory is the database: every `*.png` in it is an entry and
//! its file name carries the batch id. Nothing else is persisted.

use crate::cache::naming::{is_image_file, parse_path_id};
use crate::error::{LabelCacheError, LabelCacheResult};
use crate::labels::ImageId;
use chrono::{DateTime, Utc};
use std::fs::Metadata;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// First fallback id handed out by a listing
pub const FALLBACK_ID_SEED: ImageId = 99_999;

/// An image file found in the cache directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Path of the image file
    pub path: PathBuf,
    /// Creation time (modification time where birth time is unavailable)
    pub timestamp: DateTime<Utc>,
}

/// Create the cache root and any missing ancestors
pub async fn ensure_dir(root: &Path) -> LabelCacheResult<PathBuf> {
    fs::create_dir_all(root)
        .await
        .map_err(|e| LabelCacheError::CacheDirCreate {
            path: root.to_path_buf(),
            source: e,
        })?;

    Ok(root.to_path_buf())
}

/// Whether the cache root currently exists as a directory
pub async fn dir_exists(root: &Path) -> bool {
    fs::metadata(root).await.is_ok_and(|m| m.is_dir())
}

/// List the cached images in `root`, oldest first
pub async fn scan(root: &Path) -> LabelCacheResult<Vec<IndexEntry>> {
    let mut entries = Vec::new();
    let mut dir = fs::read_dir(root)
        .await
        .map_err(|e| LabelCacheError::io(format!("reading cache directory {}", root.display()), e))?;

    while let Some(entry) = dir
        .next_entry()
        .await
        .map_err(|e| LabelCacheError::io("reading cache entry", e))?
    {
        let path = entry.path();
        if !is_image_file(&path) {
            continue;
        }

        // Entries can vanish between read_dir and stat when a delete races us
        let metadata = match entry.metadata().await {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => {
                return Err(LabelCacheError::io(
                    format!("reading metadata of {}", path.display()),
                    e,
                ))
            }
        };
        if !metadata.is_file() {
            continue;
        }

        entries.push(IndexEntry {
            timestamp: creation_time(&metadata),
            path,
        });
    }

    entries.sort_by(|a, b| {
        a.timestamp
            .cmp(&b.timestamp)
            .then_with(|| a.path.file_name().cmp(&b.path.file_name()))
    });

    debug!("Scanned {} cached images in {}", entries.len(), root.display());
    Ok(entries)
}

pub(crate) fn creation_time(metadata: &Metadata) -> DateTime<Utc> {
    metadata
        .created()
        .or_else(|_| metadata.modified())
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(|_| Utc::now())
}

/// Compute the id for the next store batch
///
/// Every entry must carry a readable id. Skipping one could hand out an id
/// that is already on disk.
pub fn next_id(entries: &[IndexEntry]) -> LabelCacheResult<ImageId> {
    let mut max: Option<&IndexEntry> = None;
    let mut max_id: ImageId = 0;

    for entry in entries {
        let id = parse_path_id(&entry.path).map_err(|e| LabelCacheError::IdentityParse {
            file: entry.path.display().to_string(),
            reason: e.to_string(),
        })?;
        if max.is_none() || id > max_id {
            max = Some(entry);
            max_id = id;
        }
    }

    match max {
        None => Ok(1),
        Some(entry) => max_id
            .checked_add(1)
            .ok_or_else(|| LabelCacheError::IdentityParse {
                file: entry.path.display().to_string(),
                reason: "id out of range".to_string(),
            }),
    }
}

/// Synthetic ids for files whose names cannot be parsed
///
/// Scoped to a single listing: each call starts again at the seed.
#[derive(Debug)]
pub struct FallbackIds {
    next: ImageId,
}

impl FallbackIds {
    /// Start a fresh sequence at [`FALLBACK_ID_SEED`]
    pub fn new() -> Self {
        Self {
            next: FALLBACK_ID_SEED,
        }
    }

    /// Hand out the next fallback id (strictly decreasing)
    pub fn next_id(&mut self) -> ImageId {
        let id = self.next;
        self.next -= 1;
        id
    }
}

impl Default for FallbackIds {
    fn default() -> Self {
        Self::new()
    }
}
