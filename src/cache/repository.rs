//! Store, list and delete operations over a cache directory

use crate::cache::index::{self, FallbackIds, IndexEntry};
use crate::cache::naming::{image_file_name, metadata_file, parse_path_id};
use crate::error::{LabelCacheError, LabelCacheResult};
use crate::labels::{ImageId, LabelResponse, StoredImage};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Label image cache interface
///
/// Every operation names the cache root explicitly, so one instance can
/// serve several directories.
#[async_trait]
pub trait ImageCache: Send + Sync {
    /// Write a batch of rendered labels under one shared id
    async fn store_label_images(
        &self,
        root: &Path,
        labels: &[LabelResponse],
    ) -> LabelCacheResult<Vec<StoredImage>>;

    /// List all cached images, oldest first
    async fn get_all(&self, root: &Path) -> LabelCacheResult<Vec<StoredImage>>;

    /// Delete one image (and its sidecar) by exact file name
    async fn delete_image(&self, root: &Path, image_name: &str) -> LabelCacheResult<bool>;

    /// Delete every cached image and sidecar; true only if nothing failed
    async fn clear_all(&self, root: &Path) -> LabelCacheResult<bool>;
}

/// Filesystem-backed image cache
///
/// Store calls are serialized by an in-process lock held from id
/// allocation until every file of the batch has been written.
#[derive(Debug, Default)]
pub struct FileImageCache {
    store_lock: Mutex<()>,
}

impl FileImageCache {
    /// Create a new cache handle
    pub fn new() -> Self {
        Self::default()
    }

    async fn write_label(&self, path: &Path, label: &LabelResponse) -> LabelCacheResult<()> {
        fs::write(path, &label.label)
            .await
            .map_err(|e| LabelCacheError::io(format!("writing image {}", path.display()), e))?;

        if label.has_warnings() {
            let sidecar = metadata_file(path);
            let result = match serde_json::to_string_pretty(label) {
                Ok(json) => fs::write(&sidecar, json).await.map_err(|e| {
                    LabelCacheError::io(format!("writing metadata {}", sidecar.display()), e)
                }),
                Err(e) => Err(e.into()),
            };

            // The image itself is stored, so a missing sidecar does not drop the record
            if let Err(e) = result {
                warn!("Failed to write metadata for {}: {}", path.display(), e);
            } else {
                debug!(
                    "Wrote {} warning(s) to {}",
                    label.warnings.len(),
                    sidecar.display()
                );
            }
        }

        Ok(())
    }
}

#[async_trait]
impl ImageCache for FileImageCache {
    async fn store_label_images(
        &self,
        root: &Path,
        labels: &[LabelResponse],
    ) -> LabelCacheResult<Vec<StoredImage>> {
        let _guard = self.store_lock.lock().await;

        let dir = index::ensure_dir(&absolute(root)?).await?;
        let id = index::next_id(&index::scan(&dir).await?)?;
        debug!("Allocated id {} in {}", id, dir.display());

        let mut stored = Vec::with_capacity(labels.len());

        for label in labels {
            let page = match label.page_number() {
                Ok(page) => page,
                Err(e) => {
                    warn!("Skipping {}: {}", label.image_file_name, e);
                    continue;
                }
            };
            let path = dir.join(image_file_name(&label.image_file_name, id, page));

            if let Err(e) = self.write_label(&path, label).await {
                warn!("Skipping {}: {}", path.display(), e);
                continue;
            }

            let timestamp = fs::metadata(&path)
                .await
                .map(|m| index::creation_time(&m))
                .unwrap_or_else(|_| Utc::now());

            stored.push(StoredImage {
                id,
                full_path: path,
                timestamp,
            });
        }

        info!(
            "Stored {} of {} label image(s) as batch {}",
            stored.len(),
            labels.len(),
            id
        );
        Ok(stored)
    }

    async fn get_all(&self, root: &Path) -> LabelCacheResult<Vec<StoredImage>> {
        let dir = absolute(root)?;
        if !index::dir_exists(&dir).await {
            return Ok(vec![]);
        }

        let entries = index::scan(&dir).await?;
        Ok(assign_ids(entries))
    }

    async fn delete_image(&self, root: &Path, image_name: &str) -> LabelCacheResult<bool> {
        let dir = absolute(root)?;
        if !index::dir_exists(&dir).await {
            return Ok(false);
        }

        let Some(path) = find_file(&dir, image_name).await? else {
            debug!("No file named {} in {}", image_name, dir.display());
            return Ok(false);
        };

        // Someone else removing it first still counts as deleted
        match fs::remove_file(&path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} vanished before it could be deleted", path.display());
            }
            Err(e) => {
                return Err(LabelCacheError::io(
                    format!("deleting image {}", path.display()),
                    e,
                ))
            }
        }

        let sidecar = metadata_file(&path);
        match fs::remove_file(&sidecar).await {
            Ok(()) => debug!("Deleted metadata {}", sidecar.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                return Err(LabelCacheError::io(
                    format!("deleting metadata {}", sidecar.display()),
                    e,
                ))
            }
        }

        info!("Deleted cached image {}", path.display());
        Ok(true)
    }

    async fn clear_all(&self, root: &Path) -> LabelCacheResult<bool> {
        let dir = absolute(root)?;
        if !index::dir_exists(&dir).await {
            return Ok(false);
        }

        let entries = index::scan(&dir).await?;
        let mut errors = 0usize;

        for entry in &entries {
            if let Err(e) = remove_with_sidecar(&entry.path).await {
                warn!("Failed to delete {}: {}", entry.path.display(), e);
                errors += 1;
            }
        }

        info!(
            "Cleared {} of {} cached image(s) in {}",
            entries.len() - errors,
            entries.len(),
            dir.display()
        );
        Ok(errors == 0)
    }
}

/// Turn scan results into records, giving unparsable names a fallback id
/// that differs from every real id in the listing.
fn assign_ids(entries: Vec<IndexEntry>) -> Vec<StoredImage> {
    let parsed: Vec<_> = entries
        .into_iter()
        .map(|entry| (parse_path_id(&entry.path), entry))
        .collect();

    let real: HashSet<ImageId> = parsed
        .iter()
        .filter_map(|(id, _)| id.as_ref().ok().copied())
        .collect();
    let mut fallback = FallbackIds::new();

    parsed
        .into_iter()
        .map(|(id, entry)| {
            let id = id.unwrap_or_else(|e| {
                let mut id = fallback.next_id();
                while real.contains(&id) {
                    id = fallback.next_id();
                }
                debug!(
                    "Using fallback id {} for {}: {}",
                    id,
                    entry.path.display(),
                    e
                );
                id
            });

            StoredImage {
                id,
                full_path: entry.path,
                timestamp: entry.timestamp,
            }
        })
        .collect()
}

async fn find_file(dir: &Path, name: &str) -> LabelCacheResult<Option<PathBuf>> {
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| LabelCacheError::io(format!("reading cache directory {}", dir.display()), e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| LabelCacheError::io("reading cache entry", e))?
    {
        if entry.file_name() != name {
            continue;
        }

        let is_file = entry
            .file_type()
            .await
            .map_err(|e| LabelCacheError::io(format!("inspecting {}", name), e))?
            .is_file();

        return Ok(is_file.then(|| entry.path()));
    }

    Ok(None)
}

async fn remove_with_sidecar(path: &Path) -> std::io::Result<()> {
    fs::remove_file(path).await?;

    let sidecar = metadata_file(path);
    if fs::try_exists(&sidecar).await? {
        fs::remove_file(&sidecar).await?;
    }

    Ok(())
}

fn absolute(root: &Path) -> LabelCacheResult<PathBuf> {
    std::path::absolute(root)
        .map_err(|e| LabelCacheError::io(format!("resolving cache root {}", root.display()), e))
}
