//! labelcache - Rendered label image cache
//!
//! Persists rendered label pages as PNG files in a cache directory. The
//! directory is the index: batch ids are recovered from file names on
//! every query, and labels that rendered with warnings get a JSON sidecar.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod labels;
pub mod ui;

pub use cache::{FileImageCache, ImageCache};
pub use error::{LabelCacheError, LabelCacheResult};
pub use labels::{ImageId, LabelResponse, LabelWarning, StoredImage};
