//! Directory-backed cache for rendered label images
//!
//! Each store batch gets one numeric id, derived by scanning the directory
//! for the highest id already on disk. The id lives only in file names.
//!
//! # Layout
//!
//! | File | Written when |
//! |------|--------------|
//! | `<stem>-<id>.png` | single-page label |
//! | `<stem>-<id>-Page<n>.png` | page `n` of a multi-page label |
//! | `<image stem>.json` | the label reported warnings |
//!
//! # Failure policy
//!
//! - Allocating an id fails if any cached name cannot be parsed
//! - Listing substitutes a fallback id for such names
//! - Clearing keeps going past per-file failures and reports them

pub mod index;
pub mod naming;
pub mod repository;

pub use index::{IndexEntry, FALLBACK_ID_SEED};
pub use naming::{image_file_name, metadata_file, parse_image_id, IdParseError};
pub use repository::{FileImageCache, ImageCache};
