//! File naming grammar for cached label images
//!
//! The file name is the only index the cache has:
//!
//! | Kind | Name |
//! |------|------|
//! | Single page | `<stem>-<id>.png` |
//! | Multi page | `<stem>-<id>-Page<n>.png` |
//! | Sidecar | `<image stem>.json` |

use crate::labels::ImageId;
use std::fmt;
use std::path::{Path, PathBuf};

/// Extension of cached images
pub const IMAGE_EXTENSION: &str = "png";

/// Extension of warning sidecars
pub const METADATA_EXTENSION: &str = "json";

const SEPARATOR: char = '-';
const PAGE_MARKER: &str = "Page";

/// Why an id could not be read from a file stem
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdParseError {
    /// The stem has no segment in the id position
    MissingSegment,
    /// The id segment is not a base-10 integer
    NotNumeric(String),
}

impl fmt::Display for IdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSegment => write!(f, "no id segment"),
            Self::NotNumeric(segment) => write!(f, "'{}' is not a number", segment),
        }
    }
}

impl std::error::Error for IdParseError {}

/// Reduce a logical image name to its last path component, minus extension
///
/// Both `/` and `\` count as separators, so a name can never point outside
/// the cache directory.
pub fn stem(base_name: &str) -> &str {
    let name = base_name
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default();

    match name.rfind('.') {
        Some(dot) if dot > 0 => &name[..dot],
        _ => name,
    }
}

/// Build the file name for an image in batch `id`, optionally on page `page`
pub fn image_file_name(base_name: &str, id: ImageId, page: Option<u32>) -> String {
    match page {
        Some(page) => format!(
            "{}{SEPARATOR}{}{SEPARATOR}{PAGE_MARKER}{}.{IMAGE_EXTENSION}",
            stem(base_name),
            id,
            page
        ),
        None => format!("{}{SEPARATOR}{}.{IMAGE_EXTENSION}", stem(base_name), id),
    }
}

/// Path of the sidecar belonging to an image
pub fn metadata_file(image_path: &Path) -> PathBuf {
    image_path.with_extension(METADATA_EXTENSION)
}

/// Whether a path names a cached image (`*.png`, any case)
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(IMAGE_EXTENSION))
}

/// Read the batch id out of a file stem
///
/// The id is the last `-` segment, or the one before it when the last
/// segment is a `Page<n>` suffix.
pub fn parse_image_id(stem: &str) -> Result<ImageId, IdParseError> {
    let parts: Vec<&str> = stem.split(SEPARATOR).collect();

    let segment = match parts.as_slice() {
        [.., id, last] if last.contains(PAGE_MARKER) => *id,
        [_] if stem.contains(PAGE_MARKER) => return Err(IdParseError::MissingSegment),
        [.., last] => *last,
        [] => return Err(IdParseError::MissingSegment),
    };

    segment
        .parse::<ImageId>()
        .map_err(|_| IdParseError::NotNumeric(segment.to_string()))
}

/// Read the batch id out of an image path
pub fn parse_path_id(path: &Path) -> Result<ImageId, IdParseError> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or(IdParseError::MissingSegment)?;
    parse_image_id(stem)
}
