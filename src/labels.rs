//! Label rendering results consumed by the cache, and the records it returns

use crate::error::{LabelCacheError, LabelCacheResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Identity shared by every image written in one store batch
pub type ImageId = i64;

/// A warning reported by the label renderer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelWarning {
    /// Offset of the offending command in the label source
    pub byte_index: u32,

    /// Length of the offending command
    pub byte_size: u32,

    /// Command the warning refers to (e.g. `^FO`)
    pub command_name: String,

    /// 1-based parameter position, 0 when the whole command is affected
    pub parameter_number: u32,

    /// Human-readable description
    pub message: String,
}

impl LabelWarning {
    /// Create a warning carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

/// One rendered label page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelResponse {
    /// Zero-based page index within a multi-page set
    pub label_index: u32,

    /// Logical image name, e.g. `invoice.png`
    pub image_file_name: String,

    /// Raw PNG bytes
    #[serde(with = "base64_bytes")]
    pub label: Vec<u8>,

    /// Whether this label belongs to a multi-page set
    pub has_multiple_labels: bool,

    /// Renderer warnings (empty when the label rendered cleanly)
    #[serde(default)]
    pub warnings: Vec<LabelWarning>,
}

impl LabelResponse {
    /// Create a single-page label without warnings
    pub fn new(image_file_name: impl Into<String>, label: Vec<u8>) -> Self {
        Self {
            image_file_name: image_file_name.into(),
            label,
            ..Self::default()
        }
    }

    /// Mark the label as page `label_index` (zero-based) of a multi-page set
    pub fn with_page(mut self, label_index: u32) -> Self {
        self.has_multiple_labels = true;
        self.label_index = label_index;
        self
    }

    /// Attach renderer warnings
    pub fn with_warnings(mut self, warnings: Vec<LabelWarning>) -> Self {
        self.warnings = warnings;
        self
    }

    /// Whether a metadata sidecar must be written for this label
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// 1-based page number for multi-page labels
    pub fn page_number(&self) -> LabelCacheResult<Option<u32>> {
        if !self.has_multiple_labels {
            return Ok(None);
        }

        self.label_index.checked_add(1).map(Some).ok_or_else(|| {
            LabelCacheError::User(format!(
                "Page index {} of {} is out of range",
                self.label_index, self.image_file_name
            ))
        })
    }
}

/// An image file present in the cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredImage {
    /// Batch identity parsed from the file name, or a fallback id
    pub id: ImageId,

    /// Absolute path of the image file
    pub full_path: PathBuf,

    /// Creation time reported by the filesystem
    pub timestamp: DateTime<Utc>,
}

impl StoredImage {
    /// File name component of the stored path
    pub fn file_name(&self) -> &str {
        self.full_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_number_only_for_multi_page() {
        let single = LabelResponse::new("invoice.png", vec![]);
        assert_eq!(single.page_number().unwrap(), None);

        let page = LabelResponse::new("ship.png", vec![]).with_page(1);
        assert_eq!(page.page_number().unwrap(), Some(2));
    }

    #[test]
    fn page_number_rejects_last_index() {
        let page = LabelResponse::new("ship.png", vec![]).with_page(u32::MAX);
        assert!(matches!(page.page_number(), Err(LabelCacheError::User(_))));

        // Irrelevant when the label is not part of a multi-page set
        let mut single = LabelResponse::new("ship.png", vec![]);
        single.label_index = u32::MAX;
        assert_eq!(single.page_number().unwrap(), None);
    }

    #[test]
    fn has_warnings() {
        let label = LabelResponse::new("a.png", vec![]);
        assert!(!label.has_warnings());

        let label = label.with_warnings(vec![LabelWarning::message("field out of bounds")]);
        assert!(label.has_warnings());
    }

    #[test]
    fn label_serializes_camel_case_with_base64_image() {
        let label = LabelResponse::new("a.png", vec![0x89, b'P', b'N', b'G'])
            .with_page(0)
            .with_warnings(vec![LabelWarning {
                byte_index: 12,
                byte_size: 3,
                command_name: "^FO".to_string(),
                parameter_number: 1,
                message: "Value 9999 is out of range".to_string(),
            }]);

        let json = serde_json::to_value(&label).unwrap();
        assert_eq!(json["imageFileName"], "a.png");
        assert_eq!(json["hasMultipleLabels"], true);
        assert_eq!(json["label"], "iVBORw==");
        assert_eq!(json["warnings"][0]["commandName"], "^FO");

        let parsed: LabelResponse = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.label, label.label);
        assert_eq!(parsed.warnings, label.warnings);
    }

    #[test]
    fn stored_image_file_name() {
        let image = StoredImage {
            id: 3,
            full_path: PathBuf::from("/cache/invoice-3.png"),
            timestamp: Utc::now(),
        };
        assert_eq!(image.file_name(), "invoice-3.png");
    }
}
