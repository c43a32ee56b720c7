//! Store command - add label images to the cache as one batch

use crate::cache::ImageCache;
use crate::cli::args::{OutputFormat, StoreArgs};
use crate::cli::commands::list::print_images;
use crate::error::{LabelCacheError, LabelCacheResult};
use crate::labels::{LabelResponse, LabelWarning};
use crate::ui::{self, UiContext};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Execute the store command
pub async fn execute(args: StoreArgs, cache: &dyn ImageCache, root: &Path) -> LabelCacheResult<()> {
    let labels = read_labels(&args).await?;
    let stored = cache.store_label_images(root, &labels).await?;

    if let OutputFormat::Table = args.format {
        let ctx = UiContext::detect();
        for image in &stored {
            ui::step_ok_detail(
                &ctx,
                &format!("Stored {}", image.file_name()),
                &format!("id {}", image.id),
            );
        }
        if stored.len() < labels.len() {
            ui::step_warn(
                &ctx,
                &format!(
                    "{} of {} image(s) could not be written",
                    labels.len() - stored.len(),
                    labels.len()
                ),
            );
        }
        return Ok(());
    }

    print_images(&stored, args.format)
}

async fn read_labels(args: &StoreArgs) -> LabelCacheResult<Vec<LabelResponse>> {
    let warnings: Vec<LabelWarning> = args
        .warnings
        .iter()
        .map(|w| LabelWarning::message(w.as_str()))
        .collect();

    let mut labels = Vec::with_capacity(args.files.len());

    for (index, path) in args.files.iter().enumerate() {
        if !path.is_file() {
            return Err(LabelCacheError::PathNotFound(path.clone()));
        }

        let bytes = fs::read(path)
            .await
            .map_err(|e| LabelCacheError::io(format!("reading image {}", path.display()), e))?;

        let name = match &args.name {
            Some(name) => name.clone(),
            None => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| LabelCacheError::User(format!("Not a file: {}", path.display())))?,
        };

        let mut label = LabelResponse::new(name, bytes).with_warnings(warnings.clone());
        if args.multi_page {
            let index = u32::try_from(index)
                .map_err(|_| LabelCacheError::User(format!("Too many pages: {}", index)))?;
            label = label.with_page(index);
        }

        debug!("Read {} ({} bytes)", path.display(), label.label.len());
        labels.push(label);
    }

    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(files: Vec<std::path::PathBuf>, multi_page: bool) -> StoreArgs {
        StoreArgs {
            files,
            multi_page,
            name: None,
            warnings: vec![],
            format: OutputFormat::Plain,
        }
    }

    #[tokio::test]
    async fn read_labels_numbers_pages() {
        let temp = TempDir::new().unwrap();
        let p1 = temp.path().join("ship.png");
        let p2 = temp.path().join("ship2.png");
        std::fs::write(&p1, b"one").unwrap();
        std::fs::write(&p2, b"two").unwrap();

        let mut store_args = args(vec![p1, p2], true);
        store_args.name = Some("ship.png".to_string());
        store_args.warnings = vec!["truncated".to_string()];

        let labels = read_labels(&store_args).await.unwrap();

        assert_eq!(labels.len(), 2);
        assert_eq!(labels[1].page_number().unwrap(), Some(2));
        assert_eq!(labels[1].image_file_name, "ship.png");
        assert_eq!(labels[1].label, b"two");
        assert_eq!(labels[0].warnings[0].message, "truncated");
    }

    #[tokio::test]
    async fn read_labels_single_page_uses_file_name() {
        let temp = TempDir::new().unwrap();
        let p = temp.path().join("invoice.png");
        std::fs::write(&p, b"png").unwrap();

        let labels = read_labels(&args(vec![p], false)).await.unwrap();

        assert_eq!(labels[0].image_file_name, "invoice.png");
        assert_eq!(labels[0].page_number().unwrap(), None);
        assert!(!labels[0].has_warnings());
    }

    #[tokio::test]
    async fn read_labels_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = read_labels(&args(vec![temp.path().join("nope.png")], false))
            .await
            .unwrap_err();
        assert!(matches!(err, LabelCacheError::PathNotFound(_)));
    }
}
