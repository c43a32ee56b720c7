//! Clear command - remove every cached image

use crate::cache::ImageCache;
use crate::cli::args::ClearArgs;
use crate::error::LabelCacheResult;
use crate::ui::{self, UiContext};
use std::path::Path;

/// Execute the clear command
pub async fn execute(args: ClearArgs, cache: &dyn ImageCache, root: &Path) -> LabelCacheResult<()> {
    let ctx = UiContext::detect().with_auto_yes(args.yes);

    let prompt = format!("Delete all cached images in {}?", root.display());
    if !ui::confirm(&ctx, &prompt, false).await? {
        ui::step_info(&ctx, "Nothing deleted (use --yes to skip confirmation)");
        return Ok(());
    }

    if cache.clear_all(root).await? {
        ui::outro_success(&ctx, "Cache cleared");
    } else if root.is_dir() {
        ui::outro_warn(&ctx, "Some images could not be deleted");
    } else {
        ui::outro_warn(&ctx, &format!("No cache at {}", root.display()));
    }

    Ok(())
}
