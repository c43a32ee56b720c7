//! Delete command - remove one cached image

use crate::cache::ImageCache;
use crate::cli::args::DeleteArgs;
use crate::error::LabelCacheResult;
use crate::ui::{self, UiContext};
use std::path::Path;

/// Execute the delete command
pub async fn execute(args: DeleteArgs, cache: &dyn ImageCache, root: &Path) -> LabelCacheResult<()> {
    let ctx = UiContext::detect();

    if cache.delete_image(root, &args.name).await? {
        ui::step_ok(&ctx, &format!("Deleted {}", args.name));
    } else {
        ui::step_warn_hint(
            &ctx,
            &format!("No cached image named {}", args.name),
            "Run: labelcache list",
        );
    }

    Ok(())
}
