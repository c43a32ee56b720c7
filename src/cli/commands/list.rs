//! List command - show cached images

use crate::cache::ImageCache;
use crate::cli::args::{ListArgs, OutputFormat};
use crate::error::LabelCacheResult;
use crate::labels::StoredImage;
use crate::ui::{self, UiContext};
use console::style;
use std::path::Path;

/// Execute the list command
pub async fn execute(args: ListArgs, cache: &dyn ImageCache, root: &Path) -> LabelCacheResult<()> {
    let images = cache.get_all(root).await?;

    if images.is_empty() {
        match args.format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Plain => {}
            OutputFormat::Table => {
                let ctx = UiContext::detect();
                ui::step_info(&ctx, &format!("No cached images in {}", root.display()));
            }
        }
        return Ok(());
    }

    print_images(&images, args.format)
}

/// Render image records in the requested format
pub(crate) fn print_images(images: &[StoredImage], format: OutputFormat) -> LabelCacheResult<()> {
    match format {
        OutputFormat::Table => print_table(images),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(images)?),
        OutputFormat::Plain => {
            for image in images {
                println!("{}", image.full_path.display());
            }
        }
    }
    Ok(())
}

fn print_table(images: &[StoredImage]) {
    println!(
        "{:<8} {:<20} {:<40}",
        style("ID").bold(),
        style("CREATED").bold(),
        style("FILE").bold()
    );
    println!("{}", "-".repeat(70));

    for image in images {
        let created = image
            .timestamp
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();

        println!("{:<8} {:<20} {:<40}", image.id, created, image.file_name());
    }

    println!();
    println!("{} image(s)", images.len());
}
