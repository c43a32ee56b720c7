//! Confirmation prompt that degrades to a fixed answer off-terminal

use super::context::UiContext;
use crate::error::{LabelCacheError, LabelCacheResult};

/// Ask a yes/no question
///
/// `--yes` approves without asking; without a terminal the answer is `default`.
pub async fn confirm(ctx: &UiContext, message: &str, default: bool) -> LabelCacheResult<bool> {
    match (ctx.auto_yes(), ctx.is_interactive()) {
        (true, _) => {
            println!("  {} (auto-approved)", message);
            return Ok(true);
        }
        (false, false) => return Ok(default),
        (false, true) => {}
    }

    // cliclack blocks on stdin
    let message = message.to_string();
    tokio::task::spawn_blocking(move || {
        cliclack::confirm(&message)
            .initial_value(default)
            .interact()
    })
    .await
    .map_err(|e| LabelCacheError::User(format!("Confirmation prompt aborted: {}", e)))?
    .map_err(|e| LabelCacheError::User(format!("Could not read answer: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn auto_yes_approves() {
        let ctx = UiContext::non_interactive().with_auto_yes(true);
        assert!(confirm(&ctx, "Proceed?", false).await.unwrap());
    }

    #[tokio::test]
    async fn non_interactive_uses_default() {
        let ctx = UiContext::non_interactive();
        assert!(!confirm(&ctx, "Proceed?", false).await.unwrap());
        assert!(confirm(&ctx, "Proceed?", true).await.unwrap());
    }
}
