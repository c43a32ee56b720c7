//! UI module for consistent CLI output
//!
//! Uses `cliclack` for styled logging and prompts in interactive terminals,
//! with automatic fallback to plain output in CI/non-interactive environments.
//!
//! # Example
//!
//! ```rust,ignore
//! use labelcache::ui::{self, UiContext};
//!
//! let ctx = UiContext::detect().with_auto_yes(args.yes);
//!
//! if ui::confirm(&ctx, "Delete all cached images?", false).await? {
//!     ui::outro_success(&ctx, "Cache cleared");
//! }
//! ```

mod context;
mod output;
mod prompts;

pub use context::UiContext;
pub use output::{
    outro_success, outro_warn, remark, step_error_detail, step_info, step_ok, step_ok_detail,
    step_warn, step_warn_hint,
};
pub use prompts::confirm;
