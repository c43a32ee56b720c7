//! Terminal detection for choosing between styled and plain output

use console::Term;

/// Env vars whose presence means nobody is at the keyboard
const NON_INTERACTIVE_VARS: &[&str] = &["CI", "LABELCACHE_NONINTERACTIVE", "GITHUB_ACTIONS"];

/// UI context that determines output behavior
#[derive(Debug, Clone)]
pub struct UiContext {
    interactive: bool,
    auto_yes: bool,
}

impl UiContext {
    /// Detect the current environment
    pub fn detect() -> Self {
        let attended = Term::stdout().is_term() && Term::stderr().is_term();
        let ci = NON_INTERACTIVE_VARS
            .iter()
            .any(|var| std::env::var_os(var).is_some());

        Self {
            interactive: attended && !ci,
            auto_yes: false,
        }
    }

    /// Plain output, prompts resolve to their defaults
    pub fn non_interactive() -> Self {
        Self {
            interactive: false,
            auto_yes: false,
        }
    }

    /// Approve every prompt (`--yes`)
    pub fn with_auto_yes(mut self, yes: bool) -> Self {
        self.auto_yes = yes;
        self
    }

    /// Someone can answer prompts, so cliclack styling replaces plain lines
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn auto_yes(&self) -> bool {
        self.auto_yes
    }
}
