//! User-facing warnings and confirmations

/// Blocking alert/confirm pair
pub trait Dialogs {
    /// Show a message the user must acknowledge
    fn warn(&mut self, message: &str);

    /// Ask a yes/no question
    fn confirm(&mut self, message: &str) -> bool;
}

/// Non-interactive dialogs: every confirm gets the same answer, warnings are
/// logged and kept for inspection. Used by the native build and tests.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDialogs {
    pub confirm_answer: bool,
    pub warnings: Vec<String>,
    pub questions: Vec<String>,
}

impl ScriptedDialogs {
    pub fn new(confirm_answer: bool) -> Self {
        Self {
            confirm_answer,
            ..Self::default()
        }
    }
}

impl Dialogs for ScriptedDialogs {
    fn warn(&mut self, message: &str) {
        log::info!("[alert] {}", message);
        self.warnings.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        log::info!("[confirm] {} -> {}", message, self.confirm_answer);
        self.questions.push(message.to_string());
        self.confirm_answer
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::BrowserDialogs;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::Dialogs;

    /// `window.alert` / `window.confirm`
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserDialogs;

    impl Dialogs for BrowserDialogs {
        fn warn(&mut self, message: &str) {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }

        fn confirm(&mut self, message: &str) -> bool {
            web_sys::window()
                .and_then(|w| w.confirm_with_message(message).ok())
                .unwrap_or(false)
        }
    }
}
