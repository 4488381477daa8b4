//! Native dialogs
//!
//! Confirmation prompts run synchronously: the event loop waits until the
//! user answers.

use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Yes/no confirmation service used by the property panels.
pub trait UserPrompt {
    fn ask_yes_no(&mut self, message: &str) -> bool;
}

/// Confirmation through the platform's message box.
pub struct NativePrompt {
    title: String,
}

impl NativePrompt {
    pub fn new(title: impl Into<String>) -> Self {
        NativePrompt { title: title.into() }
    }
}

impl UserPrompt for NativePrompt {
    fn ask_yes_no(&mut self, message: &str) -> bool {
        let answer = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(self.title.as_str())
            .set_description(message)
            .set_buttons(MessageButtons::YesNo)
            .show();
        tracing::debug!(?answer, "confirmation answered");
        matches!(answer, MessageDialogResult::Yes)
    }
}

/// Let the user pick a novel file.
pub fn pick_novel_file() -> Option<PathBuf> {
    FileDialog::new()
        .add_filter("noveltree project", &["novx"])
        .pick_file()
}
