use std::path::{Path, PathBuf};

/// Process-wide application properties shown by the front end.
#[derive(Debug, Clone, Default)]
pub struct Application {
    title: String,
    icon: Option<PathBuf>,
}

impl Application {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_application_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// Terminals cannot display icons; the path is kept and checked only.
    pub fn set_application_icon(&mut self, icon: impl Into<PathBuf>) {
        let icon = icon.into();
        if !icon.exists() {
            tracing::warn!(icon = %icon.display(), "application icon not found");
        }
        self.icon = Some(icon);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> Option<&Path> {
        self.icon.as_deref()
    }
}
