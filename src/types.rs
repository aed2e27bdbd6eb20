use serde::{Deserialize, Serialize};

/// Identity reference attached to records (uploader, assignee, notification
/// target). The engine never reads identity from ambient state; whatever the
/// host application knows about a user is passed in here explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub name: String,
    pub role: Option<String>,
}

impl UserRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: None,
        }
    }

    /// Display name, or `None` when the feed delivered an empty string.
    pub fn display_name(&self) -> Option<&str> {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}
