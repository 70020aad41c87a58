use std::fmt;

/// A chat participant as seen by the command router
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChatUser {
    /// Stable login used for cooldown bookkeeping
    pub identity: String,
    pub display_name: String,
}

impl ChatUser {
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            display_name: String::new(),
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Chat mention addressed to the login, which survives localized display names
    pub fn mention(&self) -> String {
        format!("@{}", self.identity)
    }

    pub fn display_name(&self) -> &str {
        if self.display_name.is_empty() {
            &self.identity
        } else {
            &self.display_name
        }
    }
}

impl fmt::Display for ChatUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
