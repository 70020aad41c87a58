use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use super::ChatUser;
use crate::application::errors::CommandError;
use crate::domain::traits::Bot;

/// Leaf logic run when a command is matched and not cooling down
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn execute(&self, ctx: &CommandContext, bot: &dyn Bot) -> Result<(), CommandError>;
}

/// Per-message dispatch state handed to a handler
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub channel: String,
    pub user: ChatUser,
    pub args: Vec<String>,
    /// Key the user typed, which may be an alias of the canonical name
    pub invoked_as: String,
}

/// Represents a registered chat command
pub struct CommandDefinition {
    pub name: String,
    pub aliases: Vec<String>,
    pub description: String,
    pub usage: Option<String>,
    pub cooldown_secs: Option<u64>,
    pub handler: Arc<dyn CommandHandler>,
}

impl CommandDefinition {
    pub fn new<H>(name: impl Into<String>, handler: H) -> Self
    where
        H: CommandHandler + 'static,
    {
        Self {
            name: name.into().to_lowercase(),
            aliases: Vec::new(),
            description: String::new(),
            usage: None,
            cooldown_secs: None,
            handler: Arc::new(handler),
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases
            .into_iter()
            .map(|a| a.into().to_lowercase())
            .collect();
        self
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    pub fn with_cooldown(mut self, secs: u64) -> Self {
        self.cooldown_secs = Some(secs);
        self
    }

    /// Cooldown window in seconds, `0` meaning unthrottled
    pub fn cooldown(&self) -> u64 {
        self.cooldown_secs.unwrap_or(0)
    }

    /// Canonical name followed by every alias
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
            .chain(self.aliases.iter().map(String::as_str))
    }
}

impl fmt::Debug for CommandDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDefinition")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("description", &self.description)
            .field("usage", &self.usage)
            .field("cooldown_secs", &self.cooldown_secs)
            .finish_non_exhaustive()
    }
}
