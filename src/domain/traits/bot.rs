use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::application::errors::BotError;
use crate::domain::entities::CommandDefinition;

/// Narrow capability handed to command handlers
///
/// Handlers never see the transport or the dispatcher directly, only what
/// they need to reply and to introspect the bot.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Send a line to a channel
    async fn send(&self, channel: &str, text: &str) -> Result<(), BotError>;

    /// Distinct registered commands in registration order
    fn list_commands(&self) -> Vec<Arc<CommandDefinition>>;

    /// Configured command prefix
    fn prefix(&self) -> &str;

    /// When the bot process came up
    fn start_time(&self) -> DateTime<Utc>;
}
