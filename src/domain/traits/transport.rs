use async_trait::async_trait;
use crate::application::errors::BotError;

/// Transport trait - abstraction for the chat network connection
#[async_trait]
pub trait Transport: Send + Sync {
    /// Connect and join the configured channels
    async fn start(&self) -> Result<(), BotError>;

    /// Deliver a line to a channel
    async fn send_message(&self, channel: &str, text: &str) -> Result<(), BotError>;

    /// Account the transport is logged in as
    fn bot_info(&self) -> BotInfo;
}

/// Bot account information
#[derive(Debug, Clone)]
pub struct BotInfo {
    /// Login the network knows the bot by; lines from it are self-echoes
    pub username: String,
}
