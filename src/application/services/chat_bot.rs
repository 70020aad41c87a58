//! Chat bot service - Handler-facing bot over a transport and the registry

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::CommandRegistry;
use crate::application::errors::BotError;
use crate::domain::entities::CommandDefinition;
use crate::domain::traits::{Bot, Transport};

/// Handler-facing bot backed by a transport and the command registry
pub struct ChatBot {
    transport: Arc<dyn Transport>,
    registry: Arc<CommandRegistry>,
    prefix: String,
    start_time: DateTime<Utc>,
}

impl ChatBot {
    pub fn new(
        transport: Arc<dyn Transport>,
        registry: Arc<CommandRegistry>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            registry,
            prefix: prefix.into(),
            start_time: Utc::now(),
        }
    }
}

#[async_trait]
impl Bot for ChatBot {
    async fn send(&self, channel: &str, text: &str) -> Result<(), BotError> {
        match self.transport.send_message(channel, text).await {
            Ok(()) => {
                tracing::debug!("[{}] Bot: {}", channel, text);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to send message to {}: {}", channel, e);
                Err(e)
            }
        }
    }

    fn list_commands(&self) -> Vec<Arc<CommandDefinition>> {
        self.registry.list()
    }

    fn prefix(&self) -> &str {
        &self.prefix
    }

    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}
