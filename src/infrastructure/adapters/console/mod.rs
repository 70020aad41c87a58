//! Console adapter for development/testing

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use crate::domain::entities::{ChatMessage, ChatUser};
use crate::domain::traits::{BotInfo, Transport};
use crate::application::errors::BotError;

/// Console bot adapter: prints the bot's lines to stdout
pub struct ConsoleAdapter {
    info: BotInfo,
}

impl ConsoleAdapter {
    pub fn new(bot_username: impl Into<String>) -> Self {
        Self {
            info: BotInfo {
                username: bot_username.into(),
            },
        }
    }
}

#[async_trait]
impl Transport for ConsoleAdapter {
    async fn start(&self) -> Result<(), BotError> {
        tracing::info!("Starting console bot (dev mode)");
        Ok(())
    }

    async fn send_message(&self, channel: &str, text: &str) -> Result<(), BotError> {
        println!("[{}] {}: {}", channel, self.info.username, text);
        Ok(())
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}

/// Reads chat lines for a single console user from stdin
pub struct ConsoleInput {
    channel: String,
    user: ChatUser,
    lines: Lines<BufReader<Stdin>>,
}

impl ConsoleInput {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            user: ChatUser::new("console").with_display_name("console"),
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Chat as this user instead of the default console user
    pub fn with_user(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.user = ChatUser::new(name.to_lowercase()).with_display_name(name);
        self
    }

    /// Next non-blank line typed on stdin, or `None` at end of input
    pub async fn next_event(&mut self) -> Result<Option<ChatMessage>, BotError> {
        while let Some(line) = self.lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            return Ok(Some(ChatMessage::new(&self.channel, self.user.clone(), line)));
        }
        Ok(None)
    }
}
