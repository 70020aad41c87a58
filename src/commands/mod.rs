//! Built-in chat commands
//!
//! Each command is a stateless leaf handler; everything it needs comes in
//! through [`CommandContext`](crate::domain::entities::CommandContext) and the
//! [`Bot`](crate::domain::traits::Bot) capability.

pub mod dice;
pub mod echo;
pub mod help;
pub mod ping;
pub mod uptime;

use crate::domain::entities::CommandDefinition;

pub use dice::Dice;
pub use echo::Echo;
pub use help::ListCommands;
pub use ping::Ping;
pub use uptime::Uptime;

/// The stock command set, in registration order
pub fn default_commands() -> Vec<CommandDefinition> {
    vec![
        ping::definition(),
        uptime::definition(),
        help::definition(),
        dice::definition(),
        echo::definition(),
    ]
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::{DateTime, Utc};

    use crate::application::errors::BotError;
    use crate::domain::entities::{ChatUser, CommandContext, CommandDefinition};
    use crate::domain::traits::Bot;

    /// Bot that records sends instead of delivering them
    pub struct RecordingBot {
        pub sent: Mutex<Vec<(String, String)>>,
        pub commands: Vec<Arc<CommandDefinition>>,
        pub start_time: DateTime<Utc>,
    }

    impl RecordingBot {
        pub fn new() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                commands: Vec::new(),
                start_time: Utc::now(),
            }
        }

        pub fn lines(&self) -> Vec<String> {
            self.sent
                .lock()
                .unwrap()
                .iter()
                .map(|(_, text)| text.clone())
                .collect()
        }
    }

    #[async_trait]
    impl Bot for RecordingBot {
        async fn send(&self, channel: &str, text: &str) -> Result<(), BotError> {
            self.sent
                .lock()
                .unwrap()
                .push((channel.to_string(), text.to_string()));
            Ok(())
        }

        fn list_commands(&self) -> Vec<Arc<CommandDefinition>> {
            self.commands.clone()
        }

        fn prefix(&self) -> &str {
            "!"
        }

        fn start_time(&self) -> DateTime<Utc> {
            self.start_time
        }
    }

    pub fn context(args: &[&str]) -> CommandContext {
        CommandContext {
            channel: "#stream".to_string(),
            user: ChatUser::new("viewer").with_display_name("Viewer"),
            args: args.iter().map(|a| a.to_string()).collect(),
            invoked_as: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_commands_order_and_cooldowns() {
        let commands = default_commands();
        let summary: Vec<(&str, u64)> = commands
            .iter()
            .map(|c| (c.name.as_str(), c.cooldown()))
            .collect();

        assert_eq!(
            summary,
            vec![("ping", 5), ("uptime", 10), ("commands", 15), ("dice", 3), ("echo", 5)]
        );
        assert_eq!(commands[2].aliases, vec!["help", "cmds"]);
        assert_eq!(commands[3].aliases, vec!["roll"]);
    }
}
