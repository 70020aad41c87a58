use async_trait::async_trait;

use crate::application::errors::CommandError;
use crate::domain::entities::{CommandContext, CommandDefinition, CommandHandler};
use crate::domain::traits::Bot;

/// Lists the registered commands, or describes one when named
pub struct ListCommands;

fn describe(command: &CommandDefinition, prefix: &str) -> String {
    let usage = command.usage.as_deref().unwrap_or(&command.name);
    if command.description.is_empty() {
        format!("{}{}", prefix, usage)
    } else {
        format!("{}{} - {}", prefix, usage, command.description)
    }
}

#[async_trait]
impl CommandHandler for ListCommands {
    async fn execute(&self, ctx: &CommandContext, bot: &dyn Bot) -> Result<(), CommandError> {
        let commands = bot.list_commands();
        let mention = ctx.user.mention();

        let reply = match ctx.args.first() {
            Some(wanted) => {
                let wanted = wanted.trim_start_matches(bot.prefix()).to_lowercase();
                match commands.iter().find(|c| c.keys().any(|k| k == wanted)) {
                    Some(command) => format!("{} {}", mention, describe(command, bot.prefix())),
                    None => format!("{} Unknown command: {}", mention, wanted),
                }
            }
            None => {
                let names: Vec<&str> = commands.iter().map(|c| c.name.as_str()).collect();
                format!("{} Available commands: {}", mention, names.join(", "))
            }
        };

        bot.send(&ctx.channel, &reply).await?;
        Ok(())
    }
}

pub fn definition() -> CommandDefinition {
    CommandDefinition::new("commands", ListCommands)
        .with_aliases(["help", "cmds"])
        .with_description("List all available commands")
        .with_cooldown(15)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{context, RecordingBot};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_lists_canonical_names() {
        let mut bot = RecordingBot::new();
        bot.commands = vec![
            Arc::new(crate::commands::ping::definition()),
            Arc::new(definition()),
            Arc::new(crate::commands::dice::definition()),
        ];

        ListCommands.execute(&context(&[]), &bot).await.unwrap();

        assert_eq!(
            bot.lines(),
            vec!["@viewer Available commands: ping, commands, dice"]
        );
    }

    #[tokio::test]
    async fn test_describes_one_command() {
        let mut bot = RecordingBot::new();
        bot.commands = vec![
            Arc::new(crate::commands::ping::definition()),
            Arc::new(crate::commands::dice::definition()),
        ];

        ListCommands.execute(&context(&["!ROLL"]), &bot).await.unwrap();
        ListCommands.execute(&context(&["ping"]), &bot).await.unwrap();
        ListCommands.execute(&context(&["nope"]), &bot).await.unwrap();

        assert_eq!(
            bot.lines(),
            vec![
                "@viewer !dice [sides] - Roll a dice (1-6) or specify sides",
                "@viewer !ping - Check if the bot is responsive",
                "@viewer Unknown command: nope",
            ]
        );
    }
}
