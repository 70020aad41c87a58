use async_trait::async_trait;

use crate::application::errors::CommandError;
use crate::domain::entities::{CommandContext, CommandDefinition, CommandHandler};
use crate::domain::traits::Bot;

pub struct Echo;

#[async_trait]
impl CommandHandler for Echo {
    async fn execute(&self, ctx: &CommandContext, bot: &dyn Bot) -> Result<(), CommandError> {
        let reply = if ctx.args.is_empty() {
            format!(
                "{} Usage: {}{} <message>",
                ctx.user.mention(),
                bot.prefix(),
                ctx.invoked_as
            )
        } else {
            format!("{} {}", ctx.user.mention(), ctx.args.join(" "))
        };

        bot.send(&ctx.channel, &reply).await?;
        Ok(())
    }
}

pub fn definition() -> CommandDefinition {
    CommandDefinition::new("echo", Echo)
        .with_description("Repeat a message")
        .with_usage("echo <message>")
        .with_cooldown(5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{context, RecordingBot};

    #[tokio::test]
    async fn test_echo_joins_args() {
        let bot = RecordingBot::new();
        Echo.execute(&context(&["hello", "world"]), &bot).await.unwrap();

        assert_eq!(bot.lines(), vec!["@viewer hello world"]);
    }

    #[tokio::test]
    async fn test_echo_without_args_shows_usage() {
        let bot = RecordingBot::new();
        let mut ctx = context(&[]);
        ctx.invoked_as = "echo".to_string();

        Echo.execute(&ctx, &bot).await.unwrap();

        assert_eq!(bot.lines(), vec!["@viewer Usage: !echo <message>"]);
    }
}
