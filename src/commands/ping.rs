use async_trait::async_trait;

use crate::application::errors::CommandError;
use crate::domain::entities::{CommandContext, CommandDefinition, CommandHandler};
use crate::domain::traits::Bot;

pub struct Ping;

#[async_trait]
impl CommandHandler for Ping {
    async fn execute(&self, ctx: &CommandContext, bot: &dyn Bot) -> Result<(), CommandError> {
        bot.send(&ctx.channel, &format!("{} Pong!", ctx.user.mention())).await?;
        Ok(())
    }
}

pub fn definition() -> CommandDefinition {
    CommandDefinition::new("ping", Ping)
        .with_description("Check if the bot is responsive")
        .with_cooldown(5)
}
