use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::application::errors::CommandError;
use crate::domain::entities::{CommandContext, CommandDefinition, CommandHandler};
use crate::domain::traits::Bot;

pub struct Uptime;

/// Render as `[Nd ][Nh ][Nm ]Ns`, omitting zero leading units
pub fn format_uptime(uptime: Duration) -> String {
    let total = uptime.num_seconds().max(0);
    let days = total / 86_400;
    let hours = (total / 3_600) % 24;
    let minutes = (total / 60) % 60;
    let seconds = total % 60;

    let mut out = String::new();
    if days > 0 {
        out.push_str(&format!("{}d ", days));
    }
    if hours > 0 {
        out.push_str(&format!("{}h ", hours));
    }
    if minutes > 0 {
        out.push_str(&format!("{}m ", minutes));
    }
    out.push_str(&format!("{}s", seconds));
    out
}

#[async_trait]
impl CommandHandler for Uptime {
    async fn execute(&self, ctx: &CommandContext, bot: &dyn Bot) -> Result<(), CommandError> {
        let uptime = format_uptime(Utc::now() - bot.start_time());
        let reply = format!("{} Bot uptime: {}", ctx.user.mention(), uptime);
        bot.send(&ctx.channel, &reply).await?;
        Ok(())
    }
}

pub fn definition() -> CommandDefinition {
    CommandDefinition::new("uptime", Uptime)
        .with_description("Show how long the bot has been running")
        .with_cooldown(10)
}
