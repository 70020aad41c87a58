//! Message dispatcher - Routes chat lines to command handlers

use std::sync::Arc;

use chrono::Utc;
use tokio::task::JoinError;

use super::parser::CommandParser;
use crate::application::errors::CommandError;
use crate::application::services::{Cooldown, CommandRegistry, CooldownTracker};
use crate::domain::entities::{ChatMessage, CommandContext};
use crate::domain::traits::Bot;

/// Millisecond wall clock
pub type Clock = Arc<dyn Fn() -> i64 + Send + Sync>;

/// Why a message produced no handler invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    SelfEcho,
    NotACommand,
    UnknownCommand,
}

/// Outcome of dispatching one chat line
#[derive(Debug)]
pub enum Dispatch {
    Ignored(IgnoreReason),
    CoolingDown { command: String, remaining_secs: f64 },
    Executed { command: String },
    Failed { command: String, error: CommandError },
}

impl Dispatch {
    /// Whether a handler was invoked, successfully or not
    pub fn invoked(&self) -> bool {
        matches!(self, Dispatch::Executed { .. } | Dispatch::Failed { .. })
    }
}

/// Message dispatcher - prefix check, lookup, cooldown, invoke
pub struct MessageDispatcher {
    parser: CommandParser,
    registry: Arc<CommandRegistry>,
    cooldowns: Arc<CooldownTracker>,
    bot: Arc<dyn Bot>,
    bot_identity: Option<String>,
    clock: Clock,
}

impl MessageDispatcher {
    pub fn new(
        prefix: impl Into<String>,
        registry: Arc<CommandRegistry>,
        cooldowns: Arc<CooldownTracker>,
        bot: Arc<dyn Bot>,
    ) -> Self {
        Self {
            parser: CommandParser::new(prefix),
            registry,
            cooldowns,
            bot,
            bot_identity: None,
            clock: Arc::new(|| Utc::now().timestamp_millis()),
        }
    }

    /// Treat lines from this login as the bot's own output
    pub fn with_bot_identity(mut self, identity: impl Into<String>) -> Self {
        self.bot_identity = Some(identity.into());
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn prefix(&self) -> &str {
        self.parser.prefix()
    }

    /// Run one inbound chat line through the dispatch cycle
    ///
    /// Never fails: handler errors and panics are logged and reported in the
    /// returned [`Dispatch`].
    pub async fn handle(&self, message: ChatMessage) -> Dispatch {
        if self.is_self(&message) {
            return Dispatch::Ignored(IgnoreReason::SelfEcho);
        }

        let Some(parsed) = self.parser.parse(&message.text) else {
            return Dispatch::Ignored(IgnoreReason::NotACommand);
        };

        let Some(command) = self.registry.resolve(&parsed.name) else {
            tracing::debug!("[{}] Unknown command: {}", message.channel, parsed.name);
            return Dispatch::Ignored(IgnoreReason::UnknownCommand);
        };

        let now = (self.clock)();
        let status = self.cooldowns.try_acquire(
            &command.name,
            &message.user.identity,
            command.cooldown(),
            now,
        );
        if let Cooldown::Denied { remaining_secs } = status {
            tracing::debug!(
                "{} tried to use {} but it's on cooldown ({:.1}s left)",
                message.user.identity,
                command.name,
                remaining_secs
            );
            return Dispatch::CoolingDown {
                command: command.name.clone(),
                remaining_secs,
            };
        }

        let ctx = CommandContext {
            channel: message.channel,
            user: message.user,
            args: parsed.args,
            invoked_as: parsed.name,
        };

        tracing::debug!(
            "Executing command: {} by {} (message {})",
            command.name,
            ctx.user.identity,
            message.id
        );

        let user = ctx.user.identity.clone();
        let handler = Arc::clone(&command.handler);
        let bot = Arc::clone(&self.bot);
        let task = tokio::spawn(async move { handler.execute(&ctx, bot.as_ref()).await });

        let result = match task.await {
            Ok(result) => result,
            Err(e) => Err(CommandError::Panicked(panic_message(e))),
        };

        match result {
            Ok(()) => Dispatch::Executed {
                command: command.name.clone(),
            },
            Err(error) => {
                tracing::error!(
                    "Error executing command {} for {}: {}",
                    command.name,
                    user,
                    error
                );
                Dispatch::Failed {
                    command: command.name.clone(),
                    error,
                }
            }
        }
    }

    fn is_self(&self, message: &ChatMessage) -> bool {
        message.is_self
            || self
                .bot_identity
                .as_deref()
                .is_some_and(|id| id.eq_ignore_ascii_case(&message.user.identity))
    }
}

fn panic_message(error: JoinError) -> String {
    if !error.is_panic() {
        return error.to_string();
    }

    let payload = error.into_panic();
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
