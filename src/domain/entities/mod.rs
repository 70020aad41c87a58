//! Domain entities - Core chat objects

pub mod user;
pub mod message;
pub mod command;

pub use user::ChatUser;
pub use message::ChatMessage;
pub use command::{CommandContext, CommandDefinition, CommandHandler};
