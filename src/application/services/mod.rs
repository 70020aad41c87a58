//! Application services - Shared state behind the dispatcher

pub mod chat_bot;
pub mod cooldown;
pub mod registry;

pub use chat_bot::ChatBot;
pub use cooldown::{Cooldown, CooldownTracker};
pub use registry::CommandRegistry;
