//! Domain traits - Abstractions handed across layer boundaries

pub mod bot;
pub mod transport;

pub use bot::Bot;
pub use transport::{BotInfo, Transport};
