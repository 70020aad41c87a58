//! Application layer - Command routing
//! 
//! This layer contains:
//! - Services: Command registry, cooldown tracker, the handler-facing bot
//! - Errors: Domain-specific errors
//! - Messaging: Parsing and dispatching chat lines

pub mod errors;
pub mod services;
pub mod messaging;
