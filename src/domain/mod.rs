//! Domain layer - Core chat types with no transport dependencies
//! 
//! This layer contains:
//! - Entities: Chat users, inbound messages, command definitions
//! - Traits: Capabilities handed to handlers (Bot) and the chat transport

pub mod entities;
pub mod traits;
