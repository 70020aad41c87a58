//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Adapters: Chat transports (console for local development)

pub mod config;
pub mod adapters;
