//! Chat command router for a streaming platform's text channel.
//!
//! Inbound chat lines are checked for the command prefix, resolved against a
//! registry of commands and aliases, throttled per command and user, and
//! handed to the matching handler.

pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;
