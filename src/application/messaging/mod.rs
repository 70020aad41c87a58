//! Message handling - Turning chat lines into command invocations

pub mod dispatcher;
pub mod parser;

pub use dispatcher::{Clock, Dispatch, IgnoreReason, MessageDispatcher};
pub use parser::{CommandParser, ParsedCommand};
