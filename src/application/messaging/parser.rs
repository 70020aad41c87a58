//! Command parser - Splits a prefixed chat line into a command key and arguments

/// A prefixed chat line after tokenization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Lowercased command key, either a canonical name or an alias
    pub name: String,
    pub args: Vec<String>,
}

/// Recognizes the configured command prefix
pub struct CommandParser {
    command_prefix: String,
}

impl CommandParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            command_prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.command_prefix
    }

    /// Parse a chat line, returning `None` for ordinary chat or an empty key
    pub fn parse(&self, text: &str) -> Option<ParsedCommand> {
        let cmd_text = text.strip_prefix(self.command_prefix.as_str())?;

        let mut parts = cmd_text.split_whitespace();
        let name = parts.next()?.to_lowercase();
        let args = parts.map(str::to_string).collect();

        Some(ParsedCommand { name, args })
    }
}
