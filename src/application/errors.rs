//! Application layer errors

use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Command execution errors
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Send failed: {0}")]
    Send(#[from] BotError),

    #[error("Handler panicked: {0}")]
    Panicked(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(valid: bool) -> Result<(), BotError> {
        if !valid {
            Err(ConfigError::MissingField("bot.channels".to_string()))?;
        }
        Ok(())
    }

    #[test]
    fn test_config_error_surfaces_as_bot_error() {
        let err = check(false).unwrap_err();
        assert!(matches!(err, BotError::Config(ConfigError::MissingField(_))));
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required field: bot.channels"
        );
        assert!(check(true).is_ok());
    }

    #[test]
    fn test_send_failure_wraps_transport_error() {
        let err: CommandError = BotError::Transport("connection reset".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Send failed: Transport error: connection reset"
        );
    }
}
