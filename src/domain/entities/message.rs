use super::ChatUser;

/// An inbound chat line delivered by the transport
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: String,
    pub channel: String,
    pub user: ChatUser,
    pub text: String,
    /// Set by the transport when the line is the bot's own output echoed back
    pub is_self: bool,
}

impl ChatMessage {
    pub fn new(channel: impl Into<String>, user: ChatUser, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            channel: channel.into(),
            user,
            text: text.into(),
            is_self: false,
        }
    }

    pub fn from_self(channel: impl Into<String>, user: ChatUser, text: impl Into<String>) -> Self {
        let mut msg = Self::new(channel, user, text);
        msg.is_self = true;
        msg
    }
}
