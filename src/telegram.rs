//! Messaging gateway over the Telegram Bot API.
//!
//! Every outbound platform call the bot makes goes through the
//! [`MessagingGateway`] trait so the renderer can be exercised against a
//! scripted double in tests. [`TelegramGateway`] is the production
//! implementation on top of `teloxide::Bot`.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatAction, InlineKeyboardMarkup, InputFile, KeyboardMarkup, MessageId};
use url::Url;

/// Classified platform call failure.
///
/// The interesting distinction for the renderer is "the target message is
/// gone" versus "the platform refused the call for some other reason"; both
/// are recoverable, but they are logged differently.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// The message to edit or delete no longer exists
    MessageMissing,
    /// Edit produced identical content; harmless
    NotModified,
    /// Any other rejection or transport failure
    Rejected(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::MessageMissing => write!(f, "message missing"),
            ApiError::NotModified => write!(f, "message not modified"),
            ApiError::Rejected(msg) => write!(f, "rejected: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<teloxide::RequestError> for ApiError {
    fn from(err: teloxide::RequestError) -> Self {
        use teloxide::ApiError as Tg;
        match err {
            teloxide::RequestError::Api(Tg::MessageNotModified) => ApiError::NotModified,
            teloxide::RequestError::Api(Tg::MessageToEditNotFound)
            | teloxide::RequestError::Api(Tg::MessageToDeleteNotFound)
            | teloxide::RequestError::Api(Tg::MessageIdInvalid) => ApiError::MessageMissing,
            other => ApiError::Rejected(other.to_string()),
        }
    }
}

/// Outbound messaging surface used by the renderer and handlers.
#[async_trait]
pub trait MessagingGateway: Send + Sync {
    async fn send_text(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<MessageId, ApiError>;

    async fn send_photo(
        &self,
        chat_id: ChatId,
        url: &str,
        caption: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<MessageId, ApiError>;

    async fn edit_text(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<(), ApiError>;

    async fn edit_caption(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        caption: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<(), ApiError>;

    async fn delete_message(&self, chat_id: ChatId, message_id: MessageId)
        -> Result<(), ApiError>;

    async fn send_typing(&self, chat_id: ChatId) -> Result<(), ApiError>;

    /// Send the near-empty placeholder message that carries the persistent
    /// reply keyboard.
    async fn send_reply_keyboard(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: KeyboardMarkup,
    ) -> Result<MessageId, ApiError>;
}

/// Production gateway over the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramGateway {
    bot: Bot,
}

impl TelegramGateway {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl MessagingGateway for TelegramGateway {
    async fn send_text(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<MessageId, ApiError> {
        let mut request = self.bot.send_message(chat_id, text.to_string());
        if let Some(kb) = keyboard {
            request = request.reply_markup(kb);
        }
        let message = request.await?;
        Ok(message.id)
    }

    async fn send_photo(
        &self,
        chat_id: ChatId,
        url: &str,
        caption: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<MessageId, ApiError> {
        let photo_url =
            Url::parse(url).map_err(|e| ApiError::Rejected(format!("bad photo url: {e}")))?;
        let mut request = self
            .bot
            .send_photo(chat_id, InputFile::url(photo_url))
            .caption(caption.to_string());
        if let Some(kb) = keyboard {
            request = request.reply_markup(kb);
        }
        let message = request.await?;
        Ok(message.id)
    }

    async fn edit_text(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<(), ApiError> {
        let mut request = self
            .bot
            .edit_message_text(chat_id, message_id, text.to_string());
        if let Some(kb) = keyboard {
            request = request.reply_markup(kb);
        }
        request.await?;
        Ok(())
    }

    async fn edit_caption(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        caption: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<(), ApiError> {
        let mut request = self
            .bot
            .edit_message_caption(chat_id, message_id)
            .caption(caption.to_string());
        if let Some(kb) = keyboard {
            request = request.reply_markup(kb);
        }
        request.await?;
        Ok(())
    }

    async fn delete_message(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
    ) -> Result<(), ApiError> {
        self.bot.delete_message(chat_id, message_id).await?;
        Ok(())
    }

    async fn send_typing(&self, chat_id: ChatId) -> Result<(), ApiError> {
        self.bot
            .send_chat_action(chat_id, ChatAction::Typing)
            .await?;
        Ok(())
    }

    async fn send_reply_keyboard(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: KeyboardMarkup,
    ) -> Result<MessageId, ApiError> {
        let message = self
            .bot
            .send_message(chat_id, text.to_string())
            .reply_markup(keyboard)
            .await?;
        Ok(message.id)
    }
}
