//! Card renderer: the "exclusive active card" protocol.
//!
//! A chat shows at most one bot-authored menu card. Navigation edits that
//! card in place; when the edit is rejected (message gone, or the payload
//! kind changed between text and photo), the stale card is deleted
//! best-effort and a fresh one is sent. Renders for the same chat are
//! serialized behind a per-chat lock so close-together button presses cannot
//! leave a dangling active-card id.

use std::collections::HashMap;
use std::sync::Arc;

use teloxide::types::{ChatId, MessageId};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::bot::ui_builder;
use crate::screens::{CardPayload, Screen};
use crate::session::SessionStore;
use crate::telegram::{ApiError, MessagingGateway};

/// How a navigation was materialized in the chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The existing active card was edited in place
    Edited,
    /// A fresh card was sent (first render, or the edit path failed)
    Resent,
}

pub struct CardRenderer {
    gateway: Arc<dyn MessagingGateway>,
    store: Arc<dyn SessionStore>,
    chat_locks: Mutex<HashMap<i64, Arc<Mutex<()>>>>,
}

impl CardRenderer {
    pub fn new(gateway: Arc<dyn MessagingGateway>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            gateway,
            store,
            chat_locks: Mutex::new(HashMap::new()),
        }
    }

    async fn chat_lock(&self, chat_id: ChatId) -> Arc<Mutex<()>> {
        let mut locks = self.chat_locks.lock().await;
        Arc::clone(locks.entry(chat_id.0).or_default())
    }

    /// Display a screen as the single visible card in the chat.
    ///
    /// After a successful call the session tracks exactly one active card
    /// reflecting `screen`. External deletions the platform does not report
    /// can still leave strays; that is accepted best-effort behavior.
    pub async fn show_screen(
        &self,
        chat_id: ChatId,
        screen: &Screen,
    ) -> Result<RenderOutcome, ApiError> {
        let lock = self.chat_lock(chat_id).await;
        let _guard = lock.lock().await;

        let mut session = self.store.load(chat_id).await;
        let keyboard = ui_builder::inline_keyboard(screen);

        if let Some(active) = session.active_card {
            match self
                .try_edit(chat_id, MessageId(active), screen, keyboard.clone())
                .await
            {
                Ok(()) => {
                    self.store.save(chat_id, session).await;
                    return Ok(RenderOutcome::Edited);
                }
                Err(err) => {
                    debug!(chat_id = %chat_id, error = %err, "In-place edit failed, replacing card");
                    if let Err(err) = self.gateway.delete_message(chat_id, MessageId(active)).await
                    {
                        debug!(chat_id = %chat_id, error = %err, "Stale card could not be deleted");
                    }
                }
            }
        }

        let message_id = self.send_card(chat_id, screen, keyboard).await?;
        session.record_card(message_id.0);
        self.store.save(chat_id, session).await;
        Ok(RenderOutcome::Resent)
    }

    async fn try_edit(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        screen: &Screen,
        keyboard: Option<teloxide::types::InlineKeyboardMarkup>,
    ) -> Result<(), ApiError> {
        let result = match &screen.payload {
            CardPayload::Text(text) => {
                self.gateway
                    .edit_text(chat_id, message_id, text, keyboard)
                    .await
            }
            CardPayload::Photo { caption, .. } => {
                self.gateway
                    .edit_caption(chat_id, message_id, caption, keyboard)
                    .await
            }
        };
        match result {
            // Re-rendering the current screen is a successful no-op
            Err(ApiError::NotModified) => Ok(()),
            other => other,
        }
    }

    async fn send_card(
        &self,
        chat_id: ChatId,
        screen: &Screen,
        keyboard: Option<teloxide::types::InlineKeyboardMarkup>,
    ) -> Result<MessageId, ApiError> {
        match &screen.payload {
            CardPayload::Text(text) => self.gateway.send_text(chat_id, text, keyboard).await,
            CardPayload::Photo { url, caption } => {
                self.gateway
                    .send_photo(chat_id, url, caption, keyboard)
                    .await
            }
        }
    }

    /// Replace the reply-keyboard placeholder so shortcuts never stack.
    pub async fn refresh_placeholder(&self, chat_id: ChatId) -> Result<(), ApiError> {
        let lock = self.chat_lock(chat_id).await;
        let _guard = lock.lock().await;

        let mut session = self.store.load(chat_id).await;
        if let Some(old) = session.placeholder.take() {
            if let Err(err) = self.gateway.delete_message(chat_id, MessageId(old)).await {
                debug!(chat_id = %chat_id, error = %err, "Old placeholder could not be deleted");
            }
        }

        let message_id = self
            .gateway
            .send_reply_keyboard(
                chat_id,
                ui_builder::PLACEHOLDER_TEXT,
                ui_builder::placeholder_keyboard(),
            )
            .await?;
        session.record_placeholder(message_id.0);
        self.store.save(chat_id, session).await;
        Ok(())
    }

    /// Delete every tracked message in the chat and drop its session.
    ///
    /// Individual deletions are advisory; a message may already be gone or be
    /// too old for the platform to delete.
    pub async fn clear_chat(&self, chat_id: ChatId) {
        let lock = self.chat_lock(chat_id).await;
        let _guard = lock.lock().await;

        let session = self.store.load(chat_id).await;
        let ids = session.tracked_ids();
        let mut deleted = 0usize;
        for id in &ids {
            match self.gateway.delete_message(chat_id, MessageId(*id)).await {
                Ok(()) => deleted += 1,
                Err(err) => {
                    debug!(chat_id = %chat_id, message_id = id, error = %err, "Cleanup deletion failed")
                }
            }
        }
        self.store.remove(chat_id).await;
        info!(chat_id = %chat_id, tracked = ids.len(), deleted, "Chat cleared");
    }
}
