//! Callback Handler module for processing inline keyboard callback queries

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use tracing::{debug, warn};

use super::App;
use crate::screens::ScreenId;

/// Handle a button press: resolve the payload to a screen and redraw the
/// active card. Unknown payloads change nothing; the query is acknowledged
/// either way so the client spinner always stops.
pub async fn callback_handler(app: Arc<App>, bot: Bot, q: CallbackQuery) -> Result<()> {
    debug!(user_id = %q.from.id, data = ?q.data, "Received callback query");

    let data = q.data.as_deref().unwrap_or("");
    match ScreenId::parse(data) {
        Some(screen_id) => {
            if let Some(msg) = &q.message {
                let chat_id = msg.chat().id;
                match app.registry.get(screen_id) {
                    Some(screen) => match app.renderer.show_screen(chat_id, screen).await {
                        Ok(outcome) => {
                            debug!(chat_id = %chat_id, screen = ?screen_id, outcome = ?outcome, "Screen rendered")
                        }
                        Err(err) => {
                            warn!(chat_id = %chat_id, screen = ?screen_id, error = %err, "Failed to render screen")
                        }
                    },
                    None => {
                        warn!(screen = ?screen_id, "Screen missing from registry, ignoring")
                    }
                }
            }
        }
        None => debug!(data = %data, "Ignoring unknown callback payload"),
    }

    // Answer the callback query to remove the loading state
    bot.answer_callback_query(q.id).await?;

    Ok(())
}
