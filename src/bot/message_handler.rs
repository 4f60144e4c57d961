//! Message Handler module for processing incoming Telegram commands

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::MessageId;
use tracing::{debug, warn};

use super::ui_builder::PLACEHOLDER_BUTTON;
use super::App;
use crate::screens::ScreenId;

/// Handle an incoming message. Only the menu commands are acted on; anything
/// else is ignored so the bot never argues with free-form chat.
pub async fn message_handler(app: Arc<App>, msg: Message) -> Result<()> {
    let chat_id = msg.chat.id;
    let Some(text) = msg.text() else {
        return Ok(());
    };

    // `/start@BotName` in group chats carries the bot name suffix
    let command = text.split_whitespace().next().unwrap_or("");
    let command = command.split('@').next().unwrap_or(command);

    match command {
        "/start" | "/menu" | "/help" => {
            debug!(chat_id = %chat_id, command, "Handling menu command");
            show_main_menu(&app, chat_id).await;
            schedule_command_cleanup(Arc::clone(&app), chat_id, msg.id);
        }
        "/clear" => {
            debug!(chat_id = %chat_id, "Handling clear command");
            app.renderer.clear_chat(chat_id).await;
            schedule_command_cleanup(Arc::clone(&app), chat_id, msg.id);
        }
        // The persistent reply-keyboard shortcut arrives as its label text
        _ if text == PLACEHOLDER_BUTTON => {
            debug!(chat_id = %chat_id, "Handling shortcut button press");
            show_main_menu(&app, chat_id).await;
        }
        _ => {}
    }

    Ok(())
}

async fn show_main_menu(app: &App, chat_id: ChatId) {
    if let Err(err) = app.gateway.send_typing(chat_id).await {
        debug!(chat_id = %chat_id, error = %err, "Typing action failed");
    }

    let Some(screen) = app.registry.get(ScreenId::Main) else {
        warn!(chat_id = %chat_id, "Main screen missing from registry");
        return;
    };
    match app.renderer.show_screen(chat_id, screen).await {
        Ok(outcome) => debug!(chat_id = %chat_id, outcome = ?outcome, "Main menu rendered"),
        Err(err) => warn!(chat_id = %chat_id, error = %err, "Failed to render main menu"),
    }

    if let Err(err) = app.renderer.refresh_placeholder(chat_id).await {
        debug!(chat_id = %chat_id, error = %err, "Placeholder refresh failed");
    }
}

/// Delete the user's triggering command message after a delay.
///
/// Fire-and-forget: a navigation or clear happening before the delay elapses
/// does not cancel the pending deletion.
fn schedule_command_cleanup(app: Arc<App>, chat_id: ChatId, message_id: MessageId) {
    let delay = app.config.command_cleanup_secs;
    if delay == 0 {
        return;
    }
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(delay)).await;
        if let Err(err) = app.gateway.delete_message(chat_id, message_id).await {
            debug!(chat_id = %chat_id, error = %err, "Command message cleanup failed");
        }
    });
}
