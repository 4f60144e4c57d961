//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules:
//! - `message_handler`: handles incoming commands (`/start`, `/menu`, `/help`, `/clear`)
//! - `callback_handler`: handles inline keyboard callback queries
//! - `ui_builder`: turns screen data into Telegram keyboards

pub mod callback_handler;
pub mod message_handler;
pub mod ui_builder;

use std::sync::Arc;

use crate::config::BotConfig;
use crate::renderer::CardRenderer;
use crate::screens::ScreenRegistry;
use crate::telegram::MessagingGateway;

/// Shared application state injected into every handler.
pub struct App {
    pub config: BotConfig,
    pub registry: ScreenRegistry,
    pub renderer: CardRenderer,
    pub gateway: Arc<dyn MessagingGateway>,
}

// Re-export main handler functions for use in main.rs
pub use callback_handler::callback_handler;
pub use message_handler::message_handler;
