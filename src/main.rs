use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gsom_assistant::bot::{self, App};
use gsom_assistant::config::BotConfig;
use gsom_assistant::renderer::CardRenderer;
use gsom_assistant::screens::ScreenRegistry;
use gsom_assistant::session::{InMemorySessionStore, JsonFileSessionStore, SessionStore};
use gsom_assistant::telegram::{MessagingGateway, TelegramGateway};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    info!("Starting GSOM assistant bot");

    let config = BotConfig::from_env()?;

    // Session backend: file-backed when configured, otherwise in-memory
    let store: Arc<dyn SessionStore> = match &config.session_file {
        Some(path) => {
            info!(path = %path, "Using file-backed session store");
            Arc::new(JsonFileSessionStore::new(path))
        }
        None => {
            info!("Using in-memory session store");
            Arc::new(InMemorySessionStore::new())
        }
    };

    let bot = Bot::new(config.token.clone());
    let gateway: Arc<dyn MessagingGateway> = Arc::new(TelegramGateway::new(bot.clone()));
    let renderer = CardRenderer::new(Arc::clone(&gateway), store);
    let registry = ScreenRegistry::new(&config);
    let app = Arc::new(App {
        config,
        registry,
        renderer,
        gateway,
    });

    info!("Bot initialized, starting dispatcher");

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint({
            let app = Arc::clone(&app);
            move |msg: Message| {
                let app = Arc::clone(&app);
                async move { bot::message_handler(app, msg).await }
            }
        }))
        .branch(Update::filter_callback_query().endpoint({
            let app = Arc::clone(&app);
            move |bot: Bot, q: CallbackQuery| {
                let app = Arc::clone(&app);
                async move { bot::callback_handler(app, bot, q).await }
            }
        }));

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
