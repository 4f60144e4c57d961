//! Per-chat session bookkeeping.
//!
//! A [`ChatSession`] tracks which bot messages live in a chat: the single
//! active card, the reply-keyboard placeholder, and the full history of ids
//! the bot has sent there (for bulk cleanup). The [`SessionStore`] trait is
//! an injected dependency so the in-memory and file-backed variants are
//! interchangeable and tests get isolation for free.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use teloxide::types::ChatId;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Message bookkeeping for one chat. Ids are raw Telegram message ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    /// The currently displayed menu card, if any
    pub active_card: Option<i32>,
    /// The reply-keyboard placeholder message, if any
    pub placeholder: Option<i32>,
    /// Every message id the bot has sent into this chat
    pub history: Vec<i32>,
}

impl ChatSession {
    /// Record a freshly sent card as the active one.
    pub fn record_card(&mut self, message_id: i32) {
        self.active_card = Some(message_id);
        self.history.push(message_id);
    }

    /// Record a freshly sent placeholder.
    pub fn record_placeholder(&mut self, message_id: i32) {
        self.placeholder = Some(message_id);
        self.history.push(message_id);
    }

    /// Every id worth deleting on cleanup, deduplicated, history order.
    pub fn tracked_ids(&self) -> Vec<i32> {
        let mut ids = self.history.clone();
        ids.extend(self.active_card);
        ids.extend(self.placeholder);
        let mut seen = std::collections::HashSet::new();
        ids.retain(|id| seen.insert(*id));
        ids
    }
}

/// Pluggable session persistence keyed by chat id.
///
/// Loads never fail: a missing entry is a fresh default session. Saves are
/// best-effort; backends log and swallow their own I/O problems, matching the
/// advisory nature of the bookkeeping.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, chat_id: ChatId) -> ChatSession;
    async fn save(&self, chat_id: ChatId, session: ChatSession);
    async fn remove(&self, chat_id: ChatId);
}

/// Default backend: sessions live in process memory and vanish on restart.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<i64, ChatSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, chat_id: ChatId) -> ChatSession {
        self.sessions
            .lock()
            .await
            .get(&chat_id.0)
            .cloned()
            .unwrap_or_default()
    }

    async fn save(&self, chat_id: ChatId, session: ChatSession) {
        self.sessions.lock().await.insert(chat_id.0, session);
    }

    async fn remove(&self, chat_id: ChatId) {
        self.sessions.lock().await.remove(&chat_id.0);
    }
}

/// File-backed sessions: one flat JSON object mapping chat-id strings to
/// session records, rewritten on every save.
///
/// The file is tiny and writes are rare, so the whole map is serialized each
/// time. A missing or corrupt file degrades to an empty map.
pub struct JsonFileSessionStore {
    path: PathBuf,
    sessions: Mutex<HashMap<String, ChatSession>>,
}

impl JsonFileSessionStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let sessions = Self::load_file(&path);
        Self {
            path,
            sessions: Mutex::new(sessions),
        }
    }

    fn load_file(path: &Path) -> HashMap<String, ChatSession> {
        match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Session file is corrupt, starting empty");
                    HashMap::new()
                }
            },
            Err(e) => {
                debug!(path = %path.display(), error = %e, "No readable session file, starting empty");
                HashMap::new()
            }
        }
    }

    fn persist(&self, sessions: &HashMap<String, ChatSession>) {
        match serde_json::to_string_pretty(sessions) {
            Ok(raw) => {
                if let Err(e) = fs::write(&self.path, raw) {
                    warn!(path = %self.path.display(), error = %e, "Failed to write session file");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize sessions"),
        }
    }
}

#[async_trait]
impl SessionStore for JsonFileSessionStore {
    async fn load(&self, chat_id: ChatId) -> ChatSession {
        self.sessions
            .lock()
            .await
            .get(&chat_id.0.to_string())
            .cloned()
            .unwrap_or_default()
    }

    async fn save(&self, chat_id: ChatId, session: ChatSession) {
        let mut sessions = self.sessions.lock().await;
        sessions.insert(chat_id.0.to_string(), session);
        self.persist(&sessions);
    }

    async fn remove(&self, chat_id: ChatId) {
        let mut sessions = self.sessions.lock().await;
        sessions.remove(&chat_id.0.to_string());
        self.persist(&sessions);
    }
}
