//! # State Module
//!
//! Shared state handed to every handler.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  Router::with_state(AppState)                                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────┐                                              │
//! │  │      AppState        │  Clone = Arc clone                           │
//! │  │  receipts: Arc<      │                                              │
//! │  │    ReceiptStore>     │──► RwLock<HashMap<Uuid, StoredReceipt>>      │
//! │  └──────────────────────┘                                              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Writers (process) take the write lock for one insert                │
//! │  • Readers (points) share the read lock                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod store;

use std::sync::Arc;

pub use store::{ReceiptStore, StoredReceipt};

/// State shared by all handlers.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub receipts: Arc<ReceiptStore>,
}

impl AppState {
    pub fn new() -> Self {
        AppState::default()
    }
}
