//! # HTTP Handlers
//!
//! | Route                        | Handler                       |
//! |------------------------------|-------------------------------|
//! | `POST /receipts/process`     | [`receipts::process_receipt`] |
//! | `GET /receipts/{id}/points`  | [`receipts::get_points`]      |
//! | `GET /health`                | [`health::health`]            |

pub mod health;
pub mod receipts;
