//! Web layer for the flight board.
//!
//! Provides the gate lookup page and the spreadsheet download.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
