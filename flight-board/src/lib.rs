//! Incheon Airport flight board.
//!
//! Fetches arrival and departure status from the public flight-status
//! API and answers two questions: "what's next at this gate?" and "give
//! me every passenger flight for these days, per terminal, as a
//! spreadsheet".

pub mod domain;
pub mod flights;
pub mod pipeline;
pub mod report;
pub mod web;
