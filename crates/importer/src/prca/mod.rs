//! Import of PRCA rodeo result records.
//!
//! A record describes one rodeo as published on the PRCA results pages: the
//! rodeo header (name, location, date range, status) and, per event category,
//! the placings with round, contestant and score text.

pub mod category;
pub mod models;
pub mod patterns;
pub mod transformer;
pub mod validator;
