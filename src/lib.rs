//! ARAM win rates per champion from a player's Riot match history.
//!
//! [`pipeline::winrate_report`] and [`pipeline::winrate_json`] are the entry
//! points; the binary wraps them with config loading and CSV output.

pub mod analysis;
pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod pipeline;
pub mod rate_limit;
