pub mod abbreviations;
pub mod api;
pub mod calculator;
pub mod config;
pub mod credentials;
pub mod error;
pub mod server;
pub mod util;
