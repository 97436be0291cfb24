pub mod api;
pub mod config;
pub mod error;
pub mod logger;
pub mod poller;
pub mod status;
pub mod telegram;
