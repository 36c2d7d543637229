pub mod config;
pub mod input;
pub mod metrics;
pub mod output;
pub mod ranking;
