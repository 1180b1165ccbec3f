pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod helpers;
pub mod models;
pub mod repositories;

pub use config::Config;
