pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;


pub use config::Config;
pub use error::ScaffoldError;
