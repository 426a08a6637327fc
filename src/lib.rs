pub mod browser;
pub mod config;
pub mod error;
pub mod models;
pub mod pages;
pub mod services;
pub mod utils;

pub use config::Config;
pub use error::{E2eError, Result};
