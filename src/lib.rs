//! ChainOpera agent service - health check and placeholder prediction over HTTP

pub mod config;
pub mod error;

pub mod agent;
pub mod api;

pub use config::Config;
pub use error::{Error, Result};
