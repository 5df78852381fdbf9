pub mod analysis;
pub mod config;
pub mod error;
pub mod gateway;
pub mod llm;
pub mod publisher;
pub mod server;

pub use error::{Error, Result};
