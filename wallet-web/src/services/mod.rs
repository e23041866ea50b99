//! Browser services

pub mod provider;

pub use provider::BrowserProvider;
