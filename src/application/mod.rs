pub mod commands;
pub mod error;
pub mod hooks;
pub mod ports;
pub mod queries;
pub mod services;
pub mod slugs;

pub use error::ApplicationResult;
