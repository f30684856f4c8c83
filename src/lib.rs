pub mod config;
pub mod demo;
pub mod error;
pub mod plotting;
pub mod profile;
pub mod styles;
