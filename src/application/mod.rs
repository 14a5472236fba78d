pub mod configuration;
pub mod service;
