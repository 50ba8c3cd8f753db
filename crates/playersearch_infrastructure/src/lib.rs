pub mod services;
pub mod settings;
