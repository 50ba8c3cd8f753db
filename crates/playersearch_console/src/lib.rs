pub mod commands;
pub mod console;
pub mod logger;
pub mod render;
pub mod search_controller;
