// This module setup the logger level.

use std::env;

use tracing_subscriber::EnvFilter;

const TARGETS: [&str; 4] = [
    "playersearch_app",
    "playersearch_console",
    "playersearch_infrastructure",
    "playersearch_interface",
];

pub fn setup(logger_level: &str) {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", directives(logger_level));
    }

    // Logs go to stderr, stdout is kept for the player cards.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn directives(logger_level: &str) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={logger_level}"))
        .collect::<Vec<String>>()
        .join(",")
}
