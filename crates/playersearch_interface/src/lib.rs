pub mod errors;
pub mod players;
