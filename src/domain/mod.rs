pub mod difficulty;
pub mod guess;
