pub mod gemini;
pub mod generation;
pub mod ledger;
pub mod prompt;
pub mod sales_generator;

pub use crate::domain::ports::{GenerationSettings, TextGenerator};
pub use crate::utils::error::Result;
