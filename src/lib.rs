pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod state;

pub use error::{MacroError, Result};
pub use models::{MacroKind, MacroNutrients, RatioTriple, RetentionFactors};
