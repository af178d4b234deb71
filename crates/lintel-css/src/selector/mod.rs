//! Selector model and specificity.

mod specificity;
mod types;

pub use specificity::Specificity;
pub use types::*;
