mod budget;
mod builder;
mod strategy;

pub use budget::{text_len, ContextBudget, DEFAULT_MAX_CHARS};
pub use builder::ContextBuilder;
pub use strategy::{ContextStrategy, ContextWindow};
