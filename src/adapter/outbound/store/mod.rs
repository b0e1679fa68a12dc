//! Trait frequency storage adapters.

mod json;

pub use json::JsonTraitStore;
