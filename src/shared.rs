pub mod error;
pub mod types;
pub mod events;
pub mod emit;
pub mod settings;

#[cfg(test)]
mod types_test;
