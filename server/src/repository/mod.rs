//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod json_file_repo;

#[cfg(test)]
mod tests;

pub use traits::OptionListRepository;
pub use json_file_repo::JsonFileRepository;
