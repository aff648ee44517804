pub mod gif;
pub mod png;
