pub mod core;
pub mod entity;
pub mod error;
pub mod macros;
