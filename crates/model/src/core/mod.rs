pub mod property;
pub mod value;
