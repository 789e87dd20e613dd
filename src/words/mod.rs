pub mod dictionary;
pub mod selector;
