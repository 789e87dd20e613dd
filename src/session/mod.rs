pub mod command;
pub mod pool;
pub mod quiz;
