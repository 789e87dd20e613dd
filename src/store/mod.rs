pub mod clock;
pub mod results_log;
pub mod schema;
pub mod stats;
