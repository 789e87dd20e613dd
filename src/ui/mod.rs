pub mod dashboard;
pub mod menu;
pub mod theme;
