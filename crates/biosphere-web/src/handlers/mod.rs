pub mod page;
pub mod dashboard;
pub mod simulate;
pub mod api;
