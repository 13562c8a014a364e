pub mod app;
pub mod events;
pub mod students;
