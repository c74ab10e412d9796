pub mod app;
pub mod timers;
