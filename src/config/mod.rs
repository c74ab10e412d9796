pub mod form;
pub mod theme;
