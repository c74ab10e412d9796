pub mod analog;
pub mod date_text;
pub mod digital;
pub mod labels;
pub mod segments;
