pub mod compose;
pub mod form;
