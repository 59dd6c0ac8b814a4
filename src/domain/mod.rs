pub mod commit_type;
pub mod draft;
pub mod message;
pub mod validation;
