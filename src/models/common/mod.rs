pub mod action;
pub mod lenient;
pub mod response;
