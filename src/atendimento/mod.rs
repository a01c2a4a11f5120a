//! Client intake: form data model, validation and the HTTP boundary.

pub mod handlers;
pub mod models;
pub mod validation;
