//! Service layer: the store operations behind every HTTP route.
//! - Generic list/upsert/batch over any `models::Resource`.
//! - User registration and media storage on top of that.
//! - The caller passes the `DatabaseConnection`; nothing is global.

pub mod errors;
pub mod resource;
pub mod user_service;
pub mod media;
#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
