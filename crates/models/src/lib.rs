pub mod errors;
pub mod db;
pub mod localized;
pub mod resource;

pub mod catalog;
pub mod lead;
pub mod project;
pub mod portfolio;
pub mod service_category;
pub mod story;
pub mod calculator_setting;
pub mod user;

pub use errors::ModelError;
pub use localized::LocalizedText;
pub use resource::{BatchPolicy, IdStrategy, Resource};

#[cfg(test)]
mod tests;
