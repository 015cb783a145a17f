pub mod models;
pub mod error;
pub mod password;
pub mod repository;
pub mod service;

pub use models::*;
pub use error::*;
pub use password::*;
pub use repository::*;
pub use service::*;

#[cfg(test)]
mod tests;
