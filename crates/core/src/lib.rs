//! DailyCap Core - Domain entities, services, and traits.
//!
//! This crate contains the business rules for DailyCap: users and their
//! credentials, expense recording, the daily budget evaluator and the
//! best-effort alert notifier. It is database-agnostic and defines traits
//! that are implemented by the `storage-sqlite` crate.

pub mod budget;
pub mod constants;
pub mod errors;
pub mod expenses;
pub mod notifications;
pub mod users;
pub mod utils;

#[cfg(test)]
mod testing;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
