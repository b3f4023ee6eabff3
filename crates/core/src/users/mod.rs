//! Users module - accounts, credentials, services, and traits.

pub mod credentials;
mod users_model;
mod users_service;
mod users_traits;

pub use users_model::{NewUser, NewUserRecord, User, UserCredentials};
pub use users_service::UserService;
pub use users_traits::{UserRepositoryTrait, UserServiceTrait};
