//! Service module
//!
//! Services can be considered as the business logic of the application. They
//! are used by the actors to perform operations on the data. The account
//! service delegates storage to a repository adapter and keeps the
//! aggregations on top of it.

mod account_service;

pub use account_service::*;
