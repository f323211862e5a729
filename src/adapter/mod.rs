//! The adapter module holds the implementation of tools required by the services.
//! The different adapters perform operations that involve IOs like reading or
//! writing to memory stores or databases (more generally, the outside world).

mod account_repository;

pub use account_repository::*;
