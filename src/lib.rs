//! ACCOUNT KEEPER LIBRARY
//!
//! This library provides a service to query, save and aggregate accounts kept
//! by a repository, along with the actors used to load accounts from a CSV
//! file and export them back.

pub mod actor;
pub mod adapter;
pub mod model;
pub mod service;

pub type Result<T> = anyhow::Result<T>;
