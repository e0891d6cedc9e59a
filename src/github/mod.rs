//! GitHub GraphQL access.
//!
//! - `client`: HTTP transport with bearer auth (GithubClient)
//! - `queries`: the three query documents, login bound as a variable
//! - `response`: nullable wire shapes and their conversion to view models
//! - `aggregate`: runs the three queries and builds the Dashboard

pub mod aggregate;
pub mod client;
pub mod queries;
pub mod response;

#[cfg(test)]
pub mod mock;

pub use aggregate::{Aggregator, SharedAggregator};
pub use client::GithubClient;
