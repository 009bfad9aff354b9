//! Module for core business logic services.
//!
//! This module encapsulates services that perform specific business operations
//! and orchestrate interactions between different parts of the application,
//! such as aggregating dealer data from upstream or reading the car catalog.

pub mod catalog;
pub mod data_aggregator;

pub use catalog::{CarEntry, CatalogService};
pub use data_aggregator::{DealerAggregator, DealerId};
