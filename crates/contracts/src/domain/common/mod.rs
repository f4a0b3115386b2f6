//! Types and traits shared by all domain entities

pub mod aggregate_id;

pub use aggregate_id::AggregateId;
