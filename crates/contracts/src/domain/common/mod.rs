//! Common types and traits for all aggregates

pub mod entity_metadata;
pub mod base_aggregate;
pub mod aggregate_id;

// Re-exports
pub use entity_metadata::EntityMetadata;
pub use base_aggregate::BaseAggregate;
pub use aggregate_id::AggregateId;
