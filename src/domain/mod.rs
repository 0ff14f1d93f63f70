//! Catalog domain
pub mod aggregates;
pub mod events;
pub mod ids;
pub mod value_objects;
