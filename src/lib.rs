//! payview — data layer.
//!
//! Only the pure data core (record model, filter selection, and the
//! filter-and-aggregate pipeline) plus the country-code lookup collaborator
//! are present as a library. The presentation layer is an external consumer
//! of [`data::pipeline::ViewBundle`].

pub mod country;
pub mod data;
