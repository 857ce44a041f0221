//! Data layer: record model, filter selection, and the filter-and-aggregate
//! pipeline that turns a dataset plus a filter state into a `ViewBundle`.

pub mod filter;
pub mod model;
pub mod pipeline;
