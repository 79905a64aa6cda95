//! Graph-data ingestion and query execution.
//!
//! The pipeline runs wire JSON through property decoding into the dataset
//! the canvas widget renders: [`executor::QueryExecutor`] issues requests,
//! [`convert`] normalizes results, [`decode`] handles the base64 property
//! values. [`stats`] is independent of the rest.

pub mod convert;
pub mod decode;
pub mod error;
pub mod executor;
pub mod stats;
pub mod wire;
