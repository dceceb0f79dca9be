#![forbid(unsafe_code)]
//! modgraph-core library.
//!
//! The graph model: a fixed vertex set, simple directed edges, vertex and
//! edge attributes, and two interchangeable edge storages.
//!
//! # Conventions
//!
//! - **Errors**: Fallible operations return [`GraphError`].
//! - **Logging**: Use `tracing` macros (`debug!`, `trace!`); the library
//!   never installs a subscriber.

pub mod error;
pub mod graph;

pub use error::{ErrorCode, GraphError};
pub use graph::{
    AdjacencyList, AdjacencyMatrix, Digraph, EdgeStorage, ListDigraph, MatrixDigraph,
    Representation, VertexStore,
};
