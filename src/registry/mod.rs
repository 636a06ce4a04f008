//! Retrieval and normalization of the upstream SPDX list documents.
//!
//! - [`fetch`] — downloads a document over HTTP (or reads it from disk) and parses it as JSON.
//! - [`normalize`] — turns a parsed document into a [`Registry`](crate::models::Registry),
//!   dropping deprecated ids.

pub mod fetch;
pub mod normalize;
