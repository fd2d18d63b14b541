//! HTTP handlers, one module per resource.
//!
//! Handlers translate verbs/paths into repository calls; all consistency
//! logic lives in the repositories. Malformed path ids never reach them:
//! the `Path<DbId>` extractor rejects those with 400 first.

pub mod appointment;
pub mod client;
pub mod pet;
