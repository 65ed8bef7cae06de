//! Request Intake Module
//!
//! Stateless entry point of the pipeline. Validates the two addresses,
//! mints a fresh `RequestId`, and hands a `WorkItem` to the queue. The
//! response carries the id the client will poll with; the actual work
//! happens later, elsewhere.

pub mod handlers;
pub mod types;

#[cfg(test)]
mod tests;
