//! Status Reader Module
//!
//! Read side of the pipeline. Looks up the stored outcome for a request id
//! and reports it. An absent record is reported as `processing`; polling a
//! fresh or in-flight request is never an error.

pub mod handlers;
pub mod types;
