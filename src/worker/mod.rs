//! Distance Worker Module
//!
//! The consuming end of the pipeline. The worker pulls one `WorkItem` at a
//! time, resolves both addresses through the geocoding collaborator, computes
//! the great-circle distance, and upserts the outcome into the result store.
//!
//! ## Failure policy
//! Nothing a single item does may take the consumption loop down:
//! - An unresolvable address becomes a terminal `error` record naming it.
//! - Any unexpected failure is caught at the top of the loop and converted
//!   into a best-effort `error` write.
//! - A failing error write is swallowed with a log line.
//! - A missing store means persistence is skipped, logged, never fatal.
//!
//! ## Submodules
//! - **`distance`**: the haversine great-circle computation.
//! - **`worker`**: the consumption loop and per-item orchestration.

pub mod distance;
pub mod worker;
