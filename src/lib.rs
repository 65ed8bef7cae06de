//! Asynchronous Address-Distance Service Library
//!
//! This library crate defines the components of the request/worker/poll
//! pipeline. It serves as the foundation for the binary executable
//! (`main.rs`).
//!
//! ## Architecture Modules
//! Data flows one way: intake → queue → worker → store → status.
//!
//! - **`intake`**: Validates a pair of addresses, mints a correlation id,
//!   and enqueues a work item. Stateless; returns immediately.
//! - **`queue`**: The hand-off between intake and the worker, with the
//!   `WorkItem` wire shape and an in-process mpsc-backed implementation.
//! - **`worker`**: Consumes work items, geocodes both addresses, computes
//!   the haversine distance, and persists the outcome. Never crashes its
//!   consumption loop.
//! - **`geocode`**: The geocoding collaborator contract and an HTTP client
//!   for a Nominatim-style backend.
//! - **`store`**: Keyed result storage; the per-request state machine
//!   (`processing` → `completed` | `error`) with decimal-exact numbers.
//! - **`status`**: Looks up a result by correlation id for client polling.

pub mod config;
pub mod error;
pub mod geocode;
pub mod intake;
pub mod queue;
pub mod status;
pub mod store;
pub mod worker;
