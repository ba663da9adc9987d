//! # NUMA Query
//!
//! Topology queries over the host's NUMA facility for cluster placement
//! decisions.
//!
//! This crate answers four questions on behalf of an orchestration layer:
//! which node hosts a CPU, what the highest node index is, how many CPUs
//! are configured, and how far apart two nodes are. Everything else about
//! placement (scoring, pinning, scheduling) belongs to the caller.
//!
//! ## Design Principles
//!
//! 1. **Availability is a gate, not a handshake** - every call re-checks
//!    whether the host exposes NUMA; there is no init step and no cached
//!    availability flag
//! 2. **No locks** - all queries are pure reads over the platform facility
//!    and safe to issue concurrently from scheduler threads
//! 3. **Sentinels stop at the boundary** - the platform's signed return
//!    codes are translated into typed errors inside the facility binding;
//!    callers never see raw integers
//!
//! ## Example
//!
//! ```rust,ignore
//! use numa_query::NumaQuery;
//!
//! let query = NumaQuery::new();
//! let node = query.node_of_cpu(4)?;
//! let cost = query.distance(node, 0)?;
//! ```
//!
//! ## Platform Support
//!
//! | Platform | Support |
//! |----------|---------|
//! | Linux | Full, via libnuma |
//! | Other | Degraded (every query reports `NotAvailable`) |

#![deny(missing_docs)]
#![deny(unsafe_code)] // Selectively allowed at the FFI boundary with justification
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod facility;
pub mod query;
mod sys;

pub use error::NumaError;
pub use facility::{LibNumaFacility, NumaFacility};
pub use query::NumaQuery;

/// Result type for NUMA query operations.
pub type Result<T> = std::result::Result<T, NumaError>;
