//! # NUMA Error Types
//!
//! The two error kinds a topology query can surface.

/// Errors that can occur during NUMA topology queries.
///
/// Queries are total: each call either returns a value or one of these
/// kinds. Nothing is retried or logged on the way up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumaError {
    /// The host does not expose NUMA topology to this process.
    #[error("NUMA is not available on this system")]
    NotAvailable,

    /// A CPU id was rejected by the platform (out of range, not
    /// configured, or offline).
    #[error("invalid CPU id: {cpu}")]
    InvalidCpu {
        /// The rejected CPU id.
        cpu: usize,
    },

    /// A node pair was rejected by the platform.
    #[error("invalid NUMA nodes: {node_a}, {node_b}")]
    InvalidNodes {
        /// First node of the rejected pair.
        node_a: usize,
        /// Second node of the rejected pair.
        node_b: usize,
    },
}
