//! # NUMA Query Adapter
//!
//! The caller-facing query surface. Every operation runs the same
//! three-step pipeline: check availability, ask the facility, translate the
//! sentinel. Availability comes first so a host without NUMA answers with
//! one stable error kind no matter what arguments arrive.
//!
//! The adapter owns no state and takes no locks; calls are independent,
//! idempotent, and safe to issue concurrently from scheduler threads.

use libc::c_int;

use crate::error::NumaError;
use crate::facility::{LibNumaFacility, NumaFacility};
use crate::Result;

/// Topology queries over a platform NUMA facility.
///
/// The default facility is the host's libnuma binding; tests substitute an
/// in-memory topology through [`NumaQuery::with_facility`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NumaQuery<F = LibNumaFacility> {
    facility: F,
}

impl NumaQuery<LibNumaFacility> {
    /// Creates an adapter over the host's NUMA facility.
    #[must_use]
    pub fn new() -> Self {
        Self {
            facility: LibNumaFacility,
        }
    }
}

impl<F: NumaFacility> NumaQuery<F> {
    /// Creates an adapter over a custom facility.
    #[must_use]
    pub fn with_facility(facility: F) -> Self {
        Self { facility }
    }

    /// Whether the host exposes NUMA topology to this process.
    ///
    /// Re-evaluated on every call; callers must not assume the answer is
    /// stable across calls on hosts that support topology hot-plug.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.facility.available() >= 0
    }

    /// Returns the NUMA node hosting `cpu`.
    ///
    /// # Errors
    ///
    /// [`NumaError::NotAvailable`] if the host does not expose NUMA, and
    /// [`NumaError::InvalidCpu`] if the platform rejects the id.
    pub fn node_of_cpu(&self, cpu: usize) -> Result<usize> {
        self.ensure_available()?;
        let raw = c_int::try_from(cpu).map_err(|_| NumaError::InvalidCpu { cpu })?;
        usize::try_from(self.facility.node_of_cpu(raw))
            .map_err(|_| NumaError::InvalidCpu { cpu })
    }

    /// Returns the highest NUMA node index known to the platform.
    ///
    /// # Errors
    ///
    /// [`NumaError::NotAvailable`] if the host does not expose NUMA. A
    /// negative max-node answer from the platform means the facility is
    /// effectively absent and is surfaced the same way; a single-node
    /// system answers 0.
    pub fn max_node(&self) -> Result<usize> {
        self.ensure_available()?;
        usize::try_from(self.facility.max_node()).map_err(|_| NumaError::NotAvailable)
    }

    /// Returns the number of CPUs the platform has configured, which may
    /// exceed the number currently online.
    ///
    /// # Errors
    ///
    /// [`NumaError::NotAvailable`] if the host does not expose NUMA.
    pub fn configured_cpu_count(&self) -> Result<usize> {
        self.ensure_available()?;
        usize::try_from(self.facility.num_configured_cpus())
            .map_err(|_| NumaError::NotAvailable)
    }

    /// Returns the platform's relative memory-access cost between two
    /// nodes. Self-distance is the minimum (conventionally 10); the
    /// platform is trusted, not checked, for symmetry.
    ///
    /// # Errors
    ///
    /// [`NumaError::NotAvailable`] if the host does not expose NUMA, and
    /// [`NumaError::InvalidNodes`] if the platform rejects either node.
    pub fn distance(&self, node_a: usize, node_b: usize) -> Result<u32> {
        self.ensure_available()?;
        let invalid = || NumaError::InvalidNodes { node_a, node_b };
        let raw_a = c_int::try_from(node_a).map_err(|_| invalid())?;
        let raw_b = c_int::try_from(node_b).map_err(|_| invalid())?;
        u32::try_from(self.facility.distance(raw_a, raw_b)).map_err(|_| invalid())
    }

    /// Returns the NUMA node hosting the calling thread right now.
    ///
    /// The scheduler may migrate the thread at any point, so the answer is
    /// a snapshot; pin the thread first if it must stay meaningful.
    ///
    /// # Errors
    ///
    /// [`NumaError::NotAvailable`] if the host does not expose NUMA or the
    /// current CPU cannot be read.
    pub fn current_node(&self) -> Result<usize> {
        self.ensure_available()?;
        let cpu = usize::try_from(self.facility.current_cpu())
            .map_err(|_| NumaError::NotAvailable)?;
        self.node_of_cpu(cpu)
    }

    /// One-line topology description for operator diagnostics.
    ///
    /// # Errors
    ///
    /// [`NumaError::NotAvailable`] if the host does not expose NUMA.
    pub fn summary(&self) -> Result<String> {
        let nodes = self.max_node()? + 1;
        let cpus = self.configured_cpu_count()?;
        Ok(format!("NUMA: {nodes} nodes, {cpus} CPUs"))
    }

    /// Logs the detected topology, or its absence, for debugging.
    pub fn log_topology(&self) {
        match self.summary() {
            Ok(summary) => tracing::info!("{summary}"),
            Err(_) => {
                tracing::debug!("NUMA not available, uniform-memory placement assumed");
            }
        }
    }

    fn ensure_available(&self) -> Result<()> {
        if self.facility.available() < 0 {
            return Err(NumaError::NotAvailable);
        }
        Ok(())
    }
}
