//! # Platform NUMA Facility
//!
//! The capability seam between the query adapter and the host NUMA library.
//!
//! [`NumaFacility`] is a set of pure reads with a uniform sentinel contract:
//! a negative return encodes failure, anything else is the answer. The
//! production implementation, [`LibNumaFacility`], binds libnuma; tests
//! substitute an in-memory topology.

use libc::c_int;

use crate::sys;

/// Pure reads over the platform's NUMA facility.
///
/// Implementations must be stateless reads: no caching, no locking, no
/// mutation of platform policy. The adapter calls these from arbitrary
/// scheduler threads, hence the `Send + Sync` bound.
///
/// Sentinel contract: every method returns a signed integer where a
/// negative value encodes failure and a non-negative value is the result.
pub trait NumaFacility: Send + Sync {
    /// Whether the host exposes NUMA topology to this process.
    fn available(&self) -> c_int;

    /// The node hosting `cpu`.
    fn node_of_cpu(&self, cpu: c_int) -> c_int;

    /// The highest node index known to the platform.
    fn max_node(&self) -> c_int;

    /// The number of CPUs the platform has configured (online or not).
    fn num_configured_cpus(&self) -> c_int;

    /// Relative memory-access cost between `node_a` and `node_b`.
    fn distance(&self, node_a: c_int, node_b: c_int) -> c_int;

    /// The CPU the calling thread is currently running on.
    fn current_cpu(&self) -> c_int;
}

/// The production facility: libnuma on Linux, an always-absent facility
/// elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibNumaFacility;

impl NumaFacility for LibNumaFacility {
    #[allow(unsafe_code)]
    fn available(&self) -> c_int {
        // SAFETY: numa_available takes no arguments and reads only
        // libnuma's process-wide topology snapshot.
        unsafe { sys::numa_available() }
    }

    #[allow(unsafe_code)]
    fn node_of_cpu(&self, cpu: c_int) -> c_int {
        // SAFETY: libnuma validates the id itself and answers with a
        // sentinel for any out-of-range value.
        unsafe { sys::numa_node_of_cpu(cpu) }
    }

    #[allow(unsafe_code)]
    fn max_node(&self) -> c_int {
        // SAFETY: no arguments, pure read of cached topology.
        unsafe { sys::numa_max_node() }
    }

    #[allow(unsafe_code)]
    fn num_configured_cpus(&self) -> c_int {
        // SAFETY: no arguments, pure read of cached topology.
        unsafe { sys::numa_num_configured_cpus() }
    }

    #[allow(unsafe_code)]
    fn distance(&self, node_a: c_int, node_b: c_int) -> c_int {
        // SAFETY: libnuma reads the distance table and answers 0 for any
        // pair it does not know.
        let distance = unsafe { sys::numa_distance(node_a, node_b) };

        // ACPI distances are never below 10, so 0 is libnuma's rejection of
        // the pair. Normalise it to the negative-sentinel contract here so
        // the adapter sees one failure convention.
        if distance == 0 {
            -1
        } else {
            distance
        }
    }

    #[allow(unsafe_code)]
    fn current_cpu(&self) -> c_int {
        // SAFETY: sched_getcpu reads kernel-maintained per-thread state.
        unsafe { sys::sched_getcpu() }
    }
}
