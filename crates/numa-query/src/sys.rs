//! Raw platform declarations.
//!
//! Only this module names platform symbols. Every function returns a signed
//! value where negative encodes failure; translation into [`NumaError`]
//! happens one layer up, in the facility binding.
//!
//! [`NumaError`]: crate::NumaError

// FFI declarations and the one raw libc call live here.
#![allow(unsafe_code)]

#[cfg(target_os = "linux")]
mod imp {
    use libc::c_int;

    #[link(name = "numa", kind = "dylib")]
    extern "C" {
        pub fn numa_available() -> c_int;
        pub fn numa_node_of_cpu(cpu: c_int) -> c_int;
        pub fn numa_max_node() -> c_int;
        pub fn numa_num_configured_cpus() -> c_int;
        pub fn numa_distance(node_a: c_int, node_b: c_int) -> c_int;
    }

    pub unsafe fn sched_getcpu() -> c_int {
        // SAFETY: sched_getcpu takes no arguments and reads only
        // kernel-maintained per-thread state.
        unsafe { libc::sched_getcpu() }
    }
}

// Hosts without libnuma report the facility as absent. The adapter then
// answers NotAvailable for every query, matching a NUMA-disabled kernel.
#[cfg(not(target_os = "linux"))]
mod imp {
    use libc::c_int;

    pub unsafe fn numa_available() -> c_int {
        -1
    }

    pub unsafe fn numa_node_of_cpu(_cpu: c_int) -> c_int {
        -1
    }

    pub unsafe fn numa_max_node() -> c_int {
        -1
    }

    pub unsafe fn numa_num_configured_cpus() -> c_int {
        -1
    }

    pub unsafe fn numa_distance(_node_a: c_int, _node_b: c_int) -> c_int {
        -1
    }

    pub unsafe fn sched_getcpu() -> c_int {
        -1
    }
}

pub use imp::*;
