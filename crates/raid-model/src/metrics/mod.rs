//! Closed-form capacity and performance figures per array shape.

use serde::Serialize;

use crate::level::RaidLevel;

#[cfg(test)]
mod metrics_tests;

/// Metrics is the derived record for one `(level, disk_count, disk_capacity)`
/// configuration. Capacities share whatever unit the caller used for
/// `disk_capacity`; the speed fields are symbolic labels relative to a single
/// disk, not measured throughput.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Metrics {
    /// Raw capacity summed across all disks.
    pub total_capacity: u64,
    /// Capacity left for user data after redundancy overhead.
    pub usable_capacity: u64,
    /// `total_capacity - usable_capacity`.
    pub redundancy_capacity: u64,
    /// `usable / total`, in `[0, 1]`.
    pub efficiency: f64,
    /// Maximum simultaneous whole-disk failures survivable without data loss.
    pub fault_tolerance: u64,
    /// Relative read throughput, e.g. `"4x"`.
    pub read_speed: String,
    /// Relative write throughput; may carry a caveat, e.g.
    /// `"1x (Parity Bottleneck)"`.
    pub write_speed: String,
    /// One-line summary of the level's strategy.
    pub description: &'static str,
}

/// `compute` derives the metrics record for an array shape.
///
/// Total and deterministic: it never fails and has no side effects. The
/// caller must have validated `disk_count` against
/// [`crate::catalog::constraint`] first; out-of-contract inputs (a count
/// below the level's minimum, an odd count for RAID 1+0) yield
/// mathematically consistent but semantically meaningless figures rather
/// than an error.
#[must_use]
pub fn compute(level: RaidLevel, disk_count: u64, disk_capacity: u64) -> Metrics {
    let total_capacity = disk_count.saturating_mul(disk_capacity);

    let (usable_capacity, fault_tolerance, read_speed, write_speed, description) = match level {
        RaidLevel::Raid0 => (
            total_capacity,
            0,
            format!("{disk_count}x"),
            format!("{disk_count}x"),
            "Striping without parity. High performance, no redundancy.",
        ),
        RaidLevel::Raid1 => (
            disk_capacity,
            disk_count.saturating_sub(1),
            format!("{disk_count}x"),
            "1x".to_string(),
            "Mirroring. High redundancy, high cost.",
        ),
        RaidLevel::Raid4 => {
            let data_disks = disk_count.saturating_sub(1);
            (
                data_disks.saturating_mul(disk_capacity),
                1,
                format!("{data_disks}x"),
                "1x (Parity Bottleneck)".to_string(),
                "Block-level striping with a dedicated parity disk.",
            )
        }
        RaidLevel::Raid5 => {
            let data_disks = disk_count.saturating_sub(1);
            (
                data_disks.saturating_mul(disk_capacity),
                1,
                format!("{data_disks}x"),
                format!("{data_disks}x"),
                "Block-level striping with distributed parity.",
            )
        }
        RaidLevel::Raid6 => {
            let data_disks = disk_count.saturating_sub(2);
            (
                data_disks.saturating_mul(disk_capacity),
                2,
                format!("{data_disks}x"),
                format!("{data_disks}x"),
                "Block-level striping with double distributed parity.",
            )
        }
        RaidLevel::Raid10 => (
            total_capacity / 2,
            disk_count / 2,
            format!("{disk_count}x"),
            format!("{}x", disk_count / 2),
            "A stripe of mirrors. High performance and redundancy.",
        ),
    };

    Metrics {
        total_capacity,
        usable_capacity,
        redundancy_capacity: total_capacity.saturating_sub(usable_capacity),
        efficiency: usable_capacity as f64 / total_capacity as f64,
        fault_tolerance,
        read_speed,
        write_speed,
        description,
    }
}
