//! Static per-level disk-count constraints.
//!
//! The catalog is read-only data consumed by callers to validate or adjust a
//! requested disk count *before* invoking [`crate::metrics`] or
//! [`crate::layout`]; the computations themselves never re-check it.

use crate::level::RaidLevel;


/// Smallest disk count any level accepts.
pub const MIN_DISKS: usize = 2;
/// Largest disk count the surrounding application offers.
pub const MAX_DISKS: usize = 16;

/// Constraint describes the valid disk counts for one RAID level.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Constraint {
    /// Minimum number of disks the level needs.
    pub min_disks: usize,
    /// When present, the disk count must be a multiple of this step.
    pub step: Option<usize>,
}

impl Constraint {
    #[must_use]
    /// `allows` reports whether `disk_count` satisfies this constraint.
    pub fn allows(self, disk_count: usize) -> bool {
        if disk_count < self.min_disks {
            return false;
        }
        self.step.map_or(true, |step| disk_count % step == 0)
    }

    #[must_use]
    /// `clamp` adjusts a requested disk count to the nearest valid value:
    /// counts below the minimum are raised to it, off-step counts are rounded
    /// up to the next multiple, and the result is capped at [`MAX_DISKS`].
    pub fn clamp(self, requested: usize) -> usize {
        let mut count = requested.max(self.min_disks);
        if let Some(step) = self.step {
            count = count.div_ceil(step) * step;
        }
        count.min(MAX_DISKS)
    }
}

#[must_use]
/// `constraint` looks up the disk-count constraint for a level.
pub const fn constraint(level: RaidLevel) -> Constraint {
    match level {
        RaidLevel::Raid0 => Constraint {
            min_disks: 2,
            step: None,
        },
        RaidLevel::Raid1 => Constraint {
            min_disks: 2,
            step: Some(2),
        },
        RaidLevel::Raid4 | RaidLevel::Raid5 => Constraint {
            min_disks: 3,
            step: None,
        },
        RaidLevel::Raid6 => Constraint {
            min_disks: 4,
            step: None,
        },
        RaidLevel::Raid10 => Constraint {
            min_disks: 4,
            step: Some(2),
        },
    }
}

#[must_use]
/// `clamp_disk_count` is shorthand for `constraint(level).clamp(requested)`.
pub fn clamp_disk_count(level: RaidLevel, requested: usize) -> usize {
    constraint(level).clamp(requested)
}
