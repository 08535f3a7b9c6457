//! Supported RAID levels.

use std::fmt;

use serde::Serialize;


/// RaidLevel is the closed set of array configurations the model understands.
///
/// It is used as a lookup key by the [`crate::catalog`], [`crate::metrics`],
/// and [`crate::layout`] modules.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum RaidLevel {
    #[serde(rename = "RAID 0")]
    Raid0,
    #[serde(rename = "RAID 1")]
    Raid1,
    #[serde(rename = "RAID 4")]
    Raid4,
    #[serde(rename = "RAID 5")]
    Raid5,
    #[serde(rename = "RAID 6")]
    Raid6,
    #[serde(rename = "RAID 1+0")]
    Raid10,
}

impl RaidLevel {
    /// Every supported level, in catalog order.
    pub const ALL: [Self; 6] = [
        Self::Raid0,
        Self::Raid1,
        Self::Raid4,
        Self::Raid5,
        Self::Raid6,
        Self::Raid10,
    ];

    #[must_use]
    /// `label` returns the human-facing name of the level.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Raid0 => "RAID 0",
            Self::Raid1 => "RAID 1",
            Self::Raid4 => "RAID 4",
            Self::Raid5 => "RAID 5",
            Self::Raid6 => "RAID 6",
            Self::Raid10 => "RAID 1+0",
        }
    }
}

impl fmt::Display for RaidLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
