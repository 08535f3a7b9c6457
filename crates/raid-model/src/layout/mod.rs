//! Illustrative block placement across disks and stripes.
//!
//! The generated layout is didactic: block ids are symbolic tokens showing
//! where data, parity, and mirror copies land, not a production striping
//! algorithm. The RAID 5/6 parity rotation is accurate to how real arrays
//! distribute parity across members.

pub mod block;
mod raid0;
mod raid1;
mod raid4;
mod raid5;
mod raid6;
mod raid10;

#[cfg(test)]
mod layout_tests;

use serde::Serialize;

use crate::level::RaidLevel;

use self::block::Block;

/// Number of stripes every generated layout illustrates.
pub const STRIPE_COUNT: usize = 5;

/// Stripe is one cell of a disk: an ordered sequence of blocks. The sequence
/// currently always holds at most one block; it is a sequence to leave room
/// for multi-block stripes.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Stripe {
    pub blocks: Vec<Block>,
}

/// Disk owns its [`STRIPE_COUNT`] stripes.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Disk {
    pub stripes: Vec<Stripe>,
}

/// Layout is the full disk-by-stripe block grid for one array shape.
///
/// Fully owned and rebuilt on every [`generate`] call; blocks are never
/// aliased across disks, mirror copies point back to their source datum via
/// [`Block::source_id`] only.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Layout {
    pub disks: Vec<Disk>,
}

impl Layout {
    #[must_use]
    pub fn disk_count(&self) -> usize {
        self.disks.len()
    }

    #[must_use]
    pub fn stripe_count(&self) -> usize {
        self.disks.first().map_or(0, |d| d.stripes.len())
    }
}

/// Accumulates placements while tracking the array-wide datum id counter.
///
/// The counter spans the whole build and never resets per stripe, so block
/// ids model array-wide addressing.
struct LayoutBuilder {
    disks: Vec<Disk>,
    next_data_id: u64,
}

impl LayoutBuilder {
    fn new(disk_count: usize) -> Self {
        let disks = (0..disk_count)
            .map(|_| Disk {
                stripes: (0..STRIPE_COUNT)
                    .map(|_| Stripe { blocks: Vec::new() })
                    .collect(),
            })
            .collect();
        Self {
            disks,
            next_data_id: 0,
        }
    }

    fn disk_count(&self) -> usize {
        self.disks.len()
    }

    /// Hands out the next sequential datum id.
    fn take_data_id(&mut self) -> String {
        let id = self.next_data_id;
        self.next_data_id += 1;
        id.to_string()
    }

    fn place(&mut self, disk: usize, stripe: usize, block: Block) {
        self.disks[disk].stripes[stripe].blocks.push(block);
    }

    fn finish(self) -> Layout {
        Layout { disks: self.disks }
    }
}

/// `generate` produces the deterministic block placement for an array shape.
///
/// Total function: identical inputs always yield an identical layout and no
/// input fails. The caller must have validated `disk_count` against
/// [`crate::catalog::constraint`]; in particular RAID 1+0 pairs disks two by
/// two, so an odd count leaves the trailing disk's stripes unfilled.
#[must_use]
pub fn generate(level: RaidLevel, disk_count: usize) -> Layout {
    let mut grid = LayoutBuilder::new(disk_count);
    match level {
        RaidLevel::Raid0 => raid0::fill(&mut grid),
        RaidLevel::Raid1 => raid1::fill(&mut grid),
        RaidLevel::Raid4 => raid4::fill(&mut grid),
        RaidLevel::Raid5 => raid5::fill(&mut grid),
        RaidLevel::Raid6 => raid6::fill(&mut grid),
        RaidLevel::Raid10 => raid10::fill(&mut grid),
    }
    grid.finish()
}
