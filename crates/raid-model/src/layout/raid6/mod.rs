//! RAID 6 placement: striping with double rotating parity.

use super::block::Block;
use super::{LayoutBuilder, STRIPE_COUNT};

#[cfg(test)]
mod raid6_tests;

/// P parity rotates exactly as in RAID 5; Q parity sits on the disk
/// immediately before P, wrapping around. Ids are `P<stripe>` and
/// `Q<stripe>`; the remaining disks get fresh sequential data blocks.
pub(super) fn fill(grid: &mut LayoutBuilder) {
    let disks = grid.disk_count();
    if disks == 0 {
        return;
    }
    for stripe in 0..STRIPE_COUNT {
        let p_disk = (disks - 1) - (stripe % disks);
        let q_disk = (p_disk + disks - 1) % disks;
        for disk in 0..disks {
            if disk == p_disk {
                grid.place(disk, stripe, Block::parity(format!("P{stripe}")));
            } else if disk == q_disk {
                grid.place(disk, stripe, Block::parity(format!("Q{stripe}")));
            } else {
                let id = grid.take_data_id();
                grid.place(disk, stripe, Block::data(id));
            }
        }
    }
}
