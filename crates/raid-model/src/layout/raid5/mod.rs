//! RAID 5 placement: striping with rotating parity.

use super::block::Block;
use super::{LayoutBuilder, STRIPE_COUNT};


/// Parity rotates one disk to the left per stripe, starting at the last
/// disk. The parity block id is the stripe index; all other disks get fresh
/// sequential data blocks.
pub(super) fn fill(grid: &mut LayoutBuilder) {
    let disks = grid.disk_count();
    if disks == 0 {
        return;
    }
    for stripe in 0..STRIPE_COUNT {
        let parity_disk = (disks - 1) - (stripe % disks);
        for disk in 0..disks {
            if disk == parity_disk {
                grid.place(disk, stripe, Block::parity(stripe.to_string()));
            } else {
                let id = grid.take_data_id();
                grid.place(disk, stripe, Block::data(id));
            }
        }
    }
}
