//! RAID 0 placement: striping without redundancy.

use super::block::Block;
use super::{LayoutBuilder, STRIPE_COUNT};


/// Every disk receives one fresh data block per stripe; ids run sequentially
/// across disks within a stripe, then continue on the next stripe.
pub(super) fn fill(grid: &mut LayoutBuilder) {
    for stripe in 0..STRIPE_COUNT {
        for disk in 0..grid.disk_count() {
            let id = grid.take_data_id();
            grid.place(disk, stripe, Block::data(id));
        }
    }
}
