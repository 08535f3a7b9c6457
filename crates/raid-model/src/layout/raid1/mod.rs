//! RAID 1 placement: full mirroring.

use super::block::Block;
use super::{LayoutBuilder, STRIPE_COUNT};


/// One logical datum per stripe; every disk receives a mirror copy of it.
pub(super) fn fill(grid: &mut LayoutBuilder) {
    for stripe in 0..STRIPE_COUNT {
        let id = grid.take_data_id();
        for disk in 0..grid.disk_count() {
            grid.place(disk, stripe, Block::mirror(id.clone()));
        }
    }
}
