//! RAID 1+0 placement: a stripe of mirrored pairs.

use super::block::Block;
use super::{LayoutBuilder, STRIPE_COUNT};


/// Disks are consumed in adjacent pairs; each pair shares one fresh datum
/// per stripe and both members receive a mirror copy of it. An even disk
/// count is a caller-enforced precondition: with an odd count the trailing
/// disk has no partner and its stripes stay unfilled.
pub(super) fn fill(grid: &mut LayoutBuilder) {
    let disks = grid.disk_count();
    for stripe in 0..STRIPE_COUNT {
        for pair in (0..disks).step_by(2) {
            if pair + 1 >= disks {
                break;
            }
            let id = grid.take_data_id();
            grid.place(pair, stripe, Block::mirror(id.clone()));
            grid.place(pair + 1, stripe, Block::mirror(id));
        }
    }
}
