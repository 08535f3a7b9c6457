//! RAID 4 placement: striping with a dedicated parity disk.

use super::block::Block;
use super::{LayoutBuilder, STRIPE_COUNT};

#[cfg(test)]
mod raid4_tests;

/// The last disk always holds the stripe's parity block (id = stripe index);
/// every other disk gets a fresh sequential data block.
pub(super) fn fill(grid: &mut LayoutBuilder) {
    let parity_disk = grid.disk_count().saturating_sub(1);
    for stripe in 0..STRIPE_COUNT {
        for disk in 0..grid.disk_count() {
            if disk == parity_disk {
                grid.place(disk, stripe, Block::parity(stripe.to_string()));
            } else {
                let id = grid.take_data_id();
                grid.place(disk, stripe, Block::data(id));
            }
        }
    }
}
