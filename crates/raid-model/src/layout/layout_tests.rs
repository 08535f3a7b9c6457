use std::collections::BTreeSet;

use crate::catalog::constraint;
use crate::layout::block::BlockKind;
use crate::layout::{generate, STRIPE_COUNT};
use crate::level::RaidLevel;

#[test]
fn generation_is_deterministic() {
    for level in RaidLevel::ALL {
        let disks = constraint(level).min_disks;
        assert_eq!(generate(level, disks), generate(level, disks));
    }
}

#[test]
fn every_layout_has_the_fixed_grid_shape() {
    for level in RaidLevel::ALL {
        for disks in [4, 6, 8] {
            let layout = generate(level, disks);
            assert_eq!(layout.disk_count(), disks);
            for disk in &layout.disks {
                assert_eq!(disk.stripes.len(), STRIPE_COUNT);
                for stripe in &disk.stripes {
                    assert!(stripe.blocks.len() <= 1);
                }
            }
        }
    }
}

#[test]
fn data_ids_are_unique_and_strictly_increasing_across_the_layout() {
    for level in [
        RaidLevel::Raid0,
        RaidLevel::Raid4,
        RaidLevel::Raid5,
        RaidLevel::Raid6,
    ] {
        let layout = generate(level, 6);

        let mut previous: Option<u64> = None;
        let mut seen = BTreeSet::new();
        for stripe in 0..STRIPE_COUNT {
            for disk in &layout.disks {
                let block = &disk.stripes[stripe].blocks[0];
                if block.kind != BlockKind::Data {
                    continue;
                }
                let id: u64 = block.id.parse().expect("data ids are numeric");
                assert!(seen.insert(id), "{level}: duplicate data id {id}");
                if let Some(prev) = previous {
                    assert!(id > prev, "{level}: id {id} does not follow {prev}");
                }
                previous = Some(id);
            }
        }
    }
}

#[test]
fn parity_ids_are_unique_within_their_role() {
    let layout = generate(RaidLevel::Raid6, 6);

    let mut ids = BTreeSet::new();
    for disk in &layout.disks {
        for stripe in &disk.stripes {
            for block in &stripe.blocks {
                if block.kind == BlockKind::Parity {
                    assert!(ids.insert(block.id.clone()));
                }
            }
        }
    }
    // P0..P4 and Q0..Q4.
    assert_eq!(ids.len(), 2 * STRIPE_COUNT);
}
