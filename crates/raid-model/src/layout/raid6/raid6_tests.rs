use crate::layout::block::BlockKind;
use crate::layout::{generate, STRIPE_COUNT};
use crate::level::RaidLevel;

#[test]
fn p_rotates_like_raid5_and_q_sits_one_disk_before_it() {
    let layout = generate(RaidLevel::Raid6, 5);

    for stripe in 0..STRIPE_COUNT {
        let expected_p = 4 - (stripe % 5);
        let expected_q = (expected_p + 4) % 5;

        let p = &layout.disks[expected_p].stripes[stripe].blocks[0];
        assert_eq!(p.kind, BlockKind::Parity);
        assert_eq!(p.id, format!("P{stripe}"));

        let q = &layout.disks[expected_q].stripes[stripe].blocks[0];
        assert_eq!(q.kind, BlockKind::Parity);
        assert_eq!(q.id, format!("Q{stripe}"));
    }
}

#[test]
fn remaining_disks_hold_sequential_data() {
    let layout = generate(RaidLevel::Raid6, 6);

    let mut seen = Vec::new();
    for stripe in 0..STRIPE_COUNT {
        let mut parity = 0;
        for disk in &layout.disks {
            let block = &disk.stripes[stripe].blocks[0];
            match block.kind {
                BlockKind::Parity => parity += 1,
                BlockKind::Data => seen.push(block.id.clone()),
                _ => panic!("unexpected block kind in RAID 6 layout"),
            }
        }
        assert_eq!(parity, 2, "stripe {stripe} must hold P and Q");
    }

    // 4 data disks x 5 stripes.
    let expected: Vec<String> = (0..20).map(|i| i.to_string()).collect();
    assert_eq!(seen, expected);
}
