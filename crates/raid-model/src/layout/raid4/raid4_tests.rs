use crate::layout::block::BlockKind;
use crate::layout::{generate, STRIPE_COUNT};
use crate::level::RaidLevel;

#[test]
fn parity_stays_on_the_last_disk() {
    let layout = generate(RaidLevel::Raid4, 4);

    for stripe in 0..STRIPE_COUNT {
        let parity = &layout.disks[3].stripes[stripe].blocks[0];
        assert_eq!(parity.kind, BlockKind::Parity);
        assert_eq!(parity.id, stripe.to_string());

        for disk in &layout.disks[..3] {
            assert_eq!(disk.stripes[stripe].blocks[0].kind, BlockKind::Data);
        }
    }
}

#[test]
fn data_ids_skip_the_parity_disk_but_stay_sequential() {
    let layout = generate(RaidLevel::Raid4, 4);

    let mut seen = Vec::new();
    for stripe in 0..STRIPE_COUNT {
        for disk in &layout.disks[..3] {
            seen.push(disk.stripes[stripe].blocks[0].id.clone());
        }
    }

    // 3 data disks x 5 stripes.
    let expected: Vec<String> = (0..15).map(|i| i.to_string()).collect();
    assert_eq!(seen, expected);
}
