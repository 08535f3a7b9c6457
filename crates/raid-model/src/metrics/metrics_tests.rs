use crate::catalog::{constraint, MAX_DISKS, MIN_DISKS};
use crate::level::RaidLevel;
use crate::metrics::compute;

#[test]
fn capacity_invariant_holds_for_every_valid_shape() {
    for level in RaidLevel::ALL {
        let c = constraint(level);
        for disks in MIN_DISKS..=MAX_DISKS {
            if !c.allows(disks) {
                continue;
            }
            for capacity in [1, 512, 1024, 4096] {
                let m = compute(level, disks as u64, capacity);
                assert_eq!(
                    m.usable_capacity + m.redundancy_capacity,
                    m.total_capacity,
                    "{level} with {disks} disks"
                );
                assert!(m.efficiency >= 0.0 && m.efficiency <= 1.0);
            }
        }
    }
}

#[test]
fn raid0_uses_every_byte() {
    for disks in 2..=8 {
        let m = compute(RaidLevel::Raid0, disks, 1024);
        assert_eq!(m.total_capacity, disks * 1024);
        assert_eq!(m.usable_capacity, m.total_capacity);
        assert_eq!(m.redundancy_capacity, 0);
        assert_eq!(m.efficiency, 1.0);
        assert_eq!(m.fault_tolerance, 0);
    }
}

#[test]
fn raid1_usable_stays_at_one_disk_regardless_of_width() {
    for disks in [2, 4, 6, 8] {
        let m = compute(RaidLevel::Raid1, disks, 2048);
        assert_eq!(m.usable_capacity, 2048);
        assert_eq!(m.fault_tolerance, disks - 1);
        assert_eq!(m.write_speed, "1x");
    }
}

#[test]
fn raid4_write_label_names_the_parity_bottleneck() {
    let m = compute(RaidLevel::Raid4, 4, 1024);
    assert_eq!(m.usable_capacity, 3072);
    assert_eq!(m.fault_tolerance, 1);
    assert_eq!(m.read_speed, "3x");
    assert_eq!(m.write_speed, "1x (Parity Bottleneck)");
}

#[test]
fn raid5_four_disks_of_one_terabyte() {
    let m = compute(RaidLevel::Raid5, 4, 1024);
    assert_eq!(m.total_capacity, 4096);
    assert_eq!(m.usable_capacity, 3072);
    assert_eq!(m.redundancy_capacity, 1024);
    assert_eq!(m.fault_tolerance, 1);
    assert_eq!(m.read_speed, "3x");
    assert_eq!(m.write_speed, "3x");
}

#[test]
fn raid6_six_disks_of_one_terabyte() {
    let m = compute(RaidLevel::Raid6, 6, 1024);
    assert_eq!(m.usable_capacity, 4096);
    assert_eq!(m.redundancy_capacity, 2048);
    assert_eq!(m.fault_tolerance, 2);
    assert_eq!(m.read_speed, "4x");
}

#[test]
fn raid10_four_disks_of_one_terabyte() {
    let m = compute(RaidLevel::Raid10, 4, 1024);
    assert_eq!(m.usable_capacity, 2048);
    assert_eq!(m.fault_tolerance, 2);
    assert_eq!(m.read_speed, "4x");
    assert_eq!(m.write_speed, "2x");
    assert_eq!(m.efficiency, 0.5);
}

#[test]
fn every_level_carries_a_description() {
    for level in RaidLevel::ALL {
        let m = compute(level, 4, 1024);
        assert!(!m.description.is_empty());
    }
}
