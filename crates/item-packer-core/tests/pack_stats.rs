use item_packer_core::prelude::*;

#[test]
fn test_pack_stats_basic() {
    let cfg = PackerConfig::default();
    let packing = pack_all([9, 9, 9, 1], &cfg).expect("packing should succeed");
    let stats = packing.stats();

    // [9,1] [9] [9]
    assert_eq!(stats.num_bins, 3);
    assert_eq!(stats.num_items, 4);
    assert_eq!(stats.total_capacity, 30);
    assert_eq!(stats.used_capacity, 28);
    assert!((stats.occupancy - 28.0 / 30.0).abs() < 1e-9);
    assert_eq!(stats.max_bin_total, 10);
    assert_eq!(stats.min_bin_total, 9);
}

#[test]
fn test_pack_stats_perfect_fill() {
    let packing = pack_all([5, 5, 5, 5], &PackerConfig::default()).unwrap();
    let stats = packing.stats();
    assert_eq!(stats.num_bins, 2);
    assert_eq!(stats.occupancy, 1.0);
    assert_eq!(stats.min_bin_total, stats.max_bin_total);
}

#[test]
fn test_pack_stats_empty() {
    let packing = pack_all(Vec::new(), &PackerConfig::default()).unwrap();
    let stats = packing.stats();
    assert_eq!(stats.num_bins, 0);
    assert_eq!(stats.num_items, 0);
    assert_eq!(stats.total_capacity, 0);
    assert_eq!(stats.occupancy, 0.0);
    assert_eq!(stats.min_bin_total, 0);
    assert_eq!(stats.max_bin_total, 0);
}

#[test]
fn test_pack_stats_used_matches_input_total() {
    let items = vec![3, 8, 1, 1, 7, 2, 9, 4];
    let total = items_total(&items);
    let packing = pack_all(items, &PackerConfig::default()).unwrap();
    let stats = packing.stats();
    assert_eq!(stats.used_capacity, total);
    assert!(stats.occupancy > 0.0 && stats.occupancy <= 1.0);
}
