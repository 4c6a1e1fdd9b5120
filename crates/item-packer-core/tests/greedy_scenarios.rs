use item_packer_core::prelude::*;

fn bins_of(items: &[u32], capacity: u32) -> Vec<Vec<u32>> {
    Packer::new(items.iter().copied(), capacity)
        .expect("packer")
        .map(Bin::into_items)
        .collect()
}

fn sorted(mut v: Vec<u32>) -> Vec<u32> {
    v.sort_unstable();
    v
}

fn verify(items: &[u32], capacity: u32, bins: &[Vec<u32>]) {
    // No bin exceeds capacity
    for b in bins {
        assert!(
            items_total(b) <= capacity as u64,
            "bin {:?} over capacity {}",
            b,
            capacity
        );
    }
    // Every input item comes back exactly once
    let flat: Vec<u32> = bins.iter().flatten().copied().collect();
    assert_eq!(sorted(flat), sorted(items.to_vec()));
}

#[test]
fn mixed_digits_capacity_10() {
    let items = [
        1, 2, 5, 8, 9, 5, 4, 6, 3, 8, 2, 1, 4, 8, 6, 8, 6, 4, 2, 7, 1, 1, 3, 4,
    ];
    let bins = bins_of(&items, 10);
    verify(&items, 10, &bins);
    assert_eq!(
        bins,
        vec![
            vec![9, 1],
            vec![8, 2],
            vec![8, 2],
            vec![8, 2],
            vec![8, 1, 1],
            vec![7, 3],
            vec![6, 4],
            vec![6, 4],
            vec![6, 4],
            vec![5, 5],
            vec![4, 3, 1],
        ]
    );
}

#[test]
fn mixed_sizes_capacity_20() {
    let items = [
        1, 2, 5, 8, 9, 5, 4, 6, 3, 12, 2, 1, 4, 8, 6, 8, 6, 16, 2, 7, 13, 3, 4,
    ];
    let bins = bins_of(&items, 20);
    verify(&items, 20, &bins);
    assert_eq!(bins.len(), 7);
    assert_eq!(bins[0], vec![16, 4]);
    assert_eq!(bins[6], vec![4, 3, 2, 2, 2, 1, 1]);
}

#[test]
fn empty_input_produces_no_bins() {
    let packer = Packer::new(Vec::<u32>::new(), 10).expect("packer");
    assert_eq!(packer.state(), PackerState::Exhausted);
    assert_eq!(packer.count(), 0);
}

#[test]
fn nines_get_a_bin_each() {
    assert_eq!(bins_of(&[9, 9, 9], 10), vec![vec![9], vec![9], vec![9]]);
}

#[test]
fn fives_pair_up() {
    assert_eq!(bins_of(&[5, 5, 5, 5], 10), vec![vec![5, 5], vec![5, 5]]);
}

#[test]
fn oversized_item_rejected() {
    let err = Packer::new([11], 10).unwrap_err();
    assert_eq!(
        err,
        PackerError::OversizedItem {
            size: 11,
            capacity: 10
        }
    );
}

#[test]
fn oversized_item_rejected_among_fitting_ones() {
    let err = Packer::new([1, 2, 12, 3, 15], 10).unwrap_err();
    // The largest offender is reported
    assert_eq!(
        err,
        PackerError::OversizedItem {
            size: 15,
            capacity: 10
        }
    );
}

#[test]
fn item_equal_to_capacity_fills_a_bin() {
    assert_eq!(bins_of(&[10, 10, 1], 10), vec![vec![10], vec![10], vec![1]]);
}

#[test]
fn larger_sizes_win_ties_within_a_bin() {
    assert_eq!(bins_of(&[6, 5, 5, 4], 10), vec![vec![6, 4], vec![5, 5]]);
    assert_eq!(
        bins_of(&[4, 4, 4, 3, 3, 3, 2, 2, 2], 10),
        vec![vec![4, 4, 2], vec![4, 3, 3], vec![3, 2, 2]]
    );
}

#[test]
fn repeated_size_uses_every_available_instance() {
    assert_eq!(
        bins_of(&[3, 3, 3, 3, 3, 3, 3], 10),
        vec![vec![3, 3, 3], vec![3, 3, 3], vec![3]]
    );
    let ones = vec![1; 25];
    let bins = bins_of(&ones, 10);
    assert_eq!(bins.iter().map(Vec::len).collect::<Vec<_>>(), vec![10, 10, 5]);
}

#[test]
fn sizes_within_a_bin_never_increase() {
    let items = [2, 7, 1, 1, 3, 3, 5, 9, 4, 4, 6, 8, 2, 2, 1];
    for bin in bins_of(&items, 10) {
        assert!(bin.windows(2).all(|w| w[0] >= w[1]), "{:?}", bin);
    }
}

#[test]
fn exhausted_larger_size_is_not_picked_again() {
    assert_eq!(bins_of(&[3, 1, 1, 1, 1, 1], 10), vec![vec![3, 1, 1, 1, 1, 1]]);
    assert_eq!(
        bins_of(&[4, 4, 2, 1, 1, 1, 1], 12),
        vec![vec![4, 4, 2, 1, 1], vec![1, 1]]
    );
}

#[test]
fn single_large_bin_of_ones() {
    // Planning stays linear in the bin size; a recount per candidate would make this crawl
    let n = 200_000u32;
    let mut packer = Packer::new(std::iter::repeat_n(1, n as usize), n).expect("packer");
    let bin = packer.next_bin().expect("bin");
    assert_eq!(bin.len(), n as usize);
    assert_eq!(bin.total(), n as u64);
    assert!(packer.is_exhausted());
}
