use super::*;

#[test]
fn truncates_to_largest_power_of_four() {
    let seq: Vec<u32> = (0..70).collect();
    let prepped = prep_for_hilbert(&seq).unwrap();
    assert_eq!(prepped.len(), 64);
    assert_eq!(prepped, &seq[..64]);
}

#[test]
fn power_of_four_lengths_are_kept() {
    for len in [1usize, 4, 16, 64, 256, 1024] {
        let seq = vec![0u8; len];
        assert_eq!(prep_for_hilbert(&seq).unwrap().len(), len);
    }
}

#[test]
fn lengths_between_powers_round_down() {
    let cases = [(2usize, 1usize), (3, 1), (5, 4), (15, 4), (17, 16), (63, 16), (255, 64)];
    for (len, expected) in cases {
        let seq = vec![1.0f32; len];
        assert_eq!(prep_for_hilbert(&seq).unwrap().len(), expected, "len={len}");
    }
}

#[test]
fn empty_sequence_is_invalid() {
    let seq: [f64; 0] = [];
    assert!(matches!(
        prep_for_hilbert(&seq),
        Err(HilbertError::InvalidArgument(_))
    ));
}

#[test]
fn largest_power_handles_extremes() {
    assert_eq!(largest_power_of_four_at_most(1), 1);
    assert_eq!(largest_power_of_four_at_most(usize::MAX), 1usize << (usize::BITS - 2));
}
