use super::*;

#[test]
fn reference_example_maps_to_expected_rows() {
    let grid = map_to_grid(&[1, 2, 3, 4], None).unwrap();
    assert_eq!(grid.order().get(), 2);
    assert_eq!(
        grid.to_rows(),
        vec![vec![Some(1), Some(2)], vec![Some(4), Some(3)]]
    );
}

#[test]
fn inferred_order_is_smallest_fitting_power_of_two() {
    let values: Vec<u32> = (0..70).collect();
    let grid = map_to_grid(&values, None).unwrap();
    assert_eq!(grid.order().get(), 16);
    assert_eq!(grid.filled(), 70);
    assert!(!grid.is_full());
}

#[test]
fn excess_values_are_truncated_without_error() {
    let values: Vec<i32> = (1..=10).collect();
    let grid = map_to_grid(&values, Some(2)).unwrap();
    assert_eq!(grid.filled(), 4);
    assert!(grid.is_full());
    for d in 0..4u64 {
        assert_eq!(grid.at_distance(d).unwrap(), Some(&values[d as usize]));
    }
    let mut placed: Vec<i32> = grid.iter_filled().map(|(_, v)| *v).collect();
    placed.sort_unstable();
    assert_eq!(placed, vec![1, 2, 3, 4]);
}

#[test]
fn short_input_leaves_empty_sentinels() {
    let grid = map_to_grid(&[0.0f64, 0.0], Some(2)).unwrap();
    assert_eq!(grid.filled(), 2);
    // Zero values are stored, never confused with the empty sentinel.
    assert_eq!(grid.get(0, 0), Some(&0.0));
    assert_eq!(grid.at_distance(1).unwrap(), Some(&0.0));
    assert_eq!(grid.at_distance(2).unwrap(), None);
    assert_eq!(grid.at_distance(3).unwrap(), None);
}

#[test]
fn non_power_of_two_order_is_invalid() {
    let err = map_to_grid(&[1, 2, 3], Some(3)).unwrap_err();
    assert!(matches!(err, HilbertError::InvalidArgument(_)));
    assert!(matches!(
        map_to_grid(&[1], Some(0)),
        Err(HilbertError::InvalidArgument(_))
    ));
}

#[test]
fn empty_input_yields_single_empty_cell() {
    let grid = map_to_grid::<u8>(&[], None).unwrap();
    assert_eq!(grid.side(), 1);
    assert_eq!(grid.cells(), &[None]);
}

#[test]
fn values_follow_curve_distance() {
    let values: Vec<u64> = (0..64).collect();
    let grid = map_to_grid(&values, None).unwrap();
    for d in 0..64u64 {
        let pos = GridPos::from(grid.order().point_at(d).unwrap());
        assert_eq!(grid.at(pos), Some(&d));
    }
}

#[test]
fn out_of_bounds_lookup_is_none() {
    let grid = map_to_grid(&[1, 2, 3, 4], None).unwrap();
    assert_eq!(grid.get(2, 0), None);
    assert!(matches!(
        grid.at_distance(4),
        Err(HilbertError::OutOfRange(_))
    ));
}

#[test]
fn map_preserves_empty_cells() {
    let grid = map_to_grid(&[1, 2, 3], Some(2)).unwrap();
    let doubled = grid.map(|v| v * 2);
    assert_eq!(doubled.filled(), 3);
    assert_eq!(doubled.at_distance(2).unwrap(), Some(&6));
    assert_eq!(doubled.at_distance(3).unwrap(), None);
}

#[test]
fn serializes_as_nested_rows_with_null_for_empty() {
    let grid = map_to_grid(&[1, 2, 3], Some(2)).unwrap();
    let json = serde_json::to_string(&grid).unwrap();
    assert_eq!(json, "[[1,2],[null,3]]");

    let back: Grid<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, grid);
}

#[test]
fn from_rows_rejects_bad_shapes() {
    let ragged = vec![vec![Some(1), Some(2)], vec![Some(3)]];
    assert!(matches!(
        Grid::from_rows(ragged),
        Err(HilbertError::InvalidArgument(_))
    ));
    let three = vec![vec![Some(1); 3]; 3];
    assert!(matches!(
        Grid::from_rows(three),
        Err(HilbertError::InvalidArgument(_))
    ));
    assert!(Grid::<u8>::from_rows(Vec::new()).is_err());
    assert!(serde_json::from_str::<Grid<u8>>("[[1,2,3],[4,5,6],[7,8,9]]").is_err());
}

#[test]
fn unallocatable_order_is_an_error_not_a_panic() {
    let err = map_to_grid(&[1u8], Some(1 << 31)).unwrap_err();
    assert!(matches!(err, HilbertError::InvalidArgument(_)), "{err}");
}

#[test]
fn curve_x_selects_the_row() {
    let values: Vec<u32> = (0..16).collect();
    let grid = map_to_grid(&values, None).unwrap();
    for d in 0..16u32 {
        let p = grid.order().point_at(u64::from(d)).unwrap();
        assert_eq!(grid.get(p.x as usize, p.y as usize), Some(&d));
    }
}
