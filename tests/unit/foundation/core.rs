use super::*;

#[test]
fn grid_order_accepts_powers_of_two_only() {
    for n in [1u32, 2, 4, 8, 1024, 1 << 31] {
        assert_eq!(GridOrder::new(n).unwrap().get(), n);
    }
    for n in [0u32, 3, 6, 12, 1000] {
        assert!(matches!(
            GridOrder::new(n),
            Err(HilbertError::InvalidArgument(_))
        ));
    }
}

#[test]
fn fitting_order_is_smallest_square_that_holds_len() {
    let cases = [(0usize, 1u32), (1, 1), (2, 2), (4, 2), (5, 4), (16, 4), (17, 8), (70, 16)];
    for (len, n) in cases {
        assert_eq!(GridOrder::fitting(len).unwrap().get(), n, "len={len}");
    }
}

#[test]
fn order_reports_cells_and_levels() {
    let order = GridOrder::new(16).unwrap();
    assert_eq!(order.cells(), 256);
    assert_eq!(order.levels(), 4);
    assert_eq!(order.side(), 16);
}

#[test]
fn order_deserialization_validates() {
    let ok: GridOrder = serde_json::from_str("8").unwrap();
    assert_eq!(ok.get(), 8);
    assert!(serde_json::from_str::<GridOrder>("6").is_err());
}

#[test]
fn chebyshev_distances() {
    assert_eq!(Point::new(0, 0).chebyshev(Point::new(1, 1)), 1);
    assert_eq!(Point::new(3, 0).chebyshev(Point::new(0, 1)), 3);
    assert_eq!(GridPos::new(2, 5).chebyshev(GridPos::new(2, 4)), 1);
}

#[test]
fn point_maps_x_to_row() {
    assert_eq!(GridPos::from(Point::new(3, 1)), GridPos::new(3, 1));
}
