use polyclip_core::{Point, Polygon, Winding};
use proptest::prelude::*;

fn polygon_strategy() -> impl Strategy<Value = Polygon> {
    prop::collection::vec((-1_000.0f64..1_000.0, -1_000.0f64..1_000.0), 3..12)
        .prop_map(|pts| pts.into_iter().map(Point::from).collect())
}

fn rotate(p: &Polygon, k: usize) -> Polygon {
    let mut pts = p.points().to_vec();
    let len = pts.len();
    pts.rotate_left(k % len);
    Polygon::new(pts)
}

proptest! {
    #[test]
    fn cyclic_rotation_keeps_winding_sum(poly in polygon_strategy(), k in 0usize..32) {
        let rotated = rotate(&poly, k);
        prop_assert_eq!(rotated.winding_sum(), poly.winding_sum());
        prop_assert_eq!(rotated.winding(), poly.winding());
    }

    #[test]
    fn reversal_negates_winding_sum(poly in polygon_strategy()) {
        let sum = poly.winding_sum();
        prop_assert_eq!(poly.reversed().winding_sum(), -sum);
        if sum != 0.0 {
            prop_assert_ne!(poly.reversed().winding(), poly.winding());
        }
    }

    #[test]
    fn translation_preserves_shape(poly in polygon_strategy(), dx in -500i32..500, dy in -500i32..500) {
        let mut moved = poly.clone();
        moved.translate(f64::from(dx), f64::from(dy));
        prop_assert_eq!(moved.len(), poly.len());
        for (a, b) in poly.points().iter().zip(moved.points()) {
            prop_assert_eq!(*b, a.translated(f64::from(dx), f64::from(dy)));
        }
    }
}

#[test]
fn clockwise_triangle_reverses_to_counter_clockwise() {
    let tri = Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(6.0, 0.0),
        Point::new(3.0, 4.0),
    ]);
    assert_eq!(tri.winding(), Winding::Clockwise);
    assert_eq!(tri.reversed().winding(), Winding::CounterClockwise);
}
