use coord_geom::geometry::{distance, gradient, midpoint, triangle_area};
use coord_geom::{Number, Point};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = Number> {
    -1.0e6..1.0e6f64
}

fn point() -> impl Strategy<Value = Point<Number>> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn distance_is_symmetric(p1 in point(), p2 in point()) {
        prop_assert_eq!(distance(p1, p2), distance(p2, p1));
        prop_assert!(distance(p1, p2) >= 0.0);
    }

    #[test]
    fn midpoint_is_symmetric(p1 in point(), p2 in point()) {
        prop_assert_eq!(midpoint(p1, p2), midpoint(p2, p1));
    }

    #[test]
    fn vertical_gradient_is_undefined(x in coord(), y1 in coord(), y2 in coord()) {
        prop_assert_eq!(gradient(Point::new(x, y1), Point::new(x, y2)), None);
    }

    #[test]
    fn gradient_defined_off_vertical(p1 in point(), p2 in point()) {
        prop_assume!(p1.x != p2.x);
        prop_assert!(gradient(p1, p2).is_some());
    }

    #[test]
    fn triangle_area_ignores_vertex_order(a in point(), b in point(), c in point()) {
        let area = triangle_area(a, b, c);
        prop_assert!(area >= 0.0);
        // rounding grows with the size of the products in the formula
        let scale = [a.x, a.y, b.x, b.y, c.x, c.y]
            .iter()
            .fold(1.0f64, |acc, v| acc.max(v.abs()))
            .powi(2);
        for other in [
            triangle_area(a, c, b),
            triangle_area(b, a, c),
            triangle_area(b, c, a),
            triangle_area(c, a, b),
            triangle_area(c, b, a),
        ] {
            prop_assert!((other - area).abs() <= 1e-10 * scale, "{} vs {}", other, area);
        }
    }

    #[test]
    fn collinear_points_have_zero_area(start in -1000i32..1000, step in 1i32..100) {
        let pts: Vec<Point<Number>> = (0..3)
            .map(|i| {
                let v = Number::from(start + i * step);
                Point::new(v, v)
            })
            .collect();
        prop_assert_eq!(triangle_area(pts[0], pts[1], pts[2]), 0.0);
    }
}
