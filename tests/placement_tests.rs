mod support;

use groundfov::{
    errors::GeometryError,
    float_types::{Real, tolerance},
    ground::GroundCase,
    placement::{Footprint, MAX_FOOTPRINTS, PlacementGrid, place_footprints},
};
use nalgebra::Point2;

const SIZES: [Real; 7] = [0.3, 0.5, 0.6, 0.8, 1.0, 1.5, 2.0];

fn squares(view: &groundfov::ground::GroundView) -> Vec<PlacementGrid> {
    SIZES
        .iter()
        .map(|&s| place_footprints(&view.trapezoid, &Footprint::square(s).unwrap()).unwrap())
        .collect()
}

fn assert_non_increasing(grids: &[PlacementGrid]) {
    for pair in grids.windows(2) {
        assert!(
            pair[1].len() <= pair[0].len(),
            "{} footprints of {} but {} of {}",
            pair[0].len(),
            pair[0].footprint.width,
            pair[1].len(),
            pair[1].footprint.width
        );
    }
}

#[test]
fn counts_shrink_as_footprints_grow() {
    for (altitude, pitch, max) in [(1.72, 0.0, 10.0), (4.0, 75.0, 10.0), (3.0, 45.0, 20.0), (1.72, 20.0, 10.0)] {
        let view = support::view(altitude, pitch, max);
        let grids = squares(&view);
        assert!(!grids[0].is_empty());
        assert_non_increasing(&grids);
    }
}

#[test]
fn footprints_stay_inside_the_trapezoid() {
    for view in [support::steep_view(), support::level_view(), support::view(3.0, 45.0, 20.0)] {
        for grid in squares(&view) {
            for i in 0..grid.len() {
                for corner in grid.footprint_corners(i).unwrap() {
                    assert!(
                        view.trapezoid.contains_point(&Point2::new(corner.x, corner.y), 1e-6),
                        "footprint {i} corner {corner} outside"
                    );
                }
            }
        }
    }
}

#[test]
fn footprints_do_not_overlap() {
    let view = support::steep_view();
    let footprint = Footprint::new(0.6, 0.4).unwrap();
    let grid = place_footprints(&view.trapezoid, &footprint).unwrap();
    assert!(grid.len() > 1);
    let slack = 1e-9;
    for (i, p) in grid.positions.iter().enumerate() {
        for q in &grid.positions[i + 1..] {
            let apart_x = (p.x - q.x).abs() >= footprint.width - slack;
            let apart_y = (p.y - q.y).abs() >= footprint.depth - slack;
            assert!(apart_x || apart_y, "{p} and {q} overlap");
        }
    }
}

#[test]
fn positions_are_on_the_ground() {
    let grid = place_footprints(&support::level_view().trapezoid, &Footprint::square(0.5).unwrap()).unwrap();
    assert!(grid.positions.iter().all(|p| p.z == 0.0));
}

#[test]
fn rows_cover_the_depth_of_the_trapezoid() {
    let view = support::level_view();
    let t = view.trapezoid;
    let depth = t.a.y.min(t.b.y) - t.c.y.max(t.d.y);
    let rows: Vec<usize> = squares(&view).iter().map(|grid| grid.rows).collect();
    for (grid_rows, size) in rows.iter().zip(SIZES) {
        let expected = ((depth + tolerance()) / size).floor() as usize;
        assert_eq!(*grid_rows, expected, "footprint {size}");
    }
    assert_eq!(rows, [25, 15, 12, 9, 7, 5, 3]);
}

#[test]
fn exactly_fitting_rows_are_kept() {
    let view = support::level_view();
    let t = view.trapezoid;
    let depth = t.a.y.min(t.b.y) - t.c.y.max(t.d.y);
    let grid = place_footprints(&t, &Footprint::new(0.5, depth / 4.0).unwrap()).unwrap();
    assert_eq!(grid.rows, 4);
}

#[test]
fn view_far_past_the_threshold_is_too_large_to_tile() {
    let half = support::FOV_V.to_degrees() / 2.0;
    let view = support::view(4.0, half + 0.01, 10.0);
    assert_eq!(view.case, GroundCase::Finite);
    assert!(view.area / 0.25 > MAX_FOOTPRINTS as Real);
    let result = place_footprints(&view.trapezoid, &Footprint::square(0.5).unwrap());
    assert!(matches!(result, Err(GeometryError::InvalidParameter(_))));
}

#[test]
fn placement_is_deterministic() {
    let view = support::steep_view();
    let footprint = Footprint::square(0.5).unwrap();
    let first = place_footprints(&view.trapezoid, &footprint).unwrap();
    let second = place_footprints(&view.trapezoid, &footprint).unwrap();
    assert_eq!(first, second);
}

#[test]
fn oversized_footprint_fits_nowhere() {
    let view = support::steep_view();
    let grid = place_footprints(&view.trapezoid, &Footprint::square(50.0).unwrap()).unwrap();
    assert!(grid.is_empty());
}

#[test]
fn steep_view_half_meter_rows() {
    let grid = place_footprints(&support::steep_view().trapezoid, &Footprint::square(0.5).unwrap()).unwrap();
    assert_eq!(grid.rows, 12);
    assert!(grid.len() > 12 * 12);
}
