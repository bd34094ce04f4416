//! End-to-end properties of generated layouts.

use std::collections::HashSet;

use perfgen::lattice::{row_pitch, staggered_centers, straight_centers};
use perfgen::{
    build_boundary, generate, BoundarySpec, ConfigError, DxfDocument, HoleSpec, InnerRegion, Layer, Params,
    Pattern, Point, Primitive,
};

/// Containment slack plus rounding.
const TOL: f64 = 1e-8;

/// Clipped fragments come back from the boolean engine, which snaps to a
/// fixed-point grid internally.
const CLIP_TOL: f64 = 1e-6;

fn on_layer(prims: &[Primitive], layer: Layer) -> Vec<&Primitive> {
    prims.iter().filter(|p| p.layer() == layer).collect()
}

fn hole_specs() -> Vec<HoleSpec> {
    let mut specs = Vec::new();
    for pattern in Pattern::all() {
        specs.push(HoleSpec::circle(1.0, 2.0, *pattern));
        specs.push(HoleSpec::square(1.0, 2.0, *pattern));
        specs.push(HoleSpec::circle(0.25, 0.375, *pattern));
        specs.push(HoleSpec::square(0.5, 0.6, *pattern));
    }
    specs
}

#[test]
fn rectangle_holes_stay_inside_inner_region() {
    for (length, width, offset) in [(24.0, 18.0, 0.125), (10.0, 3.0, 0.5), (7.3, 7.3, 0.0)] {
        let boundary = BoundarySpec::rectangle(length, width, offset);
        let built = build_boundary(&boundary).unwrap();
        let (hx, hy) = (length / 2.0 - offset, width / 2.0 - offset);
        assert_eq!(built.inner, InnerRegion::Rect { half_length: hx, half_width: hy });

        for hole in hole_specs() {
            for include_clipped in [false, true] {
                let prims = generate(&boundary, &hole, include_clipped).unwrap();
                for p in &prims[1..] {
                    let tol = if p.layer() == Layer::Holes { TOL } else { CLIP_TOL };
                    let (min_x, min_y, max_x, max_y) = p.bounding_box().unwrap();
                    assert!(
                        min_x >= -hx - tol && max_x <= hx + tol && min_y >= -hy - tol && max_y <= hy + tol,
                        "{:?} leaves the {}x{} region: {:?}",
                        hole,
                        length,
                        width,
                        p
                    );
                }
            }
        }
    }
}

#[test]
fn circle_holes_stay_inside_inner_disk() {
    for (diameter, offset) in [(25.875, 0.125), (6.0, 0.5), (3.0, 0.0)] {
        let boundary = BoundarySpec::circle(diameter, offset);
        let inner_radius = diameter / 2.0 - offset;

        for hole in hole_specs() {
            let prims = generate(&boundary, &hole, true).unwrap();
            for p in &prims[1..] {
                match p {
                    Primitive::Circle { center, radius, layer } => {
                        assert_eq!(*layer, Layer::Holes);
                        assert!(center.norm() + radius <= inner_radius + TOL);
                    }
                    Primitive::ClosedPolyline { vertices, layer } => {
                        let tol = if *layer == Layer::Holes { TOL } else { CLIP_TOL };
                        for v in vertices {
                            assert!(v.norm() <= inner_radius + tol, "vertex {:?} outside r={}", v, inner_radius);
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn straight_lattice_is_point_symmetric() {
    // ceil(13 / 1) + 1 = 14 points per axis
    let centers = straight_centers(13.0, 13.0, 1.0);
    let key = |p: &Point| ((p.x * 1e6).round() as i64, (p.y * 1e6).round() as i64);
    let set: HashSet<(i64, i64)> = centers.iter().map(key).collect();
    for p in &centers {
        assert!(set.contains(&key(&Point::new(-p.x, -p.y))), "missing mirror of {:?}", p);
    }
}

#[test]
fn staggered_rows_alternate_half_spacing() {
    let spacing = 1.5;
    let centers = staggered_centers(12.0, 12.0, spacing);
    let mut rows: Vec<(f64, f64)> = Vec::new(); // (y, min x)
    for p in &centers {
        match rows.iter_mut().find(|row| (row.0 - p.y).abs() < 1e-9) {
            Some(row) => row.1 = row.1.min(p.x),
            None => rows.push((p.y, p.x)),
        }
    }
    assert!(rows.len() > 2);
    for pair in rows.windows(2) {
        assert!((pair[1].0 - pair[0].0 - row_pitch(spacing)).abs() < 1e-9);
        assert!(((pair[1].1 - pair[0].1).abs() - spacing / 2.0).abs() < 1e-9);
    }
}

#[test]
fn generation_is_repeatable() {
    let boundary = BoundarySpec::circle(25.875, 0.125);
    let hole = HoleSpec::circle(0.75, 1.0, Pattern::Staggered);
    let first = generate(&boundary, &hole, true).unwrap();
    let second = generate(&boundary, &hole, true).unwrap();
    assert_eq!(first, second);
}

#[test]
fn oversized_offsets_always_rejected() {
    let hole = HoleSpec::circle(1.0, 2.0, Pattern::Straight);
    for (diameter, offset) in [(10.0, 5.0), (10.0, 6.0), (0.5, 0.25)] {
        let err = generate(&BoundarySpec::circle(diameter, offset), &hole, true).unwrap_err();
        assert_eq!(err, ConfigError::OffsetTooLarge { shape: "circle" });
    }
    for (length, width, offset) in [(24.0, 18.0, 9.0), (4.0, 10.0, 2.0), (3.0, 3.0, 10.0)] {
        let err = generate(&BoundarySpec::rectangle(length, width, offset), &hole, true).unwrap_err();
        assert_eq!(err, ConfigError::OffsetTooLarge { shape: "rectangle" });
    }
}

#[test]
fn clipping_off_never_uses_clipped_layer() {
    for hole in hole_specs() {
        for boundary in [BoundarySpec::circle(9.0, 0.25), BoundarySpec::rectangle(9.0, 5.0, 0.25)] {
            let prims = generate(&boundary, &hole, false).unwrap();
            assert!(on_layer(&prims, Layer::HolesClipped).is_empty());
        }
    }
}

#[test]
fn round_plate_square_holes_straight() {
    // Diameter 25.875, offset 0.125: inner radius 12.8125.
    let boundary = BoundarySpec::circle(25.875, 0.125);
    let hole = HoleSpec::square(1.0, 2.0, Pattern::Straight);
    let prims = generate(&boundary, &hole, false).unwrap();

    let limit = 12.8125 - 2.0_f64.sqrt() / 2.0;
    let expected: Vec<Point> = straight_centers(25.625, 25.625, 2.0)
        .into_iter()
        .filter(|c| c.norm() <= limit)
        .collect();
    assert_eq!(expected.len(), 120);

    let holes = on_layer(&prims, Layer::Holes);
    assert_eq!(holes.len(), expected.len());
    assert!(on_layer(&prims, Layer::HolesClipped).is_empty());

    for (p, center) in holes.iter().zip(&expected) {
        match p {
            Primitive::ClosedPolyline { vertices, .. } => {
                assert_eq!(vertices.len(), 4);
                let cx = vertices.iter().map(|v| v.x).sum::<f64>() / 4.0;
                let cy = vertices.iter().map(|v| v.y).sum::<f64>() / 4.0;
                assert!((cx - center.x).abs() < TOL && (cy - center.y).abs() < TOL);
            }
            other => panic!("square hole drawn as {:?}", other),
        }
    }
}

#[test]
fn rectangular_plate_round_holes_staggered_with_clipping() {
    // 24 x 18, offset 0.125: inner half extents 11.875 x 8.875.
    let boundary = BoundarySpec::rectangle(24.0, 18.0, 0.125);
    let hole = HoleSpec::circle(1.0, 2.0, Pattern::Staggered);
    let prims = generate(&boundary, &hole, true).unwrap();

    assert!((row_pitch(2.0) - 1.7320508075688772).abs() < 1e-12);

    let holes = on_layer(&prims, Layer::Holes);
    let clipped = on_layer(&prims, Layer::HolesClipped);
    assert_eq!(holes.len(), 115);
    // Odd rows are shifted by 1.0, so the holes at x = ±12 reach 0.625 past
    // the x = ±11.875 edge on the five odd rows that fit vertically. Only a
    // sliver from 11.5 to 11.875 survives.
    assert_eq!(clipped.len(), 10);

    // Circular segment cut by a chord 0.125 from the center.
    let (r, d) = (0.5_f64, 0.125_f64);
    let segment = r * r * (d / r).acos() - d * (r * r - d * d).sqrt();

    for p in clipped {
        let (min_x, _, max_x, _) = p.bounding_box().unwrap();
        let at_right = max_x > 0.0;
        if at_right {
            assert!((max_x - 11.875).abs() < 1e-6, "fragment should end on the edge: {}", max_x);
            assert!((min_x - 11.5).abs() < 1e-6);
        } else {
            assert!((min_x + 11.875).abs() < 1e-6);
            assert!((max_x + 11.5).abs() < 1e-6);
        }
        assert!((p.area() - segment).abs() < 1e-3, "fragment area {} vs {}", p.area(), segment);
    }
}

#[test]
fn params_from_yaml_job() {
    let job = r#"
shape: circle
outer_diameter: 12
edge_offset: 0.25
hole_shape: square
hole_size: 0.5
spacing: 1
pattern: staggered
include_clipped: true
"#;
    let params: Params = serde_yaml::from_str(job).unwrap();
    let (boundary, hole) = params.validate().unwrap();
    assert_eq!(boundary, BoundarySpec::circle(12.0, 0.25));
    assert_eq!(hole, HoleSpec::square(0.5, 1.0, Pattern::Staggered));

    let prims = generate(&boundary, &hole, params.include_clipped).unwrap();
    assert!(!on_layer(&prims, Layer::HolesClipped).is_empty());
}

#[test]
fn yaml_job_rejects_unknown_keys() {
    let result: Result<Params, _> = serde_yaml::from_str("shape: circle\nhole_diameter: 1\n");
    assert!(result.is_err());
}

#[test]
fn dxf_holds_every_primitive() {
    let boundary = BoundarySpec::rectangle(24.0, 18.0, 0.125);
    let hole = HoleSpec::circle(1.0, 2.0, Pattern::Staggered);
    let prims = generate(&boundary, &hole, true).unwrap();

    let doc = DxfDocument::from_primitives(&prims);
    assert_eq!(doc.entity_count(), prims.len());

    let dxf = doc.to_dxf_string();
    let circles = dxf.lines().filter(|l| *l == "CIRCLE").count();
    let polylines = dxf.lines().filter(|l| *l == "POLYLINE").count();
    assert_eq!(circles, 115);
    assert_eq!(polylines, 1 + 10);
}
