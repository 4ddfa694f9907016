//! Partitioning behavior against real engine unions.

use slicekit_clip::{Clip, ClipperClip};
use slicekit_core::{Layer, Micrometer, MicroPoint, Path};

fn square(x0: Micrometer, y0: Micrometer, size: Micrometer) -> Path {
    Path::from(vec![
        MicroPoint::new(x0, y0),
        MicroPoint::new(x0 + size, y0),
        MicroPoint::new(x0 + size, y0 + size),
        MicroPoint::new(x0, y0 + size),
    ])
}

#[test]
fn empty_layer_partitions_to_zero_parts() {
    let clip = ClipperClip::new();
    let parts = clip.partition(&Layer::new()).expect("empty layer must partition");
    assert!(parts.is_empty());
}

#[test]
fn disjoint_contours_become_independent_parts() {
    let clip = ClipperClip::new();

    let mut layer = Layer::new();
    layer.push(square(0, 0, 10_000));
    layer.push(square(20_000, 0, 10_000));
    layer.push(square(0, 20_000, 10_000));

    let parts = clip.partition(&layer).unwrap();
    assert_eq!(parts.len(), 3);
    for part in &parts {
        assert!(part.holes().is_empty());
    }
}

#[test]
fn partition_is_input_order_independent() {
    let clip = ClipperClip::new();

    let mut forward = Layer::new();
    forward.push(square(0, 0, 10_000));
    forward.push(square(20_000, 0, 10_000));

    let mut reversed = Layer::new();
    reversed.push(square(20_000, 0, 10_000));
    reversed.push(square(0, 0, 10_000));

    let a = clip.partition(&forward).unwrap();
    let b = clip.partition(&reversed).unwrap();
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 2);
}

#[test]
fn island_inside_hole_becomes_its_own_part() {
    let clip = ClipperClip::new();

    // Solid 20 mm square, 10 mm hole, 4 mm island inside the hole.
    let mut layer = Layer::new();
    layer.push(square(0, 0, 20_000));
    layer.push(square(5_000, 5_000, 10_000));
    layer.push(square(8_000, 8_000, 4_000));

    let parts = clip.partition(&layer).unwrap();
    assert_eq!(parts.len(), 2);

    let outer = parts
        .iter()
        .max_by_key(|p| p.outline().area())
        .unwrap();
    let island = parts
        .iter()
        .min_by_key(|p| p.outline().area())
        .unwrap();

    assert_eq!(outer.holes().len(), 1);
    assert!(island.holes().is_empty());
    assert!(island.outline().area() < outer.holes().paths()[0].area());

    // Winding is normalized at every nesting depth, including the
    // island promoted from inside the hole.
    assert!(outer.outline().is_ccw());
    assert!(!outer.holes().paths()[0].is_ccw());
    assert!(island.outline().is_ccw());
}

#[test]
fn coincident_contours_cancel_under_even_odd() {
    let clip = ClipperClip::new();

    let mut layer = Layer::new();
    layer.push(square(0, 0, 10_000));
    layer.push(square(0, 0, 10_000));

    let parts = clip.partition(&layer).unwrap();
    assert!(parts.is_empty());
}

#[test]
fn near_duplicate_vertices_do_not_break_partitioning() {
    let clip = ClipperClip::new();

    // A square whose corners are smeared into runs of sub-100 µm
    // steps; preprocessing collapses each run before the union.
    let mut noisy = Path::new();
    for &(x, y) in &[(0, 0), (10_000, 0), (10_000, 10_000), (0, 10_000)] {
        noisy.push(MicroPoint::new(x, y));
        noisy.push(MicroPoint::new(x + 30, y));
        noisy.push(MicroPoint::new(x + 60, y));
    }
    let mut layer = Layer::new();
    layer.push(noisy);

    let parts = clip.partition(&layer).unwrap();
    assert_eq!(parts.len(), 1);
    assert!(parts.parts()[0].holes().is_empty());
}

#[test]
fn outline_is_ccw_and_holes_are_cw() {
    let clip = ClipperClip::new();

    let mut layer = Layer::new();
    layer.push(square(0, 0, 20_000));
    layer.push(square(5_000, 5_000, 10_000));

    let parts = clip.partition(&layer).unwrap();
    assert_eq!(parts.len(), 1);
    let part = &parts.parts()[0];
    assert!(part.outline().is_ccw());
    for hole in part.holes() {
        assert!(!hole.is_ccw());
    }
}
