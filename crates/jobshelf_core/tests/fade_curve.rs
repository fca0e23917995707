use jobshelf_core::{row_opacity, FADE_STRIDE};

#[test]
fn row_is_opaque_at_rest_and_until_the_previous_stride() {
    for index in 1..9 {
        assert_eq!(row_opacity(index, 0.0), 1.0, "index {index} at rest");
        let previous = (index as f64 - 1.0) * FADE_STRIDE;
        assert_eq!(
            row_opacity(index, previous),
            1.0,
            "index {index} at previous stride"
        );
    }
}

#[test]
fn row_is_invisible_at_its_own_stride() {
    for index in 1..9 {
        let own = index as f64 * FADE_STRIDE;
        assert_eq!(row_opacity(index, own), 0.0, "index {index} at own stride");
    }
}

#[test]
fn fade_is_linear_between_strides() {
    // Row 4 fades across [300, 400].
    assert_eq!(row_opacity(4, 350.0), 0.5);
    assert_eq!(row_opacity(4, 325.0), 0.75);
    assert!((row_opacity(4, 390.0) - 0.1).abs() < 1e-12);
}

#[test]
fn offsets_outside_the_range_hold_endpoint_outputs() {
    assert_eq!(row_opacity(5, -50.0), 1.0);
    assert_eq!(row_opacity(5, -1.0), 1.0);
    assert_eq!(row_opacity(5, 10_000.0), 0.0);
}

#[test]
fn row_zero_degenerate_breakpoints_resolve_deterministically() {
    // Row 0's breakpoints are [-1, 0, -100, 0]: non-monotonic. The
    // left-to-right segment lookup lands on [-1, 0] for any offset <= 0
    // (output 1) and on the final [-100, 0] segment for any positive offset,
    // where the interpolated value is negative and clamps to 0.
    assert_eq!(row_opacity(0, -50.0), 1.0);
    assert_eq!(row_opacity(0, -1.0), 1.0);
    assert_eq!(row_opacity(0, 0.0), 1.0);
    assert_eq!(row_opacity(0, 0.5), 0.0);
    assert_eq!(row_opacity(0, 50.0), 0.0);
    assert_eq!(row_opacity(0, 100.0), 0.0);
}

#[test]
fn row_one_zero_width_segment_does_not_divide_by_zero() {
    // Row 1's second and third breakpoints coincide at 0.
    assert_eq!(row_opacity(1, 0.0), 1.0);
    assert_eq!(row_opacity(1, 50.0), 0.5);
    assert_eq!(row_opacity(1, 100.0), 0.0);
}

#[test]
fn opacity_is_always_within_unit_range() {
    let offsets = [-1e9, -1.0, 0.0, 0.5, 99.0, 100.0, 101.0, 450.0, 1e9];
    for index in 0..9 {
        for offset in offsets {
            let opacity = row_opacity(index, offset);
            assert!(
                (0.0..=1.0).contains(&opacity),
                "index {index} offset {offset} produced {opacity}"
            );
        }
    }
}
