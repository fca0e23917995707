//! Scroll-driven row fade curve.
//!
//! # Responsibility
//! - Map a scroll offset and row index to a visual opacity.
//! - Keep the mapping a pure function so the UI can evaluate it per frame.
//!
//! # Invariants
//! - Output is always within `[0, 1]`.
//! - Offsets outside the breakpoint range hold the nearest endpoint output.

/// Scroll distance over which one row fades from opaque to invisible.
pub const FADE_STRIDE: f64 = 100.0;

/// Returns the `(offset, opacity)` control points for a row.
///
/// The curve keeps a row fully opaque until the offset nears
/// `(index - 1) * FADE_STRIDE`, then fades linearly to zero at
/// `index * FADE_STRIDE`.
///
/// Row 0 is degenerate: its third breakpoint (`-FADE_STRIDE`) sits left of
/// the second, so the breakpoint sequence is non-monotonic. `row_opacity`
/// resolves this deterministically with a left-to-right segment lookup; see
/// its doc for the resulting behavior.
pub fn fade_breakpoints(index: usize) -> [(f64, f64); 4] {
    let position = index as f64;
    [
        (-1.0, 1.0),
        (0.0, 1.0),
        ((position - 1.0) * FADE_STRIDE, 1.0),
        (position * FADE_STRIDE, 0.0),
    ]
}

/// Computes the opacity of row `index` at scroll offset `scroll_offset`.
///
/// Piecewise-linear interpolation through `fade_breakpoints(index)`. The
/// active segment is the one ending at the first interior breakpoint at or
/// beyond the offset, falling back to the last segment; the interpolated
/// value is then clamped to `[0, 1]`.
///
/// Behavior:
/// - `index >= 1`: 1 for `scroll_offset <= (index - 1) * FADE_STRIDE`,
///   linear fade down to 0 at `index * FADE_STRIDE`, 0 beyond.
/// - `index == 0` (degenerate breakpoints): 1 for `scroll_offset <= 0`,
///   0 for any positive offset.
/// - Non-finite offsets yield the nearest defined endpoint (`NaN` maps
///   to 0 via clamping of the propagated value).
pub fn row_opacity(index: usize, scroll_offset: f64) -> f64 {
    let points = fade_breakpoints(index);

    let mut upper = points.len() - 1;
    for (i, point) in points.iter().enumerate().take(points.len() - 1).skip(1) {
        if point.0 >= scroll_offset {
            upper = i;
            break;
        }
    }

    let (x0, y0) = points[upper - 1];
    let (x1, y1) = points[upper];

    // Row 1's second and third breakpoints coincide; a zero-width segment
    // must not divide by zero.
    let raw = if (x1 - x0).abs() < f64::EPSILON {
        y1
    } else {
        y0 + (scroll_offset - x0) / (x1 - x0) * (y1 - y0)
    };

    clamp_unit(raw)
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}
