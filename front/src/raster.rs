//! Scan conversion of triangles into horizontal pixel spans.
//!
//! This is independent of any windowing backend; a frontend only needs to
//! be able to fill a one-pixel-high rectangle to draw a span.

use std::ops::Range;

use tritri_core::geom::Tri;
use tritri_core::math::{Point2, Point3, pt2};

/// A horizontal run of pixels on a single line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Span {
    /// The y coordinate of the line.
    pub y: u32,
    /// The range of x coordinates covered.
    pub xs: Range<u32>,
}

/// Maps a point in normalized device coordinates to screen coordinates.
///
/// The visible range x, y ∈ [-1, 1] is mapped to the whole window, with
/// positive y pointing up in NDC but down in screen space. The z coordinate
/// is ignored.
///
/// # Examples
/// ```
/// use tritri_front::raster::to_screen;
/// use tritri_core::math::{pt2, pt3};
///
/// assert_eq!(to_screen(&pt3(-1.0, 1.0, 0.0), (800, 600)), pt2(0.0, 0.0));
/// assert_eq!(to_screen(&pt3(0.0, 0.0, 0.0), (800, 600)), pt2(400.0, 300.0));
/// ```
pub fn to_screen(p: &Point3, (w, h): (u32, u32)) -> Point2 {
    let (w, h) = (w as f32, h as f32);
    pt2((p.x() + 1.0) * 0.5 * w, (1.0 - p.y()) * 0.5 * h)
}

/// Converts a triangle in screen coordinates into spans, invoking
/// `span_fn` for each non-empty span, from top to bottom.
///
/// A pixel is covered if and only if its center point lies inside the
/// triangle, where the top and left edges are inclusive and the bottom and
/// right edges exclusive. Spans are clipped to a screen of size `dims`.
pub fn tri_fill<F>(tri: &Tri<Point2>, (w, h): (u32, u32), mut span_fn: F)
where
    F: FnMut(Span),
{
    // Sort by y coordinate, start from the top
    let mut vs = tri.0;
    vs.sort_by(|a, b| a.y().total_cmp(&b.y()));
    let [top, mid, bot] = vs;

    //           X <--top
    //          ***
    //         *****
    //  mid-->X*****
    //          ****
    //            **
    //             X <--bot
    //
    // The long edge goes from top to bot; the short edges meet at mid.

    let x_at = |a: Point2, b: Point2, y: f32| {
        a.x() + (b.x() - a.x()) * (y - a.y()) / (b.y() - a.y())
    };
    let to_px = |c: f32, max: u32| (c - 0.5).ceil().clamp(0.0, max as f32) as u32;

    for y in to_px(top.y(), h)..to_px(bot.y(), h) {
        // Pixel center; always in top.y..bot.y, so no division by zero
        let yc = y as f32 + 0.5;
        let long = x_at(top, bot, yc);
        let short = if yc < mid.y() {
            x_at(top, mid, yc)
        } else {
            x_at(mid, bot, yc)
        };
        let (x0, x1) = (to_px(long.min(short), w), to_px(long.max(short), w));
        if x0 < x1 {
            span_fn(Span { y, xs: x0..x1 });
        }
    }
}

/// Returns the spans covered by a triangle in screen coordinates.
///
/// See [`tri_fill`] for details.
///
/// # Examples
/// ```
/// use tritri_core::geom::tri;
/// use tritri_core::math::pt2;
/// use tritri_front::raster::{spans, Span};
///
/// let t = tri(pt2(0.0, 0.0), pt2(4.0, 0.0), pt2(0.0, 4.0));
///
/// assert_eq!(spans(&t, (8, 8)), [
///     Span { y: 0, xs: 0..3 },
///     Span { y: 1, xs: 0..2 },
///     Span { y: 2, xs: 0..1 },
/// ]);
/// ```
pub fn spans(tri: &Tri<Point2>, dims: (u32, u32)) -> Vec<Span> {
    let mut res = Vec::new();
    tri_fill(tri, dims, |s| res.push(s));
    res
}
