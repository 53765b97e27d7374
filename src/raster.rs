//! Polygon scan conversion
//!
//! A closed polygon is converted into 8-bit coverage values, one byte per
//! pixel, written into a grayscale mask. Every edge is walked one scanline
//! at a time and each crossing is recorded in a per-row table holding the
//! pixel column, the sub-pixel position as a coverage byte, and the edge
//! direction. Sweeping a row then walks consecutive crossing pairs and
//! paints the pixels between them: partial coverage on the two boundary
//! pixels, saturated coverage in between. The filling rule decides which
//! pairs are interior, either by alternating parity or by a running
//! winding count.

use std::ops::Deref;

use crate::color::Gray8;
use crate::pixfmt::Pixfmt;
use crate::Pixel;

/// Coverage written where a span collapses into a single column
///
/// Both crossings of the pair land in the same pixel, leaving no interior,
/// and the pixel gets a fixed partial coverage instead.
pub const ZERO_WIDTH_COVER: u8 = 0xff >> 3;

/// Sub-pixel positions resolved per coverage byte
const COVER_SCALE: f64 = 256.0;

/// Polygon filling rule
#[derive(Debug,PartialEq,Copy,Clone)]
pub enum FillingRule {
    NonZero,
    EvenOdd,
}
impl Default for FillingRule {
    fn default() -> FillingRule {
        FillingRule::NonZero
    }
}

/// Closed polygon as a flat list of vertex coordinates
///
/// Coordinates are stored `[x0, y0, x1, y1, ...]` and the last vertex is
/// implicitly connected back to the first.
#[derive(Debug,Default,Clone)]
pub struct Polygon(pub Vec<f64>);

impl Polygon {
    pub fn new() -> Self {
        Polygon(Vec::new())
    }
    /// Append a vertex
    pub fn push(&mut self, x: f64, y: f64) {
        self.0.push(x);
        self.0.push(y);
    }
}
impl Deref for Polygon {
    type Target = [f64];
    fn deref(&self) -> &[f64] {
        &self.0
    }
}
impl From<Vec<f64>> for Polygon {
    fn from(v: Vec<f64>) -> Self {
        Polygon(v)
    }
}

/// Crossing of one edge with one scanline
#[derive(Debug,PartialEq,Copy,Clone)]
struct Intersection {
    /// Pixel column of the crossing
    x: i64,
    /// Sub-pixel position within the column, scaled to [0,255]
    cover: u8,
    /// +1 for edges walked with increasing y, -1 for decreasing
    winding: i8,
}

/// Polygon scan converter
///
/// Fills closed polygons into a [Pixfmt<Gray8>] coverage mask. The edge
/// table is reused across calls, so keep one around when filling many
/// polygons.
///
///     use scanfill::{Rasterizer,Polygon,FillingRule,Pixfmt,Gray8};
///
///     let mut mask = Pixfmt::<Gray8>::new(100,100);
///     let mut poly = Polygon::new();
///     poly.push(10.0, 10.0);
///     poly.push(90.0, 10.0);
///     poly.push(90.0, 90.0);
///     poly.push(10.0, 90.0);
///
///     let mut ras = Rasterizer::new();
///     ras.fill(&mut mask, &poly, FillingRule::NonZero);
///     assert_eq!(mask.cover(50,50), 255);
///     assert_eq!(mask.cover(5,50), 0);
///
#[derive(Debug,Default)]
pub struct Rasterizer {
    table: Vec<Vec<Intersection>>,
}

impl Rasterizer {
    pub fn new() -> Self {
        Self { table: Vec::new() }
    }

    /// Scan convert `poly` into `mask` using the filling rule `rule`
    ///
    /// Coverage is written only where the polygon covers the mask; the
    /// caller clears the mask if stale values could remain. Geometry
    /// reaching outside the mask is clipped away. Polygons with fewer
    /// than two coordinates, or masks with no rows, leave the mask
    /// untouched.
    pub fn fill(&mut self, mask: &mut Pixfmt<Gray8>, poly: &Polygon, rule: FillingRule) {
        let height = mask.height();
        if poly.len() < 2 || height == 0 {
            return;
        }
        debug_assert!(poly.len() % 2 == 0, "odd coordinate count {}", poly.len());
        debug_assert!(poly.iter().all(|v| v.is_finite()), "non-finite coordinate");

        self.reset(height);

        let (mut ymin, mut ymax) = (poly[1], poly[1]);
        for v in poly.chunks_exact(2).skip(1) {
            if v[1] > ymax {
                ymax = v[1];
            } else if v[1] < ymin {
                ymin = v[1];
            }
        }

        let (mut px, mut py) = (poly[0], poly[1]);
        for v in poly.chunks_exact(2).skip(1) {
            self.edge(px, py, v[0], v[1]);
            px = v[0];
            py = v[1];
        }
        self.edge(px, py, poly[0], poly[1]);

        let ymin = ymin.floor().max(0.0) as usize;
        let ymax = ymax.ceil().min(height as f64) as usize;
        match rule {
            FillingRule::EvenOdd => self.scan_even_odd(mask, ymin, ymax),
            FillingRule::NonZero => self.scan_non_zero(mask, ymin, ymax),
        }
    }

    /// Empty the edge table and size it to `height` rows
    ///
    /// Row allocations are kept for reuse
    fn reset(&mut self, height: usize) {
        for row in &mut self.table {
            row.clear();
        }
        self.table.resize_with(height, Vec::new);
    }

    /// Record the scanline crossings of one edge
    ///
    /// Edges walked against increasing y are flipped and tagged with
    /// winding -1. A horizontal edge contributes exactly one crossing.
    fn edge(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let (x1, y1, x2, y2, winding) = if y2 < y1 {
            (x2, y2, x1, y1, -1)
        } else {
            (x1, y1, x2, y2, 1)
        };
        let dy = y2 - y1;
        if dy == 0.0 {
            self.insert(x1.floor() as i64, y1.floor() as i64, cover_of(x1), winding);
            return;
        }
        let dx = (x2 - x1) / dy;
        let mut x = x1;
        let mut y = y1;
        let yend = (y2 - 1.0).floor() + 1.0;
        while y < yend {
            self.insert(x.floor() as i64, y.floor() as i64, cover_of(x), winding);
            x += dx;
            y += 1.0;
        }
    }

    /// Insert a crossing into its row, kept in ascending x
    ///
    /// Equal columns keep insertion order. Rows outside the table are
    /// dropped.
    fn insert(&mut self, x: i64, y: i64, cover: u8, winding: i8) {
        if y < 0 || y >= self.table.len() as i64 {
            return;
        }
        let row = &mut self.table[y as usize];
        let node = Intersection { x, cover, winding };
        match row.iter().position(|n| x < n.x) {
            Some(at) => row.insert(at, node),
            None => row.push(node),
        }
    }

    /// Paint rows `ymin..ymax`, filling between alternating crossing pairs
    fn scan_even_odd(&self, mask: &mut Pixfmt<Gray8>, ymin: usize, ymax: usize) {
        let width = mask.width();
        for y in ymin..ymax {
            let row = &self.table[y];
            if row.len() < 2 {
                continue;
            }
            let pix = mask.row_mut(y);
            let mut fill = true;
            for pair in row.windows(2) {
                if fill {
                    paint_span(pix, width, &pair[0], &pair[1]);
                }
                fill = !fill;
            }
        }
    }

    /// Paint rows `ymin..ymax`, filling pairs while the winding sum is
    /// non-zero
    fn scan_non_zero(&self, mask: &mut Pixfmt<Gray8>, ymin: usize, ymax: usize) {
        let width = mask.width();
        for y in ymin..ymax {
            let row = &self.table[y];
            if row.len() < 2 {
                continue;
            }
            let pix = mask.row_mut(y);
            let mut winding = i32::from(row[0].winding);
            for pair in row.windows(2) {
                if winding != 0 {
                    paint_span(pix, width, &pair[0], &pair[1]);
                }
                winding += i32::from(pair[1].winding);
            }
        }
    }
}

/// Coverage byte for the fractional part of `x`
fn cover_of(x: f64) -> u8 {
    ((x - x.floor()) * COVER_SCALE) as u8
}

/// Paint the span between crossings `i` and `j` into a mask row
///
/// The left pixel takes the coverage remaining right of the entering
/// crossing, interior pixels saturate, and the right pixel takes the
/// leaving crossing's coverage. Columns outside `[0,width)` are dropped.
fn paint_span(pix: &mut [u8], width: usize, i: &Intersection, j: &Intersection) {
    let w = width as i64;
    let (x1, x2) = (i.x, j.x);
    if x1 == x2 {
        if x1 >= 0 && x1 < w {
            pix[x1 as usize] = ZERO_WIDTH_COVER;
        }
        return;
    }
    if x1 >= 0 && x1 < w {
        pix[x1 as usize] = 0xff - i.cover;
    }
    let lo = (x1 + 1).max(0) as usize;
    let hi = x2.max(0).min(w) as usize;
    for xi in lo..hi {
        pix[xi] = 0xff;
    }
    if x2 >= 0 && x2 < w {
        pix[x2 as usize] = j.cover;
    }
}
