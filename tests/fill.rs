use scanfill::{FillingRule, Gray8, Pixel, PixelData, Pixfmt, Polygon, Rasterizer};
use scanfill::buffer::RenderingBuffer;
use scanfill::ZERO_WIDTH_COVER;

fn fill_new(width: usize, height: usize, poly: &Polygon, rule: FillingRule) -> Pixfmt<Gray8> {
    let mut mask = Pixfmt::<Gray8>::new(width, height);
    let mut ras = Rasterizer::new();
    ras.fill(&mut mask, poly, rule);
    mask
}

fn count_nonzero(mask: &Pixfmt<Gray8>) -> usize {
    let mut n = 0;
    for y in 0..mask.height() {
        for x in 0..mask.width() {
            if mask.cover(x, y) != 0 {
                n += 1;
            }
        }
    }
    n
}

#[test]
fn axis_aligned_rectangle() {
    let rect = Polygon(vec![10.0, 10.0, 90.0, 10.0, 90.0, 90.0, 10.0, 90.0]);
    let mask = fill_new(100, 100, &rect, FillingRule::EvenOdd);

    // Strict interior saturates
    for y in 11..=88 {
        for x in 11..=88 {
            assert_eq!(mask.cover(x, y), 255, "pix({},{})", x, y);
        }
    }
    // Nothing outside the rectangle
    for i in 0..100 {
        assert_eq!(mask.cover(i, 9), 0, "above, col {}", i);
        assert_eq!(mask.cover(i, 91), 0, "below, col {}", i);
        assert_eq!(mask.cover(9, i), 0, "left, row {}", i);
        assert_eq!(mask.cover(91, i), 0, "right, row {}", i);
    }
    // The top row has both crossings in one pixel; the left edge lands on
    // a pixel boundary so its coverage is full, and the right edge column
    // takes the crossing coverage of zero
    assert_eq!(mask.cover(10, 10), ZERO_WIDTH_COVER);
    assert_eq!(mask.cover(10, 50), 255);
    assert_eq!(mask.cover(90, 50), 0);
    // One partial pixel on the top row plus 79 rows of 80 saturated pixels
    assert_eq!(count_nonzero(&mask), 1 + 79 * 80);
}

#[test]
fn rules_agree_on_simple_polygon() {
    let tri = Polygon(vec![20.5, 10.25, 80.75, 30.5, 40.25, 90.75]);
    let eo = fill_new(100, 100, &tri, FillingRule::EvenOdd);
    let nz = fill_new(100, 100, &tri, FillingRule::NonZero);
    assert_eq!(eo.pixeldata(), nz.pixeldata());
    assert!(count_nonzero(&eo) > 0);
}

#[test]
fn star_separates_the_rules() {
    // Five pointed star, radius 40 around (50,50); the pentagon at the
    // center is wound twice
    let star = Polygon(vec![
        50.0, 10.0,
        26.49, 82.36,
        88.04, 37.64,
        11.96, 37.64,
        73.51, 82.36,
    ]);
    let eo = fill_new(100, 100, &star, FillingRule::EvenOdd);
    let nz = fill_new(100, 100, &star, FillingRule::NonZero);

    // Center of the pentagon: alternating parity leaves it hollow, the
    // winding count does not
    assert_eq!(eo.cover(50, 50), 0);
    assert_eq!(nz.cover(50, 50), 255);
    // Inside the top arm both rules fill
    assert_eq!(eo.cover(50, 20), 255);
    assert_eq!(nz.cover(50, 20), 255);
    // Outside the star both stay empty
    assert_eq!(eo.cover(5, 50), 0);
    assert_eq!(nz.cover(5, 50), 0);
}

#[test]
fn figure_eight_doubled_lobe() {
    // Two square loops traced in the same direction, joined into one
    // closed path that crosses itself once. The connecting edges sweep a
    // region with winding -2: parity leaves it hollow, the winding count
    // keeps it filled.
    let eight = Polygon(vec![
        20.0, 20.0,
        70.0, 20.0,
        70.0, 70.0,
        20.0, 70.0,
        45.0, 45.0,
        95.0, 45.0,
        95.0, 95.0,
        45.0, 95.0,
    ]);
    let eo = fill_new(100, 100, &eight, FillingRule::EvenOdd);
    let nz = fill_new(100, 100, &eight, FillingRule::NonZero);

    // Row 60 crosses the doubled region between the two joining edges
    assert_eq!(eo.cover(50, 60), 0);
    assert_eq!(nz.cover(50, 60), 255);
    // Singly wound parts of the same row fill under both rules
    assert_eq!(eo.cover(31, 60), 255);
    assert_eq!(nz.cover(31, 60), 255);
    assert_eq!(eo.cover(80, 60), 255);
    assert_eq!(nz.cover(80, 60), 255);
    // One loop each, above and below the crossing
    assert_eq!(eo.cover(50, 30), 255);
    assert_eq!(nz.cover(50, 30), 255);
    assert_eq!(eo.cover(60, 85), 255);
    assert_eq!(nz.cover(60, 85), 255);
    // Outside the whole figure
    assert_eq!(eo.cover(10, 60), 0);
    assert_eq!(nz.cover(10, 60), 0);
    assert_eq!(eo.cover(98, 60), 0);
    assert_eq!(nz.cover(98, 60), 0);
}

#[test]
fn convex_diamond_within_one_pixel_fringe() {
    let diamond = Polygon(vec![50.0, 5.0, 95.0, 50.0, 50.0, 95.0, 5.0, 50.0]);
    let mask = fill_new(100, 100, &diamond, FillingRule::NonZero);
    for y in 0..100i32 {
        for x in 0..100i32 {
            let d = (x - 50).abs() + (y - 50).abs();
            let c = mask.cover(x as usize, y as usize);
            if d <= 43 {
                assert_eq!(c, 255, "pix({},{}) d {}", x, y, d);
            } else if d >= 47 {
                assert_eq!(c, 0, "pix({},{}) d {}", x, y, d);
            }
        }
    }
}

#[test]
fn degenerate_polygons_leave_mask_empty() {
    // All vertices on one scanline
    let flat = Polygon(vec![10.0, 50.0, 90.0, 50.0, 50.0, 50.0]);
    let mask = fill_new(100, 100, &flat, FillingRule::NonZero);
    assert_eq!(count_nonzero(&mask), 0);
    let mask = fill_new(100, 100, &flat, FillingRule::EvenOdd);
    assert_eq!(count_nonzero(&mask), 0);

    // A single vertex
    let point = Polygon(vec![50.5, 50.5]);
    let mask = fill_new(100, 100, &point, FillingRule::NonZero);
    assert_eq!(count_nonzero(&mask), 0);

    // No vertices at all
    let empty = Polygon::new();
    let mask = fill_new(100, 100, &empty, FillingRule::EvenOdd);
    assert_eq!(count_nonzero(&mask), 0);
}

#[test]
fn zero_height_mask_is_untouched() {
    let rbuf = RenderingBuffer::new(8, 0, 1);
    let mut mask = Pixfmt::<Gray8>::from_rbuf(rbuf);
    let rect = Polygon(vec![1.0, 1.0, 5.0, 1.0, 5.0, 5.0, 1.0, 5.0]);
    let mut ras = Rasterizer::new();
    ras.fill(&mut mask, &rect, FillingRule::NonZero);
    assert!(mask.pixeldata().is_empty());
}

#[test]
fn geometry_outside_the_mask_is_clipped() {
    // Hangs over every mask edge; the visible part covers the whole mask
    let big = Polygon(vec![-20.0, -20.0, 40.0, -20.0, 40.0, 40.0, -20.0, 40.0]);
    let mask = fill_new(32, 32, &big, FillingRule::NonZero);
    for y in 0..32 {
        for x in 0..32 {
            assert_eq!(mask.cover(x, y), 255, "pix({},{})", x, y);
        }
    }

    // Entirely below the mask
    let below = Polygon(vec![0.0, 50.0, 10.0, 50.0, 10.0, 60.0]);
    let mask = fill_new(32, 32, &below, FillingRule::NonZero);
    assert_eq!(count_nonzero(&mask), 0);

    // Entirely above the mask
    let above = Polygon(vec![0.0, -50.0, 10.0, -50.0, 10.0, -40.0]);
    let mask = fill_new(32, 32, &above, FillingRule::EvenOdd);
    assert_eq!(count_nonzero(&mask), 0);
}

#[test]
fn padded_mask_matches_tight_mask() {
    let diamond = Polygon(vec![32.0, 4.0, 60.0, 32.0, 32.0, 60.0, 4.0, 32.0]);
    let tight = fill_new(64, 64, &diamond, FillingRule::NonZero);

    let mut padded = Pixfmt::<Gray8>::new_with_stride(64, 64, 100);
    let mut ras = Rasterizer::new();
    ras.fill(&mut padded, &diamond, FillingRule::NonZero);

    assert_eq!(padded.stride(), 100);
    for y in 0..64 {
        for x in 0..64 {
            assert_eq!(tight.cover(x, y), padded.cover(x, y), "pix({},{})", x, y);
        }
    }
    // Row padding stays untouched
    for y in 0..64 {
        assert!(padded.rbuf.row(y)[64..].iter().all(|&v| v == 0), "row {}", y);
    }
}
