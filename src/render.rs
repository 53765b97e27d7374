//! Mask compositing
//!
//! Blends a solid color into an RGBA image through an 8-bit coverage mask,
//! one mask byte per destination pixel.

use crate::color::{Gray8, Rgba8};
use crate::math::{blend_pair, pack_pair};
use crate::pixfmt::Pixfmt;
use crate::Color;
use crate::Pixel;

/// Blend the [Color] `color` into `dest` through `mask`
///
/// Each destination pixel is alpha blended with `color` using the mask
/// byte at the same coordinate as the alpha value, `255` replacing the
/// pixel and `0` leaving it untouched. The color's own alpha component is
/// blended into the destination alpha channel like any other channel.
///
/// Pixels are interleaved `R,G,B,A` bytes. Red and blue ride in one packed
/// channel pair and green and alpha in the other, so a pixel blends with
/// two multiplications instead of four; see [blend_pair]. Mask bytes of
/// zero skip the destination pixel without reading it.
///
/// Only the region where the two buffers overlap, anchored at the origin,
/// is touched.
pub fn draw_solid_rgba<C: Color>(dest: &mut Pixfmt<Rgba8>, mask: &Pixfmt<Gray8>, color: C) {
    let c = Rgba8::from(&color);
    let w = dest.width().min(mask.width());
    let h = dest.height().min(mask.height());
    let srb = pack_pair(c.r, c.b);
    let sga = pack_pair(c.g, c.a);
    for y in 0..h {
        let covers = mask.row(y);
        let pix = dest.row_mut(y);
        for (x, &cover) in covers[..w].iter().enumerate() {
            if cover == 0 {
                continue;
            }
            let alpha = u32::from(cover);
            let p = &mut pix[x * 4..x * 4 + 4];
            let rb = blend_pair(pack_pair(p[0], p[2]), srb, alpha);
            let ga = blend_pair(pack_pair(p[1], p[3]), sga, alpha);
            p[0] = rb as u8;
            p[1] = ga as u8;
            p[2] = (rb >> 16) as u8;
            p[3] = (ga >> 16) as u8;
        }
    }
}
