//! Scanline polygon filling with 8-bit coverage masks
//!
//! How does this work
//!    mask = Pixfmt<Gray8>( RenderingBuffer )
//!    ras  = Rasterizer
//!  Scan Conversion
//!    ras.fill(mask, polygon, rule)
//!      edge()           -- one crossing per scanline the edge touches
//!        insert()       -- per-row lists kept in ascending x
//!      scan_even_odd() / scan_non_zero()
//!        paint_span()   -- left cover | interior 0xff | right cover
//!    Output: coverage bytes in the mask
//!  Composite to Image
//!    draw_solid_rgba(dest, mask, color)
//!      blend_pair()     -- r+b and g+a packed lanes, two multiplies
//!
//!  Example
//!
//!     use scanfill::{Rasterizer,Polygon,FillingRule,Pixfmt,Gray8,Rgba8};
//!     use scanfill::{draw_solid_rgba,Source};
//!
//!     let mut poly = Polygon::new();
//!     poly.push(20.0, 20.0);
//!     poly.push(80.0, 30.0);
//!     poly.push(50.0, 80.0);
//!
//!     let mut mask = Pixfmt::<Gray8>::new(100,100);
//!     let mut ras = Rasterizer::new();
//!     ras.fill(&mut mask, &poly, FillingRule::NonZero);
//!
//!     let mut img = Pixfmt::<Rgba8>::new(100,100);
//!     img.fill(Rgba8::white());
//!     draw_solid_rgba(&mut img, &mask, Rgba8::black());
//!     assert_eq!(img.get((50,40)), Rgba8::black());
//!

pub mod buffer;
pub mod color;
pub mod math;
pub mod pixfmt;
pub mod raster;
pub mod render;
pub mod imgio;

pub use crate::buffer::*;
pub use crate::color::*;
pub use crate::math::*;
pub use crate::pixfmt::*;
pub use crate::raster::*;
pub use crate::render::*;
pub use crate::imgio::*;

/// Access Color properties and compoents
pub trait Color: std::fmt::Debug {
    /// Get red value [0,1] as f64
    fn red(&self) -> f64;
    /// Get green value [0,1] as f64
    fn green(&self) -> f64;
    /// Get blue value [0,1] as f64
    fn blue(&self) -> f64;
    /// Get alpha value [0,1] as f64
    fn alpha(&self) -> f64;
    /// Get red value [0,255] as u8
    fn red8(&self) -> u8;
    /// Get green value [0,255] as u8
    fn green8(&self) -> u8;
    /// Get blue value [0,255] as u8
    fn blue8(&self) -> u8;
    /// Get alpha value [0,255] as u8
    fn alpha8(&self) -> u8;
}

/// Write pixels into a Pixfmt
pub trait Pixel {
    /// Bytes per pixel
    fn bpp() -> usize;
    /// Width in pixels
    fn width(&self) -> usize;
    /// Height in pixels
    fn height(&self) -> usize;
    /// Set the pixel at (`x`,`y`) to the [Color] `c`
    fn set<C: Color>(&mut self, id: (usize, usize), c: C);
}

/// Read pixels from a Pixfmt
pub trait Source {
    fn get(&self, id: (usize, usize)) -> Rgba8;
}

/// Access raw pixel bytes
pub trait PixelData {
    fn pixeldata(&self) -> &[u8];
}
