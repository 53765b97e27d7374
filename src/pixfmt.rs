//! Pixel Format

use crate::buffer::RenderingBuffer;
use crate::color::*;
use crate::imgio;

use crate::Color;
use crate::Source;
use crate::Pixel;
use crate::PixelData;

use std::marker::PhantomData;
use std::path::Path;

/// Pixel Format Wrapper around raw pixel component data
///
pub struct Pixfmt<T> {
    pub rbuf: RenderingBuffer,
    phantom: PhantomData<T>,
}

impl<T> Pixfmt<T> where Pixfmt<T>: Pixel {
    /// Create new Pixel Format of width * height
    ///
    /// Allocates memory of width * height * bpp, zero initialized
    pub fn new(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            panic!("Cannot create pixfmt with 0 width or height");
        }
        Self { rbuf: RenderingBuffer::new(width, height, Self::bpp()),
               phantom: PhantomData
        }
    }
    /// Create new Pixel Format with rows `stride` bytes apart
    ///
    /// `stride` must be at least width * bpp; extra bytes are row padding
    pub fn new_with_stride(width: usize, height: usize, stride: usize) -> Self {
        if width == 0 || height == 0 {
            panic!("Cannot create pixfmt with 0 width or height");
        }
        Self { rbuf: RenderingBuffer::new_with_stride(width, height, Self::bpp(), stride),
               phantom: PhantomData
        }
    }
    /// Wrap an existing [RenderingBuffer]
    ///
    /// The buffer keeps whatever contents it already has
    pub fn from_rbuf(rbuf: RenderingBuffer) -> Self {
        assert_eq!(rbuf.bpp, Self::bpp(),
                   "buffer bpp {} does not match pixel format bpp {}",
                   rbuf.bpp, Self::bpp());
        Self { rbuf, phantom: PhantomData }
    }
    /// Size of Rendering Buffer in bytes; stride * height
    pub fn size(&self) -> usize {
        self.rbuf.len()
    }
    /// Bytes per row of the Rendering Buffer
    pub fn stride(&self) -> usize {
        self.rbuf.stride
    }
    /// Slice of a row's pixel bytes, padding excluded
    pub fn row(&self, y: usize) -> &[u8] {
        let n = self.rbuf.width * self.rbuf.bpp;
        &self.rbuf.row(y)[..n]
    }
    /// Mutable slice of a row's pixel bytes, padding excluded
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let n = self.rbuf.width * self.rbuf.bpp;
        &mut self.rbuf.row_mut(y)[..n]
    }
    /// Rows packed tightly together, padding dropped
    fn packed(&self) -> Vec<u8> {
        let n = self.rbuf.width * self.rbuf.bpp;
        let mut data = Vec::with_capacity(n * self.rbuf.height);
        for y in 0 .. self.rbuf.height {
            data.extend_from_slice(self.row(y));
        }
        data
    }
}

/// Access Pixeldata from a Pixfmt<T>
///
impl<T> PixelData for Pixfmt<T> {
    fn pixeldata(&self) -> &[u8] {
        & self.rbuf.data
    }
}

impl Pixfmt<Gray8> {
    /// Coverage value at (`x`,`y`)
    ///
    ///     use scanfill::{Pixfmt,Pixel,Gray8};
    ///
    ///     let mut mask = Pixfmt::<Gray8>::new(4,4);
    ///     mask.set((1,1), Gray8::new(200));
    ///     assert_eq!(mask.cover(1,1), 200);
    ///     assert_eq!(mask.cover(0,0), 0);
    ///
    pub fn cover(&self, x: usize, y: usize) -> u8 {
        self.rbuf[(x,y)][0]
    }
    /// Reset all coverage to zero, padding included
    pub fn clear(&mut self) {
        self.rbuf.clear(0);
    }
    /// Save the mask as a grayscale image
    ///
    /// Format is taken from the filename extension
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> std::io::Result<()> {
        if self.rbuf.stride == self.rbuf.width * self.rbuf.bpp {
            imgio::write_gray(&self.rbuf.data, self.rbuf.width, self.rbuf.height, filename)
        } else {
            imgio::write_gray(&self.packed(), self.rbuf.width, self.rbuf.height, filename)
        }
    }
}

impl Pixfmt<Rgba8> {
    /// Set every pixel to the [Color] `c`
    pub fn fill<C: Color>(&mut self, c: C) {
        let c = Rgba8::from(&c);
        for y in 0 .. self.rbuf.height {
            for x in 0 .. self.rbuf.width {
                self.set((x,y), c);
            }
        }
    }
    /// Save the image
    ///
    /// Format is taken from the filename extension
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> std::io::Result<()> {
        if self.rbuf.stride == self.rbuf.width * self.rbuf.bpp {
            imgio::write_rgba(&self.rbuf.data, self.rbuf.width, self.rbuf.height, filename)
        } else {
            imgio::write_rgba(&self.packed(), self.rbuf.width, self.rbuf.height, filename)
        }
    }
}

impl Pixel for Pixfmt<Gray8> {
    fn bpp() -> usize { 1 }
    /// Height of rendering buffer in pixels
    fn height(&self) -> usize {
        self.rbuf.height
    }
    /// Width of rendering buffer in pixels
    fn width(&self) -> usize {
        self.rbuf.width
    }
    /// Store the alpha component of `c` as the coverage value
    fn set<C: Color>(&mut self, id: (usize, usize), c: C) {
        self.rbuf[id][0] = c.alpha8();
    }
}

impl Pixel for Pixfmt<Rgba8> {
    fn bpp() -> usize { 4 }
    /// Height of rendering buffer in pixels
    fn height(&self) -> usize {
        self.rbuf.height
    }
    /// Width of rendering buffer in pixels
    fn width(&self) -> usize {
        self.rbuf.width
    }
    fn set<C: Color>(&mut self, id: (usize, usize), c: C) {
        let c = Rgba8::from(&c);
        assert!(! self.rbuf.data.is_empty() );
        self.rbuf[id][0] = c.red8();
        self.rbuf[id][1] = c.green8();
        self.rbuf[id][2] = c.blue8();
        self.rbuf[id][3] = c.alpha8();
    }
}

impl Source for Pixfmt<Rgba8> {
    fn get(&self, id: (usize, usize)) -> Rgba8 {
        let p = &self.rbuf[id];
        Rgba8::new(p[0],p[1],p[2],p[3])
    }
}
