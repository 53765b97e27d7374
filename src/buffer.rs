//! Rendering buffer

/// Rendering Buffer
///
/// Data is stored in row-major order (C-format). Rows are `stride` bytes
/// apart, which is at least `width * bpp`; any extra bytes are padding.
#[derive(Debug,Default)]
pub struct RenderingBuffer {
    /// Pixel / Component level data of Image
    pub data: Vec<u8>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
    /// Bytes per pixel or number of color components
    pub bpp: usize,
    /// Bytes per row
    pub stride: usize,
}

impl RenderingBuffer {
    /// Create a new buffer of width, height, and bpp with tightly packed rows
    ///
    /// Data for the Image is allocated and zero initialized
    pub fn new(width: usize, height: usize, bpp: usize) -> Self {
        RenderingBuffer::new_with_stride(width, height, bpp, width * bpp)
    }
    /// Create a new buffer with rows padded out to `stride` bytes
    pub fn new_with_stride(width: usize, height: usize, bpp: usize, stride: usize) -> Self {
        assert!(stride >= width * bpp,
                "stride {} < {} row bytes :: new_with_stride", stride, width * bpp);
        RenderingBuffer {
            width, height, bpp, stride, data: vec![0u8; stride * height]
        }
    }
    /// Size of underlying Rendering Buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// True if the underlying buffer has no bytes
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Return slice of a row, padding included
    pub fn row(&self, i: usize) -> &[u8] {
        debug_assert!(i < self.height);
        let row = i * self.stride;
        &self.data[row .. row + self.stride]
    }
    /// Return mutable slice of a row, padding included
    pub fn row_mut(&mut self, i: usize) -> &mut [u8] {
        debug_assert!(i < self.height);
        let row = i * self.stride;
        &mut self.data[row .. row + self.stride]
    }
    /// Set every byte of the buffer, padding included
    pub fn clear(&mut self, v: u8) {
        self.data.iter_mut().for_each(|b| *b = v);
    }
}

use std::ops::Index;
use std::ops::IndexMut;

impl Index<(usize,usize)> for RenderingBuffer {
    type Output = [u8];
    fn index(&self, index: (usize, usize)) -> &[u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        let i = index.1 * self.stride + index.0 * self.bpp;
        assert!(i < self.data.len());
        &self.data[i..]
    }
}
impl IndexMut<(usize,usize)> for RenderingBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut [u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        let i = index.1 * self.stride + index.0 * self.bpp;
        assert!(i < self.data.len());
        &mut self.data[i..]
    }
}
