//! Colors

use std::ops::Deref;
use crate::Color;

fn color_u8_to_f64(x: u8) -> f64 {
    f64::from(x) / 255.0
}

/// Color as Red, Green, Blue, and Alpha
///
/// Components are straight (not pre-multiplied) alpha
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rgba8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba8 {
    /// White Color (255,255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255,255)
    }
    /// Black Color (0,0,0,255)
    pub fn black() -> Self {
        Self::new(0,0,0,255)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }
}

impl Color for Rgba8 {
    fn   red(&self) -> f64 { color_u8_to_f64(self.r) }
    fn green(&self) -> f64 { color_u8_to_f64(self.g) }
    fn  blue(&self) -> f64 { color_u8_to_f64(self.b) }
    fn alpha(&self) -> f64 { color_u8_to_f64(self.a) }
    fn red8(&self) -> u8   { self.r }
    fn green8(&self) -> u8 { self.g }
    fn blue8(&self) -> u8  { self.b }
    fn alpha8(&self) -> u8 { self.a }
}

/// Color as Red, Green, Blue
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn white() -> Self {
        Self::new(255,255,255)
    }
    pub fn black() -> Self {
        Self::new(0,0,0)
    }
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    pub fn gray(g: u8) -> Self {
        Self::new(g,g,g)
    }
}

impl Color for Rgb8 {
    fn   red(&self) -> f64 { color_u8_to_f64(self.r) }
    fn green(&self) -> f64 { color_u8_to_f64(self.g) }
    fn  blue(&self) -> f64 { color_u8_to_f64(self.b) }
    fn alpha(&self) -> f64 { 1.0 }
    fn red8(&self) -> u8   { self.r }
    fn green8(&self) -> u8 { self.g }
    fn blue8(&self) -> u8  { self.b }
    fn alpha8(&self) -> u8 { 255 }
}

impl From<Rgba8> for Rgb8 {
    fn from(c: Rgba8) -> Rgb8 {
        Rgb8::new( c.r, c.g, c.b )
    }
}
impl From<Rgb8> for Rgba8 {
    fn from(c: Rgb8) -> Rgba8 {
        Rgba8::new( c.r, c.g, c.b, 255 )
    }
}

/// Gray scale / coverage value
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Gray8(pub u8);

impl Deref for Gray8 {
    type Target = u8;
    fn deref(&self) -> &u8 {
        &self.0
    }
}
impl Gray8 {
    /// Create a new gray scale value
    pub fn new(g: u8) -> Self {
        Gray8( g )
    }
}

impl Color for Gray8 {
    fn   red(&self) -> f64 { color_u8_to_f64(self.0) }
    fn green(&self) -> f64 { color_u8_to_f64(self.0) }
    fn  blue(&self) -> f64 { color_u8_to_f64(self.0) }
    fn alpha(&self) -> f64 { color_u8_to_f64(self.0) }
    fn red8(&self) -> u8   { self.0 }
    fn green8(&self) -> u8 { self.0 }
    fn blue8(&self) -> u8  { self.0 }
    fn alpha8(&self) -> u8 { self.0 }
}

impl<'a, C> From<&'a C> for Rgba8 where C: Color {
    fn from(c: &C) -> Self {
        Self::new(c.red8(), c.green8(), c.blue8(), c.alpha8() )
    }
}
impl<'a, C> From<&'a C> for Rgb8 where C: Color {
    fn from(c: &C) -> Self {
        Self::new(c.red8(), c.green8(), c.blue8())
    }
}
