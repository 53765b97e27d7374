//! Reading and writing of image files
//!
//! Thin wrappers around the `image` crate. The file format is chosen from
//! the filename extension.

use std::path::Path;

/// Read an image file into interleaved RGBA bytes
pub fn read_rgba<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize),image::ImageError> {
    let img = image::open(filename)?.to_rgba();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}

/// Write interleaved RGBA bytes to an image file
pub fn write_rgba<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize, filename: P) -> Result<(), std::io::Error> {
    image::save_buffer(filename, buf, width as u32, height as u32, image::RGBA(8))
}

/// Write 8-bit grayscale bytes to an image file
pub fn write_gray<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize, filename: P) -> Result<(), std::io::Error> {
    image::save_buffer(filename, buf, width as u32, height as u32, image::Gray(8))
}

/// Compare two image files pixel by pixel, reporting mismatches on stdout
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool,image::ImageError> {
    let (d1,w1,h1) = read_rgba(f1)?;
    let (d2,w2,h2) = read_rgba(f2)?;
    if w1 != w2 || h1 != h2 {
        return Ok(false);
    }
    if d1.len() != d2.len() {
        println!("files not equal length");
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            println!("{} [{},{},{}]: {} {}", i, (i/4)%w1,(i/4)/w1,i%4, v1,v2);
            flag = false;
        }
    }
    Ok(flag)
}
