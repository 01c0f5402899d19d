//! Fixed-size pixel canvas
//!
//! Pixels are stored row-major with the origin at the top-left and addressed
//! by (x = column, y = row). Coordinates outside the canvas are a caller bug
//! and panic; they are never clamped.

mod ppm;

use std::io::Write;

use crate::error::ExportError;
use crate::math::Tuple4;

pub use ppm::{PpmOptions, PpmWriter};

/// A width x height grid of colors
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Tuple4>,
}

impl Canvas {
    /// Allocate a canvas with every pixel set to [`Tuple4::ZERO`]. Either
    /// dimension may be zero.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Tuple4::ZERO; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Overwrite every pixel with `color`.
    pub fn clear(&mut self, color: Tuple4) {
        self.pixels.fill(color);
    }

    /// Store a copy of `color` at (x, y).
    ///
    /// # Panics
    ///
    /// If `x >= width` or `y >= height`.
    pub fn write(&mut self, x: usize, y: usize, color: Tuple4) {
        *self.read(x, y) = color;
    }

    /// Live handle to the pixel at (x, y), e.g. to saturate or scale it in
    /// place before export.
    ///
    /// # Panics
    ///
    /// If `x >= width` or `y >= height`.
    pub fn read(&mut self, x: usize, y: usize) -> &mut Tuple4 {
        let idx = self.index(x, y);
        &mut self.pixels[idx]
    }

    /// Shared view of the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// If `x >= width` or `y >= height`.
    pub fn pixel(&self, x: usize, y: usize) -> &Tuple4 {
        &self.pixels[self.index(x, y)]
    }

    /// All pixels, row-major
    pub fn pixels(&self) -> &[Tuple4] {
        &self.pixels
    }

    /// Raw `f32` RGBA bytes, row-major, for uploading as a texture.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Stream the canvas as plain PPM with default options.
    pub fn export<W: Write>(&self, sink: W) -> Result<(), ExportError> {
        self.export_with(sink, &PpmOptions::default())
    }

    /// Stream the canvas as plain PPM. Pixels are copied before being clamped
    /// and scaled, so the canvas itself is left untouched.
    ///
    /// The first sink failure is returned and nothing further is written. The
    /// sink is then left partially written.
    pub fn export_with<W: Write>(&self, sink: W, options: &PpmOptions) -> Result<(), ExportError> {
        log::debug!(
            "Exporting {}x{} canvas as PPM (max line length {})",
            self.width,
            self.height,
            options.max_line_len
        );

        let mut ppm = PpmWriter::new(sink, options);
        ppm.write_header(self.width, self.height);
        for row in self.rows() {
            ppm.begin_row();
            for &px in row {
                ppm.write_pixel(px);
            }
            ppm.end_row();
        }
        let result = ppm.finish();

        if result.is_ok() {
            log::debug!("PPM export complete ({} pixels)", self.pixels.len());
        }
        result
    }

    fn rows(&self) -> impl Iterator<Item = &[Tuple4]> {
        // A zero-width canvas still yields `height` empty rows.
        let width = self.width;
        (0..self.height).map(move |y| &self.pixels[y * width..(y + 1) * width])
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} canvas",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{rgb, rgba};

    #[test]
    fn test_canvas_creation() {
        let canvas = Canvas::new(10, 20);
        assert_eq!(canvas.width(), 10);
        assert_eq!(canvas.height(), 20);
        assert_eq!(canvas.pixels().len(), 200);

        let black = rgba(0.0, 0.0, 0.0, 0.0);
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                assert!(canvas.pixel(x, y).equals(&black));
            }
        }
    }

    #[test]
    fn test_empty_canvas() {
        let canvas = Canvas::new(0, 5);
        assert!(canvas.pixels().is_empty());
        assert_eq!(canvas.rows().count(), 5);
    }

    #[test]
    fn test_write_and_read() {
        let red = rgb(1.0, 0.0, 0.0);
        let mut canvas = Canvas::new(10, 20);
        canvas.write(2, 3, red);
        assert!(canvas.read(2, 3).equals(&red));
        assert_eq!(canvas.pixels()[3 * 10 + 2], red);
        assert_eq!(*canvas.pixel(3, 2), Tuple4::ZERO);
    }

    #[test]
    fn test_read_is_live_handle() {
        let mut canvas = Canvas::new(2, 2);
        canvas.write(1, 1, rgb(2.0, 0.5, -1.0));
        {
            let px = canvas.read(1, 1);
            px.saturate();
            *px *= 0.5;
        }
        assert!(canvas.pixel(1, 1).equals(&rgba(0.5, 0.25, 0.0, 0.5)));
    }

    #[test]
    fn test_clear() {
        let mut canvas = Canvas::new(3, 2);
        let color = rgb(1.0, 0.8, 0.6);
        canvas.clear(color);
        assert!(canvas.pixels().iter().all(|px| *px == color));
    }

    #[test]
    fn test_as_bytes() {
        let mut canvas = Canvas::new(2, 1);
        canvas.write(1, 0, rgb(1.0, 0.0, 0.0));
        let bytes = canvas.as_bytes();
        assert_eq!(bytes.len(), 2 * 16);
        assert_eq!(&bytes[16..20], &1.0f32.to_ne_bytes());
    }

    #[test]
    #[should_panic(expected = "pixel (10, 0) outside 10x20 canvas")]
    fn test_write_out_of_range_column() {
        // (10, 0) would alias (0, 1) if only the buffer length were checked.
        let mut canvas = Canvas::new(10, 20);
        canvas.write(10, 0, rgb(1.0, 1.0, 1.0));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_read_out_of_range_row() {
        let mut canvas = Canvas::new(10, 20);
        canvas.read(0, 20);
    }

    #[test]
    fn test_export_does_not_mutate() {
        let mut canvas = Canvas::new(1, 1);
        canvas.write(0, 0, rgb(1.5, -0.5, 0.5));
        let mut out = Vec::new();
        canvas.export(&mut out).unwrap();
        assert_eq!(*canvas.pixel(0, 0), rgb(1.5, -0.5, 0.5));
    }

    #[test]
    fn test_export_zero_canvas() {
        let canvas = Canvas::new(5, 3);
        let mut out = Vec::new();
        canvas.export(&mut out).unwrap();
        let row = "0 0 0 0 0 0 0 0 0 0 0 0 0 0 0\n";
        let expected = format!("P3\n5 3\n255\n{row}{row}{row}\n");
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_export_scattered_pixels() {
        let mut canvas = Canvas::new(5, 3);
        canvas.write(0, 0, rgb(1.5, 0.0, 0.0));
        canvas.write(2, 1, rgb(0.0, 0.5, 0.0));
        canvas.write(4, 2, rgb(-0.5, 0.0, 1.0));
        let mut out = Vec::new();
        canvas.export(&mut out).unwrap();

        let expected = "P3\n5 3\n255\n\
                        255 0 0 0 0 0 0 0 0 0 0 0 0 0 0\n\
                        0 0 0 0 0 0 0 128 0 0 0 0 0 0 0\n\
                        0 0 0 0 0 0 0 0 0 0 0 0 0 0 255\n\
                        \n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
