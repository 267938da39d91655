use crate::core;
use crate::core::Color;
use crate::error::Result;

use std::io::Write;

const PPM_MAX_LINE: usize = 70;

/// A width x height grid of colors, row-major with row 0 at the top.
#[derive(Clone, Debug)]
pub struct Film {
    pub width: usize,
    pub height: usize,
    pixels: Vec<Color>,
}

impl Film {
    pub fn new(width: usize, height: usize) -> Film {
        Film {
            width: width,
            height: height,
            pixels: vec![core::BLACK; width * height],
        }
    }

    pub fn pixel_at(&self, col: usize, row: usize) -> Color {
        self.pixels[core::index(row, col, self.width)]
    }

    pub fn write_pixel(&mut self, col: usize, row: usize, color: Color) {
        let i = core::index(row, col, self.width);
        self.pixels[i] = color;
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /**
     * Writes the film as a plain-text (P3) PPM. Channels are clamped to 0-255 and
     * no line is longer than 70 characters, so every row may span several lines.
     */
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "P3")?;
        writeln!(out, "{} {}", self.width, self.height)?;
        writeln!(out, "255")?;

        for row in 0..self.height {
            let mut line = String::new();
            for col in 0..self.width {
                for channel in self.pixel_at(col, row).to_rgb8().iter() {
                    let value = channel.to_string();
                    if !line.is_empty() && line.len() + 1 + value.len() > PPM_MAX_LINE {
                        writeln!(out, "{}", line)?;
                        line.clear();
                    }
                    if !line.is_empty() {
                        line.push(' ');
                    }
                    line.push_str(&value);
                }
            }
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    pub fn to_ppm(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_ppm(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
