//! Drawable surface that mirrors the stroke sequence.

use super::color::Color;
use super::render::{clear_surface, fill_background, render_strokes};
use super::smooth::DEFAULT_TENSION;
use super::stroke::Stroke;
use crate::input::InputState;
use cairo::{Context, Format, ImageSurface};

/// Transparent ARGB image holding the rendered strokes.
///
/// The surface is always rebuilt from scratch by [`Canvas::redraw`]; it keeps
/// no state of its own beyond pixels. Backgrounds are never painted onto it,
/// so erasing always reveals whatever the host shows underneath.
pub struct Canvas {
    surface: ImageSurface,
    tension: f64,
}

impl Canvas {
    /// Creates a transparent canvas of the given pixel size.
    pub fn new(width: u32, height: u32) -> Result<Self, cairo::Error> {
        let width = i32::try_from(width).map_err(|_| cairo::Error::InvalidSize)?;
        let height = i32::try_from(height).map_err(|_| cairo::Error::InvalidSize)?;
        let surface = ImageSurface::create(Format::ARgb32, width, height)?;
        Ok(Self {
            surface,
            tension: DEFAULT_TENSION,
        })
    }

    /// Sets the curve tension used for subsequent redraws.
    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = tension;
        self
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    pub fn tension(&self) -> f64 {
        self.tension
    }

    /// Read-only access to the rendered pixels (for display or export).
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    /// Clears the surface and replays every stroke.
    pub fn redraw(&mut self, strokes: &[Stroke]) -> Result<(), cairo::Error> {
        {
            let ctx = Context::new(&self.surface)?;
            clear_surface(&ctx);
            render_strokes(&ctx, strokes, self.tension);
        }
        self.surface.flush();
        log::trace!("Redrew canvas with {} strokes", strokes.len());
        Ok(())
    }

    /// Redraws from `input` if it flagged a change, clearing the flag.
    ///
    /// Returns whether a redraw happened.
    pub fn sync(&mut self, input: &mut InputState) -> Result<bool, cairo::Error> {
        if !input.needs_redraw {
            return Ok(false);
        }
        self.redraw(input.strokes())?;
        input.needs_redraw = false;
        Ok(true)
    }

    /// Composites the stroke layer over a solid background on a new surface.
    pub fn flatten_onto(&self, background: Color) -> Result<ImageSurface, cairo::Error> {
        let flattened = ImageSurface::create(Format::ARgb32, self.width(), self.height())?;
        {
            let ctx = Context::new(&flattened)?;
            fill_background(&ctx, background);
            ctx.set_source_surface(&self.surface, 0.0, 0.0)?;
            ctx.paint()?;
        }
        flattened.flush();
        Ok(flattened)
    }

    /// Alpha of the pixel at (`x`, `y`), or `None` outside the surface.
    pub fn alpha_at(&mut self, x: i32, y: i32) -> Option<u8> {
        pixel_alpha(&mut self.surface, x, y)
    }
}

/// Reads the alpha byte of one ARGB32 pixel.
///
/// Fails (returns `None`) while any Cairo context still references the surface.
pub fn pixel_alpha(surface: &mut ImageSurface, x: i32, y: i32) -> Option<u8> {
    if x < 0 || y < 0 || x >= surface.width() || y >= surface.height() {
        return None;
    }
    let stride = usize::try_from(surface.stride()).ok()?;
    let offset = y as usize * stride + x as usize * 4;

    let data = surface.data().ok()?;
    let bytes: [u8; 4] = data.get(offset..offset + 4)?.try_into().ok()?;
    // ARGB32 pixels are native-endian 32-bit words with alpha in the top byte
    Some((u32::from_ne_bytes(bytes) >> 24) as u8)
}
