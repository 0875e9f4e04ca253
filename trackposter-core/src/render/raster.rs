use std::{io::Cursor, sync::Arc};

use anyhow::Context as _;

use crate::foundation::error::{PosterError, PosterResult};

/// Output pixels per CSS pixel of the SVG's size.
///
/// The poster's `mm` size is converted to CSS pixels by usvg first, so one user
/// unit ends up at roughly 15 output pixels.
pub const DEFAULT_RASTER_SCALE: f32 = 4.0;

/// Largest pixmap side we allocate.
pub const MAX_RASTER_DIM: u32 = 16_384;

/// Parse SVG text with the system font database so titles and labels render.
pub fn parse_svg(svg: &str) -> PosterResult<usvg::Tree> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    let opts = usvg::Options {
        fontdb: Arc::new(db),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &opts).context("parse poster svg")?;
    Ok(tree)
}

/// Rasterize `svg` at `scale` output pixels per CSS pixel and encode as PNG.
///
/// Fails when either side would exceed [`MAX_RASTER_DIM`]; see
/// [`svg_to_png_fitted`] for the variant that shrinks instead.
pub fn svg_to_png(svg: &str, scale: f32) -> PosterResult<Vec<u8>> {
    check_scale(scale)?;
    encode_png(&parse_svg(svg)?, scale)
}

/// Like [`svg_to_png`], but lowers `max_scale` so the longer side fits
/// [`MAX_RASTER_DIM`]. Tall posters with many years stay renderable.
pub fn svg_to_png_fitted(svg: &str, max_scale: f32) -> PosterResult<Vec<u8>> {
    check_scale(max_scale)?;
    let tree = parse_svg(svg)?;
    let size = tree.size();
    let scale = fit_scale(size.width(), size.height(), max_scale, MAX_RASTER_DIM);
    if scale < max_scale {
        tracing::debug!(max_scale, scale, "reduced raster scale to fit pixmap limit");
    }
    encode_png(&tree, scale)
}

/// Largest scale `<= max_scale` at which a `width x height` image fits `max_dim`.
pub(crate) fn fit_scale(width: f32, height: f32, max_scale: f32, max_dim: u32) -> f32 {
    let longest = width.max(height);
    if !longest.is_finite() || longest <= 0.0 {
        return max_scale;
    }
    // One pixel of headroom absorbs the `ceil` in `to_px`.
    let limit = (max_dim.saturating_sub(1)) as f32 / longest;
    max_scale.min(limit)
}

fn check_scale(scale: f32) -> PosterResult<()> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(PosterError::render(format!("invalid raster scale {scale}")));
    }
    Ok(())
}

fn encode_png(tree: &usvg::Tree, scale: f32) -> PosterResult<Vec<u8>> {
    let size = tree.size();
    let width = to_px(size.width() * scale)?;
    let height = to_px(size.height() * scale)?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| PosterError::render("failed to allocate poster pixmap"))?;
    let sx = (width as f32) / size.width();
    let sy = (height as f32) / size.height();
    resvg::render(
        tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    // tiny-skia stores premultiplied pixels; PNG wants straight alpha.
    let mut rgba = Vec::with_capacity(pixmap.pixels().len() * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    let img = image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| PosterError::render("raster buffer size mismatch"))?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode poster png")?;
    Ok(buf)
}

fn to_px(v: f32) -> PosterResult<u32> {
    if !v.is_finite() || v <= 0.0 {
        return Err(PosterError::render("svg has invalid width/height"));
    }
    let px = (v.ceil() as u32).max(1);
    if px > MAX_RASTER_DIM {
        return Err(PosterError::render(format!(
            "raster size too large: {px} (max {MAX_RASTER_DIM})"
        )));
    }
    Ok(px)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
