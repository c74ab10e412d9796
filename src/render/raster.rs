//! Rasterization of face documents through `usvg` and `resvg`.

use std::{path::Path, sync::Arc};

use anyhow::Context;

use crate::foundation::error::{ClockError, ClockResult};

/// Straight (not premultiplied) RGBA8 pixels, row-major.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Parse a document. Relative `href`s (the theme logos) resolve against `resources_dir`.
pub fn parse_svg(doc: &str, resources_dir: Option<&Path>) -> ClockResult<usvg::Tree> {
    let opts = usvg::Options {
        resources_dir: resources_dir.map(Path::to_path_buf),
        fontdb: build_fontdb(resources_dir),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(doc, &opts).context("parse svg tree")?;
    Ok(tree)
}

fn build_fontdb(resources_dir: Option<&Path>) -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    if let Some(dir) = resources_dir {
        db.load_fonts_dir(dir.join("fonts"));
    }
    Arc::new(db)
}

/// Render a document at its declared size.
#[tracing::instrument(skip(doc), fields(bytes = doc.len()))]
pub fn rasterize(doc: &str, resources_dir: Option<&Path>) -> ClockResult<FrameRGBA> {
    let tree = parse_svg(doc, resources_dir)?;
    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ClockError::render(format!("failed to allocate {width}x{height} pixmap")))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    let mut data = pixmap.take();
    unpremultiply_in_place(&mut data);
    Ok(FrameRGBA {
        width,
        height,
        data,
    })
}

fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

/// Write a frame as PNG, creating parent directories.
pub fn save_png(frame: &FrameRGBA, path: &Path) -> ClockResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
