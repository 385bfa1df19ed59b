use crate::layout::FontLayout;
use anyhow::{bail, Context, Result};
use image::GrayImage;
use log::{debug, info};
use std::path::Path;

/// Pixels with a luma below this sample as ink.
const INK_THRESHOLD: u8 = 128;
const WORD_BITS: u32 = 32;

/// One glyph cell packed into a pair of 32-bit bitmasks.
///
/// The 64 pixels of the cell are flattened row-major; pixel `i` maps to bit
/// `i % 32` of `word0` for `i < 32` and of `word1` otherwise. A set bit is a
/// drawn pixel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PackedGlyph {
    pub word0: u32,
    pub word1: u32,
}

/// The packed glyph table for a whole font sheet.
#[derive(Clone, Debug)]
pub struct FontTable {
    layout: FontLayout,
    glyphs: Vec<PackedGlyph>,
}
impl FontTable {
    /// Decodes the font sheet at the given path and packs it.
    pub fn from_image_file(path: &Path, layout: &FontLayout) -> Result<Self> {
        info!("Decoding font sheet '{}'...", path.display());
        let img = image::open(path)
            .with_context(|| format!("could not decode font sheet '{}'", path.display()))?;
        FontTable::from_image(&img.to_luma8(), layout)
    }

    /// Packs an already decoded sheet.
    ///
    /// The sheet must have exactly the pixel dimensions the layout calls for;
    /// anything else is rejected rather than cropped.
    pub fn from_image(img: &GrayImage, layout: &FontLayout) -> Result<Self> {
        assert!(layout.glyph_width * layout.glyph_height <= WORD_BITS * 2);

        let (expected_w, expected_h) = (layout.sheet_width(), layout.sheet_height());
        if img.width() != expected_w || img.height() != expected_h {
            bail!(
                "font sheet must be {expected_w}x{expected_h} pixels, got {}x{}",
                img.width(),
                img.height()
            );
        }

        debug!(
            "Packing {} glyphs of {}x{} pixels...",
            layout.glyph_count(),
            layout.glyph_width,
            layout.glyph_height
        );
        let mut glyphs = Vec::with_capacity(layout.glyph_count() as usize);
        for row in 0..layout.rows {
            for col in 0..layout.columns {
                glyphs.push(pack_cell(img, layout, col, row));
            }
        }
        Ok(FontTable { layout: *layout, glyphs })
    }

    pub fn layout(&self) -> &FontLayout {
        &self.layout
    }

    pub fn glyphs(&self) -> &[PackedGlyph] {
        &self.glyphs
    }
}

// The sheet is drawn as dark ink on a light background, while the packed
// table wants drawn pixels set, so the binary interpretation of the sheet is
// inverted as it is sampled.
fn is_ink(luma: u8) -> bool {
    luma < INK_THRESHOLD
}

fn pack_cell(img: &GrayImage, layout: &FontLayout, col: u32, row: u32) -> PackedGlyph {
    let base_x = col * layout.glyph_width;
    let base_y = row * layout.glyph_height;

    let mut glyph = PackedGlyph { word0: 0, word1: 0 };
    for y in 0..layout.glyph_height {
        for x in 0..layout.glyph_width {
            if !is_ink(img.get_pixel(base_x + x, base_y + y).0[0]) {
                continue;
            }
            let i = y * layout.glyph_width + x;
            if i < WORD_BITS {
                glyph.word0 |= 1 << i;
            } else {
                glyph.word1 |= 1 << (i - WORD_BITS);
            }
        }
    }
    glyph
}
