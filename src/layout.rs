/// Geometry of a monospace font sheet and of the table packed from it.
///
/// The sheet is a grid of `columns * rows` glyph cells, each
/// `glyph_width * glyph_height` pixels, assigned to consecutive character
/// codes starting at `first_char`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FontLayout {
    pub columns: u32,
    pub rows: u32,
    pub glyph_width: u32,
    pub glyph_height: u32,
    pub first_char: u16,
}
impl FontLayout {
    pub const fn sheet_width(&self) -> u32 {
        self.columns * self.glyph_width
    }

    pub const fn sheet_height(&self) -> u32 {
        self.rows * self.glyph_height
    }

    pub const fn glyph_count(&self) -> u32 {
        self.columns * self.rows
    }

    /// Size of one packed glyph cell in bytes.
    pub const fn cell_bytes(&self) -> u32 {
        self.glyph_width * self.glyph_height / 8
    }

    /// Size of the whole packed glyph table in bytes.
    pub const fn data_bytes(&self) -> u32 {
        self.glyph_count() * self.cell_bytes()
    }
}

/// The stock gbalatro system font: 96 glyphs of 8x8 pixels in a 16x6 grid,
/// covering the printable ASCII range starting at the space character.
pub const SYS8: FontLayout =
    FontLayout { columns: 16, rows: 6, glyph_width: 8, glyph_height: 8, first_char: 32 };
