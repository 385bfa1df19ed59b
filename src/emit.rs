use crate::pack::FontTable;
use anyhow::Result;
use std::io::Write;

/// Glyphs (pairs of words) emitted per `.word` line in the data body.
const GLYPHS_PER_LINE: usize = 4;
/// The table always packs one bit per pixel.
const BITS_PER_PIXEL: u32 = 1;

/// The descriptor fields emitted ahead of the glyph table, matching libtonc's
/// `TFont` struct field for field. The width/height pair is emitted twice
/// because character and cell dimensions coincide for a monospace font, and
/// the widths/heights table pointers are always null for the same reason.
struct FontHeader<'a> {
    symbol: &'a str,
    first_char: u16,
    char_count: u32,
    char_width: u32,
    char_height: u32,
    cell_bytes: u32,
    data_bytes: u32,
}
impl<'a> FontHeader<'a> {
    fn new(table: &FontTable, symbol: &'a str) -> Self {
        let layout = table.layout();
        FontHeader {
            symbol,
            first_char: layout.first_char,
            char_count: layout.glyph_count(),
            char_width: layout.glyph_width,
            char_height: layout.glyph_height,
            cell_bytes: layout.cell_bytes(),
            data_bytes: layout.data_bytes(),
        }
    }

    fn write<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out)?;
        writeln!(out)?;
        writeln!(out, "@{{{{BLOCK({})", self.symbol)?;
        writeln!(out)?;
        writeln!(out, "    .section .rodata")?;
        writeln!(out, "    .align\t2")?;
        writeln!(out, "    .global\t{}Font", self.symbol)?;
        writeln!(out, "{}Font:", self.symbol)?;
        writeln!(out, "    .word\t{}Glyphs, 0, 0", self.symbol)?;
        writeln!(out, "    .hword\t{}, {}", self.first_char, self.char_count)?;
        writeln!(out, "    .byte\t{}, {}", self.char_width, self.char_height)?;
        writeln!(out, "    .byte\t{}, {}", self.char_width, self.char_height)?;
        writeln!(out, "    .hword\t{}", self.cell_bytes)?;
        writeln!(out, "    .byte\t{}, 0", BITS_PER_PIXEL)?;
        writeln!(out)?;
        writeln!(out, "    .section .rodata")?;
        writeln!(out, "    .align\t2")?;
        writeln!(
            out,
            "    .global {}Glyphs\t\t@ {} bytes ({} unsigned ints)",
            self.symbol,
            self.data_bytes,
            self.data_bytes / 4
        )?;
        writeln!(out, "{}Glyphs:", self.symbol)?;
        Ok(())
    }
}

fn write_glyphs<W: Write>(out: &mut W, table: &FontTable) -> Result<()> {
    for (i, glyph) in table.glyphs().iter().enumerate() {
        if i % GLYPHS_PER_LINE == 0 {
            write!(out, "    .word ")?;
        }
        write!(out, "0x{:08X},0x{:08X}", glyph.word0, glyph.word1)?;
        if (i + 1) % GLYPHS_PER_LINE == 0 || i + 1 == table.glyphs().len() {
            writeln!(out)?;
        } else {
            write!(out, ",")?;
        }
    }
    Ok(())
}

fn write_footer<W: Write>(out: &mut W, symbol: &str) -> Result<()> {
    writeln!(out)?;
    writeln!(out)?;
    writeln!(out, "@}}}}BLOCK({symbol})")?;
    Ok(())
}

/// Writes the complete assembly asset for a packed font table.
///
/// Everything but the glyph hex values is a fixed template; the literal
/// directive tokens and symbol spellings are part of the contract with the
/// downstream assembler and must not drift.
pub fn write_font<W: Write>(out: &mut W, table: &FontTable, symbol: &str) -> Result<()> {
    FontHeader::new(table, symbol).write(out)?;
    write_glyphs(out, table)?;
    write_footer(out, symbol)?;
    Ok(())
}

/// Renders the asset to a string.
pub fn render(table: &FontTable, symbol: &str) -> String {
    let mut buf = Vec::new();
    write_font(&mut buf, table, symbol).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("rendered asset is always ASCII")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{layout::SYS8, pack::FontTable};
    use image::{GrayImage, Luma};

    const SYMBOL: &str = "gbalatro_sys8";

    fn blank_table() -> FontTable {
        let img = GrayImage::from_pixel(SYS8.sheet_width(), SYS8.sheet_height(), Luma([255]));
        FontTable::from_image(&img, &SYS8).unwrap()
    }

    #[test]
    fn test_header_matches_fixed_template() {
        let text = render(&blank_table(), SYMBOL);
        let expected = "\n\n@{{BLOCK(gbalatro_sys8)\n\n    .section .rodata\n    .align\t2\n    .global\tgbalatro_sys8Font\ngbalatro_sys8Font:\n    .word\tgbalatro_sys8Glyphs, 0, 0\n    .hword\t32, 96\n    .byte\t8, 8\n    .byte\t8, 8\n    .hword\t8\n    .byte\t1, 0\n\n    .section .rodata\n    .align\t2\n    .global gbalatro_sys8Glyphs\t\t@ 768 bytes (192 unsigned ints)\ngbalatro_sys8Glyphs:\n";
        assert!(text.starts_with(expected));
    }

    #[test]
    fn test_footer_closes_block() {
        let text = render(&blank_table(), SYMBOL);
        assert!(text.ends_with("\n\n@}}BLOCK(gbalatro_sys8)\n"));
    }

    #[test]
    fn test_body_is_24_word_lines_of_8_words() {
        let text = render(&blank_table(), SYMBOL);
        let data_lines: Vec<&str> =
            text.lines().filter(|l| l.starts_with("    .word 0x")).collect();
        assert_eq!(data_lines.len(), 24);
        for line in &data_lines {
            assert_eq!(line.matches("0x").count(), 8);
            assert_eq!(line.matches(',').count(), 7);
            assert!(!line.ends_with(','));
        }
    }

    #[test]
    fn test_words_are_zero_padded_uppercase_hex() {
        let mut img = GrayImage::from_pixel(SYS8.sheet_width(), SYS8.sheet_height(), Luma([255]));
        // drawn pixel at (3, 1): first glyph, flattened index 11
        img.put_pixel(3, 1, Luma([0]));
        let table = FontTable::from_image(&img, &SYS8).unwrap();

        let text = render(&table, SYMBOL);
        assert!(text.contains("    .word 0x00000800,0x00000000,"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let table = blank_table();
        assert_eq!(render(&table, SYMBOL), render(&table, SYMBOL));
    }
}
