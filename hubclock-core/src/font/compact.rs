//! 3x5 digit font, column-major

use super::{Font, Glyph};

pub static COMPACT_3X5: Font = Font::new(5, GLYPHS);

const GLYPHS: &[(char, Glyph)] = &[
    (' ', Glyph::columns(5, &[0, 0])),
    ('%', Glyph::columns(5, &[0b10011, 0b00100, 0b11001])),
    ('-', Glyph::columns(5, &[0b00100, 0b00100, 0b00100])),
    ('.', Glyph::columns(5, &[0b00001])),
    ('/', Glyph::columns(5, &[0b00011, 0b00100, 0b11000])),
    ('0', Glyph::columns(5, &[0b11111, 0b10001, 0b11111])),
    ('1', Glyph::columns(5, &[0b01001, 0b11111, 0b00001])),
    ('2', Glyph::columns(5, &[0b10111, 0b10101, 0b11101])),
    ('3', Glyph::columns(5, &[0b10101, 0b10101, 0b11111])),
    ('4', Glyph::columns(5, &[0b11100, 0b00100, 0b11111])),
    ('5', Glyph::columns(5, &[0b11101, 0b10101, 0b10111])),
    ('6', Glyph::columns(5, &[0b11111, 0b10101, 0b10111])),
    ('7', Glyph::columns(5, &[0b10000, 0b10000, 0b11111])),
    ('8', Glyph::columns(5, &[0b11111, 0b10101, 0b11111])),
    ('9', Glyph::columns(5, &[0b11101, 0b10101, 0b11111])),
    (':', Glyph::columns(5, &[0b01010])),
    ('A', Glyph::columns(5, &[0b01111, 0b10100, 0b01111])),
    ('C', Glyph::columns(5, &[0b11111, 0b10001, 0b10001])),
    ('F', Glyph::columns(5, &[0b11111, 0b10100, 0b10000])),
    ('H', Glyph::columns(5, &[0b11111, 0b00100, 0b11111])),
    ('N', Glyph::columns(5, &[0b11111, 0b10000, 0b01111])),
    ('R', Glyph::columns(5, &[0b11111, 0b10100, 0b01011])),
    ('|', Glyph::columns(5, &[0b11111])),
];
