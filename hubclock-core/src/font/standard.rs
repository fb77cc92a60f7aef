//! 5x7 general-purpose font, row-major

use super::{Font, Glyph};

pub static STANDARD_5X7: Font = Font::new(7, GLYPHS);

#[rustfmt::skip]
const GLYPHS: &[(char, Glyph)] = &[
    (' ', Glyph::rows(3, &[0, 0, 0, 0, 0, 0, 0])),
    ('!', Glyph::rows(1, &[1, 1, 1, 1, 1, 0, 1])),
    ('%', Glyph::rows(5, &[0b11000, 0b11001, 0b00010, 0b00100, 0b01000, 0b10011, 0b00011])),
    ('-', Glyph::rows(5, &[0, 0, 0, 0b11111, 0, 0, 0])),
    ('.', Glyph::rows(2, &[0, 0, 0, 0, 0, 0b11, 0b11])),
    ('/', Glyph::rows(5, &[0, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0])),
    ('0', Glyph::rows(5, &[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110])),
    ('1', Glyph::rows(5, &[0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110])),
    ('2', Glyph::rows(5, &[0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111])),
    ('3', Glyph::rows(5, &[0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110])),
    ('4', Glyph::rows(5, &[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010])),
    ('5', Glyph::rows(5, &[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110])),
    ('6', Glyph::rows(5, &[0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110])),
    ('7', Glyph::rows(5, &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000])),
    ('8', Glyph::rows(5, &[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110])),
    ('9', Glyph::rows(5, &[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100])),
    (':', Glyph::rows(2, &[0, 0b11, 0b11, 0, 0b11, 0b11, 0])),
    ('?', Glyph::rows(5, &[0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0, 0b00100])),
    ('A', Glyph::rows(5, &[0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001])),
    ('B', Glyph::rows(5, &[0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110])),
    ('C', Glyph::rows(5, &[0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110])),
    ('D', Glyph::rows(5, &[0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100])),
    ('E', Glyph::rows(5, &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111])),
    ('F', Glyph::rows(5, &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000])),
    ('G', Glyph::rows(5, &[0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111])),
    ('H', Glyph::rows(5, &[0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001])),
    ('I', Glyph::rows(5, &[0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110])),
    ('J', Glyph::rows(5, &[0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100])),
    ('K', Glyph::rows(5, &[0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001])),
    ('L', Glyph::rows(5, &[0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111])),
    ('M', Glyph::rows(5, &[0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001])),
    ('N', Glyph::rows(5, &[0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001])),
    ('O', Glyph::rows(5, &[0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110])),
    ('P', Glyph::rows(5, &[0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000])),
    ('Q', Glyph::rows(5, &[0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101])),
    ('R', Glyph::rows(5, &[0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001])),
    ('S', Glyph::rows(5, &[0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110])),
    ('T', Glyph::rows(5, &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100])),
    ('U', Glyph::rows(5, &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110])),
    ('V', Glyph::rows(5, &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100])),
    ('W', Glyph::rows(5, &[0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010])),
    ('X', Glyph::rows(5, &[0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001])),
    ('Y', Glyph::rows(5, &[0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100])),
    ('Z', Glyph::rows(5, &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111])),
    ('|', Glyph::rows(1, &[1, 1, 1, 1, 1, 1, 1])),
];
