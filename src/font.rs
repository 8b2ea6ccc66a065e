//! 6×8 glyph table.
//!
//! One entry per byte value. Each glyph is six pixel columns; bit 0 of a
//! column is the top row of the bank. Printable glyphs leave their first
//! column blank for inter-character spacing (`_` runs the full width so
//! underscores join up).
//!
//! Codes 0x01..=0x1F and 0x80..=0xFE follow the IBM code page 437 layout.

/// Width of a glyph in pixel columns.
pub const FONT_WIDTH: usize = 6;

/// Height of a glyph in pixel rows (one bank).
pub const FONT_HEIGHT: usize = 8;

/// Pixel columns of a single glyph.
pub type Glyph = [u8; FONT_WIDTH];

/// Glyph table indexed by character code.
#[rustfmt::skip]
pub static FONT: [Glyph; 256] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x00
    [0x00, 0x3e, 0x45, 0x51, 0x45, 0x3e], // 0x01
    [0x00, 0x3e, 0x7b, 0x6f, 0x7b, 0x3e], // 0x02
    [0x00, 0x1c, 0x3e, 0x7c, 0x3e, 0x1c], // 0x03
    [0x00, 0x18, 0x3c, 0x7e, 0x3c, 0x18], // 0x04
    [0x00, 0x18, 0x5e, 0x6e, 0x5e, 0x18], // 0x05
    [0x00, 0x18, 0x5c, 0x6e, 0x5c, 0x18], // 0x06
    [0x00, 0x00, 0x18, 0x18, 0x00, 0x00], // 0x07
    [0xff, 0xff, 0xe7, 0xe7, 0xff, 0xff], // 0x08
    [0x00, 0x18, 0x24, 0x24, 0x18, 0x00], // 0x09
    [0xff, 0xe7, 0xdb, 0xdb, 0xe7, 0xff], // 0x0a
    [0x70, 0x88, 0x88, 0x8d, 0x73, 0x07], // 0x0b
    [0x00, 0x0e, 0x51, 0xf1, 0x51, 0x0e], // 0x0c
    [0x00, 0x60, 0x60, 0x3f, 0x02, 0x04], // 0x0d
    [0x60, 0x60, 0x3f, 0xc5, 0xca, 0x7c], // 0x0e
    [0x00, 0x2a, 0x1c, 0x36, 0x1c, 0x2a], // 0x0f
    [0x00, 0x3e, 0x3e, 0x1c, 0x1c, 0x08], // 0x10
    [0x00, 0x08, 0x1c, 0x1c, 0x3e, 0x3e], // 0x11
    [0x00, 0x14, 0x36, 0x7f, 0x36, 0x14], // 0x12
    [0x00, 0x00, 0x5f, 0x00, 0x5f, 0x00], // 0x13
    [0x00, 0x06, 0x09, 0x7f, 0x01, 0x7f], // 0x14
    [0x40, 0x9a, 0xa5, 0xa5, 0x59, 0x02], // 0x15
    [0x00, 0xe0, 0xe0, 0xe0, 0xe0, 0xe0], // 0x16
    [0x00, 0x94, 0xb6, 0xff, 0xb6, 0x94], // 0x17
    [0x00, 0x08, 0x0c, 0xfe, 0x0c, 0x08], // 0x18
    [0x00, 0x10, 0x30, 0x7f, 0x30, 0x10], // 0x19
    [0x08, 0x08, 0x08, 0x3e, 0x1c, 0x08], // 0x1a
    [0x08, 0x1c, 0x3e, 0x08, 0x08, 0x08], // 0x1b
    [0x00, 0x0f, 0x08, 0x08, 0x08, 0x08], // 0x1c
    [0x08, 0x1c, 0x08, 0x08, 0x1c, 0x08], // 0x1d
    [0x00, 0x60, 0x78, 0x7e, 0x78, 0x60], // 0x1e
    [0x00, 0x06, 0x1e, 0x7e, 0x1e, 0x06], // 0x1f
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x20
    [0x00, 0x00, 0x00, 0x5f, 0x00, 0x00], // 0x21
    [0x00, 0x00, 0x07, 0x00, 0x07, 0x00], // 0x22
    [0x00, 0x14, 0x7f, 0x14, 0x7f, 0x14], // 0x23
    [0x00, 0x24, 0x2a, 0x6b, 0x2a, 0x12], // 0x24
    [0x00, 0x22, 0x15, 0x2a, 0x54, 0x22], // 0x25
    [0x00, 0x36, 0x49, 0x56, 0x20, 0x50], // 0x26
    [0x00, 0x00, 0x0b, 0x07, 0x00, 0x00], // 0x27
    [0x00, 0x00, 0x3e, 0x41, 0x00, 0x00], // 0x28
    [0x00, 0x00, 0x00, 0x41, 0x3e, 0x00], // 0x29
    [0x00, 0x08, 0x2a, 0x1c, 0x2a, 0x08], // 0x2a
    [0x00, 0x08, 0x08, 0x3e, 0x08, 0x08], // 0x2b
    [0x00, 0x00, 0xa0, 0x60, 0x00, 0x00], // 0x2c
    [0x00, 0x08, 0x08, 0x08, 0x08, 0x08], // 0x2d
    [0x00, 0x00, 0x60, 0x60, 0x00, 0x00], // 0x2e
    [0x00, 0x60, 0x30, 0x18, 0x0c, 0x06], // 0x2f
    [0x00, 0x3e, 0x51, 0x49, 0x45, 0x3e], // 0x30
    [0x00, 0x00, 0x42, 0x7f, 0x40, 0x00], // 0x31
    [0x00, 0x62, 0x51, 0x49, 0x49, 0x46], // 0x32
    [0x00, 0x22, 0x49, 0x49, 0x49, 0x36], // 0x33
    [0x00, 0x18, 0x14, 0x52, 0x7f, 0x50], // 0x34
    [0x00, 0x27, 0x45, 0x45, 0x45, 0x39], // 0x35
    [0x00, 0x3c, 0x4a, 0x49, 0x49, 0x30], // 0x36
    [0x00, 0x01, 0x01, 0x79, 0x05, 0x03], // 0x37
    [0x00, 0x36, 0x49, 0x49, 0x49, 0x36], // 0x38
    [0x00, 0x06, 0x49, 0x49, 0x29, 0x1e], // 0x39
    [0x00, 0x00, 0x6c, 0x6c, 0x00, 0x00], // 0x3a
    [0x00, 0x00, 0xac, 0x6c, 0x00, 0x00], // 0x3b
    [0x00, 0x08, 0x14, 0x22, 0x41, 0x00], // 0x3c
    [0x00, 0x14, 0x14, 0x14, 0x14, 0x14], // 0x3d
    [0x00, 0x00, 0x41, 0x22, 0x14, 0x08], // 0x3e
    [0x00, 0x06, 0x01, 0x51, 0x09, 0x06], // 0x3f
    [0x00, 0x3e, 0x41, 0x5d, 0x55, 0x5e], // 0x40
    [0x00, 0x7e, 0x11, 0x11, 0x11, 0x7e], // 0x41
    [0x00, 0x7f, 0x49, 0x49, 0x49, 0x36], // 0x42
    [0x00, 0x3e, 0x41, 0x41, 0x41, 0x22], // 0x43
    [0x00, 0x7f, 0x41, 0x41, 0x22, 0x1c], // 0x44
    [0x00, 0x7f, 0x49, 0x49, 0x49, 0x41], // 0x45
    [0x00, 0x7f, 0x09, 0x09, 0x09, 0x01], // 0x46
    [0x00, 0x3e, 0x41, 0x41, 0x51, 0x72], // 0x47
    [0x00, 0x7f, 0x08, 0x08, 0x08, 0x7f], // 0x48
    [0x00, 0x00, 0x41, 0x7f, 0x41, 0x00], // 0x49
    [0x00, 0x30, 0x40, 0x40, 0x40, 0x3f], // 0x4a
    [0x00, 0x7f, 0x08, 0x14, 0x22, 0x41], // 0x4b
    [0x00, 0x7f, 0x40, 0x40, 0x40, 0x40], // 0x4c
    [0x00, 0x7f, 0x06, 0x18, 0x06, 0x7f], // 0x4d
    [0x00, 0x7f, 0x06, 0x08, 0x30, 0x7f], // 0x4e
    [0x00, 0x3e, 0x41, 0x41, 0x41, 0x3e], // 0x4f
    [0x00, 0x7f, 0x09, 0x09, 0x09, 0x06], // 0x50
    [0x00, 0x3e, 0x41, 0x51, 0x21, 0x5e], // 0x51
    [0x00, 0x7f, 0x09, 0x09, 0x19, 0x66], // 0x52
    [0x00, 0x26, 0x49, 0x49, 0x49, 0x32], // 0x53
    [0x00, 0x01, 0x01, 0x7f, 0x01, 0x01], // 0x54
    [0x00, 0x3f, 0x40, 0x40, 0x40, 0x3f], // 0x55
    [0x00, 0x07, 0x18, 0x60, 0x18, 0x07], // 0x56
    [0x00, 0x7f, 0x20, 0x18, 0x20, 0x7f], // 0x57
    [0x00, 0x63, 0x14, 0x08, 0x14, 0x63], // 0x58
    [0x00, 0x03, 0x0c, 0x78, 0x0c, 0x03], // 0x59
    [0x00, 0x61, 0x51, 0x49, 0x45, 0x43], // 0x5a
    [0x00, 0x00, 0x7f, 0x41, 0x41, 0x00], // 0x5b
    [0x00, 0x06, 0x0c, 0x18, 0x30, 0x60], // 0x5c
    [0x00, 0x00, 0x41, 0x41, 0x7f, 0x00], // 0x5d
    [0x00, 0x04, 0x02, 0x01, 0x02, 0x04], // 0x5e
    [0x80, 0x80, 0x80, 0x80, 0x80, 0x80], // 0x5f
    [0x00, 0x00, 0x00, 0x01, 0x02, 0x00], // 0x60
    [0x00, 0x20, 0x54, 0x54, 0x54, 0x78], // 0x61
    [0x00, 0x7f, 0x28, 0x44, 0x44, 0x38], // 0x62
    [0x00, 0x38, 0x44, 0x44, 0x44, 0x28], // 0x63
    [0x00, 0x38, 0x44, 0x44, 0x28, 0x7f], // 0x64
    [0x00, 0x38, 0x54, 0x54, 0x54, 0x18], // 0x65
    [0x00, 0x08, 0x7e, 0x09, 0x01, 0x02], // 0x66
    [0x00, 0x18, 0xa4, 0xa4, 0xa8, 0x7c], // 0x67
    [0x00, 0x7f, 0x08, 0x04, 0x04, 0x78], // 0x68
    [0x00, 0x00, 0x44, 0x7d, 0x40, 0x00], // 0x69
    [0x00, 0x40, 0x80, 0x84, 0x7d, 0x00], // 0x6a
    [0x00, 0x7f, 0x10, 0x28, 0x44, 0x00], // 0x6b
    [0x00, 0x00, 0x41, 0x7f, 0x40, 0x00], // 0x6c
    [0x00, 0x7c, 0x04, 0x78, 0x04, 0x78], // 0x6d
    [0x00, 0x7c, 0x08, 0x04, 0x04, 0x78], // 0x6e
    [0x00, 0x38, 0x44, 0x44, 0x44, 0x38], // 0x6f
    [0x00, 0xfc, 0x28, 0x44, 0x44, 0x38], // 0x70
    [0x00, 0x38, 0x44, 0x44, 0x28, 0xfc], // 0x71
    [0x00, 0x44, 0x78, 0x44, 0x04, 0x08], // 0x72
    [0x00, 0x48, 0x54, 0x54, 0x54, 0x24], // 0x73
    [0x00, 0x04, 0x3f, 0x44, 0x40, 0x20], // 0x74
    [0x00, 0x3c, 0x40, 0x40, 0x20, 0x7c], // 0x75
    [0x00, 0x1c, 0x20, 0x40, 0x20, 0x1c], // 0x76
    [0x00, 0x3c, 0x40, 0x30, 0x40, 0x3c], // 0x77
    [0x00, 0x44, 0x28, 0x10, 0x28, 0x44], // 0x78
    [0x00, 0x1c, 0xa0, 0xa0, 0xa0, 0x7c], // 0x79
    [0x00, 0x44, 0x64, 0x54, 0x4c, 0x44], // 0x7a
    [0x00, 0x08, 0x36, 0x41, 0x41, 0x00], // 0x7b
    [0x00, 0x00, 0x00, 0x7f, 0x00, 0x00], // 0x7c
    [0x00, 0x00, 0x41, 0x41, 0x36, 0x08], // 0x7d
    [0x00, 0x02, 0x01, 0x02, 0x04, 0x02], // 0x7e
    [0x00, 0x78, 0x44, 0x42, 0x44, 0x78], // 0x7f
    [0x00, 0xbe, 0xc1, 0xc1, 0x41, 0x22], // 0x80
    [0x00, 0x3c, 0x41, 0x40, 0x21, 0x7c], // 0x81
    [0x00, 0x38, 0x54, 0x56, 0x55, 0x18], // 0x82
    [0x00, 0x20, 0x56, 0x55, 0x56, 0x78], // 0x83
    [0x00, 0x20, 0x55, 0x54, 0x55, 0x78], // 0x84
    [0x00, 0x20, 0x55, 0x56, 0x54, 0x78], // 0x85
    [0x00, 0x20, 0x54, 0x55, 0x54, 0x78], // 0x86
    [0x00, 0xb8, 0xc4, 0xc4, 0x44, 0x28], // 0x87
    [0x00, 0x38, 0x56, 0x55, 0x56, 0x18], // 0x88
    [0x00, 0x38, 0x55, 0x54, 0x55, 0x18], // 0x89
    [0x00, 0x38, 0x55, 0x56, 0x54, 0x18], // 0x8a
    [0x00, 0x00, 0x45, 0x7c, 0x41, 0x00], // 0x8b
    [0x00, 0x00, 0x46, 0x7d, 0x42, 0x00], // 0x8c
    [0x00, 0x00, 0x45, 0x7e, 0x40, 0x00], // 0x8d
    [0x00, 0x7c, 0x13, 0x12, 0x13, 0x7c], // 0x8e
    [0x00, 0x7c, 0x12, 0x13, 0x12, 0x7c], // 0x8f
    [0x00, 0x7e, 0x4a, 0x4b, 0x4b, 0x43], // 0x90
    [0x00, 0x74, 0x54, 0x78, 0x54, 0x5c], // 0x91
    [0x00, 0x7e, 0x09, 0x7e, 0x49, 0x49], // 0x92
    [0x00, 0x38, 0x46, 0x45, 0x46, 0x38], // 0x93
    [0x00, 0x38, 0x45, 0x44, 0x45, 0x38], // 0x94
    [0x00, 0x38, 0x45, 0x46, 0x44, 0x38], // 0x95
    [0x00, 0x3c, 0x42, 0x41, 0x22, 0x7c], // 0x96
    [0x00, 0x3c, 0x41, 0x42, 0x20, 0x7c], // 0x97
    [0x00, 0x1c, 0xa1, 0xa0, 0xa1, 0x7c], // 0x98
    [0x00, 0x3c, 0x43, 0x42, 0x43, 0x3c], // 0x99
    [0x00, 0x3e, 0x41, 0x40, 0x41, 0x3e], // 0x9a
    [0x00, 0x38, 0x44, 0xc6, 0x44, 0x28], // 0x9b
    [0x00, 0x48, 0x7e, 0x49, 0x49, 0x42], // 0x9c
    [0x00, 0x29, 0x2a, 0xfc, 0x2a, 0x29], // 0x9d
    [0x00, 0x7f, 0x09, 0x29, 0xf6, 0xa0], // 0x9e
    [0x00, 0x40, 0x88, 0x7e, 0x09, 0x02], // 0x9f
    [0x00, 0x20, 0x54, 0x56, 0x55, 0x78], // 0xa0
    [0x00, 0x00, 0x44, 0x7e, 0x41, 0x00], // 0xa1
    [0x00, 0x38, 0x44, 0x46, 0x45, 0x38], // 0xa2
    [0x00, 0x3c, 0x40, 0x42, 0x21, 0x7c], // 0xa3
    [0x00, 0x7c, 0x09, 0x05, 0x05, 0x78], // 0xa4
    [0x00, 0x7e, 0x0d, 0x19, 0x31, 0x7e], // 0xa5
    [0x00, 0x26, 0x29, 0x29, 0x27, 0x28], // 0xa6
    [0x00, 0x26, 0x29, 0x29, 0x26, 0x00], // 0xa7
    [0x00, 0x30, 0x48, 0x45, 0x40, 0x30], // 0xa8
    [0x00, 0x78, 0x08, 0x08, 0x08, 0x08], // 0xa9
    [0x08, 0x08, 0x08, 0x08, 0x78, 0x00], // 0xaa
    [0x00, 0x17, 0x08, 0x04, 0x6a, 0x58], // 0xab
    [0x00, 0x17, 0x08, 0x34, 0x22, 0x70], // 0xac
    [0x00, 0x00, 0x00, 0x7d, 0x00, 0x00], // 0xad
    [0x08, 0x14, 0x22, 0x08, 0x14, 0x22], // 0xae
    [0x22, 0x14, 0x08, 0x22, 0x14, 0x08], // 0xaf
    [0x11, 0x44, 0x11, 0x44, 0x11, 0x44], // 0xb0
    [0x55, 0xaa, 0x55, 0xaa, 0x55, 0xaa], // 0xb1
    [0xee, 0xbb, 0xee, 0xbb, 0xee, 0xbb], // 0xb2
    [0x00, 0x00, 0x00, 0xff, 0x00, 0x00], // 0xb3
    [0x08, 0x08, 0x08, 0xff, 0x00, 0x00], // 0xb4
    [0x14, 0x14, 0x14, 0xff, 0x00, 0x00], // 0xb5
    [0x08, 0x08, 0xff, 0x00, 0xff, 0x00], // 0xb6
    [0x08, 0x08, 0xf8, 0x08, 0xf8, 0x00], // 0xb7
    [0x14, 0x14, 0x14, 0xfc, 0x00, 0x00], // 0xb8
    [0x14, 0x14, 0xf7, 0x00, 0xff, 0x00], // 0xb9
    [0x00, 0x00, 0xff, 0x00, 0xff, 0x00], // 0xba
    [0x14, 0x14, 0xf4, 0x04, 0xfc, 0x00], // 0xbb
    [0x14, 0x14, 0x17, 0x10, 0x1f, 0x00], // 0xbc
    [0x08, 0x08, 0x0f, 0x08, 0x0f, 0x00], // 0xbd
    [0x14, 0x14, 0x14, 0x1f, 0x00, 0x00], // 0xbe
    [0x08, 0x08, 0x08, 0xf8, 0x00, 0x00], // 0xbf
    [0x00, 0x00, 0x00, 0x0f, 0x08, 0x08], // 0xc0
    [0x08, 0x08, 0x08, 0x0f, 0x08, 0x08], // 0xc1
    [0x08, 0x08, 0x08, 0xf8, 0x08, 0x08], // 0xc2
    [0x00, 0x00, 0x00, 0xff, 0x08, 0x08], // 0xc3
    [0x08, 0x08, 0x08, 0x08, 0x08, 0x08], // 0xc4
    [0x08, 0x08, 0x08, 0xff, 0x08, 0x08], // 0xc5
    [0x00, 0x00, 0x00, 0xff, 0x14, 0x14], // 0xc6
    [0x00, 0x00, 0xff, 0x00, 0xff, 0x08], // 0xc7
    [0x00, 0x00, 0x1f, 0x10, 0x17, 0x14], // 0xc8
    [0x00, 0x00, 0xfc, 0x04, 0xf4, 0x14], // 0xc9
    [0x14, 0x14, 0x17, 0x10, 0x17, 0x14], // 0xca
    [0x14, 0x14, 0xf4, 0x04, 0xf4, 0x14], // 0xcb
    [0x00, 0x00, 0xff, 0x00, 0xf7, 0x14], // 0xcc
    [0x14, 0x14, 0x14, 0x14, 0x14, 0x14], // 0xcd
    [0x14, 0x14, 0xf7, 0x00, 0xf7, 0x14], // 0xce
    [0x14, 0x14, 0x14, 0x17, 0x14, 0x14], // 0xcf
    [0x08, 0x08, 0x0f, 0x08, 0x0f, 0x08], // 0xd0
    [0x14, 0x14, 0x14, 0xf4, 0x14, 0x14], // 0xd1
    [0x08, 0x08, 0xf8, 0x08, 0xf8, 0x08], // 0xd2
    [0x00, 0x00, 0x0f, 0x08, 0x0f, 0x08], // 0xd3
    [0x00, 0x00, 0x00, 0x1f, 0x14, 0x14], // 0xd4
    [0x00, 0x00, 0x00, 0xfc, 0x14, 0x14], // 0xd5
    [0x00, 0x00, 0xf8, 0x08, 0xf8, 0x08], // 0xd6
    [0x08, 0x08, 0xff, 0x08, 0xff, 0x08], // 0xd7
    [0x14, 0x14, 0x14, 0xff, 0x14, 0x14], // 0xd8
    [0x08, 0x08, 0x08, 0x0f, 0x00, 0x00], // 0xd9
    [0x00, 0x00, 0x00, 0xf8, 0x08, 0x08], // 0xda
    [0xff, 0xff, 0xff, 0xff, 0xff, 0xff], // 0xdb
    [0xf0, 0xf0, 0xf0, 0xf0, 0xf0, 0xf0], // 0xdc
    [0xff, 0xff, 0xff, 0x00, 0x00, 0x00], // 0xdd
    [0x00, 0x00, 0x00, 0xff, 0xff, 0xff], // 0xde
    [0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x0f], // 0xdf
    [0x00, 0x38, 0x44, 0x44, 0x38, 0x44], // 0xe0
    [0x40, 0x7c, 0x02, 0x4a, 0x4a, 0x34], // 0xe1
    [0x00, 0x7f, 0x01, 0x01, 0x01, 0x01], // 0xe2
    [0x04, 0x7c, 0x04, 0x04, 0x7c, 0x04], // 0xe3
    [0x00, 0x63, 0x55, 0x49, 0x41, 0x41], // 0xe4
    [0x00, 0x38, 0x44, 0x44, 0x4c, 0x34], // 0xe5
    [0x00, 0xfc, 0x40, 0x40, 0x40, 0x7c], // 0xe6
    [0x00, 0x08, 0x04, 0x7c, 0x08, 0x04], // 0xe7
    [0x00, 0x1c, 0x63, 0x7f, 0x63, 0x1c], // 0xe8
    [0x00, 0x3e, 0x49, 0x49, 0x49, 0x3e], // 0xe9
    [0x00, 0x5e, 0x61, 0x01, 0x61, 0x5e], // 0xea
    [0x00, 0x38, 0x46, 0x45, 0x45, 0x3a], // 0xeb
    [0x38, 0x44, 0x44, 0x38, 0x44, 0x38], // 0xec
    [0x00, 0x38, 0xc4, 0x7c, 0x46, 0x38], // 0xed
    [0x00, 0x1c, 0x2a, 0x49, 0x49, 0x00], // 0xee
    [0x00, 0x7e, 0x01, 0x01, 0x01, 0x7e], // 0xef
    [0x00, 0x2a, 0x2a, 0x2a, 0x2a, 0x2a], // 0xf0
    [0x00, 0x48, 0x48, 0x7e, 0x48, 0x48], // 0xf1
    [0x00, 0x00, 0xc1, 0xa2, 0x94, 0x88], // 0xf2
    [0x00, 0x88, 0x94, 0xa2, 0xc1, 0x00], // 0xf3
    [0x00, 0x00, 0x00, 0xfc, 0x02, 0x0c], // 0xf4
    [0x00, 0x30, 0x40, 0x3f, 0x00, 0x00], // 0xf5
    [0x00, 0x08, 0x08, 0x2a, 0x08, 0x08], // 0xf6
    [0x00, 0x24, 0x12, 0x24, 0x48, 0x24], // 0xf7
    [0x00, 0x06, 0x09, 0x09, 0x06, 0x00], // 0xf8
    [0x00, 0x00, 0x18, 0x18, 0x00, 0x00], // 0xf9
    [0x00, 0x00, 0x08, 0x00, 0x00, 0x00], // 0xfa
    [0x10, 0x20, 0x40, 0xff, 0x01, 0x01], // 0xfb
    [0x00, 0x00, 0x0f, 0x02, 0x01, 0x0e], // 0xfc
    [0x00, 0x00, 0x09, 0x0d, 0x0a, 0x00], // 0xfd
    [0x00, 0x3c, 0x3c, 0x3c, 0x3c, 0x00], // 0xfe
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xff
];

/// Look up the glyph for a character code.
#[inline]
pub fn glyph(code: u8) -> &'static Glyph {
    &FONT[usize::from(code)]
}
