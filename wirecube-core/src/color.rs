//! Packed RGBA colour

/// A colour packed into 32 bits as `0xRRGGBBAA`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x0000_00ff);

    pub const fn red(self) -> u8 {
        ((self.0 >> 24) & 0xff) as u8
    }

    pub const fn green(self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    pub const fn blue(self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    pub const fn alpha(self) -> u8 {
        (self.0 & 0xff) as u8
    }
}
