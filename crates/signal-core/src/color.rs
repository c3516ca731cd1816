//! Packed RGBA colours written as presentation side effects.

/// A packed `0xAABBGGRR` colour, the layout the renderer consumes.
///
/// The simulation only ever writes colours (green on a counted read,
/// red on a counted write); it never reads them back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    /// Opaque black, the colour of an idle node.
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    /// Write feedback.
    pub const RED: Color = Color::rgb(0xea, 0x55, 0x55);
    /// Read feedback.
    pub const GREEN: Color = Color::rgb(0x55, 0xf0, 0x55);

    /// Pack an opaque colour from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(0xff00_0000 | ((b as u32) << 16) | ((g as u32) << 8) | r as u32)
    }

    /// Red channel.
    pub fn r(self) -> u8 {
        self.0 as u8
    }

    /// Green channel.
    pub fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    pub fn b(self) -> u8 {
        (self.0 >> 16) as u8
    }
}
