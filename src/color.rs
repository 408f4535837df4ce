//! RGBA color with a stable hex key used to deduplicate color regions.

use crate::error::PixvgError;

/// An RGBA color. Equality is componentwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Construct a color from arbitrary integer channels, validating that
    /// each falls in [0, 255]. Decoded image pixels are always valid `u8`s
    /// and go through [`Color::new`] instead; this constructor exists for
    /// API callers building colors by hand.
    pub fn from_components(r: u32, g: u32, b: u32, a: u32) -> Result<Self, PixvgError> {
        let channel = |name: &'static str, value: u32| -> Result<u8, PixvgError> {
            u8::try_from(value).map_err(|_| PixvgError::InvalidColorComponent {
                channel: name,
                value,
            })
        };
        Ok(Color {
            r: channel("r", r)?,
            g: channel("g", g)?,
            b: channel("b", b)?,
            a: channel("a", a)?,
        })
    }

    /// The canonical stable hex key `#RRGGBBAA` used for deduplication.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}
