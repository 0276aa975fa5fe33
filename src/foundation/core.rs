use crate::foundation::error::{ReelError, ReelResult};

pub use kurbo::{Point, Vec2};

/// Straight (non-premultiplied) RGBA8 colour, serialized as `#RRGGBB` / `#RRGGBBAA`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn from_hex(s: &str) -> ReelResult<Self> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(ReelError::validation(format!(
                "colour '{s}' must be #RRGGBB or #RRGGBBAA"
            )));
        }

        let channel = |i: usize| -> ReelResult<u8> {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ReelError::validation(format!("colour '{s}' has non-hex digits")))
        };

        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: if digits.len() == 8 { channel(6)? } else { 255 },
        })
    }

    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = ReelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgba8> for String {
    fn from(value: Rgba8) -> Self {
        value.to_hex()
    }
}

/// Visible scene area in scene units, centred on the origin with +y pointing up.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneFrame {
    pub width: f64,
    pub height: f64,
}

impl Default for SceneFrame {
    fn default() -> Self {
        Self {
            width: 14.222,
            height: 8.0,
        }
    }
}

impl SceneFrame {
    pub fn validate(&self) -> ReelResult<()> {
        if !(self.width.is_finite() && self.width > 0.0)
            || !(self.height.is_finite() && self.height > 0.0)
        {
            return Err(ReelError::validation(
                "scene frame width/height must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Point on the top edge, pulled inward by `margin`.
    pub fn top(self, margin: f64) -> Point {
        Point::new(0.0, self.height * 0.5 - margin)
    }

    /// Point on the bottom edge, pulled inward by `margin`.
    pub fn bottom(self, margin: f64) -> Point {
        Point::new(0.0, -self.height * 0.5 + margin)
    }

    /// Point on the left edge, pulled inward by `margin`.
    pub fn left(self, margin: f64) -> Point {
        Point::new(-self.width * 0.5 + margin, 0.0)
    }
}
