use serde::{Deserialize, Serialize};

/// A fully resolved, opaque RGB color.
///
/// The rendered document never carries unresolved color references; theme
/// tokens and hex strings are resolved by the style resolver before they
/// reach this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Formats the color as a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Named theme color slots a specification may reference instead of a
/// literal RGB value. The engine maps each slot to a concrete color through
/// an immutable palette configured at resolver construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThemeColor {
    Dark1,
    Light1,
    Dark2,
    Light2,
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
    Hyperlink,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_formatting() {
        assert_eq!(Color::new(46, 204, 113).to_hex(), "#2ecc71");
        assert_eq!(Color::BLACK.to_hex(), "#000000");
    }
}
