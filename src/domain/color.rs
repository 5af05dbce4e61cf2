use serde::{Serialize, Serializer};
use std::fmt;

/// An opaque sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const FOREST_GREEN: Color = Color::rgb(0x22, 0x8B, 0x22);
    pub const LIME_GREEN: Color = Color::rgb(0x32, 0xCD, 0x32);
    pub const DARK_GREEN: Color = Color::rgb(0x00, 0x64, 0x00);
    pub const SANDY_TAN: Color = Color::rgb(0xF4, 0xA4, 0x60);
    pub const ROYAL_BLUE: Color = Color::rgb(0x41, 0x69, 0xE1);
    pub const TAN: Color = Color::rgb(0xC2, 0xB2, 0x80);
    pub const GRAY: Color = Color::rgb(0x80, 0x80, 0x80);
    pub const GOLD: Color = Color::rgb(0xFF, 0xD7, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const RED: Color = Color::rgb(0xFF, 0x00, 0x00);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    /// `#RRGGBB`
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

/// Fill colour for a surface type. Unknown or missing types are gray.
pub fn surface_color(surface_type: Option<&str>) -> Color {
    match surface_type {
        Some("Green") => Color::FOREST_GREEN,
        Some("Fairway") => Color::LIME_GREEN,
        Some("Rough") => Color::DARK_GREEN,
        Some("Bunker") => Color::SANDY_TAN,
        Some("Water") => Color::ROYAL_BLUE,
        Some("Woods") => Color::DARK_GREEN,
        Some("Sand") => Color::TAN,
        _ => Color::GRAY,
    }
}

/// Marker colour for a vector type. Unknown or missing types are black.
pub fn marker_color(vector_type: Option<&str>) -> Color {
    match vector_type {
        Some("Flag") => Color::GOLD,
        Some("White") => Color::WHITE,
        Some("Red") => Color::RED,
        _ => Color::BLACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_color_table() {
        assert_eq!(surface_color(Some("Green")), Color::FOREST_GREEN);
        assert_eq!(surface_color(Some("Fairway")), Color::LIME_GREEN);
        assert_eq!(surface_color(Some("Rough")), Color::DARK_GREEN);
        assert_eq!(surface_color(Some("Bunker")), Color::SANDY_TAN);
        assert_eq!(surface_color(Some("Water")), Color::ROYAL_BLUE);
        assert_eq!(surface_color(Some("Woods")), Color::DARK_GREEN);
        assert_eq!(surface_color(Some("Sand")), Color::TAN);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(surface_color(None), Color::GRAY);
        assert_eq!(surface_color(Some("Unknown")), Color::GRAY);
        // Lookup is case sensitive
        assert_eq!(surface_color(Some("green")), Color::GRAY);

        assert_eq!(marker_color(None), Color::BLACK);
        assert_eq!(marker_color(Some("Blue")), Color::BLACK);
        assert_eq!(marker_color(Some("Flag")), Color::GOLD);
        assert_eq!(marker_color(Some("White")), Color::WHITE);
        assert_eq!(marker_color(Some("Red")), Color::RED);
    }

    #[test]
    fn test_hex_and_serialize() {
        assert_eq!(Color::ROYAL_BLUE.hex(), "#4169E1");
        assert_eq!(Color::GOLD.to_string(), "#FFD700");
        let json = serde_json::to_string(&Color::TAN).unwrap();
        assert_eq!(json, "\"#C2B280\"");
    }
}
