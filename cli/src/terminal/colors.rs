use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 120, g: 200, b: 120 };
pub const ACCENT: Color = Color::TrueColor { r: 230, g: 190, b: 90 };
pub const SEPARATOR: Color = Color::TrueColor { r: 110, g: 110, b: 110 };
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 220, g: 220, b: 220 };
pub const IPV4_ADDR: Color = Color::TrueColor { r: 100, g: 180, b: 240 };
pub const IPV6_ADDR: Color = Color::TrueColor { r: 190, g: 140, b: 230 };
