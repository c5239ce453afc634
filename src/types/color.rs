//! Color string parsing and conversion helpers.
//!
//! Config color values stay strings on the wire (`"#fff"`, `"#C51E14"`,
//! `"rgba(248,28,229,0.8)"`); [`Rgba`] is the parsed form handed to the
//! renderer.

/// A parsed RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in 0.0..=1.0.
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a config color string.
    ///
    /// Accepted forms:
    /// - `#rgb` and `#rrggbb` hex (alpha 1.0)
    /// - `rgb(r, g, b)` with 0-255 components
    /// - `rgba(r, g, b, a)` with 0-255 components and 0.0-1.0 alpha
    ///
    /// Returns `None` for anything else.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some(hex) = value.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        if let Some(body) = value
            .strip_prefix("rgba(")
            .and_then(|s| s.strip_suffix(')'))
        {
            return Self::parse_components(body, true);
        }
        if let Some(body) = value.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
            return Self::parse_components(body, false);
        }
        None
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        // Byte-index slicing below requires single-byte chars; hex digits
        // are ASCII, so anything else cannot be a valid payload anyway.
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                // #rgb shorthand: each digit doubled
                let mut channels = [0u8; 3];
                for (i, ch) in hex.chars().enumerate() {
                    let digit = ch.to_digit(16)? as u8;
                    channels[i] = digit << 4 | digit;
                }
                Some(Self::new(channels[0], channels[1], channels[2], 1.0))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b, 1.0))
            }
            _ => None,
        }
    }

    fn parse_components(body: &str, with_alpha: bool) -> Option<Self> {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if with_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return None;
        }
        let r = parts[0].parse::<u8>().ok()?;
        let g = parts[1].parse::<u8>().ok()?;
        let b = parts[2].parse::<u8>().ok()?;
        let a = if with_alpha {
            let a = parts[3].parse::<f32>().ok()?;
            if !(0.0..=1.0).contains(&a) {
                return None;
            }
            a
        } else {
            1.0
        };
        Some(Self::new(r, g, b, a))
    }

    /// Convert to `[f32; 4]` normalized to 0.0..1.0 for the render pipeline.
    #[inline]
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a,
        ]
    }

    /// RGB channels as a `[u8; 3]` array, discarding alpha.
    #[inline]
    pub fn as_rgb_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Whether `value` is a recognized color string (hex or rgb/rgba syntax).
pub fn is_valid_color(value: &str) -> bool {
    Rgba::parse(value).is_some()
}
