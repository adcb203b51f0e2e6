//! RGBA colors and their hex string form.
//!
//! Accepted strings (case-insensitive):
//!
//! | Form | Example | Meaning |
//! |---|---|---|
//! | `#rrggbb` | `#ff0000` | opaque |
//! | `#rgb` | `#f00` | each digit doubled |
//! | `#rrggbbaa` | `#ff000080` | hex alpha |
//! | `#rgba` | `#f008` | each digit doubled |
//! | `#rrggbb@a` | `#ff0000@.5` | opacity in `0..=1`, scaled to `0..=255` |
//!
//! The canonical form is `#rrggbb`, followed by `aa` only when the color is
//! not fully opaque. The empty string is the default color, opaque black.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use morph_text::{adjust, pad_left};
use regex::Regex;

use crate::foundation::{ConversionError, ConversionResult, Marshaller, Unmarshaller};

static PATTERN_HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-f]{6}$").expect("valid color pattern"));

static PATTERN_HEX_SHORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-f]{3}$").expect("valid color pattern"));

static PATTERN_HEX_ALPHA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-f]{8}$").expect("valid color pattern"));

static PATTERN_HEX_ALPHA_SHORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-f]{4}$").expect("valid color pattern"));

static PATTERN_HEX_OPACITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[0-9a-f]{6}@((0?\.\d+)|(0\.?)|(1(\.0*)?))$").expect("valid color pattern")
});

const MAX_CHANNEL: u8 = u8::MAX;

const PARSE_ERROR: &str = "cannot parse color string";

// ============================================================================
// COLOR
// ============================================================================

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

fn channel(value: i64) -> u8 {
    adjust(value, Some(0), Some(i64::from(MAX_CHANNEL))) as u8
}

impl Color {
    /// Creates an opaque color. Channels are clamped to `0..=255`.
    pub fn new(red: i64, green: i64, blue: i64) -> Self {
        Self::with_alpha(red, green, blue, i64::from(MAX_CHANNEL))
    }

    /// Creates a color. Channels are clamped to `0..=255`.
    pub fn with_alpha(red: i64, green: i64, blue: i64, alpha: i64) -> Self {
        Self {
            red: channel(red),
            green: channel(green),
            blue: channel(blue),
            alpha: channel(alpha),
        }
    }

    /// Parses one of the accepted string forms.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use morph_converter::Color;
    ///
    /// let pink = Color::parse("#FF007F@.5")?;
    /// assert_eq!(pink.alpha(), 128);
    /// assert_eq!(pink.string(), "#ff007f80");
    /// ```
    pub fn parse(s: &str) -> ConversionResult<Self> {
        if s.is_empty() {
            return Ok(Self::default());
        }
        let s = s.to_lowercase();
        let fail = || ConversionError::malformed(PARSE_ERROR, &s);
        let hex = |range: std::ops::Range<usize>| {
            s.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(fail)
        };
        let doubled = |index: usize| hex(index..index + 1).map(|digit| digit * 0x11);

        if PATTERN_HEX.is_match(&s) {
            Ok(Self {
                red: hex(1..3)?,
                green: hex(3..5)?,
                blue: hex(5..7)?,
                alpha: MAX_CHANNEL,
            })
        } else if PATTERN_HEX_SHORT.is_match(&s) {
            Ok(Self {
                red: doubled(1)?,
                green: doubled(2)?,
                blue: doubled(3)?,
                alpha: MAX_CHANNEL,
            })
        } else if PATTERN_HEX_ALPHA.is_match(&s) {
            Ok(Self {
                red: hex(1..3)?,
                green: hex(3..5)?,
                blue: hex(5..7)?,
                alpha: hex(7..9)?,
            })
        } else if PATTERN_HEX_ALPHA_SHORT.is_match(&s) {
            Ok(Self {
                red: doubled(1)?,
                green: doubled(2)?,
                blue: doubled(3)?,
                alpha: doubled(4)?,
            })
        } else if PATTERN_HEX_OPACITY.is_match(&s) {
            let opacity: f64 = s[8..].parse().map_err(|_| fail())?;
            Ok(Self {
                red: hex(1..3)?,
                green: hex(3..5)?,
                blue: hex(5..7)?,
                alpha: (opacity * f64::from(MAX_CHANNEL)).round() as u8,
            })
        } else {
            Err(fail())
        }
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// The canonical `#rrggbb[aa]` form.
    pub fn string(&self) -> String {
        self.to_string()
    }
}

fn pad_hex(value: u8) -> String {
    pad_left(&format!("{value:x}"), "0", 2)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{}{}{}",
            pad_hex(self.red),
            pad_hex(self.green),
            pad_hex(self.blue)
        )?;
        if self.alpha < MAX_CHANNEL {
            f.write_str(&pad_hex(self.alpha))?;
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.string()
    }
}

// ============================================================================
// COLOR CONVERTER
// ============================================================================

/// Converts colors to and from their canonical string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorConverter;

impl Marshaller<Color, String> for ColorConverter {
    fn marshal(&self, object: Color) -> ConversionResult<String> {
        Ok(object.string())
    }
}

impl Unmarshaller<Color, String> for ColorConverter {
    fn unmarshal(&self, serialized: String) -> ConversionResult<Color> {
        Color::parse(&serialized)
    }
}
