use std::borrow::Cow;

use serde::Serialize;
use thiserror::Error;

/// Primary brand blue used for every solid call-to-action.
pub const BRAND: &str = "#3D9BE9";
/// 80% opacity variant of [`BRAND`] for buttons laid over the hero photo.
pub const BRAND_ALPHA_80: &str = "rgba(61, 155, 233, 0.8)";

const ALPHA_80: f32 = 0.8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("color `{0}` must start with '#'")]
    MissingHash(String),
    #[error("color `{value}` must have 6 hex digits, found {len}")]
    InvalidLength { value: String, len: usize },
    #[error("color `{0}` contains a non-hex digit")]
    InvalidDigit(String),
}

/// Colors injected into both the page and the self-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub primary: Cow<'static, str>,
    pub primary_alpha_80: Cow<'static, str>,
}

impl Theme {
    pub const fn builtin() -> Self {
        Theme {
            primary: Cow::Borrowed(BRAND),
            primary_alpha_80: Cow::Borrowed(BRAND_ALPHA_80),
        }
    }

    /// Builds a theme around another `#RRGGBB` color. The hex is upper-cased
    /// and the translucent variant is derived from it.
    pub fn from_hex(hex: &str) -> Result<Self, ThemeError> {
        let primary_alpha_80 = rgba(hex, ALPHA_80)?;
        Ok(Theme {
            primary: Cow::Owned(hex.to_ascii_uppercase()),
            primary_alpha_80: Cow::Owned(primary_alpha_80),
        })
    }

    pub fn with_primary_alpha_80(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.primary_alpha_80 = value.into();
        self
    }

    pub fn solid_style(&self) -> String {
        format!("background-color: {};", self.primary)
    }

    pub fn translucent_style(&self) -> String {
        format!("background-color: {};", self.primary_alpha_80)
    }
}

/// `rgba(...)` string for a `#RRGGBB` color at the given opacity.
pub fn rgba(hex: &str, alpha: f32) -> Result<String, ThemeError> {
    let (r, g, b) = parse_hex(hex)?;
    Ok(format!("rgba({}, {}, {}, {})", r, g, b, alpha))
}

fn parse_hex(hex: &str) -> Result<(u8, u8, u8), ThemeError> {
    let digits = hex
        .strip_prefix('#')
        .ok_or_else(|| ThemeError::MissingHash(hex.to_string()))?;
    if digits.len() != 6 {
        return Err(ThemeError::InvalidLength {
            value: hex.to_string(),
            len: digits.len(),
        });
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ThemeError::InvalidDigit(hex.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ThemeError::InvalidDigit(hex.to_string()))
    };
    Ok((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_alpha_matches_the_builtin_constant() {
        let theme = Theme::from_hex(BRAND).unwrap();
        assert_eq!(theme, Theme::builtin());
    }

    #[test]
    fn lowercase_hex_is_normalized() {
        let theme = Theme::from_hex("#3d9be9").unwrap();
        assert_eq!(theme.primary, BRAND);
        assert_eq!(theme.primary_alpha_80, BRAND_ALPHA_80);
    }

    #[test]
    fn derived_alpha_follows_the_primary() {
        let theme = Theme::from_hex("#112233").unwrap();
        assert_eq!(theme.primary_alpha_80, rgba("#112233", 0.8).unwrap());
        assert_eq!(theme.primary_alpha_80, "rgba(17, 34, 51, 0.8)");
    }

    #[test]
    fn rgba_formats_other_opacities() {
        assert_eq!(rgba("#000000", 0.5).unwrap(), "rgba(0, 0, 0, 0.5)");
        assert_eq!(rgba("#FFFFFF", 1.0).unwrap(), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn bad_hex_is_rejected() {
        assert_eq!(
            Theme::from_hex("3D9BE9"),
            Err(ThemeError::MissingHash("3D9BE9".into()))
        );
        assert_eq!(
            Theme::from_hex("#3D9"),
            Err(ThemeError::InvalidLength { value: "#3D9".into(), len: 3 })
        );
        assert_eq!(
            Theme::from_hex("#3D9BEZ"),
            Err(ThemeError::InvalidDigit("#3D9BEZ".into()))
        );
    }

    #[test]
    fn styles_use_the_theme_colors() {
        let theme = Theme::builtin();
        assert_eq!(theme.solid_style(), "background-color: #3D9BE9;");
        assert_eq!(
            theme.translucent_style(),
            "background-color: rgba(61, 155, 233, 0.8);"
        );
    }
}
