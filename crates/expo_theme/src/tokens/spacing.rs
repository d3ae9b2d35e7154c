//! Spacing tokens for theming

use serde::{Deserialize, Serialize};

/// Global spacing multiplier
///
/// The settings panel keeps this within 0.8..=1.5, but the token itself
/// accepts any number and publishes it as given.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpacingTokens {
    pub scale: f64,
}

impl SpacingTokens {
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }

    /// Textual form published to the style namespace.
    ///
    /// Integral values drop the fractional part (`1`, not `1.0`) and
    /// non-finite values use the page's spelling (`NaN`, `Infinity`).
    /// Magnitudes of 1e21 and above or below 1e-6 use exponent form with a
    /// signed exponent (`1e+21`, `1e-7`).
    pub fn to_css_value(&self) -> String {
        let scale = self.scale;
        if scale.is_nan() {
            "NaN".to_string()
        } else if scale.is_infinite() {
            let text = if scale > 0.0 { "Infinity" } else { "-Infinity" };
            text.to_string()
        } else if scale == 0.0 {
            // -0 prints as 0
            "0".to_string()
        } else if scale.abs() >= 1e21 || scale.abs() < 1e-6 {
            exponent_form(scale)
        } else {
            scale.to_string()
        }
    }
}

fn exponent_form(value: f64) -> String {
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => text,
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_scale_has_no_fraction() {
        assert_eq!(SpacingTokens::new(1.0).to_css_value(), "1");
        assert_eq!(SpacingTokens::new(50.0).to_css_value(), "50");
    }

    #[test]
    fn fractional_scale_uses_shortest_form() {
        assert_eq!(SpacingTokens::new(1.1).to_css_value(), "1.1");
        assert_eq!(SpacingTokens::new(0.9).to_css_value(), "0.9");
        assert_eq!(SpacingTokens::new(-0.25).to_css_value(), "-0.25");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(SpacingTokens::new(1e21).to_css_value(), "1e+21");
        assert_eq!(SpacingTokens::new(1e-7).to_css_value(), "1e-7");
        assert_eq!(SpacingTokens::new(-2.5e22).to_css_value(), "-2.5e+22");
        assert_eq!(SpacingTokens::new(1e20).to_css_value(), "100000000000000000000");
        assert_eq!(SpacingTokens::new(0.000001).to_css_value(), "0.000001");
    }

    #[test]
    fn non_finite_and_signed_zero() {
        assert_eq!(SpacingTokens::new(f64::NAN).to_css_value(), "NaN");
        assert_eq!(SpacingTokens::new(f64::INFINITY).to_css_value(), "Infinity");
        assert_eq!(
            SpacingTokens::new(f64::NEG_INFINITY).to_css_value(),
            "-Infinity"
        );
        assert_eq!(SpacingTokens::new(-0.0).to_css_value(), "0");
    }
}
