// Copyright 2025 the Rosette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color helpers for luminance-driven label styling.

use peniko::Color;

/// Returns the weighted relative luminance of `color` in `[0, 1]`.
///
/// Uses the Rec. 709 weights over the sRGB channel values. Alpha is ignored.
pub fn luminance(color: Color) -> f64 {
    let rgba = color.to_rgba8();
    (0.2126 * f64::from(rgba.r) + 0.7152 * f64::from(rgba.g) + 0.0722 * f64::from(rgba.b)) / 255.0
}

/// Returns `true` when `color` reads as dark (luminance below 0.5).
pub fn is_dark(color: Color) -> bool {
    luminance(color) < 0.5
}

/// Picks black or white, whichever contrasts with a `fill` behind text.
pub fn contrasting_text_color(fill: Color) -> Color {
    if is_dark(fill) { Color::WHITE } else { Color::BLACK }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn extremes() {
        assert!(luminance(Color::BLACK) < 1e-9);
        assert!((luminance(Color::WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn dark_fills_get_white_text() {
        assert!(is_dark(css::NAVY));
        assert_eq!(contrasting_text_color(css::NAVY), Color::WHITE);
    }

    #[test]
    fn light_fills_get_black_text() {
        assert!(!is_dark(css::LIGHT_YELLOW));
        assert_eq!(contrasting_text_color(css::LIGHT_YELLOW), Color::BLACK);
    }
}
