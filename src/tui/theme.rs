//! Theme palettes for the animated backdrop and highlights.
//!
//! Color values are the PS3-style sets from the original design: a
//! three-stop vertical gradient plus five ribbon layer colors per theme.

use ratatui::style::Color;

use crate::core::settings::ThemeColor;

pub type Rgb = (u8, u8, u8);

pub struct Palette {
    /// Vertical gradient, top → bottom.
    pub gradient: [Rgb; 3],
    /// Ribbon layers, back → front.
    pub ribbons: [Rgb; 5],
}

pub fn palette(theme: ThemeColor) -> &'static Palette {
    match theme {
        ThemeColor::Blue => &Palette {
            gradient: [(0x0a, 0x0a, 0x1a), (0x0d, 0x1b, 0x2a), (0x1b, 0x3a, 0x5f)],
            ribbons: [
                (0x0d, 0x1b, 0x2a),
                (0x1b, 0x3a, 0x5f),
                (0x27, 0x4c, 0x77),
                (0x3d, 0x6a, 0x99),
                (0x4a, 0x7f, 0xa8),
            ],
        },
        ThemeColor::Red => &Palette {
            gradient: [(0x1a, 0x0a, 0x0a), (0x2a, 0x0d, 0x0d), (0x5f, 0x1b, 0x1b)],
            ribbons: [
                (0x2a, 0x0d, 0x0d),
                (0x5f, 0x1b, 0x1b),
                (0x77, 0x27, 0x27),
                (0x99, 0x3d, 0x3d),
                (0xa8, 0x4a, 0x4a),
            ],
        },
        ThemeColor::Green => &Palette {
            gradient: [(0x0a, 0x1a, 0x0a), (0x0d, 0x2a, 0x0d), (0x1b, 0x5f, 0x1b)],
            ribbons: [
                (0x0d, 0x2a, 0x0d),
                (0x1b, 0x5f, 0x1b),
                (0x27, 0x77, 0x27),
                (0x3d, 0x99, 0x3d),
                (0x4a, 0xa8, 0x4a),
            ],
        },
        ThemeColor::Purple => &Palette {
            gradient: [(0x12, 0x0a, 0x1a), (0x1d, 0x0d, 0x2a), (0x3d, 0x1b, 0x5f)],
            ribbons: [
                (0x1d, 0x0d, 0x2a),
                (0x3d, 0x1b, 0x5f),
                (0x52, 0x27, 0x77),
                (0x6d, 0x3d, 0x99),
                (0x7a, 0x4a, 0xa8),
            ],
        },
        ThemeColor::Orange => &Palette {
            gradient: [(0x1a, 0x12, 0x0a), (0x2a, 0x1d, 0x0d), (0x5f, 0x3d, 0x1b)],
            ribbons: [
                (0x2a, 0x1d, 0x0d),
                (0x5f, 0x3d, 0x1b),
                (0x77, 0x52, 0x27),
                (0x99, 0x6d, 0x3d),
                (0xa8, 0x7a, 0x4a),
            ],
        },
        ThemeColor::Pink => &Palette {
            gradient: [(0x1a, 0x0a, 0x14), (0x2a, 0x0d, 0x1d), (0x5f, 0x1b, 0x4a)],
            ribbons: [
                (0x2a, 0x0d, 0x1d),
                (0x5f, 0x1b, 0x4a),
                (0x77, 0x27, 0x60),
                (0x99, 0x3d, 0x7a),
                (0xa8, 0x4a, 0x8a),
            ],
        },
    }
}

/// Highlight color for selected entries, the brightest ribbon tone.
pub fn accent(theme: ThemeColor) -> Color {
    let (r, g, b) = palette(theme).ribbons[4];
    Color::Rgb(r, g, b)
}

/// Linear blend between two colors, `t` in `[0, 1]`.
pub fn blend(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (f32::from(x) + (f32::from(y) - f32::from(x)) * t).round() as u8;
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints() {
        let a = (0, 0, 0);
        let b = (200, 100, 50);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(a, b, 0.5), (100, 50, 25));
    }

    #[test]
    fn blend_clamps_t() {
        let a = (10, 10, 10);
        let b = (20, 20, 20);
        assert_eq!(blend(a, b, -1.0), a);
        assert_eq!(blend(a, b, 2.0), b);
    }

    #[test]
    fn every_theme_has_a_palette() {
        for theme in ThemeColor::ALL {
            let p = palette(theme);
            assert_ne!(p.gradient[0], p.gradient[2]);
        }
    }
}
