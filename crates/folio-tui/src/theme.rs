use ratatui::style::Color;

/// Dark neon palette of the site
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg0: Color,
    pub bg1: Color,
    pub border: Color,
    pub grid: Color,

    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey1: Color,

    /// Neon blue used for highlights, links and the active nav item
    pub accent: Color,
    pub accent_dim: Color,
    pub glitch_a: Color,
    pub glitch_b: Color,

    pub error: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg0: Color::Rgb(0x0a, 0x0a, 0x0f),
            bg1: Color::Rgb(0x14, 0x14, 0x1e),
            border: Color::Rgb(0x25, 0x25, 0x35),
            grid: Color::Rgb(0x16, 0x1a, 0x2a),
            fg0: Color::Rgb(0xff, 0xff, 0xff),
            fg1: Color::Rgb(0xd1, 0xd5, 0xdb),
            grey0: Color::Rgb(0x6b, 0x72, 0x80),
            grey1: Color::Rgb(0x9c, 0xa3, 0xaf),
            accent: Color::Rgb(0x4f, 0x8f, 0xff),
            accent_dim: Color::Rgb(0x2a, 0x4a, 0x88),
            glitch_a: Color::Rgb(0xff, 0x00, 0xc1),
            glitch_b: Color::Rgb(0x00, 0xff, 0xf9),
            error: Color::Rgb(0xef, 0x44, 0x44),
            success: Color::Rgb(0x22, 0xc5, 0x5e),
        }
    }
}

impl Theme {
    /// Blend `color` towards the background, `opacity` in [0, 1]
    pub fn fade(&self, color: Color, opacity: f64) -> Color {
        match (color, self.bg0) {
            (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
                let o = opacity.clamp(0.0, 1.0);
                let mix = |c: u8, base: u8| (base as f64 + (c as f64 - base as f64) * o).round() as u8;
                Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
            }
            _ => color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints() {
        let theme = Theme::default();
        assert_eq!(theme.fade(theme.accent, 1.0), theme.accent);
        assert_eq!(theme.fade(theme.accent, 0.0), theme.bg0);
        assert_eq!(theme.fade(Color::Red, 0.5), Color::Red);
    }
}
