use ratatui::style::Color;

/// Runtime theme, Gruvbox Dark by default.
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey1: Color,

    // Semantic colors
    pub accent: Color,
    pub selection: Color,

    // Card accent palette, cycled per card
    pub palette: [Color; 6],
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            grey0: Color::Rgb(0x7c, 0x6f, 0x64),
            grey1: Color::Rgb(0x92, 0x83, 0x74),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            selection: Color::Rgb(0x45, 0x40, 0x3d),
            palette: [
                Color::Rgb(0xea, 0x69, 0x62), // red
                Color::Rgb(0xe7, 0x8a, 0x4e), // orange
                Color::Rgb(0xd8, 0xa6, 0x57), // yellow
                Color::Rgb(0xa9, 0xb6, 0x65), // green
                Color::Rgb(0x7d, 0xae, 0xa3), // blue
                Color::Rgb(0xd3, 0x86, 0x9b), // purple
            ],
        }
    }
}

impl Theme {
    /// Accent color for card `index`, cycling through the palette.
    pub fn card_color(&self, index: usize) -> Color {
        self.palette[index % self.palette.len()]
    }
}
