use ratatui::style::Color;

// Accent colors
pub const ACCENT_BLUE: Color = Color::Rgb(124, 175, 194);     // #7CAFC2
pub const ACCENT_MINT: Color = Color::Rgb(161, 193, 129);     // #A1C181
pub const ACCENT_CORAL: Color = Color::Rgb(232, 131, 136);    // #E88388

// UI colors
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136);        // #888888
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255);      // #FFFFFF
pub const BORDER_IDLE: Color = Color::Rgb(85, 85, 85);        // #555555
pub const BADGE_BG: Color = Color::Rgb(58, 63, 75);           // #3A3F4B
pub const HIGHLIGHT_BG: Color = Color::Rgb(52, 78, 90);       // #344E5A
