use ratatui::style::Color;

pub const BACKGROUND: Color = Color::Rgb(0xcc, 0xcc, 0xff);
pub const NAV_BUTTON: Color = Color::Rgb(0xff, 0x00, 0x33);
pub const DAY_BORDER: Color = Color::Rgb(0x00, 0x99, 0xff);
pub const EDITOR_BORDER: Color = Color::Rgb(0x00, 0xaa, 0x00);
pub const SAVE_HINT: Color = Color::Rgb(0xad, 0xd8, 0xe6);
pub const TEXT: Color = Color::Rgb(0x1a, 0x1a, 0x2e);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const FOCUS_HIGHLIGHT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const PIN: &str = "📌";
