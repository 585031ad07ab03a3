use crate::ui::app::Focus;
use crate::ui::theme::{BACKGROUND, DAY_BORDER, MUTED_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    focus: Focus,
}

impl Footer {
    pub fn new(focus: Focus) -> Self {
        Self { focus }
    }

    pub fn hints(&self) -> &'static str {
        match self.focus {
            Focus::Grid => {
                " ←↑↓→: Day │ p/n: Month │ Enter: Edit │ d: Delete │ e: Resume │ q: Quit"
            }
            Focus::Editor => " Enter: Save │ Alt+Enter: Newline │ Esc: Back to grid │ Ctrl+Q: Quit",
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Pad by char count, not bytes: the hints contain arrows and box glyphs
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(MUTED_TEXT).bg(BACKGROUND);
        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(DAY_BORDER)),
            )
    }
}
