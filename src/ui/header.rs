use crate::calendar::MonthCursor;
use crate::ui::theme::{BACKGROUND, DAY_BORDER, MUTED_TEXT, NAV_BUTTON, TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    cursor: MonthCursor,
}

impl Header {
    pub fn new(cursor: MonthCursor) -> Self {
        Self { cursor }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let button = Style::default().fg(BACKGROUND).bg(NAV_BUTTON);
        let title = Style::default().fg(TEXT).add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(MUTED_TEXT);
        let line = Line::from(vec![
            Span::styled(" ◀ Prev ", button),
            Span::raw("  "),
            Span::styled(
                format!(
                    "Month: {}, Year: {}",
                    self.cursor.month(),
                    self.cursor.year()
                ),
                title,
            ),
            Span::styled(format!("  ({})", self.cursor), dim),
            Span::raw("  "),
            Span::styled(" Next ▶ ", button),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .style(Style::default().bg(BACKGROUND))
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(DAY_BORDER)),
            )
    }
}
