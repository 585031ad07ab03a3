use crate::calendar::{DayKey, GridCell, SelectionState, WEEKDAY_LABELS};
use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, split_body};
use crate::ui::theme::{
    BACKGROUND, DAY_BORDER, EDITOR_BORDER, FOCUS_HIGHLIGHT, MUTED_TEXT, NAV_BUTTON, PIN,
    SAVE_HINT, TEXT,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Width of one grid column: right-aligned day number, pin, gap.
const CELL_WIDTH: usize = 6;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let calendar = app.calendar();

    frame.render_widget(Header::new(calendar.cursor()).widget(), header);
    frame.render_widget(Clear, body);

    let (grid_area, editor_area) = split_body(body, !calendar.selection().is_none());
    frame.render_widget(grid_widget(app), grid_area);

    if let (Some(editor_area), SelectionState::Editing { key, draft }) =
        (editor_area, calendar.selection())
    {
        frame.render_widget(editor_widget(*key, draft, app.focus()), editor_area);
        if app.focus() == Focus::Editor {
            if let Some(position) = editor_cursor(editor_area, draft) {
                frame.set_cursor_position(position);
            }
        }
    }

    frame.render_widget(Footer::new(app.focus()).widget(footer), footer);
}

fn grid_widget(app: &App) -> Paragraph<'static> {
    let calendar = app.calendar();
    let marked = calendar.marked_days();
    let selected = calendar.selection().key();

    let label_style = Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(
        WEEKDAY_LABELS
            .iter()
            .map(|label| Span::styled(format!("{:^width$}", label, width = CELL_WIDTH), label_style))
            .collect::<Vec<_>>(),
    )];

    for week in calendar.grid().weeks() {
        let spans = week
            .iter()
            .map(|cell| {
                let key = cell.day.and_then(|day| DayKey::new(calendar.cursor(), day));
                let pinned = key.is_some_and(|key| marked.contains(&key));
                let style = cell_style(cell, app.focused_day(), key.is_some() && key == selected);
                Span::styled(cell_text(cell, pinned), style)
            })
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    match calendar.note_for(app.focused_day()) {
        Some(note) => {
            let first = note.lines().next().unwrap_or_default();
            lines.push(Line::from(vec![
                Span::raw(format!("{PIN} ")),
                Span::styled(first.to_string(), Style::default().fg(TEXT)),
            ]));
        }
        None => lines.push(Line::styled(
            "No note for this day",
            Style::default().fg(MUTED_TEXT),
        )),
    }

    Paragraph::new(lines)
        .style(Style::default().fg(TEXT).bg(BACKGROUND))
        .block(
            Block::default()
                .title(format!(" {} ", calendar.cursor()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DAY_BORDER)),
        )
}

fn cell_text(cell: &GridCell, pinned: bool) -> String {
    match cell.day {
        Some(day) => format!("{:>3}{} ", day, if pinned { PIN } else { "  " }),
        None => " ".repeat(CELL_WIDTH),
    }
}

fn cell_style(cell: &GridCell, focused_day: u32, selected: bool) -> Style {
    let mut style = Style::default().fg(TEXT);
    if selected {
        style = style.fg(NAV_BUTTON).add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    if cell.day == Some(focused_day) {
        style = style.bg(FOCUS_HIGHLIGHT).add_modifier(Modifier::BOLD);
    }
    style
}

fn editor_widget(key: DayKey, draft: &str, focus: Focus) -> Paragraph<'static> {
    let border = if focus == Focus::Editor {
        EDITOR_BORDER
    } else {
        MUTED_TEXT
    };
    let lines: Vec<Line<'static>> = if draft.is_empty() {
        vec![Line::styled(
            "type a note…",
            Style::default().fg(MUTED_TEXT),
        )]
    } else {
        draft.split('\n').map(|line| Line::from(line.to_string())).collect()
    };

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(TEXT).bg(BACKGROUND))
        .block(
            Block::default()
                .title(format!(" Note for {key} "))
                .title_bottom(Line::styled(" Enter: Save ", Style::default().bg(SAVE_HINT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
}

/// Cursor at the end of the draft, ignoring soft wraps.
fn editor_cursor(area: Rect, draft: &str) -> Option<(u16, u16)> {
    if area.width < 3 || area.height < 3 {
        return None;
    }
    let lines: Vec<&str> = draft.split('\n').collect();
    let row = (lines.len() - 1) as u16;
    let column = lines.last().map(|line| line.chars().count()).unwrap_or(0) as u16;
    let x = area.x + 1 + column.min(area.width - 3);
    let y = area.y + 1 + row.min(area.height - 3);
    Some((x, y))
}
