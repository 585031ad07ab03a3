use ratatui::layout::{Constraint, Layout, Rect};

pub const EDITOR_HEIGHT: u16 = 6;

/// Header, body and footer rows.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .split(area);
    (rows[0], rows[1], rows[2])
}

/// Splits the body into grid and editor when a day is being edited.
///
/// While editing the editor always gets its rows, taken from the grid
/// first, so a draft is never edited out of sight.
pub fn split_body(body: Rect, editing: bool) -> (Rect, Option<Rect>) {
    if !editing {
        return (body, None);
    }
    let editor_height = EDITOR_HEIGHT.min(body.height);
    let grid = Rect {
        height: body.height - editor_height,
        ..body
    };
    let editor = Rect {
        y: body.y + grid.height,
        height: editor_height,
        ..body
    };
    (grid, Some(editor))
}
