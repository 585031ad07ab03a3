//! Plain-text month view, in the spirit of `cal`.

use crate::calendar::{CalendarModel, DayKey, WEEKDAY_LABELS};

const CELL_WIDTH: usize = 3;

/// Renders the displayed month, marking days that carry a note with `*`,
/// followed by the notes themselves.
pub fn render_month(model: &CalendarModel) -> String {
    let cursor = model.cursor();
    let marked = model.marked_days();
    let width = CELL_WIDTH * 7 - 1;

    let mut lines = vec![
        format!("{:^width$}", cursor.to_string()).trim_end().to_string(),
        WEEKDAY_LABELS.join(" "),
    ];

    for week in model.grid().weeks() {
        let row: String = week
            .iter()
            .map(|cell| match cell.day {
                Some(day) => {
                    let pinned = DayKey::new(cursor, day).is_some_and(|key| marked.contains(&key));
                    format!("{:>2}{}", day, if pinned { '*' } else { ' ' })
                }
                None => " ".repeat(CELL_WIDTH),
            })
            .collect();
        lines.push(row.trim_end().to_string());
    }

    if !marked.is_empty() {
        lines.push(String::new());
        for key in &marked {
            let note = model.events().get(key).unwrap_or_default();
            lines.push(format!("{key}  {}", note.lines().collect::<Vec<_>>().join(" / ")));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::MonthCursor;

    #[test]
    fn renders_march_2024() {
        let model = CalendarModel::new(MonthCursor::new(2024, 3).unwrap())
            .select_day(5)
            .edit_draft(" Meeting ")
            .save_event();
        let text = render_month(&model);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "     March 2024");
        assert_eq!(lines[1], "Su Mo Tu We Th Fr Sa");
        assert_eq!(lines[2], "                1  2");
        assert_eq!(lines[3], " 3  4  5* 6  7  8  9");
        assert_eq!(lines[7], "31");
        assert_eq!(lines[9], "2024-03-05  Meeting");
    }

    #[test]
    fn no_notes_section_when_month_is_empty() {
        let model = CalendarModel::new(MonthCursor::new(2026, 2).unwrap());
        let text = render_month(&model);
        assert_eq!(text.lines().count(), 2 + 4);
        assert!(text.lines().nth(2).unwrap().starts_with(" 1  2"));
    }
}
