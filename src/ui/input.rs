use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.focus() {
        Focus::Grid => handle_grid_key(app, key),
        Focus::Editor => handle_editor_key(app, key),
    }
}

fn handle_grid_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Left | KeyCode::Char('h') => app.move_focus(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_focus(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_focus(-7),
        KeyCode::Down | KeyCode::Char('j') => app.move_focus(7),
        KeyCode::PageUp | KeyCode::Char('p') | KeyCode::Char('<') => app.navigate(-1),
        KeyCode::PageDown | KeyCode::Char('n') | KeyCode::Char('>') => app.navigate(1),
        KeyCode::Enter => app.open_focused_day(),
        KeyCode::Char('e') => {
            app.resume_editor();
        }
        KeyCode::Delete | KeyCode::Char('d') => app.delete_focused_note(),
        _ => {}
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.leave_editor(),
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => app.push_char('\n'),
        KeyCode::Enter => app.save(),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.push_char(ch),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
