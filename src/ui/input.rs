//! Keyboard handling - maps crossterm key events to board transitions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::state::{Board, BoardCommand, BoardInput, Tab};

/// What the host loop should do after a key is handled
#[derive(Debug)]
pub enum InputAction {
    None,
    Quit,
    Command(BoardCommand),
}

pub fn handle_key(board: &mut Board, input: &BoardInput, key: KeyEvent) -> InputAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputAction::Quit;
    }

    // Modal surfaces capture input before anything else
    if board.show_restart_confirm {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Enter => InputAction::Command(board.confirm_restart()),
            KeyCode::Char('n') | KeyCode::Esc => {
                board.cancel_restart();
                InputAction::None
            }
            _ => InputAction::None,
        };
    }
    if board.show_help {
        match key.code {
            KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('?') => board.toggle_help(),
            _ => {}
        }
        return InputAction::None;
    }
    if board.show_notifications {
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') => board.close_notifications(),
            KeyCode::Char('x') => board.clear_events(),
            _ => {}
        }
        return InputAction::None;
    }

    match key.code {
        KeyCode::Char('q') => return InputAction::Quit,
        KeyCode::Char('1') => board.select_tab(Tab::Summary),
        KeyCode::Char('2') => board.select_tab(Tab::Map),
        KeyCode::Char('3') => board.select_tab(Tab::Actions),
        KeyCode::Char('4') => board.select_tab(Tab::Performance),
        KeyCode::Char('5') => board.select_tab(Tab::Log),
        KeyCode::Char('h') | KeyCode::Char('?') => board.toggle_help(),
        KeyCode::Char('b') => board.toggle_notifications(),
        KeyCode::Char('e') => return InputAction::Command(board.end_round()),
        KeyCode::Char('r') => board.request_restart(),
        KeyCode::Enter if board.active_tab == Tab::Summary && input.show_round_summary => {
            return InputAction::Command(board.continue_to_next_round(input));
        }
        _ => return handle_view_key(board, input, key),
    }
    InputAction::None
}

/// Keys whose meaning depends on the active view
fn handle_view_key(board: &mut Board, input: &BoardInput, key: KeyEvent) -> InputAction {
    match board.active_tab {
        Tab::Map => match key.code {
            KeyCode::Up => board.cursor_prev_district(),
            KeyCode::Down => board.cursor_next_district(),
            KeyCode::Tab | KeyCode::Left | KeyCode::Right => board.cursor_toggle_shift(),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                if let Some(cmd) = board.nudge_allocation(input, 1) {
                    return InputAction::Command(cmd);
                }
            }
            KeyCode::Char('-') => {
                if let Some(cmd) = board.nudge_allocation(input, -1) {
                    return InputAction::Command(cmd);
                }
            }
            _ => {}
        },
        Tab::Actions => match key.code {
            KeyCode::Up => board.cursor_prev_district(),
            KeyCode::Down => board.cursor_next_district(),
            KeyCode::Left => return InputAction::Command(board.cycle_action(input, false)),
            KeyCode::Right => return InputAction::Command(board.cycle_action(input, true)),
            _ => {}
        },
        _ => {}
    }
    InputAction::None
}
