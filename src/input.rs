//! Input handling abstractions.
//!
//! Each mode has a handler that turns a key event into a [`Command`]; the
//! app applies commands to its state. Handlers never touch state
//! themselves, so they can be tested on bare key events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::constants::editor::ARROW_NUDGE;
use crate::viewer::NavKey;

/// Result of processing an input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputResult {
    /// The key maps to a command.
    Command(Command),
    /// The input was ignored (not applicable to this handler).
    Ignored,
    /// The application should quit.
    Quit,
}

/// Something the app can do in response to a key.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Slideshow navigation key.
    Nav(NavKey),
    /// Move the grid cursor by this many cells.
    GridCursor(isize),
    /// Open the slide under the grid cursor.
    GridChoose,
    /// Cycle the grid sort key.
    GridCycleSort,
    /// Flip ascending / descending.
    GridFlipOrder,
    /// Switch to the slide editor.
    OpenEditor,
    /// Back to the slideshow.
    CloseEditor,
    /// Select the next element in paint order (wrapping).
    SelectNextElement,
    /// Move the selected element.
    Nudge {
        /// Horizontal offset.
        dx: f64,
        /// Vertical offset.
        dy: f64,
    },
    /// Duplicate the selected element.
    Duplicate,
    /// Delete the selected element.
    Delete,
    /// Paint the selected element one step later.
    BringForward,
    /// Paint the selected element one step earlier.
    SendBackward,
    /// Start typing a generation prompt.
    BeginPrompt,
}

/// Application modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// One event at a time.
    Slideshow,
    /// All events as a sortable grid.
    Grid,
    /// The slide element editor.
    Editor,
}

/// Context passed to input handlers.
pub struct InputContext {
    /// Current application mode.
    pub mode: AppMode,
    /// Number of grid columns, for up/down movement.
    pub grid_columns: usize,
}

/// Trait for handling keyboard input.
///
/// Implementations of this trait handle input for specific modes.
pub trait InputHandler {
    /// Handle a key event.
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> InputResult;

    /// Get the name of this handler (for debugging).
    fn name(&self) -> &'static str;
}

/// Handler for global shortcuts (Ctrl-C).
#[derive(Debug, Default)]
pub struct GlobalHandler;

impl InputHandler for GlobalHandler {
    fn handle(&mut self, key: KeyEvent, _ctx: &InputContext) -> InputResult {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return InputResult::Quit;
        }
        InputResult::Ignored
    }

    fn name(&self) -> &'static str {
        "GlobalHandler"
    }
}

/// Handler for the slideshow.
#[derive(Debug, Default)]
pub struct SlideshowHandler;

impl InputHandler for SlideshowHandler {
    fn handle(&mut self, key: KeyEvent, _ctx: &InputContext) -> InputResult {
        let command = match key.code {
            KeyCode::Right | KeyCode::Down => Command::Nav(NavKey::Next),
            KeyCode::Left | KeyCode::Up => Command::Nav(NavKey::Previous),
            KeyCode::Char('f' | 'F') => Command::Nav(NavKey::ToggleFullscreen),
            KeyCode::Char('g' | 'G') | KeyCode::Enter => Command::Nav(NavKey::OpenGrid),
            KeyCode::Esc => Command::Nav(NavKey::Escape),
            KeyCode::Char('e') => Command::OpenEditor,
            KeyCode::Char('q') => return InputResult::Quit,
            _ => return InputResult::Ignored,
        };
        InputResult::Command(command)
    }

    fn name(&self) -> &'static str {
        "SlideshowHandler"
    }
}

/// Handler for the grid overlay.
#[derive(Debug, Default)]
pub struct GridHandler;

impl InputHandler for GridHandler {
    #[allow(clippy::cast_possible_wrap)]
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> InputResult {
        let columns = ctx.grid_columns.max(1) as isize;
        let command = match key.code {
            KeyCode::Esc => Command::Nav(NavKey::Escape),
            KeyCode::Right | KeyCode::Char('l') => Command::GridCursor(1),
            KeyCode::Left | KeyCode::Char('h') => Command::GridCursor(-1),
            KeyCode::Down | KeyCode::Char('j') => Command::GridCursor(columns),
            KeyCode::Up | KeyCode::Char('k') => Command::GridCursor(-columns),
            KeyCode::Enter => Command::GridChoose,
            KeyCode::Char('s') => Command::GridCycleSort,
            KeyCode::Char('o') => Command::GridFlipOrder,
            _ => return InputResult::Ignored,
        };
        InputResult::Command(command)
    }

    fn name(&self) -> &'static str {
        "GridHandler"
    }
}

/// Handler for the slide editor (outside prompt entry).
#[derive(Debug, Default)]
pub struct EditorHandler;

impl InputHandler for EditorHandler {
    fn handle(&mut self, key: KeyEvent, _ctx: &InputContext) -> InputResult {
        let command = match key.code {
            KeyCode::Esc => Command::CloseEditor,
            KeyCode::Tab => Command::SelectNextElement,
            KeyCode::Left => Command::Nudge { dx: -ARROW_NUDGE, dy: 0.0 },
            KeyCode::Right => Command::Nudge { dx: ARROW_NUDGE, dy: 0.0 },
            KeyCode::Up => Command::Nudge { dx: 0.0, dy: -ARROW_NUDGE },
            KeyCode::Down => Command::Nudge { dx: 0.0, dy: ARROW_NUDGE },
            KeyCode::Char('d') => Command::Duplicate,
            KeyCode::Char('x') | KeyCode::Delete => Command::Delete,
            KeyCode::Char(']') => Command::BringForward,
            KeyCode::Char('[') => Command::SendBackward,
            KeyCode::Char(':') => Command::BeginPrompt,
            _ => return InputResult::Ignored,
        };
        InputResult::Command(command)
    }

    fn name(&self) -> &'static str {
        "EditorHandler"
    }
}

/// Route a key through the global handler, then the one for `ctx.mode`.
pub fn dispatch(key: KeyEvent, ctx: &InputContext) -> InputResult {
    let global = GlobalHandler.handle(key, ctx);
    if global != InputResult::Ignored {
        return global;
    }
    let mut handler: Box<dyn InputHandler> = match ctx.mode {
        AppMode::Slideshow => Box::new(SlideshowHandler),
        AppMode::Grid => Box::new(GridHandler),
        AppMode::Editor => Box::new(EditorHandler),
    };
    let result = handler.handle(key, ctx);
    tracing::trace!(handler = handler.name(), ?result, "key dispatched");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn make_context(mode: AppMode) -> InputContext {
        InputContext { mode, grid_columns: 5 }
    }

    #[test]
    fn test_slideshow_arrow_keys() {
        let ctx = make_context(AppMode::Slideshow);
        for code in [KeyCode::Right, KeyCode::Down] {
            assert_eq!(dispatch(make_key(code), &ctx), InputResult::Command(Command::Nav(NavKey::Next)));
        }
        for code in [KeyCode::Left, KeyCode::Up] {
            assert_eq!(dispatch(make_key(code), &ctx), InputResult::Command(Command::Nav(NavKey::Previous)));
        }
    }

    #[test]
    fn test_slideshow_letter_keys_any_case() {
        let ctx = make_context(AppMode::Slideshow);
        for c in ['f', 'F'] {
            assert_eq!(
                dispatch(make_key(KeyCode::Char(c)), &ctx),
                InputResult::Command(Command::Nav(NavKey::ToggleFullscreen))
            );
        }
        for c in ['g', 'G'] {
            assert_eq!(
                dispatch(make_key(KeyCode::Char(c)), &ctx),
                InputResult::Command(Command::Nav(NavKey::OpenGrid))
            );
        }
    }

    #[test]
    fn test_grid_vertical_moves_by_row() {
        let ctx = make_context(AppMode::Grid);
        assert_eq!(dispatch(make_key(KeyCode::Down), &ctx), InputResult::Command(Command::GridCursor(5)));
        assert_eq!(dispatch(make_key(KeyCode::Up), &ctx), InputResult::Command(Command::GridCursor(-5)));
        assert_eq!(dispatch(make_key(KeyCode::Char('f')), &ctx), InputResult::Ignored);
    }

    #[test]
    fn test_ctrl_c_quits_in_every_mode() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for mode in [AppMode::Slideshow, AppMode::Grid, AppMode::Editor] {
            assert_eq!(dispatch(key, &make_context(mode)), InputResult::Quit);
        }
    }

    #[test]
    fn test_editor_reorder_keys() {
        let ctx = make_context(AppMode::Editor);
        assert_eq!(dispatch(make_key(KeyCode::Char(']')), &ctx), InputResult::Command(Command::BringForward));
        assert_eq!(dispatch(make_key(KeyCode::Char('[')), &ctx), InputResult::Command(Command::SendBackward));
        assert_eq!(dispatch(make_key(KeyCode::Delete), &ctx), InputResult::Command(Command::Delete));
    }
}
