use crate::frontend::Frontend;
use cgolview::{Frame, Input, PauseMode, PointerButton, Pos2, Shade, Viewport};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute, queue, style, terminal,
};
use std::io::{self, Write};
use tracing::{debug, warn};

/// Vertical pixels per terminal row. A column is one pixel wide.
const ROW_PIXELS: u32 = 2;
/// Cell side in pixels, so one cell is two columns by one row
const CELL_PIXELS: u32 = 2;

/// Terminal frontend: cells are block glyphs, the bottom row is the status line
pub struct ConsoleRender {
    viewport: Viewport,
    rows: u16,
    release_events: bool,
}
impl ConsoleRender {
    pub fn new() -> anyhow::Result<Self> {
        let (cols, rows) = terminal::size()?;
        let viewport = Viewport::new(
            cols as u32,
            rows.saturating_sub(1) as u32 * ROW_PIXELS,
            CELL_PIXELS,
        )?;

        terminal::enable_raw_mode()?;
        // from here on Drop restores the terminal if setup fails
        let mut console = Self {
            viewport,
            rows,
            release_events: false,
        };
        console.release_events = terminal::supports_keyboard_enhancement().unwrap_or(false);

        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture
        )?;
        if console.release_events {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        debug!(cols, rows, release_events = console.release_events, "terminal ready");
        Ok(console)
    }

    fn pixel(column: u16, row: u16) -> Pos2 {
        Pos2 {
            x: column as i32,
            y: row as i32 * ROW_PIXELS as i32,
        }
    }

    fn glyph(shade: Shade) -> char {
        match shade {
            Shade::Alive => '█',
            Shade::HoverAlive => '▓',
            Shade::HoverDead => '░',
        }
    }

    fn key_input(key: KeyEvent) -> Option<Input> {
        let press = key.kind == KeyEventKind::Press;
        match key.code {
            KeyCode::Char('c') if press && key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Input::Quit)
            }
            KeyCode::Char('q') | KeyCode::Esc if press => Some(Input::Quit),
            KeyCode::Char(' ') => match key.kind {
                KeyEventKind::Press => Some(Input::PauseDown),
                KeyEventKind::Release => Some(Input::PauseUp),
                KeyEventKind::Repeat => None,
            },
            KeyCode::Char('r' | 'R') if press => Some(Input::Reset),
            KeyCode::Char('t' | 'T') if press => Some(Input::Randomize),
            _ => None,
        }
    }

    fn mouse_inputs(mouse: MouseEvent, inputs: &mut Vec<Input>) {
        let button = |b: MouseButton| match b {
            MouseButton::Left => Some(PointerButton::Left),
            MouseButton::Right => Some(PointerButton::Right),
            MouseButton::Middle => None,
        };
        let moved = Input::PointerMoved(Self::pixel(mouse.column, mouse.row));
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => inputs.push(moved),
            MouseEventKind::Down(b) => {
                inputs.push(moved);
                inputs.extend(button(b).map(Input::Pressed));
            }
            MouseEventKind::Up(b) => {
                inputs.push(moved);
                inputs.extend(button(b).map(Input::Released));
            }
            _ => {}
        }
    }
}

impl Frontend for ConsoleRender {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn supported_pause_mode(&self, requested: PauseMode) -> PauseMode {
        let mode = pause_mode_for(requested, self.release_events);
        if mode != requested {
            warn!("terminal does not report key releases, space toggles pause instead");
        }
        mode
    }

    fn poll_inputs(&mut self, inputs: &mut Vec<Input>) -> anyhow::Result<()> {
        // make sure an event is present for us to take
        while event::poll(std::time::Duration::from_secs(0))? {
            match event::read()? {
                event::Event::Key(key) => inputs.extend(Self::key_input(key)),
                event::Event::Mouse(mouse) => Self::mouse_inputs(mouse, inputs),
                event::Event::Resize(cols, rows) => {
                    debug!(cols, rows, "terminal resized, grid keeps its size");
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn present(&mut self, frame: &Frame) -> anyhow::Result<()> {
        let mut stdout = io::stdout();
        queue!(
            stdout,
            terminal::BeginSynchronizedUpdate,
            terminal::Clear(terminal::ClearType::All)
        )?;
        for square in frame.squares() {
            let color = square.shade.color();
            let columns = square.side as usize;
            let glyphs: String = std::iter::repeat_n(Self::glyph(square.shade), columns).collect();
            queue!(
                stdout,
                cursor::MoveTo(
                    square.origin.x as u16,
                    (square.origin.y as u32 / ROW_PIXELS) as u16
                ),
                style::SetForegroundColor(style::Color::Rgb {
                    r: color.r,
                    g: color.g,
                    b: color.b,
                }),
                style::Print(glyphs)
            )?;
        }

        // write footer
        queue!(
            stdout,
            style::ResetColor,
            cursor::MoveTo(0, self.rows.saturating_sub(1)),
            style::Print(frame.status()),
            terminal::EndSynchronizedUpdate
        )?;
        stdout.flush()?;
        Ok(())
    }
}

/// Holding to pause needs release events; without them only toggling works
fn pause_mode_for(requested: PauseMode, release_events: bool) -> PauseMode {
    match requested {
        PauseMode::Hold if !release_events => PauseMode::Toggle,
        mode => mode,
    }
}

impl Drop for ConsoleRender {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.release_events {
            if let Err(e) = execute!(stdout, PopKeyboardEnhancementFlags) {
                warn!(error = %e, "failed to pop keyboard enhancement flags");
            }
        }
        if let Err(e) = execute!(
            stdout,
            DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        ) {
            warn!(error = %e, "failed to restore terminal screen");
        }
        // if we can enable it, we should be able to disable it
        if let Err(e) = terminal::disable_raw_mode() {
            warn!(error = %e, "failed to disable raw mode");
        }
    }
}
