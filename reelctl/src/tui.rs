//! Full-screen terminal host: event sources, input mapping, draw loop

use std::{
    io::{self, Stdout},
    time::Duration,
};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange,
        EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDirection, Layout},
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use reel_core::{EventTarget, GestureEvent, Side};

use crate::{
    host::{HostEvent, TerminalHost},
    render::{TRACK_HEIGHT, TrackLayout, render_track, status_line},
};

/// Source of host events so tests and scripts can drive the TUI without a
/// real tty.
pub trait EventSource {
    /// Next event, waiting at most `timeout`. `layout` places mouse input.
    fn next(
        &mut self,
        timeout: Duration,
        layout: &TrackLayout,
    ) -> Result<Option<HostEvent>>;

    /// Scripted sources run without raw mode.
    fn is_scripted(&self) -> bool {
        false
    }
}

/// Events from the real terminal.
#[derive(Debug, Default)]
pub struct CrosstermEventSource;

impl EventSource for CrosstermEventSource {
    fn next(
        &mut self,
        timeout: Duration,
        layout: &TrackLayout,
    ) -> Result<Option<HostEvent>> {
        if event::poll(timeout)? {
            Ok(translate(&event::read()?, layout))
        } else {
            Ok(None)
        }
    }
}

/// Replays parsed script events. Once exhausted it asks the host to quit.
#[derive(Debug)]
pub struct ScriptEventSource {
    events: std::vec::IntoIter<HostEvent>,
}

impl ScriptEventSource {
    /// Replay `events` in order.
    pub fn new(events: Vec<HostEvent>) -> Self {
        Self {
            events: events.into_iter(),
        }
    }
}

impl EventSource for ScriptEventSource {
    fn next(
        &mut self,
        _timeout: Duration,
        _layout: &TrackLayout,
    ) -> Result<Option<HostEvent>> {
        Ok(Some(self.events.next().unwrap_or_else(|| {
            tracing::debug!("event script exhausted");
            HostEvent::Quit
        })))
    }

    fn is_scripted(&self) -> bool {
        true
    }
}

/// Map a terminal event onto the host. Mouse columns are reported relative
/// to the viewport's first column.
pub fn translate(event: &Event, layout: &TrackLayout) -> Option<HostEvent> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse, layout),
        Event::FocusLost => {
            Some(HostEvent::Gesture(GestureEvent::PointerLeave))
        }
        Event::Resize(cols, rows) => Some(HostEvent::Resize(f32::from(
            TrackLayout::for_terminal(*cols, *rows).viewport_width(),
        ))),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<HostEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            Some(HostEvent::Activate(Side::Left))
        }
        KeyCode::Right | KeyCode::Char('l') => {
            Some(HostEvent::Activate(Side::Right))
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(HostEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(HostEvent::Quit)
        }
        _ => None,
    }
}

fn translate_mouse(
    mouse: &MouseEvent,
    layout: &TrackLayout,
) -> Option<HostEvent> {
    let client_x = f32::from(mouse.column) - f32::from(layout.viewport_x());
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if !layout.contains_row(mouse.row) {
                return None;
            }
            for side in [Side::Left, Side::Right] {
                if mouse.column == layout.control_column(side) {
                    return Some(HostEvent::ControlClick(side));
                }
            }
            Some(HostEvent::Gesture(GestureEvent::PointerDown {
                client_x,
                target: EventTarget::Track,
            }))
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            Some(HostEvent::Gesture(GestureEvent::moved(client_x)))
        }
        MouseEventKind::Up(MouseButton::Left) => {
            Some(HostEvent::Gesture(GestureEvent::PointerUp))
        }
        _ => None,
    }
}

/// Run the full-screen host until the user quits or the script runs out.
pub fn run(host: &mut TerminalHost, source: &mut dyn EventSource) -> Result<()> {
    let scripted = source.is_scripted();

    let mut stdout = io::stdout();
    if !scripted {
        enable_raw_mode()?;
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, host, source);

    if !scripted {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        terminal.show_cursor()?;
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    host: &mut TerminalHost,
    source: &mut dyn EventSource,
) -> Result<()> {
    let size = terminal.size()?;
    let mut layout = TrackLayout::for_terminal(size.width, size.height);
    let terminal_width = f32::from(layout.viewport_width());
    // Scripted runs keep their own width as long as the terminal can show it
    if !source.is_scripted() || host.viewport_width() > terminal_width {
        host.apply(HostEvent::Resize(terminal_width));
    }

    loop {
        terminal.draw(|f| draw(f, host))?;

        let Some(event) = source.next(Duration::from_millis(150), &layout)?
        else {
            continue;
        };
        if let HostEvent::Resize(_) = event {
            let size = terminal.size()?;
            layout = TrackLayout::for_terminal(size.width, size.height);
        }
        if !host.apply(event) {
            return Ok(());
        }
    }
}

fn draw(f: &mut Frame, host: &TerminalHost) {
    let area = f.size();
    let title = if host.carousel().config().mirrored() {
        "reel (rtl)"
    } else {
        "reel"
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(TRACK_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    f.render_widget(Paragraph::new(render_track(host)), chunks[0]);
    f.render_widget(Paragraph::new(status_line(host)), chunks[1]);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "←/h ◀  →/l ▶  drag to scroll  q quit",
            Style::default().fg(Color::DarkGray),
        ))),
        chunks[3],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use reel_config::CarouselSettings;

    fn layout() -> TrackLayout {
        TrackLayout::for_terminal(40, 10)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn keys_map_to_sides_and_quit() {
        let layout = layout();
        assert_eq!(
            translate(&key(KeyCode::Left), &layout),
            Some(HostEvent::Activate(Side::Left))
        );
        assert_eq!(
            translate(&key(KeyCode::Char('l')), &layout),
            Some(HostEvent::Activate(Side::Right))
        );
        assert_eq!(translate(&key(KeyCode::Esc), &layout), Some(HostEvent::Quit));
        assert_eq!(translate(&key(KeyCode::Char('x')), &layout), None);
    }

    #[test]
    fn mouse_on_track_is_relative_to_viewport() {
        let layout = layout();
        let down = mouse(MouseEventKind::Down(MouseButton::Left), 12, 2);
        assert_eq!(
            translate(&down, &layout),
            Some(HostEvent::Gesture(GestureEvent::down(10.0)))
        );
        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 30, 8);
        assert_eq!(
            translate(&drag, &layout),
            Some(HostEvent::Gesture(GestureEvent::moved(28.0)))
        );
    }

    #[test]
    fn mouse_on_control_column_clicks_it() {
        let layout = layout();
        let left = mouse(MouseEventKind::Down(MouseButton::Left), 1, 2);
        assert_eq!(
            translate(&left, &layout),
            Some(HostEvent::ControlClick(Side::Left))
        );
        let right = mouse(MouseEventKind::Down(MouseButton::Left), 38, 1);
        assert_eq!(
            translate(&right, &layout),
            Some(HostEvent::ControlClick(Side::Right))
        );
        let below = mouse(MouseEventKind::Down(MouseButton::Left), 1, 6);
        assert_eq!(translate(&below, &layout), None);
    }

    #[test]
    fn focus_loss_and_resize() {
        let layout = layout();
        assert_eq!(
            translate(&Event::FocusLost, &layout),
            Some(HostEvent::Gesture(GestureEvent::PointerLeave))
        );
        assert_eq!(
            translate(&Event::Resize(100, 30), &layout),
            Some(HostEvent::Resize(96.0))
        );
    }

    #[test]
    fn script_source_quits_when_exhausted() {
        let mut source =
            ScriptEventSource::new(vec![HostEvent::Activate(Side::Right)]);
        let layout = layout();
        let timeout = Duration::ZERO;
        assert_eq!(
            source.next(timeout, &layout).unwrap(),
            Some(HostEvent::Activate(Side::Right))
        );
        assert_eq!(source.next(timeout, &layout).unwrap(), Some(HostEvent::Quit));
        assert!(source.is_scripted());
    }

    #[test]
    fn mouse_drag_scrolls_the_host() {
        let settings = CarouselSettings {
            item_width: 10.0,
            item_count: 10,
            ..Default::default()
        };
        let layout = layout();
        let mut host =
            TerminalHost::new(&settings, f32::from(layout.viewport_width()))
                .unwrap();
        for event in [
            mouse(MouseEventKind::Down(MouseButton::Left), 20, 2),
            mouse(MouseEventKind::Drag(MouseButton::Left), 15, 2),
            mouse(MouseEventKind::Up(MouseButton::Left), 15, 2),
        ] {
            if let Some(event) = translate(&event, &layout) {
                host.apply(event);
            }
        }
        let snapshot = host.snapshot();
        assert_eq!(snapshot.offset, 10.0);
        assert!(!snapshot.dragging);
        assert!(snapshot.visibility.show_retreat);
    }
}
