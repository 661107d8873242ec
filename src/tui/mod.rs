//! Terminal front end: turns key presses into screen events and draws each frame.

pub mod render;

use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;

use crate::screen::{ScreenController, ScreenEvent};

/// Run the screen until the user quits. The terminal is restored on every exit path.
pub fn run(mut screen: ScreenController, tick: Duration) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut screen, tick);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    screen: &mut ScreenController,
    tick: Duration,
) -> anyhow::Result<()> {
    let mut last = Instant::now();
    loop {
        let now = Instant::now();
        screen.tick(now.duration_since(last));
        last = now;

        let view = screen.view();
        terminal
            .draw(|frame| render::draw(frame, &view))
            .context("failed to draw frame")?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind == KeyEventKind::Press {
                    if let Some(ev) = map_key(key) {
                        screen.handle(ev);
                    }
                }
            }
        }

        if screen.should_quit() {
            tracing::info!("quit requested");
            return Ok(());
        }
    }
}

pub fn map_key(key: KeyEvent) -> Option<ScreenEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(ScreenEvent::Quit),
        KeyCode::Char('c') if ctrl => Some(ScreenEvent::Quit),
        KeyCode::Char('r') if ctrl => Some(ScreenEvent::Retry),
        KeyCode::Char('t') if ctrl => Some(ScreenEvent::ToggleDirection),
        KeyCode::Tab => Some(ScreenEvent::ToggleDirection),
        KeyCode::Enter => Some(ScreenEvent::TapSelected),
        KeyCode::Down => Some(ScreenEvent::SelectNext),
        KeyCode::Up => Some(ScreenEvent::SelectPrev),
        KeyCode::Backspace => Some(ScreenEvent::Backspace),
        KeyCode::Char(c) if !ctrl => Some(ScreenEvent::InsertChar(c)),
        _ => None,
    }
}
