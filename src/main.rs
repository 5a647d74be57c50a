//! Falliant terminal runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer from
//! `falliant-term`. Operational messages are printed to stderr as
//! `[falliant] ...` once the terminal has been restored.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use falliant::app::App;
use falliant::config::Config;
use falliant::term::{FrameBuffer, ScreenRenderer, TerminalRenderer};

fn main() -> Result<()> {
    let config = Config::from_env();
    let mut app = App::new(&config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app, &config);

    // Always try to restore terminal state before reporting anything.
    let restored = term.exit();

    for warning in &config.warnings {
        eprintln!("[falliant] {warning}");
    }
    for line in app.drain_log() {
        eprintln!("[falliant] {line}");
    }
    if let Err(err) = &restored {
        eprintln!("[falliant] failed to restore terminal: {err:#}");
    }

    result
}

fn run(term: &mut TerminalRenderer, app: &mut App, config: &Config) -> Result<()> {
    let renderer = ScreenRenderer::default();
    let frame = config.frame_duration();
    let mut fb = FrameBuffer::new(0, 0);

    while app.is_running() {
        let frame_start = Instant::now();

        // At most one input per frame.
        if event::poll(Duration::ZERO).context("failed to poll terminal events")? {
            let ev = event::read().context("failed to read terminal event")?;
            handle_event(term, app, ev);
        }

        app.update();

        // Keys queued against the previous piece do not carry over.
        if app.take_input_flush() {
            discard_pending_keys(term)?;
        }

        let viewport = term.viewport()?;
        renderer.render_into(&app.screen(), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        thread::sleep(frame.saturating_sub(frame_start.elapsed()));
    }

    Ok(())
}

fn handle_event(term: &mut TerminalRenderer, app: &mut App, ev: Event) {
    match ev {
        Event::Key(key) => app.handle_key(key),
        Event::Resize(..) => term.invalidate(),
        _ => {}
    }
}

fn discard_pending_keys(term: &mut TerminalRenderer) -> Result<()> {
    while event::poll(Duration::ZERO).context("failed to poll terminal events")? {
        if let Event::Resize(..) = event::read().context("failed to read terminal event")? {
            term.invalidate();
        }
    }
    Ok(())
}
