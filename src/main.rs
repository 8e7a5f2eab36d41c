//! Terminal 2048 runner (default binary).
//!
//! Loads the optional JSON config (path as the first argument, default
//! `config.json`), then runs a turn-based event loop: render, wait for a
//! key, forward the action into the core.

use std::env;
use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::config::GameConfig;
use tui_2048::core::GameState;
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{GameView, MoveEffects, TerminalRenderer, Viewport};
use tui_2048::types::{GameAction, EFFECT_FLASH_MS, EFFECT_FRAME_MS, IDLE_POLL_MS};

fn main() -> Result<()> {
    let config_path = env::args().nth(1).unwrap_or_else(|| "config.json".into());
    let config = GameConfig::load(Path::new(&config_path))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut state = GameState::new(config.to_rules(), time_seed());
    let view = GameView::default();
    let mut effects: Option<(MoveEffects, Instant)> = None;

    loop {
        // Drop the highlight once its flash window has passed.
        if let Some((_, since)) = &effects {
            if since.elapsed() >= Duration::from_millis(EFFECT_FLASH_MS) {
                effects = None;
            }
        }

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&state, effects.as_ref().map(|(e, _)| e), Viewport::new(w, h));
        term.draw(&fb)?;

        // Poll quickly while a flash is live, lazily when idle.
        let timeout = if effects.is_some() {
            Duration::from_millis(EFFECT_FRAME_MS)
        } else {
            Duration::from_millis(IDLE_POLL_MS)
        };

        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                match handle_key_event(key) {
                    Some(GameAction::Move(direction)) => {
                        let result = state.attempt_move(direction);
                        if result.moved {
                            effects = Some((MoveEffects::from_result(&result), Instant::now()));
                        }
                    }
                    Some(GameAction::Restart) => {
                        state.reset();
                        effects = None;
                    }
                    None => {}
                }
            }
            Event::Resize(..) => {
                // Next loop iteration re-renders at the new size.
            }
            _ => {}
        }
    }
}
