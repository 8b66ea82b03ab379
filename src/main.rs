//! Terminal Blockfall runner (default binary).
//!
//! Polls crossterm for key presses until the next frame is due, then advances
//! the session by the measured wall-clock time and redraws.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::config::Config;
use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{command_for_key, should_quit};
use blockfall::journal::{JournalEntry, SessionJournal};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::from_env();
    eprintln!("[blockfall] seed {}", config.seed);

    let mut journal = match config.log_path.as_deref() {
        Some(path) => match SessionJournal::open(path) {
            Ok(journal) => {
                eprintln!("[blockfall] journaling to {}", path);
                Some(journal)
            }
            Err(e) => {
                eprintln!("[blockfall] journal disabled: {:#}", e);
                None
            }
        },
        None => None,
    };
    if let Some(journal) = journal.as_mut() {
        journal.record(JournalEntry::Start { seed: config.seed });
    }

    let mut game = GameState::new(config.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, journal.as_mut(), &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(mut journal) = journal {
        journal.record(JournalEntry::Quit {
            score: game.score(),
        });
        journal.flush();
    }
    eprintln!("[blockfall] final score {}", game.score());
    result
}

fn run(
    term: &mut TerminalRenderer,
    game: &mut GameState,
    mut journal: Option<&mut SessionJournal>,
    config: &Config,
) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let frame = config.frame_duration();
    let mut last_frame = Instant::now();

    loop {
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.present(&fb)?;

        // Input with timeout until the next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = command_for_key(key) {
                        game.apply_command(command);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_frame.elapsed() >= frame {
            let now = Instant::now();
            game.process_game_loop(now.duration_since(last_frame).as_secs_f64());
            last_frame = now;
        }

        // Drain even without a journal so the queue stays bounded.
        let events = game.drain_events();
        match journal.as_deref_mut() {
            Some(journal) => {
                journal.record_all(events);
                journal.flush();
            }
            None => drop(events),
        }
    }
}
