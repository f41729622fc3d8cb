use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use canvas_shooter::config::GameConfig;
use canvas_shooter::display::{self, ScoreBoard, TerminalCanvas};
use canvas_shooter::error::Result;
use canvas_shooter::game::{Game, GameEvent};
use canvas_shooter::input::{Key, KeyState};
use canvas_shooter::logging;
use canvas_shooter::spawner::Spawner;

/// What the session loop wants after a game ends.
enum SessionEnd {
    Quit,
    Restart,
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Run one game until the player quits or asks for a restart.
///
/// Input model: key events update a `KeyState`; at the start of each frame it
/// is frozen into an `InputSnapshot` that the game reads.  Keyboard-enhanced
/// terminals report releases, others rely on the hold window in `KeyState`.
fn game_loop<W: Write>(
    out: &mut W,
    config: &GameConfig,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
) -> Result<SessionEnd> {
    let bounds = config.bounds();
    let (term_width, term_height) = terminal::size()?;
    let mut canvas = TerminalCanvas::new(bounds, term_width, term_height);
    let mut game = Game::new(bounds);
    let mut board = ScoreBoard::new();
    let mut spawner = Spawner::new(config.spawn_interval());
    let mut keys = KeyState::new();
    let frame_len = config.frame();

    out.execute(terminal::Clear(terminal::ClearType::All))?;
    info!("new game on a {}x{} play area", bounds.width, bounds.height);

    let mut frame: u64 = 0;
    let mut last_spawn_check = Instant::now();

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) => {
                    match (kind, code) {
                        (KeyEventKind::Release, _) => {}
                        (_, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) => {
                            return Ok(SessionEnd::Quit);
                        }
                        (_, KeyCode::Char('c')) if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(SessionEnd::Quit);
                        }
                        (_, KeyCode::Char('r') | KeyCode::Char('R')) if game.is_over() => {
                            return Ok(SessionEnd::Restart);
                        }
                        _ => {}
                    }
                    if let Some(key) = Key::from_key_code(code) {
                        match kind {
                            KeyEventKind::Press | KeyEventKind::Repeat => keys.press(key, frame),
                            KeyEventKind::Release => keys.release(key),
                        }
                    }
                }
                Event::Resize(w, h) => {
                    out.execute(terminal::Clear(terminal::ClearType::All))?;
                    canvas = TerminalCanvas::new(bounds, w, h);
                }
                _ => {}
            }
        }

        // ── Spawner runs on wall-clock time, independent of frame pacing ─────
        let now = Instant::now();
        if !game.is_over() {
            for enemy in spawner.poll(now - last_spawn_check, rng, bounds) {
                game.push_enemy(enemy);
            }
        }
        last_spawn_check = now;

        // ── Simulate ─────────────────────────────────────────────────────────
        let input = keys.snapshot(frame);
        for event in game.step(&input) {
            board.on_event(&event);
            if let GameEvent::GameOver { final_score } = event {
                info!("final score {}", final_score);
            }
        }

        display::render(out, &mut canvas, &game, &board)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_len {
            thread::sleep(frame_len - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Logs go to the file named by SHOOTER_LOG; stderr would draw over the game.
    if let Err(e) = logging::init() {
        eprintln!("canvas_shooter: could not open log file: {}", e);
    }

    if let Err(e) = run_terminal() {
        error!("{}", e);
        eprintln!("canvas_shooter: {}", e);
        std::process::exit(1);
    }
}

fn run_terminal() -> Result<()> {
    let config = GameConfig::load()?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &config, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, config: &GameConfig, rx: &mpsc::Receiver<Event>) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    loop {
        match game_loop(out, config, &mut rng, rx)? {
            SessionEnd::Quit => break,
            SessionEnd::Restart => info!("restarting"),
        }
    }
    Ok(())
}
