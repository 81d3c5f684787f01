mod draw;
mod error;
mod input;
mod window;

use std::sync::atomic::{self, AtomicBool};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use game_core::{Config, Direction, Frame, Game, InputSnapshot, MonotonicClock};

use crate::error::ClientError;

fn main() -> Result<(), ClientError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::new();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let game = Game::new(config.clone(), seed)?;
    let first = game.frame();

    let exit = Arc::new(AtomicBool::new(false));
    let (dir_send, dir_recv) = mpsc::channel();
    let (frame_send, frame_recv) = mpsc::sync_channel(2);

    let e2 = exit.clone();
    let game_thread = thread::Builder::new()
        .name("game".to_string())
        .spawn(move || run_game(game, dir_recv, frame_send, e2))?;

    let (ev_loop, mut app) =
        window::init_window(config.arena_size(), first, frame_recv, dir_send, exit.clone())?;
    let loop_result = ev_loop.run_app(&mut app);

    // Make sure the game thread sees the quit even if the loop errored out
    exit.store(true, atomic::Ordering::Relaxed);
    if game_thread.join().is_err() {
        return Err(ClientError::GameThread);
    }

    loop_result?;
    app.into_result()
}

/// Drive the scheduler until the window asks to quit
fn run_game(
    mut game: Game,
    dir_recv: mpsc::Receiver<Direction>,
    frame_send: mpsc::SyncSender<Frame>,
    exit: Arc<AtomicBool>,
) {
    let mut dir = Direction::Idle;
    let mut input = || {
        dir = dir_recv.try_iter().last().unwrap_or(dir);
        if exit.load(atomic::Ordering::Relaxed) {
            InputSnapshot::quit()
        } else {
            InputSnapshot::steer(dir)
        }
    };

    let render = |frame: &Frame| {
        match frame_send.try_send(*frame) {
            // The window is behind; it will pick up a later frame
            Ok(()) | Err(mpsc::TrySendError::Full(_)) => {}
            Err(mpsc::TrySendError::Disconnected(_)) => exit.store(true, atomic::Ordering::Relaxed),
        }
    };

    game.run(&mut MonotonicClock::new(), &mut input, render);
}
