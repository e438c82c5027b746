use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::best_score::BestScore;
use crate::config::GameConfig;
use crate::engine::{Banner, Engine, TickOutcome};
use crate::game_loop::Ticker;
use crate::input::Command;
use crate::state::{GameState, Status};
use crate::store::KeyValueStore;

/// One game session: state, rules, tick schedule and best score, driven
/// from a single thread by key commands and clock readings.
pub struct Game<S, R = ThreadRng> {
    engine: Engine,
    state: GameState,
    best: BestScore<S>,
    ticker: Ticker,
    rng: R,
    banner: Option<Banner>,
    needs_redraw: bool,
    quit: bool,
}

impl<S: KeyValueStore> Game<S, ThreadRng> {
    pub fn new(config: &GameConfig, store: S) -> Self {
        Game::with_rng(config, store, rand::thread_rng())
    }
}

impl<S: KeyValueStore, R: Rng> Game<S, R> {
    pub fn with_rng(config: &GameConfig, store: S, mut rng: R) -> Self {
        let state = GameState::new(config, &mut rng);
        Game {
            engine: Engine::new(config),
            state,
            best: BestScore::load(store, config.best_score_key.as_str()),
            ticker: Ticker::new(config.tick_period),
            rng,
            banner: None,
            needs_redraw: true,
            quit: false,
        }
    }

    /// Begin ticking from `now`
    pub fn start(&mut self, now: Instant) {
        self.ticker.start(now);
    }

    pub fn handle_command(&mut self, command: Command, now: Instant) {
        match command {
            Command::Turn(direction) => {
                if !self.state.set_pending_direction(direction) {
                    debug!("Ignored reversal to {:?}", direction);
                }
            }
            Command::TogglePause => {
                let paused = self.state.toggle_pause();
                info!("{}", if paused { "Paused" } else { "Resumed" });
                if !paused {
                    // Unpausing redraws at once; a finished game keeps its banner
                    self.banner = match self.state.status() {
                        Status::GameOver => Some(Banner::GameOver),
                        _ => None,
                    };
                    self.needs_redraw = true;
                }
            }
            Command::Restart => {
                self.state.reset(&mut self.rng);
                self.banner = None;
                self.needs_redraw = true;
                self.ticker.start(now);
            }
            Command::Quit => {
                info!("Quit requested");
                self.quit = true;
            }
        }
    }

    /// Run the tick that has come due by `now`, if any. Never more than one
    /// per call, so every tick gets its own frame.
    pub fn update(&mut self, now: Instant) {
        if !self.ticker.poll(now) {
            return;
        }

        let outcome = self.engine.tick(&mut self.state, &mut self.best, &mut self.rng);
        self.banner = outcome.banner();
        self.needs_redraw = true;

        match outcome {
            TickOutcome::Ate { score, new_best } => {
                if new_best {
                    info!("New best score: {}", score);
                }
            }
            TickOutcome::Collided(collision) => {
                info!(
                    "Game over: hit {:?}, final score {}",
                    collision, self.state.score
                );
            }
            TickOutcome::Paused | TickOutcome::Moved | TickOutcome::Halted => {}
        }

        if outcome.ends_game() {
            self.ticker.stop();
        }
    }

    /// Ask for a redraw without any state change, e.g. after a resize
    pub fn invalidate(&mut self) {
        self.needs_redraw = true;
    }

    /// Returns true once per pending render request
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// How long the caller may block waiting for input
    pub fn timeout(&self, now: Instant) -> Duration {
        self.ticker.timeout(now)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn best(&self) -> u32 {
        self.best.get()
    }

    pub fn banner(&self) -> Option<Banner> {
        self.banner
    }

    #[cfg(test)]
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, Direction};
    use crate::store::MemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const PERIOD: Duration = Duration::from_millis(110);

    fn new_game() -> Game<MemoryStore, StdRng> {
        Game::with_rng(
            &GameConfig::default(),
            MemoryStore::default(),
            StdRng::seed_from_u64(17),
        )
    }

    fn started_game() -> (Game<MemoryStore, StdRng>, Instant) {
        let mut game = new_game();
        let now = Instant::now();
        game.start(now);
        game.take_redraw();
        (game, now)
    }

    #[test]
    fn test_first_frame_requested() {
        let mut game = new_game();
        assert!(game.take_redraw());
        assert!(!game.take_redraw());
        assert_eq!(game.banner(), None);
        assert!(!game.is_ticking());
    }

    #[test]
    fn test_tick_moves_snake() {
        let (mut game, start) = started_game();
        let head = game.state().snake.head();

        game.update(start + PERIOD);

        assert_eq!(game.state().snake.head(), head.stepped(Direction::Right));
        assert!(game.take_redraw());
        assert_eq!(game.banner(), None);
    }

    #[test]
    fn test_turn_waits_for_tick() {
        let (mut game, start) = started_game();

        game.handle_command(Command::Turn(Direction::Down), start);
        assert_eq!(game.state().direction, Direction::Right);
        assert_eq!(game.state().pending_direction, Direction::Down);

        game.update(start + PERIOD);
        assert_eq!(game.state().direction, Direction::Down);
    }

    #[test]
    fn test_rapid_turns_cannot_reverse() {
        let (mut game, start) = started_game();

        // Up then Left within one tick: Left is a reversal of the applied Right
        game.handle_command(Command::Turn(Direction::Up), start);
        game.handle_command(Command::Turn(Direction::Left), start);
        game.update(start + PERIOD);

        assert_eq!(game.state().direction, Direction::Up);
        assert_eq!(game.state().status(), Status::Running);
    }

    #[test]
    fn test_paused_tick_shows_banner() {
        let (mut game, start) = started_game();
        game.handle_command(Command::TogglePause, start);
        assert!(!game.take_redraw());
        let before = game.state().clone();

        game.update(start + PERIOD);

        assert_eq!(game.state(), &before);
        assert_eq!(game.banner(), Some(Banner::Paused));
        assert!(game.take_redraw());
        assert!(game.is_ticking());
    }

    #[test]
    fn test_unpause_redraws_without_banner() {
        let (mut game, start) = started_game();
        game.handle_command(Command::TogglePause, start);
        game.update(start + PERIOD);
        game.take_redraw();

        game.handle_command(Command::TogglePause, start + PERIOD);

        assert!(!game.state().paused);
        assert!(game.take_redraw());
        assert_eq!(game.banner(), None);
    }

    fn crash_into_wall(game: &mut Game<MemoryStore, StdRng>, start: Instant) -> Instant {
        // Head starts at x=10 heading right on a 20 wide board
        let mut now = start;
        for _ in 0..20 {
            now += PERIOD;
            game.update(now);
            if game.state().game_over {
                break;
            }
            // keep the food out of the way so the run is predictable
            game.state.food = Cell::new(0, 0);
        }
        now
    }

    #[test]
    fn test_wall_hit_stops_ticking() {
        let (mut game, start) = started_game();
        game.state.food = Cell::new(0, 0);

        let now = crash_into_wall(&mut game, start);

        assert_eq!(game.state().status(), Status::GameOver);
        assert_eq!(game.banner(), Some(Banner::GameOver));
        assert!(!game.is_ticking());

        let frozen = game.state().clone();
        game.update(now + PERIOD * 10);
        assert_eq!(game.state(), &frozen);
    }

    #[test]
    fn test_pause_toggles_after_game_over() {
        let (mut game, start) = started_game();
        game.state.food = Cell::new(0, 0);
        let now = crash_into_wall(&mut game, start);
        game.take_redraw();

        game.handle_command(Command::TogglePause, now);
        assert!(game.state().paused);
        assert_eq!(game.state().status(), Status::GameOver);

        game.handle_command(Command::TogglePause, now);
        assert!(!game.state().paused);
        assert_eq!(game.state().status(), Status::GameOver);
        assert!(game.take_redraw());
        assert_eq!(game.banner(), Some(Banner::GameOver));
        assert!(!game.is_ticking());
    }

    #[test]
    fn test_late_wakeup_moves_one_cell() {
        let (mut game, start) = started_game();
        game.state.food = Cell::new(0, 0);
        let head = game.state().snake.head();

        game.update(start + Duration::from_millis(2000));

        assert_eq!(game.state().snake.head(), head.stepped(Direction::Right));
        assert_eq!(game.state().status(), Status::Running);
        assert!(game.is_ticking());
        assert!(game.take_redraw());

        // Next tick comes on the following period boundary, not immediately
        game.update(start + Duration::from_millis(2000));
        assert_eq!(game.state().snake.head(), head.stepped(Direction::Right));
    }

    #[test]
    fn test_restart_after_game_over() {
        let (mut game, start) = started_game();
        game.state.food = Cell::new(0, 0);
        game.state.score = 40;
        let now = crash_into_wall(&mut game, start);
        game.take_redraw();

        game.handle_command(Command::Restart, now);

        let state = game.state();
        assert_eq!(state.status(), Status::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Cell::new(10, 10));
        assert!(!state.paused);
        assert!(!state.snake.contains(state.food));
        assert_eq!(game.banner(), None);
        assert!(game.take_redraw());
        assert!(game.is_ticking());

        let head = game.state().snake.head();
        game.update(now + PERIOD);
        assert_eq!(game.state().snake.head(), head.stepped(Direction::Right));
    }

    #[test]
    fn test_best_survives_restart() {
        let (mut game, start) = started_game();
        let ahead = game.state().snake.head().stepped(Direction::Right);
        game.state.food = ahead;

        game.update(start + PERIOD);
        assert_eq!(game.state().score, 10);
        assert_eq!(game.best(), 10);

        game.handle_command(Command::Restart, start + PERIOD);
        assert_eq!(game.state().score, 0);
        assert_eq!(game.best(), 10);
    }

    #[test]
    fn test_quit() {
        let (mut game, start) = started_game();
        assert!(!game.should_quit());
        game.handle_command(Command::Quit, start);
        assert!(game.should_quit());
    }

    #[test]
    fn test_timeout_follows_ticker() {
        let (game, start) = started_game();
        assert_eq!(game.timeout(start), PERIOD);
    }
}
