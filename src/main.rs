mod best_score;
mod config;
mod engine;
mod food;
mod game;
mod game_loop;
mod grid;
mod input;
mod render;
mod state;
mod store;

use crossterm::{
    cursor::Show,
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::io::{self, Stdout};
use std::time::Instant;

use crate::config::GameConfig;
use crate::game::Game;
use crate::store::FileStore;

fn main() -> Result<(), io::Error> {
    let config = GameConfig::default();

    // Set up logging before anything else; the terminal belongs to the UI
    WriteLogger::init(
        LevelFilter::Info,
        Config::default(),
        File::create(&config.log_file)?,
    )
    .map_err(io::Error::other)?;

    info!("Starting gridsnek on a {0}x{0} grid", config.grid_size);

    let mut game = Game::new(&config, FileStore::new(&config.data_dir));
    let result = play(&mut game);
    if let Err(e) = &result {
        error!("Game failed: {}", e);
    }

    info!("Exiting with best score {}", game.best());
    result
}

/// Puts the terminal back when dropped, whichever way setup or the loop ended
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            error!("Error disabling raw mode: {}", e);
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
            error!("Error leaving alternate screen: {}", e);
        }
    }
}

fn play(game: &mut Game<FileStore>) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let _guard = TerminalGuard;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    run(&mut terminal, game)
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    game: &mut Game<FileStore>,
) -> io::Result<()> {
    game.start(Instant::now());

    while !game.should_quit() {
        if game.take_redraw() {
            terminal.draw(|f| render::draw(f, game.state(), game.best(), game.banner()))?;
        }

        // Wait for input no longer than the next tick
        if event::poll(game.timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(command) = input::command_for(key) {
                        game.handle_command(command, Instant::now());
                    }
                }
                Event::Resize(_, _) => game.invalidate(),
                _ => {}
            }
        }

        game.update(Instant::now());
    }

    Ok(())
}
