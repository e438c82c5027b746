use std::path::PathBuf;
use std::time::Duration;

/// Fixed game settings
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Cells per side of the square board
    pub grid_size: u16,
    /// Time between simulation steps
    pub tick_period: Duration,
    /// Snake length after a reset
    pub initial_length: u16,
    /// Points awarded per food eaten
    pub food_score: u32,
    /// Store key the best score is kept under
    pub best_score_key: String,
    /// Directory holding persisted values
    pub data_dir: PathBuf,
    pub log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            tick_period: Duration::from_millis(110),
            initial_length: 3,
            food_score: 10,
            best_score_key: "snake-best-score".to_string(),
            data_dir: PathBuf::from("."),
            log_file: PathBuf::from("gridsnek.log"),
        }
    }
}

impl GameConfig {
    #[cfg(test)]
    pub fn with_grid_size(grid_size: u16) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }
}
