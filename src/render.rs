use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::engine::Banner;
use crate::grid::Cell;
use crate::state::GameState;

/// Terminal columns per board cell; keeps cells roughly square
const CELL_WIDTH: u16 = 2;
const BANNER_HEIGHT: u16 = 5;

const EMPTY_SYMBOL: &str = "·";
const FOOD_SYMBOL: &str = "◆";
const HEAD_SYMBOL: &str = "●";

/// Draw the whole screen: header with scores, the board, any banner and the
/// key help line.
pub fn draw(frame: &mut Frame, state: &GameState, best: u32, banner: Option<Banner>) {
    let layout = Layout::default()
        .direction(layout::Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + scores
            Constraint::Min(0),    // Board
            Constraint::Length(1), // Controls
        ])
        .split(frame.area());

    frame.render_widget(
        Paragraph::new(format!(
            "SNAKE    Score: {}    Best: {}",
            state.score, best
        ))
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL)),
        layout[0],
    );

    let board_area = board_rect(state.grid.size(), layout[1]);
    let block = Block::default().borders(Borders::ALL);
    let inner_area = block.inner(board_area);
    frame.render_widget(block, board_area);
    frame.render_widget(Board { state }, inner_area);

    if let Some(banner) = banner {
        let area = banner_rect(inner_area);
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(banner_text(banner, state.score))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::White).bg(Color::Black).bold()),
            area,
        );
    }

    frame.render_widget(
        Paragraph::new("arrows/WASD move   SPACE pause   ENTER restart   ESC quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        layout[2],
    );
}

/// Bordered board centred horizontally in `area`, clipped to fit
fn board_rect(grid_size: u16, area: Rect) -> Rect {
    let width = (grid_size * CELL_WIDTH + 2).min(area.width);
    let height = (grid_size + 2).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height,
    }
}

/// Full-width strip across the middle of the board
fn banner_rect(board: Rect) -> Rect {
    let height = BANNER_HEIGHT.min(board.height);
    Rect {
        x: board.x,
        y: board.y + (board.height - height) / 2,
        width: board.width,
        height,
    }
}

fn banner_text(banner: Banner, score: u32) -> Text<'static> {
    let lines = match banner {
        Banner::Paused => vec![
            Line::from(""),
            Line::from("PAUSED"),
            Line::from("Press SPACE to continue"),
        ],
        Banner::GameOver => vec![
            Line::from("GAME OVER"),
            Line::from(format!("Final Score: {}", score)),
            Line::from("Press ENTER to play again"),
        ],
    };
    Text::from(lines)
}

/// The playing field: dotted background, food, snake body and head
struct Board<'a> {
    state: &'a GameState,
}

impl Board<'_> {
    fn paint(area: Rect, buf: &mut Buffer, cell: Cell, symbol: &str, style: Style) {
        let x = area.x as i32 + cell.x * CELL_WIDTH as i32;
        let y = area.y as i32 + cell.y;
        if x < area.x as i32 || y < area.y as i32 || y >= area.bottom() as i32 {
            return;
        }
        for col in 0..CELL_WIDTH as i32 {
            let x = x + col;
            if x >= area.right() as i32 {
                break;
            }
            let sym = if col == 0 { symbol } else { " " };
            buf[(x as u16, y as u16)].set_symbol(sym).set_style(style);
        }
    }
}

impl Widget for Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let size = self.state.grid.size() as i32;
        let background = Style::default().fg(Color::DarkGray).bg(Color::Black);
        for y in 0..size {
            for x in 0..size {
                Self::paint(area, buf, Cell::new(x, y), EMPTY_SYMBOL, background);
            }
        }

        Self::paint(
            area,
            buf,
            self.state.food,
            FOOD_SYMBOL,
            Style::default().fg(Color::LightRed).bg(Color::Black),
        );

        for segment in self.state.snake.iter().skip(1) {
            Self::paint(area, buf, *segment, " ", Style::default().bg(Color::Green));
        }

        // Head last so it stays visible on top of a colliding segment
        Self::paint(
            area,
            buf,
            self.state.snake.head(),
            HEAD_SYMBOL,
            Style::default().fg(Color::Black).bg(Color::LightGreen),
        );
    }
}
