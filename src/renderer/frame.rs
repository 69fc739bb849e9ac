//! Board widget
//!
//! Draws a [`GameState`] into a ratatui [`Buffer`]: HUD line, bordered board,
//! phase overlays and the controls hint. No terminal access here, so the
//! layout can be checked in tests.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

use crate::sim::{Cell, EndReason, GamePhase, GameState, Grid};

/// Each grid cell is two columns wide so cells look square
pub const CELL_WIDTH: u16 = 2;

pub const HEAD_GLYPH: &str = "██";
pub const BODY_GLYPH: &str = "▒▒";
pub const FOOD_GLYPH: &str = "● ";
pub const EMPTY_GLYPH: &str = "  ";

pub const CONTROLS_HINT: &str = "Arrows/WASD move | P pause | R restart | Esc quit";

const TEXT: Color = Color::Rgb(230, 230, 235);
const GRID: Color = Color::Rgb(90, 96, 112);
const SNAKE_HEAD: Color = Color::Rgb(0, 200, 120);
const SNAKE_BODY: Color = Color::Rgb(0, 160, 96);
const FOOD: Color = Color::Rgb(220, 80, 90);

pub const HUD_STYLE: Style = Style::new().fg(TEXT);
pub const BORDER_STYLE: Style = Style::new().fg(GRID);
pub const HEAD_STYLE: Style = Style::new().fg(SNAKE_HEAD).add_modifier(Modifier::BOLD);
pub const BODY_STYLE: Style = Style::new().fg(SNAKE_BODY);
pub const FOOD_STYLE: Style = Style::new().fg(FOOD);
pub const OVERLAY_STYLE: Style = Style::new().fg(TEXT).add_modifier(Modifier::BOLD);

/// The whole game screen as a widget
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    state: &'a GameState,
    high_score: u32,
}

impl<'a> BoardView<'a> {
    pub fn new(state: &'a GameState, high_score: u32) -> Self {
        Self { state, high_score }
    }

    fn hud(&self) -> Line<'static> {
        let state = self.state;
        Line::styled(
            format!(
                "Score: {}  High: {}  Speed: {}",
                state.score,
                self.high_score.max(state.score),
                state.speed
            ),
            HUD_STYLE,
        )
    }

    fn rows(&self) -> Vec<Line<'static>> {
        let state = self.state;
        let size = state.grid.size() as i32;
        let head = state.snake.head();
        (0..size)
            .map(|y| {
                let spans: Vec<Span<'static>> = (0..size)
                    .map(|x| {
                        let cell = Cell::new(x, y);
                        if cell == head {
                            Span::styled(HEAD_GLYPH, HEAD_STYLE)
                        } else if state.snake.occupies(cell) {
                            Span::styled(BODY_GLYPH, BODY_STYLE)
                        } else if state.food == Some(cell) {
                            Span::styled(FOOD_GLYPH, FOOD_STYLE)
                        } else {
                            Span::raw(EMPTY_GLYPH)
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    /// Text laid over the board for the current phase
    fn overlay(&self) -> Vec<Line<'static>> {
        match self.state.phase {
            GamePhase::Running => Vec::new(),
            GamePhase::Paused => vec![Line::from("PAUSED")],
            GamePhase::Ended => {
                let title = match self.state.end_reason {
                    Some(EndReason::BoardCleared) => "BOARD CLEARED",
                    _ => "GAME OVER",
                };
                vec![
                    Line::from(title),
                    Line::from(format!("Score: {}", self.state.score)),
                    Line::from("Press R to restart"),
                ]
            }
        }
    }
}

impl Widget for BoardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let side = self.state.grid.size() as u16;
        let [hud_area, board_row, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(side + 2),
            Constraint::Length(1),
        ])
        .flex(Flex::Start)
        .areas(area);
        let [board_area] = Layout::horizontal([Constraint::Length(side * CELL_WIDTH + 2)])
            .flex(Flex::Start)
            .areas(board_row);

        self.hud().render(hud_area, buf);

        Paragraph::new(self.rows())
            .block(Block::bordered().border_style(BORDER_STYLE))
            .render(board_area, buf);

        let overlay = self.overlay();
        if !overlay.is_empty() {
            let inner = board_area.inner(Margin::new(1, 1));
            let [popup] = Layout::vertical([Constraint::Length(overlay.len() as u16)])
                .flex(Flex::Center)
                .areas(inner);
            Clear.render(popup, buf);
            Paragraph::new(overlay)
                .alignment(Alignment::Center)
                .style(OVERLAY_STYLE)
                .render(popup, buf);
        }

        Line::styled(CONTROLS_HINT, HUD_STYLE).render(hint_area, buf);
    }
}

/// Screen area needed to show a board of this size plus HUD and hint
pub fn frame_area(grid: &Grid) -> Rect {
    let side = grid.size() as u16;
    let width = (side * CELL_WIDTH + 2).max(CONTROLS_HINT.len() as u16);
    Rect::new(0, 0, width, side + 4)
}

/// Render the game into a fresh buffer sized by [`frame_area`]
pub fn compose_frame(state: &GameState, high_score: u32) -> Buffer {
    let area = frame_area(&state.grid);
    let mut buf = Buffer::empty(area);
    BoardView::new(state, high_score).render(area, &mut buf);
    buf
}
