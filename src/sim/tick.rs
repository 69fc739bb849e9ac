//! Fixed timestep simulation tick
//!
//! Core game loop step: resolves the buffered direction, moves the snake,
//! checks walls and body, eats food, and scales speed.

use super::grid::Direction;
use super::state::{EndReason, GamePhase, GameState};

/// Input sampled once at the top of a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Latest requested direction since the previous tick
    pub direction: Option<Direction>,
    /// Pause toggle
    pub pause: bool,
    /// Start a new round (only honoured once the round has ended)
    pub restart: bool,
}

impl TickInput {
    pub fn turn(direction: Direction) -> Self {
        Self {
            direction: Some(direction),
            ..Default::default()
        }
    }
}

/// Things that happened during a tick, for logging/HUD/high score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Ate { score: u32 },
    SpeedUp { speed: u32 },
    Paused,
    Resumed,
    Restarted,
    Ended { reason: EndReason, score: u32 },
}

/// Direction for this tick: the request, unless it reverses the heading
pub fn resolve_direction(heading: Direction, requested: Option<Direction>) -> Direction {
    match requested {
        Some(dir) if !dir.is_reversal_of(heading) => dir,
        _ => heading,
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.restart && state.phase == GamePhase::Ended {
        state.reset();
        log::info!("Round {} started", state.round);
        events.push(GameEvent::Restarted);
        return events;
    }

    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Running => {
                state.phase = GamePhase::Paused;
                events.push(GameEvent::Paused);
                return events;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Running;
                events.push(GameEvent::Resumed);
            }
            GamePhase::Ended => {}
        }
    }

    // Don't tick if paused or ended
    if !state.is_running() {
        return events;
    }

    let direction = resolve_direction(state.heading(), input.direction);
    let new_head = state.snake.head().step(direction);

    if !state.grid.in_bounds(new_head) {
        end_round(state, EndReason::Wall, &mut events);
        return events;
    }

    let grew = state.food == Some(new_head);
    if state.snake.would_collide(new_head, grew) {
        end_round(state, EndReason::SelfCollision, &mut events);
        return events;
    }

    state.snake.advance(direction, grew);
    state.time_ticks += 1;

    if grew {
        state.score += 1;
        events.push(GameEvent::Ate { score: state.score });

        let speed = state.config.speed_after_score(state.speed, state.score);
        if speed != state.speed {
            state.speed = speed;
            events.push(GameEvent::SpeedUp { speed });
        }

        if state.respawn_food().is_none() {
            end_round(state, EndReason::BoardCleared, &mut events);
        }
    }

    events
}

fn end_round(state: &mut GameState, reason: EndReason, events: &mut Vec<GameEvent>) {
    state.phase = GamePhase::Ended;
    state.end_reason = Some(reason);
    log::info!(
        "Round {} ended ({:?}) with score {} after {} ticks",
        state.round,
        reason,
        state.score,
        state.time_ticks
    );
    events.push(GameEvent::Ended {
        reason,
        score: state.score,
    });
}
