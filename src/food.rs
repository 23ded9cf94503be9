use rand::Rng;

use crate::config::GridSize;
use crate::error::GameError;
use crate::snake::{Position, Snake};

/// Uniform draws attempted before falling back to a free-cell scan.
pub const MAX_SAMPLE_ATTEMPTS: usize = 64;

/// Picks a cell not occupied by the snake, uniformly over the free cells.
///
/// Sparse boards almost always succeed on the first draws. Crowded boards fall
/// through to an exhaustive scan, so the call always terminates; a board with
/// no free cell yields [`GameError::BoardFull`].
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Result<Position, GameError> {
    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };
        if !snake.occupies(candidate) {
            return Ok(candidate);
        }
    }

    let candidates = free_cells(bounds, snake);
    if candidates.is_empty() {
        return Err(GameError::BoardFull {
            width: bounds.width,
            height: bounds.height,
        });
    }

    let index = rng.gen_range(0..candidates.len());
    Ok(candidates[index])
}

/// Lists every in-bounds cell the snake does not cover, row by row.
#[must_use]
pub fn free_cells(bounds: GridSize, snake: &Snake) -> Vec<Position> {
    let mut candidates = Vec::with_capacity(bounds.total_cells().saturating_sub(snake.len()));

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    candidates
}
