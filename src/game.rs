use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{EngineConfig, GridSize, POINTS_PER_FOOD, clamp_countdown};
use crate::error::GameError;
use crate::food::spawn_position;
use crate::input::{Direction, direction_change_is_valid};
use crate::snake::{Position, Snake};

/// Number of segments in a freshly reset snake.
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Preferred head cell for a fresh snake on boards large enough to hold it.
pub const PREFERRED_START_HEAD: Position = Position::new(10, 10);

/// Why a game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    WallCollision,
    SelfCollision,
    /// The snake grew over the last free cell; food could not be placed.
    BoardFull,
}

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

/// Complete simulation state for one board.
///
/// Only the engine writes to it; everyone else reads through the accessors.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    bounds: GridSize,
    snake: Snake,
    food: Option<Position>,
    direction: Direction,
    next_direction: Direction,
    score: u32,
    game_over: bool,
    game_paused: bool,
    wall_pass_enabled: bool,
    countdown_time: u8,
    end_reason: Option<EndReason>,
}

impl GameState {
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Current food cell; `None` only after the board filled up.
    #[must_use]
    pub fn food(&self) -> Option<Position> {
        self.food
    }

    /// Direction committed on the last tick.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction that the next tick will commit.
    #[must_use]
    pub fn next_direction(&self) -> Direction {
        self.next_direction
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.game_paused
    }

    #[must_use]
    pub fn wall_pass_enabled(&self) -> bool {
        self.wall_pass_enabled
    }

    /// Countdown length in seconds, always within `[1, 10]`.
    #[must_use]
    pub fn countdown_time(&self) -> u8 {
        self.countdown_time
    }

    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    /// Game over wins over pause.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::GameOver
        } else if self.game_paused {
            GameStatus::Paused
        } else {
            GameStatus::Running
        }
    }
}

/// Summary of the board after one [`GameEngine::advance`] call.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TickOutcome {
    pub head: Position,
    pub snake_len: usize,
    pub food: Option<Position>,
    pub score: u32,
    pub game_over: bool,
    pub food_eaten: bool,
    pub end_reason: Option<EndReason>,
}

/// Tick-driven snake simulation owning one board.
#[derive(Debug, Clone)]
pub struct GameEngine {
    state: GameState,
    rng: StdRng,
}

impl GameEngine {
    /// Creates an engine seeded from OS entropy.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::build(config, StdRng::from_entropy())
    }

    /// Creates a deterministic engine for tests and reproducible runs.
    #[must_use]
    pub fn with_seed(config: EngineConfig, seed: u64) -> Self {
        Self::build(config, StdRng::seed_from_u64(seed))
    }

    /// Creates a deterministic engine with an explicit snake and optional food.
    ///
    /// Both `direction` fields start at `heading`. When `food` is `None` a
    /// fresh cell is drawn from the seeded generator.
    pub fn with_layout(
        config: EngineConfig,
        seed: u64,
        segments: Vec<Position>,
        heading: Direction,
        food: Option<Position>,
    ) -> Result<Self, GameError> {
        let mut engine = Self::with_seed(config, seed);
        let bounds = engine.state.bounds;

        let snake = Snake::from_segments(segments)
            .ok_or_else(|| GameError::InvalidLayout("snake has no segments".to_owned()))?;
        if let Some(outside) = snake.segments().find(|cell| !cell.is_within_bounds(bounds)) {
            return Err(GameError::InvalidLayout(format!(
                "segment ({}, {}) lies outside the {}x{} board",
                outside.x, outside.y, bounds.width, bounds.height
            )));
        }
        if snake.has_overlap() {
            return Err(GameError::InvalidLayout(
                "snake segments overlap".to_owned(),
            ));
        }

        engine.state.snake = snake;
        engine.state.direction = heading;
        engine.state.next_direction = heading;

        match food {
            Some(cell) if !cell.is_within_bounds(bounds) => {
                return Err(GameError::InvalidLayout(format!(
                    "food ({}, {}) lies outside the board",
                    cell.x, cell.y
                )));
            }
            Some(cell) if engine.is_position_occupied(cell) => {
                return Err(GameError::InvalidLayout(format!(
                    "food ({}, {}) overlaps the snake",
                    cell.x, cell.y
                )));
            }
            Some(cell) => engine.state.food = Some(cell),
            None => {
                engine.generate_food()?;
            }
        }

        Ok(engine)
    }

    fn build(config: EngineConfig, rng: StdRng) -> Self {
        let config = config.normalized();
        let bounds = config.grid_size();
        let mut engine = Self {
            state: GameState {
                bounds,
                snake: Snake::straight(start_head(bounds), Direction::Right, INITIAL_SNAKE_LEN),
                food: None,
                direction: Direction::Right,
                next_direction: Direction::Right,
                score: 0,
                game_over: false,
                game_paused: false,
                wall_pass_enabled: config.wall_pass_enabled,
                countdown_time: clamp_countdown(config.countdown_time),
                end_reason: None,
            },
            rng,
        };
        engine.reset();
        engine
    }

    /// Restores the starting board while keeping grid size and settings.
    pub fn reset(&mut self) {
        let bounds = self.state.bounds;
        self.state.snake =
            Snake::straight(start_head(bounds), Direction::Right, INITIAL_SNAKE_LEN);
        self.state.direction = Direction::Right;
        self.state.next_direction = Direction::Right;
        self.state.score = 0;
        self.state.game_over = false;
        self.state.game_paused = false;
        self.state.end_reason = None;
        self.state.food = None;

        if let Err(error) = self.generate_food() {
            warn!("reset could not place food: {error}");
        }

        debug!(
            "reset {}x{} board, head at ({}, {})",
            bounds.width,
            bounds.height,
            self.state.snake.head().x,
            self.state.snake.head().y
        );
    }

    /// Queues a turn for the next tick.
    ///
    /// Returns `false` without touching state when `direction` reverses the
    /// committed direction. Checking the committed direction rather than the
    /// queued one keeps several quick presses within one tick from chaining
    /// into a reversal.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.state.direction, direction) {
            return false;
        }

        self.state.next_direction = direction;
        true
    }

    /// Advances the simulation by one tick.
    ///
    /// A paused or finished game is left untouched and its current state is
    /// reported back.
    pub fn advance(&mut self) -> TickOutcome {
        if self.state.game_paused || self.state.game_over {
            return self.outcome(false);
        }

        self.state.direction = self.state.next_direction;

        let bounds = self.state.bounds;
        let mut head = self.state.snake.head().stepped(self.state.direction);
        if !head.is_within_bounds(bounds) {
            if !self.state.wall_pass_enabled {
                return self.finish(EndReason::WallCollision, false);
            }
            head = head.wrapped(bounds);
        }

        // Checked against the whole pre-move body, tail included.
        if self.state.snake.occupies(head) {
            return self.finish(EndReason::SelfCollision, false);
        }

        self.state.snake.push_head(head);

        let food_eaten = self.state.food == Some(head);
        if food_eaten {
            self.state.score += POINTS_PER_FOOD;
            debug!(
                "food eaten at ({}, {}), score {}",
                head.x, head.y, self.state.score
            );

            if let Err(error) = self.generate_food() {
                warn!("{error}");
                self.state.food = None;
                return self.finish(EndReason::BoardFull, true);
            }
        } else {
            self.state.snake.drop_tail();
        }

        self.outcome(food_eaten)
    }

    /// Moves food to a random free cell and returns it.
    ///
    /// On a full board food is left where it was and `BoardFull` is returned.
    pub fn generate_food(&mut self) -> Result<Position, GameError> {
        let position = spawn_position(&mut self.rng, self.state.bounds, &self.state.snake)?;
        self.state.food = Some(position);
        Ok(position)
    }

    /// Returns true when any snake segment covers `position`.
    #[must_use]
    pub fn is_position_occupied(&self, position: Position) -> bool {
        self.state.snake.occupies(position)
    }

    pub fn toggle_wall_pass(&mut self, enabled: bool) {
        self.state.wall_pass_enabled = enabled;
    }

    /// Stores the countdown length, clamped into `[1, 10]` seconds.
    pub fn set_countdown_time(&mut self, seconds: i64) {
        self.state.countdown_time = clamp_countdown(seconds);
    }

    pub fn pause(&mut self) {
        self.state.game_paused = true;
    }

    pub fn resume(&mut self) {
        self.state.game_paused = false;
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn finish(&mut self, reason: EndReason, food_eaten: bool) -> TickOutcome {
        self.state.game_over = true;
        self.state.end_reason = Some(reason);
        info!(
            "game over: {reason:?}, score {}, length {}",
            self.state.score,
            self.state.snake.len()
        );
        self.outcome(food_eaten)
    }

    fn outcome(&self, food_eaten: bool) -> TickOutcome {
        TickOutcome {
            head: self.state.snake.head(),
            snake_len: self.state.snake.len(),
            food: self.state.food,
            score: self.state.score,
            game_over: self.state.game_over,
            food_eaten,
            end_reason: self.state.end_reason,
        }
    }
}

/// Head cell for a fresh snake: the fixed preferred cell when it is interior
/// to the board, otherwise the board centre shifted right to fit the body.
///
/// Either way at least one free column stays ahead of the head.
#[must_use]
pub fn start_head(bounds: GridSize) -> Position {
    let preferred = PREFERRED_START_HEAD;
    if preferred.x + 1 < i32::from(bounds.width) && preferred.y + 1 < i32::from(bounds.height) {
        return preferred;
    }

    let min_x = i32::try_from(INITIAL_SNAKE_LEN - 1).unwrap_or(0);
    Position {
        x: (i32::from(bounds.width) / 2).max(min_x),
        y: i32::from(bounds.height) / 2,
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::config::{EngineConfig, GridSize};
    use crate::error::GameError;
    use crate::input::Direction;
    use crate::snake::Position;

    use super::{EndReason, GameEngine, GameStatus, start_head};

    fn config(width: u16, height: u16) -> EngineConfig {
        EngineConfig {
            grid_width: width,
            grid_height: height,
            ..EngineConfig::default()
        }
    }

    fn row(head_x: i32, y: i32, len: i32) -> Vec<Position> {
        (0..len).map(|i| Position::new(head_x - i, y)).collect()
    }

    #[test]
    fn defaults_produce_the_starting_board() {
        let engine = GameEngine::with_seed(EngineConfig::default(), 1);
        let state = engine.state();

        let segments: Vec<Position> = state.snake().segments().copied().collect();
        assert_eq!(
            segments,
            vec![
                Position::new(10, 10),
                Position::new(9, 10),
                Position::new(8, 10),
            ]
        );
        assert_eq!(state.bounds(), GridSize { width: 25, height: 25 });
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.next_direction(), Direction::Right);
        assert_eq!(state.score(), 0);
        assert!(!state.is_game_over());
        assert!(!state.is_paused());
        assert!(!state.wall_pass_enabled());
        assert_eq!(state.countdown_time(), 3);
        assert_eq!(state.status(), GameStatus::Running);

        let food = state.food().expect("fresh board has food");
        assert!(!engine.is_position_occupied(food));
    }

    #[test]
    fn custom_settings_are_applied() {
        let engine = GameEngine::with_seed(
            EngineConfig {
                grid_width: 30,
                grid_height: 30,
                wall_pass_enabled: true,
                countdown_time: 5,
            },
            2,
        );

        assert!(engine.state().wall_pass_enabled());
        assert_eq!(engine.state().countdown_time(), 5);
        assert_eq!(engine.state().bounds(), GridSize { width: 30, height: 30 });
    }

    #[test]
    fn small_board_centres_the_starting_snake() {
        let bounds = GridSize { width: 6, height: 4 };
        assert_eq!(start_head(bounds), Position::new(3, 2));

        let tiny = GridSize { width: 4, height: 4 };
        assert_eq!(start_head(tiny), Position::new(2, 2));

        let engine = GameEngine::with_seed(config(4, 4), 9);
        assert!(engine
            .state()
            .snake()
            .segments()
            .all(|cell| cell.is_within_bounds(tiny)));
    }

    #[test]
    fn preferred_start_needs_an_interior_cell() {
        assert_eq!(
            start_head(GridSize { width: 12, height: 12 }),
            Position::new(10, 10)
        );
        assert_eq!(
            start_head(GridSize { width: 11, height: 11 }),
            Position::new(5, 5)
        );
        assert_eq!(
            start_head(GridSize { width: 30, height: 11 }),
            Position::new(15, 5)
        );
    }

    #[test]
    fn fresh_engine_survives_its_first_tick_on_every_small_board() {
        for width in 4..=12 {
            for height in 4..=12 {
                let mut engine = GameEngine::with_seed(config(width, height), 21);

                let outcome = engine.advance();

                assert!(
                    !outcome.game_over,
                    "{width}x{height} ended on the first tick: {:?}",
                    outcome.end_reason
                );
            }
        }
    }

    #[test]
    fn reversal_is_rejected_for_every_heading() {
        for heading in Direction::ALL {
            let segments = vec![Position::new(5, 5)];
            let mut engine =
                GameEngine::with_layout(config(12, 12), 3, segments, heading, None)
                    .expect("layout is valid");

            assert!(!engine.set_direction(heading.opposite()));
            assert_eq!(engine.state().next_direction(), heading);

            assert!(engine.set_direction(heading));
            for turn in Direction::ALL.into_iter().filter(|d| *d != heading.opposite()) {
                assert!(engine.set_direction(turn));
                assert_eq!(engine.state().next_direction(), turn);
            }
        }
    }

    #[test]
    fn queued_turn_cannot_chain_into_reversal() {
        let mut engine = GameEngine::with_seed(config(20, 20), 4);

        assert!(engine.set_direction(Direction::Up));
        // Still measured against the committed Right.
        assert!(!engine.set_direction(Direction::Left));
        assert_eq!(engine.state().next_direction(), Direction::Up);

        engine.advance();
        assert!(!engine.set_direction(Direction::Down));
        assert!(engine.set_direction(Direction::Left));
    }

    #[test]
    fn snake_moves_one_cell_per_tick() {
        let mut engine = GameEngine::with_layout(
            config(20, 20),
            5,
            row(10, 10, 3),
            Direction::Right,
            Some(Position::new(0, 0)),
        )
        .expect("layout is valid");

        let outcome = engine.advance();

        assert_eq!(outcome.head, Position::new(11, 10));
        assert_eq!(outcome.snake_len, 3);
        assert!(!outcome.food_eaten);
        assert!(!outcome.game_over);
        assert_eq!(engine.state().snake().tail(), Position::new(9, 10));
    }

    #[test]
    fn wall_collision_freezes_the_board() {
        let mut engine = GameEngine::with_layout(
            config(20, 20),
            6,
            row(19, 10, 3),
            Direction::Right,
            Some(Position::new(0, 0)),
        )
        .expect("layout is valid");
        let before = engine.state().snake().clone();

        let outcome = engine.advance();

        assert!(outcome.game_over);
        assert_eq!(outcome.end_reason, Some(EndReason::WallCollision));
        assert_eq!(engine.state().snake(), &before);
        assert_eq!(engine.state().status(), GameStatus::GameOver);
    }

    #[test]
    fn wall_pass_wraps_on_every_edge() {
        let cases = [
            (Position::new(19, 4), Direction::Right, Position::new(0, 4)),
            (Position::new(0, 4), Direction::Left, Position::new(19, 4)),
            (Position::new(4, 0), Direction::Up, Position::new(4, 14)),
            (Position::new(4, 14), Direction::Down, Position::new(4, 0)),
        ];

        for (head, heading, expected) in cases {
            let mut engine = GameEngine::with_layout(
                EngineConfig {
                    wall_pass_enabled: true,
                    ..config(20, 15)
                },
                7,
                vec![head],
                heading,
                Some(Position::new(10, 7)),
            )
            .expect("layout is valid");

            let outcome = engine.advance();

            assert_eq!(outcome.head, expected, "{heading:?}");
            assert!(!outcome.game_over);
        }
    }

    #[test]
    fn self_collision_keeps_the_pre_move_body() {
        let segments = vec![
            Position::new(10, 10),
            Position::new(11, 10),
            Position::new(12, 10),
            Position::new(13, 10),
            Position::new(14, 10),
            Position::new(14, 11),
            Position::new(13, 11),
            Position::new(12, 11),
            Position::new(11, 11),
            Position::new(10, 11),
        ];
        let mut engine = GameEngine::with_layout(
            config(20, 20),
            8,
            segments,
            Direction::Down,
            Some(Position::new(0, 0)),
        )
        .expect("layout is valid");

        let outcome = engine.advance();

        assert!(outcome.game_over);
        assert_eq!(outcome.end_reason, Some(EndReason::SelfCollision));
        assert_eq!(outcome.snake_len, 10);
        assert_eq!(engine.state().snake().head(), Position::new(10, 10));
    }

    #[test]
    fn moving_into_the_current_tail_is_a_collision() {
        // 2x2 loop: the head would step onto the tail, which is still
        // part of the body when the check runs.
        let segments = vec![
            Position::new(1, 0),
            Position::new(1, 1),
            Position::new(0, 1),
            Position::new(0, 0),
        ];
        let mut engine = GameEngine::with_layout(
            config(5, 5),
            9,
            segments,
            Direction::Up,
            Some(Position::new(4, 4)),
        )
        .expect("layout is valid");
        assert!(engine.set_direction(Direction::Left));

        let outcome = engine.advance();

        assert_eq!(outcome.end_reason, Some(EndReason::SelfCollision));
    }

    #[test]
    fn eating_food_grows_and_scores() {
        let mut engine = GameEngine::with_layout(
            config(20, 20),
            10,
            row(10, 10, 3),
            Direction::Right,
            Some(Position::new(11, 10)),
        )
        .expect("layout is valid");

        let outcome = engine.advance();

        assert!(outcome.food_eaten);
        assert_eq!(outcome.score, 10);
        assert_eq!(outcome.snake_len, 4);
        assert_eq!(engine.state().snake().tail(), Position::new(8, 10));

        let food = outcome.food.expect("food relocated");
        assert_ne!(food, Position::new(11, 10));
        assert!(!engine.is_position_occupied(food));
    }

    #[test]
    fn filling_the_board_ends_the_game() {
        // Covers every cell except (0, 0), where the food sits.
        let mut engine = GameEngine::with_layout(
            config(4, 4),
            11,
            vec![
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(3, 0),
                Position::new(3, 1),
                Position::new(2, 1),
                Position::new(1, 1),
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 2),
                Position::new(2, 2),
                Position::new(3, 2),
                Position::new(3, 3),
                Position::new(2, 3),
                Position::new(1, 3),
                Position::new(0, 3),
            ],
            Direction::Left,
            Some(Position::new(0, 0)),
        )
        .expect("layout is valid");

        let outcome = engine.advance();

        assert!(outcome.food_eaten);
        assert!(outcome.game_over);
        assert_eq!(outcome.end_reason, Some(EndReason::BoardFull));
        assert_eq!(outcome.food, None);
        assert_eq!(outcome.snake_len, 16);
        assert_eq!(
            engine.generate_food(),
            Err(GameError::BoardFull { width: 4, height: 4 })
        );
    }

    #[test]
    fn game_over_is_terminal_until_reset() {
        let mut engine = GameEngine::with_layout(
            config(20, 20),
            12,
            row(19, 3, 3),
            Direction::Right,
            Some(Position::new(0, 0)),
        )
        .expect("layout is valid");
        engine.advance();
        let frozen = engine.state().clone();

        engine.set_direction(Direction::Up);
        engine.advance();
        engine.resume();
        engine.advance();

        assert!(engine.state().is_game_over());
        assert_eq!(engine.state().snake(), frozen.snake());
        assert_eq!(engine.state().score(), frozen.score());
    }

    #[test]
    fn paused_tick_changes_nothing() {
        let mut engine = GameEngine::with_seed(config(20, 20), 13);
        assert!(engine.set_direction(Direction::Up));
        engine.pause();
        let before = engine.state().clone();

        let outcome = engine.advance();

        assert_eq!(engine.state(), &before);
        assert_eq!(engine.state().direction(), Direction::Right);
        assert!(!outcome.game_over);
        assert!(!outcome.food_eaten);

        engine.resume();
        engine.resume();
        assert!(!engine.state().is_paused());

        engine.advance();
        assert_eq!(engine.state().direction(), Direction::Up);
        assert_ne!(engine.state().snake(), before.snake());
    }

    #[test]
    fn reset_restores_board_and_keeps_settings() {
        let mut engine = GameEngine::with_layout(
            config(20, 20),
            14,
            row(10, 10, 3),
            Direction::Right,
            Some(Position::new(11, 10)),
        )
        .expect("layout is valid");
        engine.toggle_wall_pass(true);
        engine.set_countdown_time(8);
        engine.advance();
        engine.pause();

        engine.reset();

        let state = engine.state();
        assert_eq!(state.score(), 0);
        assert_eq!(state.snake().len(), 3);
        assert_eq!(state.snake().head(), Position::new(10, 10));
        assert!(!state.is_game_over());
        assert!(!state.is_paused());
        assert_eq!(state.end_reason(), None);
        assert!(state.wall_pass_enabled());
        assert_eq!(state.countdown_time(), 8);
    }

    #[test]
    fn countdown_setter_clamps() {
        let mut engine = GameEngine::with_seed(EngineConfig::default(), 15);

        engine.set_countdown_time(15);
        assert_eq!(engine.state().countdown_time(), 10);
        engine.set_countdown_time(-5);
        assert_eq!(engine.state().countdown_time(), 1);
        engine.set_countdown_time(7);
        assert_eq!(engine.state().countdown_time(), 7);
    }

    #[test]
    fn invalid_layouts_are_rejected() {
        let outside = GameEngine::with_layout(
            config(5, 5),
            16,
            vec![Position::new(5, 0)],
            Direction::Right,
            None,
        );
        assert!(matches!(outside, Err(GameError::InvalidLayout(_))));

        let overlapping = GameEngine::with_layout(
            config(5, 5),
            16,
            vec![Position::new(1, 1), Position::new(1, 1)],
            Direction::Right,
            None,
        );
        assert!(matches!(overlapping, Err(GameError::InvalidLayout(_))));

        let food_on_snake = GameEngine::with_layout(
            config(5, 5),
            16,
            vec![Position::new(1, 1)],
            Direction::Right,
            Some(Position::new(1, 1)),
        );
        assert!(matches!(food_on_snake, Err(GameError::InvalidLayout(_))));

        assert!(matches!(
            GameEngine::with_layout(config(5, 5), 16, Vec::new(), Direction::Right, None),
            Err(GameError::InvalidLayout(_))
        ));
    }

    #[test]
    fn food_never_lands_on_the_snake_during_random_play() {
        let mut engine = GameEngine::with_seed(
            EngineConfig {
                wall_pass_enabled: true,
                ..config(8, 8)
            },
            17,
        );
        let mut driver = StdRng::seed_from_u64(99);

        for _ in 0..2_000 {
            let direction = Direction::ALL[driver.gen_range(0..Direction::ALL.len())];
            let _ = engine.set_direction(direction);
            let outcome = engine.advance();

            if let Some(food) = engine.state().food() {
                assert!(!engine.is_position_occupied(food));
            }
            assert!(!engine.state().snake().has_overlap());
            assert_eq!(engine.state().score() % 10, 0);

            if outcome.game_over {
                engine.reset();
                let food = engine.state().food().expect("reset places food");
                assert!(!engine.is_position_occupied(food));
            }
        }
    }
}
