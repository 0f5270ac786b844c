use super::{
    config::GameConfig,
    direction::Direction,
    state::{CollisionKind, GameState, Position, Snake},
};
use rand::Rng;

/// Result of advancing the game by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game goes on
    Continue,
    /// Terminal collision; the driving loop must stop ticking this state
    GameOver(CollisionKind),
}

/// Owns the per-tick transition and the food spawn RNG
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh state: a horizontal snake at the board center heading right,
    /// no food, score zero
    pub fn reset(&self) -> GameState {
        let snake = Snake::new(
            Position::new(0, 0),
            Direction::Right,
            self.config.start_length,
            self.config.grid_size,
        );

        GameState::new(
            snake,
            self.config.width / 2,
            self.config.height / 2,
            self.config.grid_size,
        )
    }

    /// Advance the state by one cell of movement
    ///
    /// Commits the buffered turn, moves the body, then checks walls, self
    /// collision, food, and the spawn schedule, in that order. Ticking a
    /// finished game is an integration error; the state is left untouched
    /// and the terminal outcome is returned again.
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        if let Some(kind) = state.collision {
            return TickOutcome::GameOver(kind);
        }

        let stride = self.config.grid_size;

        state.snake.heading = state.pending_heading;

        // Each segment takes the cell of the one ahead of it, computed from
        // a snapshot of the pre-move layout so the shift cannot cascade.
        let previous = state.snake.segments.clone();
        let tail_before = state.snake.tail();
        for i in (1..state.snake.segments.len()).rev() {
            state.snake.segments[i] = previous[i - 1];
        }
        state.snake.segments[0] = previous[0].stepped(state.snake.heading, stride);

        let head = state.snake.head();

        if !state.in_bounds(head) {
            state.collision = Some(CollisionKind::Wall);
            return TickOutcome::GameOver(CollisionKind::Wall);
        }

        // The tail has already moved on, so chasing it point-blank is legal
        if state.snake.hits_body(head, stride) {
            state.collision = Some(CollisionKind::Body);
            return TickOutcome::GameOver(CollisionKind::Body);
        }

        // Eat everything in reach. Each food grows the body by one segment
        // at the cell the tail vacated this tick; stacked foods all count.
        let reach = (stride as i64) * (stride as i64);
        let mut i = 0;
        while i < state.foods.len() {
            if head.distance_sq(state.foods[i]) < reach {
                state.foods.remove(i);
                state.snake.segments.push(tail_before);
                state.score += 1;
            } else {
                i += 1;
            }
        }

        if state.ticks == 0
            || (state.ticks % self.config.food_interval == 0
                && state.foods.len() < self.config.max_food)
        {
            let food = self.spawn_food();
            state.foods.push(food);
        }

        state.ticks += 1;
        TickOutcome::Continue
    }

    /// Uniform grid-aligned cell excluding the outermost ring. The cell may
    /// coincide with the snake or with food already on the board.
    fn spawn_food(&mut self) -> Position {
        let cells_x = self.config.width / 2 / self.config.grid_size;
        let cells_y = self.config.height / 2 / self.config.grid_size;
        let x = self.rng.gen_range(-(cells_x - 1)..=cells_x - 1) * self.config.grid_size;
        let y = self.rng.gen_range(-(cells_y - 1)..=cells_y - 1) * self.config.grid_size;
        Position::new(x, y)
    }
}
