use super::direction::Direction;

/// A grid-aligned position on the board, origin at the center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move one stride in a direction
    pub fn stepped(&self, direction: Direction, stride: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * stride, dy * stride)
    }

    /// Squared Euclidean distance, so proximity checks stay in integers
    pub fn distance_sq(&self, other: Position) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }
}

/// The player body: ordered segments with the head at index 0
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub segments: Vec<Position>,
    /// Committed direction of travel
    pub heading: Direction,
}

impl Snake {
    /// Lay out `length` segments one cell apart behind `head`
    pub fn new(head: Position, heading: Direction, length: usize, stride: i32) -> Self {
        let (dx, dy) = heading.delta();
        let segments = (0..length as i32)
            .map(|i| head.moved_by(-dx * stride * i, -dy * stride * i))
            .collect();
        Self { segments, heading }
    }

    pub fn head(&self) -> Position {
        self.segments[0]
    }

    pub fn tail(&self) -> Position {
        *self.segments.last().unwrap()
    }

    /// Segments behind the head
    pub fn body(&self) -> &[Position] {
        &self.segments[1..]
    }

    /// True if `pos` falls within `threshold` units of any non-head segment
    pub fn hits_body(&self, pos: Position, threshold: i32) -> bool {
        let limit = (threshold as i64) * (threshold as i64);
        self.body().iter().any(|seg| pos.distance_sq(*seg) < limit)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// What the head ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Head left the board
    Wall,
    /// Head landed on a body segment
    Body,
}

/// Complete game state
///
/// All mutation goes through [`GameState::request_turn`] and
/// [`super::engine::GameEngine::tick`]; the fields are public so that a
/// renderer can read them and tests can build exact layouts.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Most recently requested turn, committed at the start of the next tick
    pub pending_heading: Direction,
    /// Food items in spawn order; consumption scans in this order
    pub foods: Vec<Position>,
    pub score: u32,
    /// Completed ticks since the game started
    pub ticks: u64,
    /// Set once, on the tick the game ends
    pub collision: Option<CollisionKind>,
    pub half_width: i32,
    pub half_height: i32,
    pub grid_size: i32,
}

impl GameState {
    pub fn new(snake: Snake, half_width: i32, half_height: i32, grid_size: i32) -> Self {
        let pending_heading = snake.heading;
        Self {
            snake,
            pending_heading,
            foods: Vec::new(),
            score: 0,
            ticks: 0,
            collision: None,
            half_width,
            half_height,
            grid_size,
        }
    }

    /// Buffer a turn for the next tick, last write wins
    ///
    /// A request opposite to the current heading is dropped without error:
    /// reversing in place would fold the head straight into the neck.
    pub fn request_turn(&mut self, direction: Direction) {
        if !direction.is_opposite(self.snake.heading) {
            self.pending_heading = direction;
        }
    }

    pub fn is_alive(&self) -> bool {
        self.collision.is_none()
    }

    /// Whether a position is on the board, boundary included
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x.abs() <= self.half_width && pos.y.abs() <= self.half_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(40, -20);
        assert_eq!(pos.moved_by(20, 0), Position::new(60, -20));
        assert_eq!(pos.stepped(Direction::Up, 20), Position::new(40, 0));
        assert_eq!(pos.stepped(Direction::Left, 20), Position::new(20, -20));
    }

    #[test]
    fn test_distance_sq() {
        let a = Position::new(0, 0);
        assert_eq!(a.distance_sq(Position::new(20, 0)), 400);
        assert_eq!(a.distance_sq(Position::new(20, 20)), 800);
        assert_eq!(a.distance_sq(a), 0);
    }

    #[test]
    fn test_snake_layout() {
        let snake = Snake::new(Position::new(0, 0), Direction::Right, 3, 20);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(0, 0));
        assert_eq!(snake.segments[1], Position::new(-20, 0));
        assert_eq!(snake.tail(), Position::new(-40, 0));
    }

    #[test]
    fn test_hits_body_threshold() {
        let snake = Snake::new(Position::new(0, 0), Direction::Right, 3, 20);
        // Exactly one cell away is a near miss, same cell is a hit
        assert!(!snake.hits_body(Position::new(0, 0), 20)); // head itself, ignored
        assert!(snake.hits_body(Position::new(-20, 0), 20));
        assert!(!snake.hits_body(Position::new(-20, 20), 20)); // diagonal neighbor
        assert!(!snake.hits_body(Position::new(40, 0), 20));
    }

    #[test]
    fn test_request_turn_rejects_reversal() {
        let snake = Snake::new(Position::new(0, 0), Direction::Right, 3, 20);
        let mut state = GameState::new(snake, 250, 250, 20);

        state.request_turn(Direction::Left);
        assert_eq!(state.pending_heading, Direction::Right);

        state.request_turn(Direction::Up);
        assert_eq!(state.pending_heading, Direction::Up);
    }

    #[test]
    fn test_request_turn_last_write_wins() {
        let snake = Snake::new(Position::new(0, 0), Direction::Right, 3, 20);
        let mut state = GameState::new(snake, 250, 250, 20);

        state.request_turn(Direction::Up);
        state.request_turn(Direction::Down);
        // Both are legal against the committed heading; the later one sticks
        assert_eq!(state.pending_heading, Direction::Down);
    }

    #[test]
    fn test_bounds_checking() {
        let snake = Snake::new(Position::new(0, 0), Direction::Right, 3, 20);
        let state = GameState::new(snake, 250, 250, 20);

        assert!(state.in_bounds(Position::new(240, -240)));
        assert!(state.in_bounds(Position::new(250, 0)));
        assert!(!state.in_bounds(Position::new(260, 0)));
        assert!(!state.in_bounds(Position::new(0, -260)));
    }
}
