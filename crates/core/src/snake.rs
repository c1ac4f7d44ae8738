//! Snake module - body segments, heading and movement
//!
//! The body is an ordered list of cells with the head first. Every move the
//! whole chain advances rigidly: each segment takes its predecessor's previous
//! cell and the head steps once along the heading.
//!
//! Growth appends a copy of the tail. The duplicate is absorbed by the next
//! move, so the snake is one cell longer from then on.

use crate::types::{Direction, Point};

/// Player-controlled snake
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Segments, head first. Never empty.
    body: Vec<Point>,
    direction: Direction,
}

impl Snake {
    /// Create a one-segment snake at `start` with an idle heading
    pub fn new(start: Point) -> Self {
        Self {
            body: vec![start],
            direction: Direction::None,
        }
    }

    /// Build a snake from explicit segments (head first)
    ///
    /// Returns `None` for an empty body.
    pub fn from_segments(segments: Vec<Point>, direction: Direction) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        Some(Self {
            body: segments,
            direction,
        })
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn body(&self) -> &[Point] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Check if any segment (head included) sits on `p`
    pub fn occupies(&self, p: Point) -> bool {
        self.body.contains(&p)
    }

    /// Change heading, ignoring a direct reversal
    ///
    /// Returns `true` if the heading was accepted.
    pub fn change_direction(&mut self, new: Direction) -> bool {
        if self.direction != Direction::None && new == self.direction.opposite() {
            return false;
        }
        self.direction = new;
        true
    }

    /// Advance one cell along the heading. An idle snake stays put.
    pub fn move_step(&mut self) {
        if self.direction == Direction::None {
            return;
        }

        let new_head = self.head().step(self.direction);
        let len = self.body.len();
        if len > 1 {
            self.body.copy_within(0..len - 1, 1);
        }
        self.body[0] = new_head;
    }

    /// Append a copy of the tail segment
    pub fn grow(&mut self) {
        let tail = self.body[self.body.len() - 1];
        self.body.push(tail);
    }

    /// Check if the head overlaps any other segment
    pub fn has_collided(&self) -> bool {
        let head = self.head();
        self.body[1..].contains(&head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake(segments: &[(i16, i16)], direction: Direction) -> Snake {
        let body = segments.iter().map(|&(x, y)| Point::new(x, y)).collect();
        Snake::from_segments(body, direction).unwrap()
    }

    #[test]
    fn test_new_snake_is_idle() {
        let mut s = Snake::new(Point::new(12, 10));
        assert_eq!(s.direction(), Direction::None);
        s.move_step();
        assert_eq!(s.head(), Point::new(12, 10));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_reversal_is_rejected() {
        let mut s = Snake::new(Point::new(5, 5));
        assert!(s.change_direction(Direction::Left));
        assert!(!s.change_direction(Direction::Right));
        assert_eq!(s.direction(), Direction::Left);

        assert!(s.change_direction(Direction::Up));
        assert!(!s.change_direction(Direction::Down));
        assert_eq!(s.direction(), Direction::Up);
    }

    #[test]
    fn test_any_direction_accepted_from_idle() {
        for dir in [Direction::Left, Direction::Right, Direction::Up, Direction::Down] {
            let mut s = Snake::new(Point::new(5, 5));
            assert!(s.change_direction(dir));
            assert_eq!(s.direction(), dir);
        }
    }

    #[test]
    fn test_move_shifts_chain() {
        let mut s = snake(&[(5, 5), (4, 5), (3, 5)], Direction::Right);
        s.move_step();
        assert_eq!(
            s.body(),
            &[Point::new(6, 5), Point::new(5, 5), Point::new(4, 5)]
        );

        s.change_direction(Direction::Down);
        s.move_step();
        assert_eq!(
            s.body(),
            &[Point::new(6, 6), Point::new(6, 5), Point::new(5, 5)]
        );
    }

    #[test]
    fn test_random_turns_preserve_length_and_shift_chain() {
        use crate::rng::SimpleRng;

        const DIRS: [Direction; 4] = [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ];

        for seed in 1..=50 {
            let mut rng = SimpleRng::new(seed);
            let body = (0..6).map(|i| Point::new(100 - i, 100)).collect();
            let mut s = Snake::from_segments(body, Direction::Right).unwrap();

            for _ in 0..200 {
                let dir = DIRS[rng.next_range(4) as usize];
                if dir == s.direction().opposite() {
                    continue;
                }
                assert!(s.change_direction(dir));

                let prev = s.body().to_vec();
                s.move_step();

                assert_eq!(s.len(), prev.len(), "seed {}", seed);
                assert_eq!(s.head(), prev[0].step(dir), "seed {}", seed);
                for i in 1..prev.len() {
                    assert_eq!(s.body()[i], prev[i - 1], "seed {} segment {}", seed, i);
                }
            }
        }
    }

    #[test]
    fn test_grow_then_move_extends_by_one() {
        let mut s = snake(&[(5, 5), (4, 5), (3, 5)], Direction::Right);
        s.grow();
        assert_eq!(s.len(), 4);
        s.move_step();
        assert_eq!(s.len(), 4);
        assert_eq!(
            s.body(),
            &[
                Point::new(6, 5),
                Point::new(5, 5),
                Point::new(4, 5),
                Point::new(3, 5)
            ]
        );
        assert!(!s.has_collided());
    }

    #[test]
    fn test_grow_single_segment() {
        let mut s = Snake::new(Point::new(5, 5));
        s.change_direction(Direction::Up);
        s.grow();
        // The duplicate segment sits under the head until the next move.
        assert!(s.has_collided());
        s.move_step();
        assert_eq!(s.body(), &[Point::new(5, 4), Point::new(5, 5)]);
        assert!(!s.has_collided());
    }

    #[test]
    fn test_self_collision_detected() {
        let s = snake(&[(5, 5), (5, 5)], Direction::Left);
        assert!(s.has_collided());

        let s = snake(&[(5, 5), (6, 5), (6, 6), (5, 6), (5, 5)], Direction::Up);
        assert!(s.has_collided());

        let s = snake(&[(5, 5), (6, 5), (7, 5)], Direction::Left);
        assert!(!s.has_collided());
    }

    #[test]
    fn test_from_segments_rejects_empty() {
        assert!(Snake::from_segments(Vec::new(), Direction::None).is_none());
    }
}
