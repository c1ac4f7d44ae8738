//! Spawner module - placement of fruit, power-ups and obstacles
//!
//! Pickups are placed by rejection sampling over the interior: draw a random
//! interior cell and retry while it is covered by the snake or an obstacle.
//! After `max_attempts` misses the spawner scans every interior cell and picks
//! uniformly among the free ones, so a crowded field still terminates. Only a
//! completely saturated interior yields `None`.
//!
//! Obstacles are regenerated wholesale per level: `level * 3` independent
//! interior draws with no conflict check. They may land on the snake, on each
//! other or on a pickup; only the head moving onto one is fatal.

use crate::field::Field;
use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::types::{Point, OBSTACLES_PER_LEVEL, SPAWN_ATTEMPTS};

#[derive(Debug, Clone)]
pub struct Spawner {
    rng: SimpleRng,
    max_attempts: u32,
}

impl Spawner {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            max_attempts: SPAWN_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Uniform random interior cell, ignoring occupancy
    pub fn random_interior(&mut self, field: Field) -> Point {
        let (x0, x1) = field.interior_x();
        let (y0, y1) = field.interior_y();
        let x = self.rng.next_in(x0, x1);
        let y = self.rng.next_in(y0, y1);
        Point::new(x, y)
    }

    /// Find a free interior cell for a pickup
    pub fn spawn(&mut self, field: Field, snake: &Snake, obstacles: &[Point]) -> Option<Point> {
        self.spawn_where(field, |p| !snake.occupies(p) && !obstacles.contains(&p))
    }

    /// Find an interior cell accepted by `is_free`
    pub fn spawn_where(&mut self, field: Field, is_free: impl Fn(Point) -> bool) -> Option<Point> {
        for _ in 0..self.max_attempts {
            let p = self.random_interior(field);
            if is_free(p) {
                return Some(p);
            }
        }

        let free = field.interior_points().filter(|&p| is_free(p)).count();
        if free == 0 {
            return None;
        }
        let pick = self.rng.next_range(free as u32) as usize;
        field.interior_points().filter(|&p| is_free(p)).nth(pick)
    }

    /// Fresh obstacle set for `level` (`level * 3` cells)
    pub fn obstacles(&mut self, field: Field, level: u32) -> Vec<Point> {
        let count = level.saturating_mul(OBSTACLES_PER_LEVEL) as usize;
        (0..count).map(|_| self.random_interior(field)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    fn long_snake() -> Snake {
        let body = (3..20).map(|x| Point::new(x, 10)).collect();
        Snake::from_segments(body, Direction::Left).unwrap()
    }

    #[test]
    fn test_random_interior_never_touches_border() {
        let field = Field::new(25, 20);
        let mut spawner = Spawner::new(42);
        for _ in 0..2000 {
            assert!(field.is_interior(spawner.random_interior(field)));
        }
    }

    #[test]
    fn test_spawn_avoids_snake_and_obstacles() {
        let field = Field::new(25, 20);
        let snake = long_snake();
        let obstacles: Vec<Point> = (1..24).map(|x| Point::new(x, 5)).collect();

        for seed in 1..200 {
            let mut spawner = Spawner::new(seed);
            let p = spawner.spawn(field, &snake, &obstacles).unwrap();
            assert!(field.is_interior(p));
            assert!(!snake.occupies(p), "seed {} landed on snake at {:?}", seed, p);
            assert!(!obstacles.contains(&p), "seed {} landed on obstacle at {:?}", seed, p);
        }
    }

    #[test]
    fn test_spawn_falls_back_to_scan_when_crowded() {
        // 3x3 interior, everything covered except (3, 3).
        let field = Field::new(5, 5);
        let snake = Snake::new(Point::new(1, 1));
        let obstacles: Vec<Point> = field
            .interior_points()
            .filter(|&p| p != Point::new(1, 1) && p != Point::new(3, 3))
            .collect();

        let mut spawner = Spawner::new(5).with_max_attempts(0);
        assert_eq!(spawner.spawn(field, &snake, &obstacles), Some(Point::new(3, 3)));
    }

    #[test]
    fn test_spawn_returns_none_when_saturated() {
        let field = Field::new(4, 3);
        let body = vec![Point::new(1, 1), Point::new(2, 1)];
        let snake = Snake::from_segments(body, Direction::Left).unwrap();
        let mut spawner = Spawner::new(9);
        assert_eq!(spawner.spawn(field, &snake, &[]), None);
    }

    #[test]
    fn test_obstacle_count_scales_with_level() {
        let field = Field::new(25, 20);
        let mut spawner = Spawner::new(3);
        for level in 1..6 {
            let obs = spawner.obstacles(field, level);
            assert_eq!(obs.len(), (level * 3) as usize);
            assert!(obs.iter().all(|&p| field.is_interior(p)));
        }
    }

    #[test]
    fn test_obstacle_count_holds_on_a_full_interior() {
        // The snake covers the whole 2x2 interior; obstacles are still drawn.
        let field = Field::new(4, 4);
        let body = vec![
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(2, 2),
            Point::new(1, 2),
        ];
        let snake = Snake::from_segments(body, Direction::Left).unwrap();
        assert_eq!(Spawner::new(7).spawn(field, &snake, &[]), None);

        let obs = Spawner::new(7).obstacles(field, 1);
        assert_eq!(obs.len(), 3);
        assert!(obs.iter().all(|&p| snake.occupies(p)));
    }

    #[test]
    fn test_obstacles_ignore_the_snake() {
        // 4x2 interior with 7 of 8 cells under the snake.
        let field = Field::new(6, 4);
        let body: Vec<Point> = field
            .interior_points()
            .filter(|&p| p != Point::new(4, 2))
            .collect();
        let snake = Snake::from_segments(body, Direction::Left).unwrap();

        let mut on_snake = 0;
        for seed in 1..200 {
            on_snake += Spawner::new(seed)
                .obstacles(field, 3)
                .iter()
                .filter(|&&p| snake.occupies(p))
                .count();
        }
        assert!(on_snake > 1000, "only {} of 1791 draws hit the snake", on_snake);
    }

    #[test]
    fn test_spawn_where_uses_predicate() {
        let field = Field::new(25, 20);
        let only = Point::new(7, 3);
        let mut spawner = Spawner::new(11).with_max_attempts(4);
        assert_eq!(spawner.spawn_where(field, |p| p == only), Some(only));
        assert_eq!(spawner.spawn_where(field, |_| false), None);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let field = Field::new(25, 20);
        let a = Spawner::new(77).obstacles(field, 4);
        let b = Spawner::new(77).obstacles(field, 4);
        assert_eq!(a, b);
    }
}
