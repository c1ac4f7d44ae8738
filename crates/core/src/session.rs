//! Game session module - the single mutable state of one game
//!
//! This module ties together the snake, spawner and progression. It handles
//! commands, per-tick movement, collisions against the world, pickups and the
//! `Running -> GameOver` transition. It performs no I/O: audio cues are
//! reported back to the caller in a [`TickReport`].

use arrayvec::ArrayVec;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::field::Field;
use crate::progression::Progression;
use crate::rng::clock_seed;
use crate::snake::Snake;
use crate::spawner::Spawner;
use crate::types::{Command, Cue, Direction, EndReason, Point, FRUIT_POINTS, POWER_UP_POINTS};

/// Lifecycle of a session. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// What a single `step()` did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub ate_fruit: bool,
    pub ate_power_up: bool,
    pub levels_gained: u32,
    /// Cues raised this tick, in order
    pub cues: ArrayVec<Cue, 2>,
    /// Set when this tick ended the game
    pub ended: Option<EndReason>,
}

/// Values for the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub score: u32,
    pub level: u32,
    pub speed_ms: u32,
    pub game_over: bool,
}

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub score: u32,
    pub level: u32,
    pub length: usize,
    pub ticks: u64,
    pub reason: Option<EndReason>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    field: Field,
    snake: Snake,
    fruit: Point,
    power_up: Option<Point>,
    obstacles: Vec<Point>,
    progression: Progression,
    spawner: Spawner,
    status: GameStatus,
    end_reason: Option<EndReason>,
    ticks: u64,
    seed: u32,
}

impl GameSession {
    /// Start a new game: snake centred, then fruit, power-up and level 1 obstacles
    pub fn new(config: &GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(clock_seed);
        let field = config.field();
        let snake = Snake::new(field.center());
        let mut spawner = Spawner::new(seed).with_max_attempts(config.spawn_attempts);

        let (first_x, _) = field.interior_x();
        let (first_y, _) = field.interior_y();
        let fallback = Point::new(first_x, first_y);

        let fruit = spawner.spawn(field, &snake, &[]).unwrap_or(fallback);
        let power_up = spawner.spawn(field, &snake, &[fruit]);
        let progression = Progression::new(config.base_speed_ms, config.manual_level_up);
        let obstacles = spawner.obstacles(field, progression.level());

        info!(
            seed,
            width = field.width(),
            height = field.height(),
            "new game session"
        );

        Self {
            field,
            snake,
            fruit,
            power_up,
            obstacles,
            progression,
            spawner,
            status: GameStatus::Running,
            end_reason: None,
            ticks: 0,
            seed,
        }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn fruit(&self) -> Point {
        self.fruit
    }

    pub fn power_up(&self) -> Option<Point> {
        self.power_up
    }

    pub fn obstacles(&self) -> &[Point] {
        &self.obstacles
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn score(&self) -> u32 {
        self.progression.score()
    }

    pub fn level(&self) -> u32 {
        self.progression.level()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Scenario setup: move the fruit
    pub fn set_fruit(&mut self, p: Point) {
        self.fruit = p;
    }

    /// Scenario setup: place or remove the power-up
    pub fn set_power_up(&mut self, p: Option<Point>) {
        self.power_up = p;
    }

    /// Scenario setup: replace the obstacle set
    pub fn set_obstacles(&mut self, obstacles: Vec<Point>) {
        self.obstacles = obstacles;
    }

    /// Scenario setup: replace the snake
    pub fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    pub fn status_line(&self) -> Status {
        Status {
            score: self.progression.score(),
            level: self.progression.level(),
            speed_ms: self.progression.speed_ms(),
            game_over: self.game_over(),
        }
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            score: self.progression.score(),
            level: self.progression.level(),
            length: self.snake.len(),
            ticks: self.ticks,
            reason: self.end_reason,
        }
    }

    /// Apply one player command
    ///
    /// Returns `true` if the command changed the session. Ignored once the game
    /// is over.
    pub fn apply_command(&mut self, command: Command) -> bool {
        if self.game_over() {
            return false;
        }

        match command {
            Command::Quit => {
                self.finish(EndReason::Quit);
                true
            }
            Command::LevelUp => {
                self.progression.manual_level_up();
                self.regenerate_obstacles();
                info!(level = self.level(), "manual level up");
                true
            }
            Command::MoveLeft | Command::MoveRight | Command::MoveUp | Command::MoveDown => {
                let dir = command.direction().unwrap_or(Direction::None);
                let accepted = self.snake.change_direction(dir);
                if !accepted {
                    debug!(direction = dir.as_str(), "reversal ignored");
                }
                accepted
            }
        }
    }

    /// Advance the world by one tick
    pub fn step(&mut self) -> TickReport {
        let mut report = TickReport::default();
        if self.game_over() {
            return report;
        }

        self.ticks += 1;
        self.snake.move_step();
        let head = self.snake.head();

        if self.field.is_border(head) {
            self.finish(EndReason::Border);
        } else if self.obstacles.contains(&head) {
            self.finish(EndReason::Obstacle);
        } else if self.snake.has_collided() {
            self.finish(EndReason::SelfCollision);
        }
        report.ended = self.end_reason;

        // Pickups still resolve on a fatal tick; the final score includes them.
        if head == self.fruit {
            report.ate_fruit = true;
            self.snake.grow();
            self.relocate_fruit();
            report.cues.push(Cue::Pickup);
            report.levels_gained += self.progression.add_points(FRUIT_POINTS);
        }

        if self.power_up == Some(head) {
            report.ate_power_up = true;
            self.power_up = None;
            report.cues.push(Cue::PowerUp);
            report.levels_gained += self.progression.add_points(POWER_UP_POINTS);
        }

        if report.levels_gained > 0 {
            self.regenerate_obstacles();
            info!(
                level = self.level(),
                score = self.score(),
                speed_ms = self.progression.speed_ms(),
                "level up"
            );
        }

        report
    }

    /// Delay before the next tick
    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(self.progression.tick_delay_ms(self.snake.direction()) as u64)
    }

    fn relocate_fruit(&mut self) {
        let snake = &self.snake;
        let obstacles = &self.obstacles;
        let power_up = self.power_up;
        let is_free = |p: Point| {
            !snake.occupies(p) && !obstacles.contains(&p) && power_up != Some(p)
        };
        match self.spawner.spawn_where(self.field, is_free) {
            Some(p) => self.fruit = p,
            None => warn!(length = self.snake.len(), "no free cell left for fruit"),
        }
    }

    fn regenerate_obstacles(&mut self) {
        self.obstacles = self.spawner.obstacles(self.field, self.progression.level());
    }

    fn finish(&mut self, reason: EndReason) {
        if self.game_over() {
            return;
        }
        self.status = GameStatus::GameOver;
        self.end_reason = Some(reason);
        info!(
            reason = reason.as_str(),
            score = self.score(),
            level = self.level(),
            ticks = self.ticks,
            "game over"
        );
    }
}
