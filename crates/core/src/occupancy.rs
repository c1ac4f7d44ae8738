//! Occupancy map - one semantic tag per playfield cell
//!
//! Rebuilt once per tick from the session, so the display does a single lookup
//! per cell. Layers are written in increasing priority: border, obstacles,
//! body, power-up, fruit, head. A later layer wins where they overlap.

use crate::field::Field;
use crate::session::GameSession;
use crate::types::{CellTag, Point};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyMap {
    field: Field,
    cells: Vec<CellTag>,
}

impl OccupancyMap {
    pub fn new(field: Field) -> Self {
        let mut map = Self {
            field,
            cells: vec![CellTag::Empty; field.len()],
        };
        map.paint_base();
        map
    }

    /// Build a map for the current state of `session`
    pub fn from_session(session: &GameSession) -> Self {
        let mut map = Self::new(session.field());
        map.rebuild(session);
        map
    }

    /// Recompute every cell in place (reuses the allocation)
    pub fn rebuild(&mut self, session: &GameSession) {
        if self.field != session.field() {
            self.field = session.field();
            self.cells.resize(self.field.len(), CellTag::Empty);
        }
        self.paint_base();

        for &p in session.obstacles() {
            self.set(p, CellTag::Obstacle);
        }
        for &p in session.snake().body().iter().skip(1) {
            self.set(p, CellTag::Body);
        }
        if let Some(p) = session.power_up() {
            self.set(p, CellTag::PowerUp);
        }
        self.set(session.fruit(), CellTag::Fruit);
        self.set(session.snake().head(), CellTag::Head);
    }

    pub fn field(&self) -> Field {
        self.field
    }

    /// Tag at `p`; off-grid cells read as `Border`
    pub fn get(&self, p: Point) -> CellTag {
        self.field
            .index(p)
            .map(|i| self.cells[i])
            .unwrap_or(CellTag::Border)
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellTag]> {
        self.cells.chunks(self.field.width().max(1) as usize)
    }

    pub fn count(&self, tag: CellTag) -> usize {
        self.cells.iter().filter(|&&c| c == tag).count()
    }

    fn set(&mut self, p: Point, tag: CellTag) {
        if let Some(i) = self.field.index(p) {
            self.cells[i] = tag;
        }
    }

    fn paint_base(&mut self) {
        let w = self.field.width() as usize;
        for (i, cell) in self.cells.iter_mut().enumerate() {
            let p = Point::new((i % w) as i16, (i / w) as i16);
            *cell = if self.field.is_border(p) {
                CellTag::Border
            } else {
                CellTag::Empty
            };
        }
    }
}
