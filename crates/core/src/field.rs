//! Field module - playfield bounds
//!
//! The field is a `width x height` grid. The outer ring of cells is the border,
//! which kills the snake on contact; the cells inside it form the interior.

use crate::types::Point;

/// Playfield dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    width: u16,
    height: u16,
}

impl Field {
    /// Create a field. Callers validate dimensions through `GameConfig`.
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells, border included
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if `p` lies on the grid at all
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as i32) < self.width as i32 && (p.y as i32) < self.height as i32
    }

    /// Check if `p` is lethal to the head: the border ring or anywhere off-grid
    pub fn is_border(&self, p: Point) -> bool {
        let (w, h) = (self.width as i32, self.height as i32);
        let (x, y) = (p.x as i32, p.y as i32);
        x <= 0 || y <= 0 || x >= w - 1 || y >= h - 1
    }

    pub fn is_interior(&self, p: Point) -> bool {
        !self.is_border(p)
    }

    /// Row-major index of `p`, `None` when off-grid
    #[inline(always)]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Inclusive interior range along x
    pub fn interior_x(&self) -> (i16, i16) {
        (1, self.width as i16 - 2)
    }

    /// Inclusive interior range along y
    pub fn interior_y(&self) -> (i16, i16) {
        (1, self.height as i16 - 2)
    }

    pub fn interior_len(&self) -> usize {
        (self.width.saturating_sub(2) as usize) * (self.height.saturating_sub(2) as usize)
    }

    /// Iterate interior cells row by row
    pub fn interior_points(&self) -> impl Iterator<Item = Point> {
        let (x0, x1) = self.interior_x();
        let (y0, y1) = self.interior_y();
        (y0..=y1).flat_map(move |y| (x0..=x1).map(move |x| Point::new(x, y)))
    }

    /// Starting cell for the snake
    pub fn center(&self) -> Point {
        Point::new((self.width / 2) as i16, (self.height / 2) as i16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_ring_is_lethal() {
        let field = Field::new(25, 20);
        assert!(field.is_border(Point::new(0, 10)));
        assert!(field.is_border(Point::new(24, 10)));
        assert!(field.is_border(Point::new(12, 0)));
        assert!(field.is_border(Point::new(12, 19)));
        assert!(!field.is_border(Point::new(1, 1)));
        assert!(!field.is_border(Point::new(23, 18)));
    }

    #[test]
    fn test_off_grid_counts_as_border() {
        let field = Field::new(25, 20);
        assert!(field.is_border(Point::new(-1, 5)));
        assert!(field.is_border(Point::new(30, 5)));
        assert!(!field.contains(Point::new(-1, 5)));
        assert_eq!(field.index(Point::new(25, 0)), None);
    }

    #[test]
    fn test_interior_iteration() {
        let field = Field::new(5, 4);
        let cells: Vec<Point> = field.interior_points().collect();
        assert_eq!(cells.len(), field.interior_len());
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Point::new(1, 1));
        assert_eq!(cells[5], Point::new(3, 2));
        assert!(cells.iter().all(|&p| field.is_interior(p)));
    }

    #[test]
    fn test_center_matches_classic_start() {
        assert_eq!(Field::new(25, 20).center(), Point::new(12, 10));
    }
}
