//! Toroidal cell grid and the generation-transition rule.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{Cell, Rgb, blend_color};
use crate::schema::BlendMode;

/// Fixed-size toroidal grid of [`Cell`]s.
///
/// Coordinates wrap modulo the grid dimensions on every access, so any
/// `(x, y)` pair is valid and there are no boundary cells. Dimensions are
/// fixed at construction. Advancing a generation never mutates the current
/// field; [`Field::next_round`] builds a brand-new one from it, so there is
/// no read-after-write hazard within a generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    width: usize,
    height: usize,
    blend_mode: BlendMode,
    /// Row-major flat cell buffer, `height * width` long.
    cells: Vec<Cell>,
}

impl Field {
    /// Create an all-dead field.
    ///
    /// # Panics
    ///
    /// Panics on zero dimensions. Configuration coming from outside should
    /// be checked first via
    /// [`SimulationConfig::validate`](crate::schema::SimulationConfig::validate).
    pub fn new(width: usize, height: usize, blend_mode: BlendMode) -> Self {
        assert!(width > 0 && height > 0, "field dimensions must be non-zero");
        Self {
            width,
            height,
            blend_mode,
            cells: vec![Cell::DEAD; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }

    /// Wrap arbitrary coordinates onto the torus and return the flat index.
    #[inline]
    fn index(&self, x: i64, y: i64) -> usize {
        let x = x.rem_euclid(self.width as i64) as usize;
        let y = y.rem_euclid(self.height as i64) as usize;
        y * self.width + x
    }

    /// Cell at `(x, y)`, with toroidal wrapping.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Cell {
        self.cells[self.index(x, y)]
    }

    /// Store a cell at `(x, y)`, with toroidal wrapping.
    ///
    /// A vitality below 1 stores the canonical dead cell no matter which
    /// color is passed. Live vitality is stored as given without capping:
    /// the cap at 8 is the transition rule's job, and image seeding relies
    /// on storing a saturated 9.
    pub fn set(&mut self, x: i64, y: i64, vitality: u8, color: Rgb) {
        let index = self.index(x, y);
        self.cells[index] = if vitality < 1 {
            Cell::DEAD
        } else {
            Cell::new(vitality, color)
        };
    }

    /// Row-major iterator over all cells, for renderers and stats.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Next state of the cell at `(x, y)`, computed against this field only.
    ///
    /// Standard Game-of-Life birth and survival over the 8 toroidal
    /// neighbors, extended with an age counter capped at 8 and a
    /// neighbor-color blend (see [`blend_color`]).
    pub fn next_vitality(&self, x: i64, y: i64) -> Cell {
        let mut alive = 0u32;
        let mut sums = [0u32; 3];
        for dy in -1..=1i64 {
            for dx in -1..=1i64 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let neighbor = self.get(x + dx, y + dy);
                if neighbor.is_alive() {
                    alive += 1;
                    for (sum, channel) in sums.iter_mut().zip(neighbor.color) {
                        *sum += channel as u32;
                    }
                }
            }
        }

        let cell = self.get(x, y);
        if alive == 3 || (alive == 2 && cell.is_alive()) {
            let color = blend_color(self.blend_mode, alive, sums);
            Cell::new(cell.vitality.saturating_add(1).min(8), color)
        } else {
            Cell::DEAD
        }
    }

    /// Compute the next generation as a new, fully independent field.
    ///
    /// Every cell reads only `self`, so the per-cell work is distributed
    /// across the rayon pool. The row-major result order is fixed by the
    /// index mapping, not by execution order.
    pub fn next_round(&self) -> Field {
        let cells: Vec<Cell> = (0..self.cells.len())
            .into_par_iter()
            .map(|i| self.next_vitality((i % self.width) as i64, (i / self.width) as i64))
            .collect();
        Field {
            width: self.width,
            height: self.height,
            blend_mode: self.blend_mode,
            cells,
        }
    }
}

/// Field statistics for monitoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldStats {
    pub live_cells: usize,
    pub mean_vitality: f32,
    pub max_vitality: u8,
}

impl FieldStats {
    /// Compute statistics from a field.
    pub fn from_field(field: &Field) -> Self {
        let mut live_cells = 0usize;
        let mut vitality_sum = 0u64;
        let mut max_vitality = 0u8;

        for cell in field.cells() {
            if cell.is_alive() {
                live_cells += 1;
                vitality_sum += cell.vitality as u64;
                max_vitality = max_vitality.max(cell.vitality);
            }
        }

        Self {
            live_cells,
            mean_vitality: if live_cells == 0 {
                0.0
            } else {
                vitality_sum as f32 / live_cells as f32
            },
            max_vitality,
        }
    }
}
