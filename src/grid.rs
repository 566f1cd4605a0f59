//! Square grid bounds

use crate::{Result, SimError};

/// Side length used when nothing else is configured
pub const DEFAULT_GRID_SIZE: i32 = 5;

/// An N×N table; valid cells are `0..N` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: i32,
}

impl Grid {
    pub fn new(size: i32) -> Result<Self> {
        if size < 1 {
            return Err(SimError::Config(format!(
                "grid size must be at least 1, got {}",
                size
            )));
        }
        Ok(Self { size })
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.size).contains(&x) && (0..self.size).contains(&y)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
        }
    }
}
