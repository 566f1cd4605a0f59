//! Robot state machine
//!
//! A robot starts `Unplaced`. The first in-bounds PLACE moves it to `Placed`
//! and it stays placed for the rest of the run. Every action either succeeds
//! or returns a [`CommandError`] and leaves the state exactly as it was.

use crate::direction::Direction;
use crate::error::CommandError;
use crate::grid::Grid;
use serde::{Deserialize, Serialize};

/// Position and facing of a placed robot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub facing: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotState {
    Unplaced,
    Placed(Placement),
}

#[derive(Debug, Clone)]
pub struct Robot {
    grid: Grid,
    state: RobotState,
}

impl Robot {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            state: RobotState::Unplaced,
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn state(&self) -> RobotState {
        self.state
    }

    pub fn is_placed(&self) -> bool {
        matches!(self.state, RobotState::Placed(_))
    }

    pub fn placement(&self) -> Option<Placement> {
        match self.state {
            RobotState::Placed(placement) => Some(placement),
            RobotState::Unplaced => None,
        }
    }

    pub fn x(&self) -> Option<i32> {
        self.placement().map(|p| p.x)
    }

    pub fn y(&self) -> Option<i32> {
        self.placement().map(|p| p.y)
    }

    pub fn facing(&self) -> Option<Direction> {
        self.placement().map(|p| p.facing)
    }

    /// Put the robot at `(x, y)`, replacing any earlier placement.
    pub fn place(&mut self, x: i32, y: i32, facing: Direction) -> Result<Placement, CommandError> {
        if !self.grid.contains(x, y) {
            return Err(CommandError::PlaceOutOfBounds { x, y });
        }
        let placement = Placement { x, y, facing };
        self.state = RobotState::Placed(placement);
        Ok(placement)
    }

    /// Step one cell forward unless that would leave the grid.
    pub fn move_forward(&mut self) -> Result<Placement, CommandError> {
        let current = self.require_placed("MOVE")?;
        let (dx, dy) = current.facing.displacement();
        let (next_x, next_y) = (current.x + dx, current.y + dy);

        if !self.grid.contains(next_x, next_y) {
            return Err(CommandError::MoveOutOfBounds {
                x: next_x,
                y: next_y,
            });
        }

        let moved = Placement {
            x: next_x,
            y: next_y,
            ..current
        };
        self.state = RobotState::Placed(moved);
        Ok(moved)
    }

    pub fn left(&mut self) -> Result<Placement, CommandError> {
        let current = self.require_placed("LEFT")?;
        self.turn(current, current.facing.left())
    }

    pub fn right(&mut self) -> Result<Placement, CommandError> {
        let current = self.require_placed("RIGHT")?;
        self.turn(current, current.facing.right())
    }

    /// Current placement for a REPORT; no state change.
    pub fn report(&self) -> Result<Placement, CommandError> {
        self.require_placed("REPORT")
    }

    fn turn(&mut self, current: Placement, facing: Direction) -> Result<Placement, CommandError> {
        let turned = Placement { facing, ..current };
        self.state = RobotState::Placed(turned);
        Ok(turned)
    }

    fn require_placed(&self, command: &'static str) -> Result<Placement, CommandError> {
        self.placement().ok_or(CommandError::NotPlaced { command })
    }
}

impl Default for Robot {
    fn default() -> Self {
        Self::new(Grid::default())
    }
}
