/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 */

use std::fmt;

/// An action the agent can take, as a closed set.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum Action {
    /// Rotate the facing 90° counter-clockwise.
    TurnLeft,
    /// Rotate the facing 90° clockwise.
    TurnRight,
    /// Step one cell in the facing direction.
    Move,
    /// Fire the single arrow at the cell directly ahead.
    Shoot,
    /// Pick up the gold on the current cell.
    Grab,
    /// Climb out of the world from an exit cell.
    Climb,
}

/// All actions, in the order every action filter enumerates them.
pub const ALL_ACTIONS: [Action; 6] = [
    Action::TurnLeft,
    Action::TurnRight,
    Action::Move,
    Action::Shoot,
    Action::Grab,
    Action::Climb,
];

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::TurnLeft => write!(f, "TurnLeft"),
            Action::TurnRight => write!(f, "TurnRight"),
            Action::Move => write!(f, "Move"),
            Action::Shoot => write!(f, "Shoot"),
            Action::Grab => write!(f, "Grab"),
            Action::Climb => write!(f, "Climb"),
        }
    }
}
