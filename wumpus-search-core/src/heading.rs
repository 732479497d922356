/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 */

use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::Coord2D;

/// The facing of the agent, as an integer direction vector.
///
/// The arithmetic is general, but the values occurring in a search are the
/// four unit axis vectors [`Heading::NORTH`], [`Heading::EAST`],
/// [`Heading::SOUTH`] and [`Heading::WEST`].
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct Heading {
    pub x: i32,
    pub y: i32,
}

impl Heading {
    pub const NORTH: Heading = Heading::new(0, 1);
    pub const EAST: Heading = Heading::new(1, 0);
    pub const SOUTH: Heading = Heading::new(0, -1);
    pub const WEST: Heading = Heading::new(-1, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Heading { x, y }
    }

    /// The heading rotated by 90° clockwise: (x, y) → (y, -x),
    /// cycling North → East → South → West → North.
    pub const fn perpendicular_clockwise(self) -> Self {
        Heading::new(self.y, -self.x)
    }

    /// Two headings are opposite if each is the negation of the other.
    pub fn is_opposite(self, other: Heading) -> bool {
        self == -other
    }

    /// The heading pointing from `from` towards the adjacent cell `to`.
    pub fn between(from: Coord2D, to: Coord2D) -> Self {
        Heading::new(to.x - from.x, to.y - from.y)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Heading::NORTH => write!(f, "North"),
            Heading::EAST => write!(f, "East"),
            Heading::SOUTH => write!(f, "South"),
            Heading::WEST => write!(f, "West"),
            Heading { x, y } => write!(f, "({x}, {y})"),
        }
    }
}

impl Neg for Heading {
    type Output = Heading;

    fn neg(self) -> Self::Output {
        Heading::new(-self.x, -self.y)
    }
}

/// Translation of a coordinate by a heading.
impl Add<Heading> for Coord2D {
    type Output = Coord2D;

    fn add(self, rhs: Heading) -> Self::Output {
        Coord2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Heading> for Coord2D {
    type Output = Coord2D;

    fn sub(self, rhs: Heading) -> Self::Output {
        Coord2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn clockwise_cycle() {
        assert_eq!(Heading::NORTH.perpendicular_clockwise(), Heading::EAST);
        assert_eq!(Heading::EAST.perpendicular_clockwise(), Heading::SOUTH);
        assert_eq!(Heading::SOUTH.perpendicular_clockwise(), Heading::WEST);
        assert_eq!(Heading::WEST.perpendicular_clockwise(), Heading::NORTH);
    }

    #[test]
    fn counter_clockwise_is_negated_clockwise() {
        let mut heading = Heading::EAST;
        for _ in 0..4 {
            assert_eq!(
                -heading.perpendicular_clockwise(),
                heading
                    .perpendicular_clockwise()
                    .perpendicular_clockwise()
                    .perpendicular_clockwise()
            );
            heading = heading.perpendicular_clockwise();
        }
    }

    #[test]
    fn opposite() {
        assert!(Heading::NORTH.is_opposite(Heading::SOUTH));
        assert!(Heading::WEST.is_opposite(Heading::EAST));
        assert!(!Heading::NORTH.is_opposite(Heading::EAST));
    }

    #[test]
    fn translation() {
        assert_eq!(Coord2D::new(2, 3) + Heading::NORTH, Coord2D::new(2, 4));
        assert_eq!(Coord2D::new(2, 3) - Heading::WEST, Coord2D::new(3, 3));
    }
}
