use std::{error, fmt::Display, str::FromStr};

use once_cell::unsync::OnceCell;
use tracing::debug;

pub const UP: char = '(';
pub const DOWN: char = ')';

/// Floor the running floor has to reach to count as the basement.
pub const BASEMENT_FLOOR: i64 = -1;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidDirections(char, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidDirections(c, pos) => write!(
                f,
                "Sequence contains invalid characters; only \"{}\" and \"{}\" are allowed, found {:?} at position {}",
                UP, DOWN, c, pos
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn value(&self) -> i64 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            UP => Ok(Direction::Up),
            DOWN => Ok(Direction::Down),
            other => Err(other),
        }
    }
}

/// A validated sequence of floor directions.
///
/// Both results are computed lazily and at most once.
#[derive(Debug)]
pub struct FloorDirections {
    directions: Vec<Direction>,
    final_floor: OnceCell<i64>,
    first_basement_position: OnceCell<usize>,
}

impl FromStr for FloorDirections {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let directions = s
            .chars()
            .enumerate()
            .map(|(ind, c)| {
                Direction::try_from(c).map_err(|c| Error::InvalidDirections(c, ind + 1))
            })
            .collect::<Result<Vec<_>, Error>>()?;
        debug!(len = directions.len(), "validated directions sequence");

        Ok(Self::new(directions))
    }
}

impl FloorDirections {
    pub fn new(directions: Vec<Direction>) -> Self {
        Self {
            directions,
            final_floor: OnceCell::new(),
            first_basement_position: OnceCell::new(),
        }
    }

    pub fn is_valid_directions(s: &str) -> bool {
        s.chars().all(|c| Direction::try_from(c).is_ok())
    }

    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    pub fn final_floor(&self) -> i64 {
        *self
            .final_floor
            .get_or_init(|| self.directions.iter().map(Direction::value).sum())
    }

    /// Position (1-based) of the first direction which leads into the basement, 0 if none does.
    pub fn first_basement_position(&self) -> usize {
        *self
            .first_basement_position
            .get_or_init(|| self.first_position_at(BASEMENT_FLOOR).unwrap_or(0))
    }

    /// Position (1-based) of the first direction after which the running floor equals `floor`.
    pub fn first_position_at(&self, floor: i64) -> Option<usize> {
        let mut cur_floor = 0;
        for (ind, d) in self.directions.iter().enumerate() {
            cur_floor += d.value();
            if cur_floor == floor {
                return Some(ind + 1);
            }
        }

        None
    }
}
