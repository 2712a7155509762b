use std::{error, fmt::Display, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MalformedRepresentation(String),
    NonPositiveDimension(i64, i64, i64),
    AreaOverflow(i64, i64, i64),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MalformedRepresentation(s) => write!(
                f,
                "Present representation must have the format \"<length>x<width>x<height>\", but got: {}",
                s
            ),
            Error::NonPositiveDimension(l, w, h) => write!(
                f,
                "Dimensions must be positive, but got: {}, {}, {}",
                l, w, h
            ),
            Error::AreaOverflow(l, w, h) => write!(
                f,
                "Areas of present with dimensions {}, {}, {} are too large to compute",
                l, w, h
            ),
        }
    }
}

impl error::Error for Error {}

/// Dimensions of a present shaped like a right rectangular prism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentDimensions {
    length: u64,
    width: u64,
    height: u64,
    side_areas: [u64; 3],
    surface_area: u64,
    wrapping_paper: u64,
}

impl PresentDimensions {
    pub fn new(length: i64, width: i64, height: i64) -> Result<Self, Error> {
        if length < 1 || width < 1 || height < 1 {
            return Err(Error::NonPositiveDimension(length, width, height));
        }

        let overflow = || Error::AreaOverflow(length, width, height);
        // All three are positive here, so the casts are lossless.
        let (l, w, h) = (length as u64, width as u64, height as u64);
        let mut side_areas = [
            l.checked_mul(w).ok_or_else(overflow)?,
            l.checked_mul(h).ok_or_else(overflow)?,
            w.checked_mul(h).ok_or_else(overflow)?,
        ];
        side_areas.sort_unstable();
        let surface_area = side_areas
            .iter()
            .try_fold(0u64, |sum, a| sum.checked_add(*a))
            .and_then(|sum| sum.checked_mul(2))
            .ok_or_else(overflow)?;
        let wrapping_paper = surface_area
            .checked_add(side_areas[0])
            .ok_or_else(overflow)?;

        Ok(Self {
            length: l,
            width: w,
            height: h,
            side_areas,
            surface_area,
            wrapping_paper,
        })
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn width(&self) -> u64 {
        self.width
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    /// Areas of the three distinct sides, smallest first.
    pub fn side_areas(&self) -> &[u64; 3] {
        &self.side_areas
    }

    pub fn smallest_side_area(&self) -> u64 {
        self.side_areas[0]
    }

    pub fn surface_area(&self) -> u64 {
        self.surface_area
    }

    /// Surface area plus a slack of the smallest side.
    pub fn wrapping_paper(&self) -> u64 {
        self.wrapping_paper
    }
}

impl FromStr for PresentDimensions {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^([+-]?\d+)x([+-]?\d+)x([+-]?\d+)$").unwrap());
        let malformed = || Error::MalformedRepresentation(s.to_string());
        let caps = PATTERN.captures(s.trim()).ok_or_else(malformed)?;
        let parse = |ind: usize| caps[ind].parse::<i64>().map_err(|_| malformed());

        Self::new(parse(1)?, parse(2)?, parse(3)?)
    }
}
