use std::{error, fmt::Display};

use tracing::debug;

use crate::present::PresentDimensions;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    TotalOverflow(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::TotalOverflow(count) => write!(
                f,
                "Total wrapping paper for {} presents is too large to compute",
                count
            ),
        }
    }
}

impl error::Error for Error {}

pub fn wrapping_paper_required(present: &PresentDimensions) -> u64 {
    present.wrapping_paper()
}

/// Wrapping paper requirements of a collection of presents.
#[derive(Debug)]
pub struct WrappingAnalysis {
    presents: Vec<PresentDimensions>,
    total_wrapping_paper: u64,
}

impl WrappingAnalysis {
    pub fn new(presents: Vec<PresentDimensions>) -> Result<Self, Error> {
        let total_wrapping_paper = presents
            .iter()
            .try_fold(0u64, |sum, p| sum.checked_add(wrapping_paper_required(p)))
            .ok_or(Error::TotalOverflow(presents.len()))?;
        debug!(
            presents = presents.len(),
            total = total_wrapping_paper,
            "analysed wrapping paper"
        );

        Ok(Self {
            presents,
            total_wrapping_paper,
        })
    }

    pub fn presents(&self) -> &[PresentDimensions] {
        &self.presents
    }

    pub fn total_wrapping_paper(&self) -> u64 {
        self.total_wrapping_paper
    }
}
