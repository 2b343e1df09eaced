// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// One crew member on the bid roster.
///
/// The preferences are line numbers, most wanted first. They do not need to be
/// unique or even within the range of lines being bid: a preference that is not
/// available is simply skipped.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Bidder {
    /// Lower numbers bid first. Several bidders may share the same value.
    pub seniority: u32,
    pub identifier: String,
    pub preferences: Vec<u32>,
}

// ******** Output data structures *********

/// The outcome of a single bid.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Award {
    /// The line that was awarded.
    Line(u32),
    /// None of the preferences were still available.
    NoAward,
}

impl Award {
    pub fn line(&self) -> Option<u32> {
        match self {
            Award::Line(k) => Some(*k),
            Award::NoAward => None,
        }
    }
}

impl Display for Award {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Award::Line(k) => write!(f, "Line {}", k),
            Award::NoAward => write!(f, "no award"),
        }
    }
}

/// An entry of the audit log: what a bidder ahead of the target received.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Assignment {
    pub seniority: u32,
    pub identifier: String,
    pub award: Award,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SimulationResult {
    /// The lines nobody claimed before the target's turn, in increasing order.
    pub residual_pool: Vec<u32>,
    /// One entry per processed bidder, in bidding order.
    pub assignments: Vec<Assignment>,
    /// One-based position of the target in the bidding order.
    pub target_rank: usize,
}

impl SimulationResult {
    /// The lines awarded before the target's turn, in bidding order.
    pub fn awarded_lines(&self) -> Vec<u32> {
        self.assignments
            .iter()
            .filter_map(|a| a.award.line())
            .collect()
    }

    pub fn remaining_count(&self) -> usize {
        self.residual_pool.len()
    }
}

/// Errors that prevent the simulation from running.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum BiddingErrors {
    /// Seniority numbers start at 1.
    InvalidTargetSeniority(u32),
}

impl Error for BiddingErrors {}

impl Display for BiddingErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BiddingErrors::InvalidTargetSeniority(s) => {
                write!(f, "invalid target seniority {}: must be at least 1", s)
            }
        }
    }
}
