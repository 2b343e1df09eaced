mod config;
pub mod builder;
pub mod manual;

use log::{debug, info};

use std::collections::BTreeSet;

pub use crate::config::*;

// **** Private structures ****

// The lines still open for bidding. Lines only ever leave the pool.
#[derive(Eq, PartialEq, Debug, Clone)]
struct LinePool {
    available: BTreeSet<u32>,
}

impl LinePool {
    fn new(total_lines: u32) -> LinePool {
        LinePool {
            available: (1..=total_lines).collect(),
        }
    }

    /// Removes and returns the first preference that is still open.
    fn claim(&mut self, preferences: &[u32]) -> Option<u32> {
        let line = preferences
            .iter()
            .find(|line| self.available.contains(*line))
            .cloned()?;
        self.available.remove(&line);
        Some(line)
    }

    fn into_sorted(self) -> Vec<u32> {
        self.available.into_iter().collect()
    }
}

/// Runs the bid in seniority order until the target's turn.
///
/// Arguments:
/// * `bidders` the roster, in any order. It is sorted by seniority here and
/// bidders sharing a seniority keep their relative input order.
/// * `target_seniority` the seniority of the person asking. Bidding stops at the
/// first bidder whose seniority is greater or equal to it, whether or not that
/// bidder actually holds this exact seniority.
/// * `pool_size` the number of lines, numbered from 1.
///
/// Each bidder ahead of the target receives the first line of their list that
/// is still open, or nothing. The result holds the open lines at the target's
/// turn, the awards in bidding order and the target's one-based rank. If every
/// bidder on the roster is ahead of the target, the rank is one past the end of
/// the roster.
pub fn simulate(
    bidders: &[Bidder],
    target_seniority: u32,
    pool_size: u32,
) -> Result<SimulationResult, BiddingErrors> {
    if target_seniority < 1 {
        return Err(BiddingErrors::InvalidTargetSeniority(target_seniority));
    }
    info!(
        "simulate: {:?} bidders, target seniority: {:?}, lines: {:?}",
        bidders.len(),
        target_seniority,
        pool_size
    );

    let mut pool = LinePool::new(pool_size);

    // sort_by_key is stable: ties stay in roster order.
    let mut sorted_bidders: Vec<&Bidder> = bidders.iter().collect();
    sorted_bidders.sort_by_key(|b| b.seniority);

    let mut assignments: Vec<Assignment> = Vec::new();
    let mut target_rank: Option<usize> = None;
    for (idx, bidder) in sorted_bidders.iter().enumerate() {
        if bidder.seniority >= target_seniority {
            debug!(
                "simulate: stopping at {:?} (seniority {:?}), position {:?}",
                bidder.identifier,
                bidder.seniority,
                idx + 1
            );
            target_rank = Some(idx + 1);
            break;
        }

        let award = match pool.claim(&bidder.preferences) {
            Some(line) => Award::Line(line),
            None => Award::NoAward,
        };
        debug!(
            "simulate: {:?} {:?} preferences: {:?} -> {}",
            bidder.seniority, bidder.identifier, bidder.preferences, award
        );
        assignments.push(Assignment {
            seniority: bidder.seniority,
            identifier: bidder.identifier.clone(),
            award,
        });
    }

    // The roster ends before reaching the target.
    let target_rank = target_rank.unwrap_or(sorted_bidders.len() + 1);
    let residual_pool = pool.into_sorted();
    info!(
        "simulate: rank {:?}, {:?} lines remaining after {:?} bids",
        target_rank,
        residual_pool.len(),
        assignments.len()
    );

    Ok(SimulationResult {
        residual_pool,
        assignments,
        target_rank,
    })
}
