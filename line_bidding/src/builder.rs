pub use crate::config::*;

/// A builder for assembling a bid roster.
///
/// ```
/// pub use line_bidding::builder::Builder;
/// # use line_bidding::BiddingErrors;
///
/// let mut builder = Builder::new(5);
/// builder.add_bidder(100, "ALPHA", &[5, 3]);
/// builder.add_bidder(200, "BRAVO", &[3, 1]);
///
/// let res = builder.simulate(150)?;
/// assert_eq!(res.residual_pool, vec![1, 2, 3, 4]);
/// assert_eq!(res.target_rank, 2);
/// # Ok::<(), BiddingErrors>(())
/// ```
pub struct Builder {
    pub(crate) _total_lines: u32,
    pub(crate) _bidders: Vec<Bidder>,
}

impl Builder {
    pub fn new(total_lines: u32) -> Builder {
        Builder {
            _total_lines: total_lines,
            _bidders: Vec::new(),
        }
    }

    /// Adds a bidder to the roster.
    ///
    /// preferences: the lines wanted, most wanted first. They do not need to be
    /// unique or within the range of lines.
    pub fn add_bidder(&mut self, seniority: u32, identifier: &str, preferences: &[u32]) {
        self.add_bidder_record(&Bidder {
            seniority,
            identifier: identifier.to_string(),
            preferences: preferences.to_vec(),
        })
    }

    pub fn add_bidder_record(&mut self, bidder: &Bidder) {
        self._bidders.push(bidder.clone());
    }

    pub fn bidders(&self) -> &[Bidder] {
        &self._bidders
    }

    pub fn total_lines(&self) -> u32 {
        self._total_lines
    }

    pub fn len(&self) -> usize {
        self._bidders.len()
    }

    pub fn is_empty(&self) -> bool {
        self._bidders.is_empty()
    }

    /// Runs the bid up to the given seniority. See [crate::simulate].
    pub fn simulate(&self, target_seniority: u32) -> Result<SimulationResult, BiddingErrors> {
        crate::simulate(&self._bidders, target_seniority, self._total_lines)
    }
}
