use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::WheelError;

/// A named bet that pays `odds:1` when it wins.
///
/// Identity is the name alone: two outcomes with the same name compare and
/// hash equal even when their odds differ, so a [`Bin`] holds at most one
/// outcome per name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outcome {
    name: String,
    odds: i32,
}

impl Outcome {
    pub fn new(name: impl Into<String>, odds: i32) -> Self {
        Outcome {
            name: name.into(),
            odds,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn odds(&self) -> i32 {
        self.odds
    }

    /// Amount won on a stake of `amount`, not counting the returned stake.
    pub fn win_amount(&self, amount: f64) -> f64 {
        amount * f64::from(self.odds)
    }
}

impl PartialEq for Outcome {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Outcome {}

impl Hash for Outcome {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:1)", self.name, self.odds)
    }
}

/// The outcomes that win when the ball lands on one wheel position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bin {
    outcomes: HashSet<Outcome>,
}

impl Bin {
    pub fn new() -> Self {
        Bin::default()
    }

    pub fn from_outcomes<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = Outcome>,
    {
        Bin {
            outcomes: outcomes.into_iter().collect(),
        }
    }

    /// Inserts `outcome` unless an outcome with the same name is already here.
    /// Returns whether the bin grew.
    pub fn add(&mut self, outcome: Outcome) -> bool {
        self.outcomes.insert(outcome)
    }

    pub fn contains(&self, outcome: &Outcome) -> bool {
        self.outcomes.contains(outcome)
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter()
    }

    /// Outcomes ordered by name.
    pub fn sorted(&self) -> Vec<&Outcome> {
        let mut outcomes: Vec<&Outcome> = self.outcomes.iter().collect();
        outcomes.sort_by(|a, b| a.name.cmp(&b.name));
        outcomes
    }
}

impl FromIterator<Outcome> for Bin {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        Bin::from_outcomes(iter)
    }
}

impl From<Vec<Outcome>> for Bin {
    fn from(outcomes: Vec<Outcome>) -> Self {
        Bin::from_outcomes(outcomes)
    }
}

impl<'a> IntoIterator for &'a Bin {
    type Item = &'a Outcome;
    type IntoIter = std::collections::hash_set::Iter<'a, Outcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.sorted().iter().map(|o| o.to_string()).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Label printed on the wheel for a bin number; 37 is the double zero.
pub fn bin_label(number: usize) -> String {
    if number == 37 {
        "00".to_string()
    } else {
        number.to_string()
    }
}

/// An American wheel: 38 bins and the generator that picks between them.
///
/// Outcomes are registered first, then the wheel is spun. Nothing stops
/// registering after spinning has begun.
#[derive(Debug)]
pub struct Wheel {
    bins: Vec<Bin>,
    rng: ChaCha8Rng,
}

impl Wheel {
    pub const BIN_COUNT: usize = 38;

    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// A wheel whose spins replay identically for the same `seed`, across
    /// platforms and `rand` releases.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Wheel {
            bins: (0..Self::BIN_COUNT).map(|_| Bin::new()).collect(),
            rng,
        }
    }

    /// Restarts the random stream from `seed`; bins are left alone.
    pub fn seed(&mut self, seed: u64) {
        debug!("reseeding wheel with {}", seed);
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    pub fn add_outcome(&mut self, number: usize, outcome: Outcome) -> Result<(), WheelError> {
        let bin = self.bins.get_mut(number).ok_or(WheelError::BinOutOfRange {
            number,
            count: Self::BIN_COUNT,
        })?;
        debug!("adding {} to bin {}", outcome, bin_label(number));
        bin.add(outcome);
        Ok(())
    }

    pub fn get(&self, number: usize) -> Result<&Bin, WheelError> {
        self.bins.get(number).ok_or(WheelError::BinOutOfRange {
            number,
            count: Self::BIN_COUNT,
        })
    }

    /// Number of a uniformly chosen bin, always below [`Wheel::BIN_COUNT`].
    pub fn choose_number(&mut self) -> usize {
        let number = self.rng.gen_range(0..Self::BIN_COUNT);
        trace!("ball landed on {}", bin_label(number));
        number
    }

    pub fn choose(&mut self) -> &Bin {
        let number = self.choose_number();
        &self.bins[number]
    }

    pub fn bins(&self) -> impl Iterator<Item = &Bin> {
        self.bins.iter()
    }
}

impl Default for Wheel {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Wheel {
    type Output = Bin;

    fn index(&self, number: usize) -> &Bin {
        &self.bins[number]
    }
}
