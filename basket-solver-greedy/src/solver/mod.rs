//! `GreedySolver`: the classic greedy set-cover heuristic.
//!
//! Each round counts, for every delivery method, how many still-uncovered
//! basket occurrences it may carry and assigns the largest such group. Ties go
//! to the method that comes first in the index's first-seen order. Groups keep
//! basket order.

use basket_core::{
    Basket, Cover, CoverSolver, CoverageError, DeliveryMethod, EligibilityIndex, Item, MethodId,
};

/// Configuration for [`GreedySolver`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreedyConfig {
    /// Upper bound on selection rounds; `None` leaves it unbounded.
    pub max_rounds: Option<usize>,
}

/// One selection round, recorded by [`GreedySolver::split_traced`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Method chosen in this round.
    pub method: DeliveryMethod,
    /// Uncovered occurrences each method could carry, indexed by [`MethodId`].
    pub tally: Vec<usize>,
    /// Occurrences assigned to [`Round::method`].
    pub assigned: Vec<Item>,
}

/// A cover together with the rounds that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracedCover {
    /// The resulting delivery groups.
    pub cover: Cover,
    /// Selection rounds in order.
    pub rounds: Vec<Round>,
}

/// Greedy basket splitter over a fixed [`EligibilityIndex`].
///
/// # Examples
/// ```
/// use basket_core::{Basket, Configuration, CoverSolver, EligibilityIndex};
/// use basket_solver_greedy::GreedySolver;
///
/// let configuration = Configuration::new()
///     .with_item("Steak (300g)", ["Express Delivery", "Courier"])
///     .with_item("Carrots (1kg)", ["Express Delivery"])
///     .with_item("Garden Chair", ["Courier"]);
/// let solver = GreedySolver::new(EligibilityIndex::build(&configuration)?);
///
/// let basket: Basket = ["Steak (300g)", "Garden Chair", "Carrots (1kg)"]
///     .into_iter()
///     .collect();
/// let cover = solver.split(&basket)?;
/// assert_eq!(cover.len(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct GreedySolver {
    index: EligibilityIndex,
    config: GreedyConfig,
}

impl GreedySolver {
    /// Construct a solver using default configuration.
    #[must_use]
    pub fn new(index: EligibilityIndex) -> Self {
        Self::with_config(index, GreedyConfig::default())
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(index: EligibilityIndex, config: GreedyConfig) -> Self {
        Self { index, config }
    }

    /// The index this solver splits against.
    #[must_use]
    pub const fn index(&self) -> &EligibilityIndex {
        &self.index
    }

    /// Split `basket`, also returning every selection round.
    ///
    /// # Errors
    /// Returns [`CoverageError`] when some occurrence cannot be assigned or
    /// the configured round limit is reached first.
    pub fn split_traced(&self, basket: &Basket) -> Result<TracedCover, CoverageError> {
        let mut rounds = Vec::new();
        let cover = greedy_cover(basket, &self.index, &self.config, |round| {
            rounds.push(round);
        })?;
        Ok(TracedCover { cover, rounds })
    }
}

impl CoverSolver for GreedySolver {
    fn split(&self, basket: &Basket) -> Result<Cover, CoverageError> {
        greedy_cover(basket, &self.index, &self.config, |_| {})
    }
}

/// Split `basket` against `index` with the default configuration.
///
/// # Errors
/// Returns [`CoverageError::Uncoverable`] when some occurrence has no
/// eligible delivery method.
///
/// # Examples
/// ```
/// use basket_core::{Basket, Configuration, build_index};
/// use basket_solver_greedy::split;
///
/// let index = build_index(&Configuration::new().with_item("Garden Chair", ["Courier"]))?;
/// let basket: Basket = ["Garden Chair", "Garden Chair"].into_iter().collect();
/// let cover = split(&basket, &index)?;
/// assert_eq!(cover.get("Courier").map(<[_]>::len), Some(2));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn split(basket: &Basket, index: &EligibilityIndex) -> Result<Cover, CoverageError> {
    greedy_cover(basket, index, &GreedyConfig::default(), |_| {})
}

/// An uncovered basket occurrence and the methods that may carry it.
type Occurrence<'a> = (&'a Item, &'a [MethodId]);

fn greedy_cover(
    basket: &Basket,
    index: &EligibilityIndex,
    config: &GreedyConfig,
    mut observe: impl FnMut(Round),
) -> Result<Cover, CoverageError> {
    let mut uncovered: Vec<Occurrence<'_>> = basket
        .iter()
        .map(|item| (item, index.eligible_methods(item.as_str())))
        .collect();
    let mut cover = Cover::new();
    let mut round = 0_usize;

    while !uncovered.is_empty() {
        if let Some(limit) = config.max_rounds
            && round >= limit
        {
            return Err(CoverageError::RoundLimitExceeded {
                limit,
                uncovered: remaining_items(&uncovered),
            });
        }

        let counts = tally(&uncovered, index.method_count());
        let Some((best, method)) = best_method(index, &counts) else {
            return Err(CoverageError::Uncoverable {
                uncovered: remaining_items(&uncovered),
            });
        };

        // `partition` is stable, so both halves keep basket order.
        let (carried, rest): (Vec<Occurrence<'_>>, Vec<Occurrence<'_>>) = uncovered
            .into_iter()
            .partition(|(_, methods)| methods.contains(&best));
        let assigned: Vec<Item> = carried.into_iter().map(|(item, _)| item.clone()).collect();

        log::debug!(
            "round {round}: assigned {} item(s) to {method}, {} left",
            assigned.len(),
            rest.len()
        );
        log::trace!("round {round} tally: {counts:?}");

        cover.assign(method.clone(), assigned.clone());
        observe(Round {
            method: method.clone(),
            tally: counts,
            assigned,
        });
        uncovered = rest;
        round += 1;
    }

    Ok(cover)
}

fn tally(uncovered: &[Occurrence<'_>], method_count: usize) -> Vec<usize> {
    let mut counts = vec![0_usize; method_count];
    for id in uncovered.iter().flat_map(|(_, methods)| methods.iter()) {
        if let Some(count) = counts.get_mut(id.get()) {
            *count += 1;
        }
    }
    counts
}

/// Largest non-zero count; the lowest identifier wins ties.
fn best_method<'a>(
    index: &'a EligibilityIndex,
    tally: &[usize],
) -> Option<(MethodId, &'a DeliveryMethod)> {
    let mut best: Option<(MethodId, &DeliveryMethod, usize)> = None;
    for ((id, method), &count) in index.method_ids().zip(index.methods()).zip(tally) {
        if count > best.map_or(0, |(_, _, best_count)| best_count) {
            best = Some((id, method, count));
        }
    }
    best.map(|(id, method, _)| (id, method))
}

fn remaining_items(uncovered: &[Occurrence<'_>]) -> Vec<Item> {
    uncovered.iter().map(|(item, _)| (*item).clone()).collect()
}
