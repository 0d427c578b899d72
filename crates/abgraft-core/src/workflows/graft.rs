use crate::core::models::cdr::CdrName;
use crate::core::models::design::DesignType;
use crate::core::permutation::{Cardinalities, Permutation, PermutationError};
use crate::engine::config::GraftConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::sampling::{rng_from_seed, sample_distinct};
use std::fmt;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraftStrategy {
    /// Every permutation is tried once.
    Deterministic,
    /// A subset of distinct permutations is drawn uniformly.
    Random,
}

impl fmt::Display for GraftStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraftStrategy::Deterministic => f.write_str("deterministic"),
            GraftStrategy::Random => f.write_str("random"),
        }
    }
}

/// Which candidate (1-based) is grafted onto each CDR in one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraftAssignment {
    choices: [Option<usize>; CdrName::COUNT],
}

impl GraftAssignment {
    // Slots follow `CdrName::ALL`; the sentinel 0 means "keep the native CDR".
    fn from_permutation(permutation: &[usize]) -> Self {
        let mut choices = [None; CdrName::COUNT];
        for (choice, &value) in choices.iter_mut().zip(permutation) {
            *choice = (value > 0).then_some(value);
        }
        Self { choices }
    }

    pub fn candidate(&self, cdr: CdrName) -> Option<usize> {
        self.choices[cdr.index()]
    }

    pub fn grafted(&self) -> impl Iterator<Item = (CdrName, usize)> + '_ {
        CdrName::ALL
            .into_iter()
            .filter_map(|cdr| self.candidate(cdr).map(|candidate| (cdr, candidate)))
    }

    pub fn to_permutation(&self) -> Permutation {
        self.choices.iter().map(|c| c.unwrap_or(0)).collect()
    }
}

impl fmt::Display for GraftAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .grafted()
            .map(|(cdr, candidate)| format!("{}:{}", cdr, candidate))
            .collect();
        if parts.is_empty() {
            f.write_str("native")
        } else {
            f.write_str(&parts.join(" "))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraftPlan {
    pub design_type: DesignType,
    pub strategy: GraftStrategy,
    pub cardinalities: Cardinalities,
    pub total_permutations: usize,
    pub assignments: Vec<GraftAssignment>,
}

impl GraftPlan {
    /// Permutations in slot order `CdrName::ALL`, `0` where the native loop is kept.
    pub fn permutations(&self) -> impl Iterator<Item = Permutation> + '_ {
        self.assignments.iter().map(GraftAssignment::to_permutation)
    }
}

/// Builds the graft plan for `config`.
///
/// When the configured number of graft rounds covers every permutation, all of them
/// are enumerated in odometer order. Otherwise that many distinct permutations are
/// sampled uniformly, reproducibly if a seed is configured.
#[instrument(skip_all, name = "graft_planning_workflow")]
pub fn run(config: &GraftConfig, reporter: &ProgressReporter) -> Result<GraftPlan, EngineError> {
    // === Phase 1: Count permutations ===
    reporter.report(Progress::PhaseStart {
        name: "Counting Permutations",
    });

    let cardinalities = config.cardinalities();
    let cdrs = config.cdrs_to_graft();
    if cdrs.is_empty() {
        warn!("No CDRs are enabled for grafting. The plan holds only the native assignment.");
    }

    let total_permutations = cardinalities
        .total_permutations()
        .ok_or(PermutationError::CountOverflow)?;
    info!(total_permutations, cdrs = ?cdrs, "Counted graft permutations.");

    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Select permutations ===
    let rounds = config.sampling.graft_rounds;
    let strategy = if rounds >= total_permutations {
        GraftStrategy::Deterministic
    } else {
        GraftStrategy::Random
    };
    info!(%strategy, rounds, "Selected graft strategy.");

    let permutations = match strategy {
        GraftStrategy::Deterministic => enumerate_all(&cardinalities, config, reporter)?,
        GraftStrategy::Random => sample_rounds(&cardinalities, config, reporter)?,
    };

    // === Phase 3: Build assignments ===
    reporter.report(Progress::PhaseStart {
        name: "Building Assignments",
    });
    let assignments: Vec<GraftAssignment> = reporter
        .track(permutations.len() as u64, permutations.iter())
        .map(|permutation| GraftAssignment::from_permutation(permutation))
        .collect();
    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    info!(
        assignments = assignments.len(),
        "Graft planning complete."
    );
    Ok(GraftPlan {
        design_type: config.design_type,
        strategy,
        cardinalities,
        total_permutations,
        assignments,
    })
}

fn enumerate_all(
    cardinalities: &Cardinalities,
    config: &GraftConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<Permutation>, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Enumerating Permutations",
    });
    let set = cardinalities.enumerate(&config.limits)?;
    debug!(count = set.len(), "Enumerated every graft permutation.");
    reporter.report(Progress::PhaseFinish);
    Ok(set.into_vec())
}

fn sample_rounds(
    cardinalities: &Cardinalities,
    config: &GraftConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<Permutation>, EngineError> {
    let rounds = config.sampling.graft_rounds;
    if let Some(limit) = config.limits.max_permutations {
        if rounds > limit {
            return Err(PermutationError::LimitExceeded {
                total: rounds,
                limit,
            }
            .into());
        }
    }

    reporter.report(Progress::PhaseStart {
        name: "Sampling Permutations",
    });
    if config.sampling.seed.is_none() {
        reporter.report(Progress::Message(
            "No seed configured; sampled permutations will differ between runs.".to_string(),
        ));
    }
    let mut rng = rng_from_seed(config.sampling.seed);
    let permutations = sample_distinct(cardinalities, rounds, &mut rng)?;
    debug!(count = permutations.len(), "Sampled graft permutations.");
    reporter.report(Progress::PhaseFinish);
    Ok(permutations)
}
