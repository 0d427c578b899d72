use crate::core::models::cdr::CdrName;
use crate::core::models::design::DesignType;
use crate::core::permutation::{Cardinalities, EnumerationLimits};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("CDR {0} is enabled for grafting but has no candidates")]
    NoCandidates(CdrName),
}

/// Grafting instruction for one CDR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CdrInstruction {
    pub graft: bool,
    pub candidates: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplingConfig {
    pub graft_rounds: usize,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraftConfig {
    pub design_type: DesignType,
    pub cdr_instructions: BTreeMap<CdrName, CdrInstruction>,
    pub sampling: SamplingConfig,
    pub limits: EnumerationLimits,
}

impl GraftConfig {
    /// Instruction for `cdr`; CDRs without an entry are not grafted.
    pub fn instruction(&self, cdr: CdrName) -> CdrInstruction {
        self.cdr_instructions.get(&cdr).copied().unwrap_or_default()
    }

    pub fn cdrs_to_graft(&self) -> Vec<CdrName> {
        CdrName::ALL
            .into_iter()
            .filter(|&cdr| self.instruction(cdr).graft)
            .collect()
    }

    /// One slot per CDR in canonical order; CDRs that are not grafted are inactive.
    pub fn cardinalities(&self) -> Cardinalities {
        CdrName::ALL
            .into_iter()
            .map(|cdr| {
                let instruction = self.instruction(cdr);
                if instruction.graft {
                    instruction.candidates
                } else {
                    0
                }
            })
            .collect::<Vec<_>>()
            .into()
    }
}

#[derive(Default)]
pub struct GraftConfigBuilder {
    design_type: Option<DesignType>,
    cdr_instructions: BTreeMap<CdrName, CdrInstruction>,
    graft_rounds: Option<usize>,
    seed: Option<u64>,
    max_permutations: Option<usize>,
}

impl GraftConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn design_type(mut self, design_type: DesignType) -> Self {
        self.design_type = Some(design_type);
        self
    }

    /// Sets the number of candidate grafts for `cdr` and enables grafting on it.
    pub fn cdr_candidates(mut self, cdr: CdrName, candidates: usize) -> Self {
        self.cdr_instructions.insert(
            cdr,
            CdrInstruction {
                graft: true,
                candidates,
            },
        );
        self
    }

    pub fn cdr_instruction(mut self, cdr: CdrName, instruction: CdrInstruction) -> Self {
        self.cdr_instructions.insert(cdr, instruction);
        self
    }

    pub fn set_cdr(mut self, cdr: CdrName, graft: bool) -> Self {
        self.cdr_instructions.entry(cdr).or_default().graft = graft;
        self
    }

    pub fn set_cdr_range(mut self, start: CdrName, end: CdrName, graft: bool) -> Self {
        for cdr in CdrName::range(start, end) {
            self = self.set_cdr(cdr, graft);
        }
        self
    }

    pub fn graft_rounds(mut self, rounds: usize) -> Self {
        self.graft_rounds = Some(rounds);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn max_permutations(mut self, limit: usize) -> Self {
        self.max_permutations = Some(limit);
        self
    }

    pub fn build(self) -> Result<GraftConfig, ConfigError> {
        let graft_rounds = self
            .graft_rounds
            .ok_or(ConfigError::MissingParameter("graft_rounds"))?;
        if graft_rounds == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "graft_rounds",
                reason: "at least one graft round is required".to_string(),
            });
        }

        if self.max_permutations == Some(0) {
            return Err(ConfigError::InvalidParameter {
                name: "max_permutations",
                reason: "the limit must be positive".to_string(),
            });
        }

        if let Some((&cdr, _)) = self
            .cdr_instructions
            .iter()
            .find(|(_, instruction)| instruction.graft && instruction.candidates == 0)
        {
            return Err(ConfigError::NoCandidates(cdr));
        }

        Ok(GraftConfig {
            design_type: self.design_type.unwrap_or_default(),
            cdr_instructions: self.cdr_instructions,
            sampling: SamplingConfig {
                graft_rounds,
                seed: self.seed,
            },
            limits: EnumerationLimits {
                max_permutations: self.max_permutations,
            },
        })
    }
}
