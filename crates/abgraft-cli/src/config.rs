use crate::cli::PlanArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use abgraft::core::models::cdr::CdrName;
use abgraft::core::models::design::DesignType;
use abgraft::engine::config as core_config;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, Copy)]
#[serde(deny_unknown_fields)]
struct PartialCdrConfig {
    graft: Option<bool>,
    candidates: Option<usize>,
}

impl From<PartialCdrConfig> for core_config::CdrInstruction {
    // A CDR listed in the file is grafted unless it says otherwise.
    fn from(p: PartialCdrConfig) -> Self {
        Self {
            graft: p.graft.unwrap_or(true),
            candidates: p.candidates.unwrap_or(0),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialSamplingConfig {
    graft_rounds: Option<usize>,
    seed: Option<u64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialLimitsConfig {
    max_permutations: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialGraftConfig {
    design_type: Option<DesignType>,
    sampling: Option<PartialSamplingConfig>,
    limits: Option<PartialLimitsConfig>,
    #[serde(default)]
    cdrs: BTreeMap<CdrName, PartialCdrConfig>,
}

impl PartialGraftConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Resolves the final configuration. Command-line flags win over `--set`
    /// values, which win over the file, which wins over built-in defaults.
    pub fn merge_with_cli(mut self, args: &PlanArgs) -> Result<core_config::GraftConfig> {
        self.apply_set_values(&args.set_values)?;

        let sampling = self.sampling.take().unwrap_or_default();
        let limits = self.limits.take().unwrap_or_default();

        let design_type = match &args.design_type {
            Some(name) => DesignType::from_str(name).map_err(|e| CliError::Argument(e.to_string()))?,
            None => self.design_type.unwrap_or_default(),
        };

        let graft_rounds = args.rounds.or(sampling.graft_rounds).ok_or_else(|| {
            CliError::Config(
                "`sampling.graft-rounds` is required either in the config file or via --rounds."
                    .to_string(),
            )
        })?;

        let mut builder = core_config::GraftConfigBuilder::new()
            .design_type(design_type)
            .graft_rounds(graft_rounds);

        if let Some(seed) = args.seed.or(sampling.seed) {
            builder = builder.seed(seed);
        }
        if let Some(limit) = args.max_permutations.or(limits.max_permutations) {
            builder = builder.max_permutations(limit);
        }
        for (cdr, partial) in self.cdrs {
            builder = builder.cdr_instruction(cdr, partial.into());
        }

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = parser::split_key_value(kv_pair).ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })?;

            match key {
                "design-type" => {
                    self.design_type = Some(parse_value(key, value_str, "design type")?);
                }
                "sampling.graft-rounds" => {
                    self.sampling
                        .get_or_insert_with(Default::default)
                        .graft_rounds = Some(parse_value(key, value_str, "integer")?);
                }
                "sampling.seed" => {
                    self.sampling.get_or_insert_with(Default::default).seed =
                        Some(parse_value(key, value_str, "integer")?);
                }
                "limits.max-permutations" => {
                    self.limits
                        .get_or_insert_with(Default::default)
                        .max_permutations = Some(parse_value(key, value_str, "integer")?);
                }
                _ => self.apply_cdr_value(key, value_str)?,
            }
        }
        Ok(())
    }

    fn apply_cdr_value(&mut self, key: &str, value_str: &str) -> Result<()> {
        let unsupported = || {
            CliError::Config(format!(
                "Unsupported configuration key for --set: '{}'",
                key
            ))
        };

        let mut parts = key.split('.');
        let (Some("cdrs"), Some(cdr), Some(field), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(unsupported());
        };

        let cdr = CdrName::from_str(cdr).map_err(|e| CliError::Config(e.to_string()))?;
        let entry = self.cdrs.entry(cdr).or_default();
        match field {
            "graft" => entry.graft = Some(parse_value(key, value_str, "boolean")?),
            "candidates" => entry.candidates = Some(parse_value(key, value_str, "integer")?),
            _ => return Err(unsupported()),
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value_str: &str, kind: &str) -> Result<T> {
    value_str.parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value_str))
    })
}
