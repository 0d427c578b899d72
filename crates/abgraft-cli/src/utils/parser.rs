use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid cardinality '{value}' at position {position} in '{input}'. Expected an integer.")]
    InvalidValue {
        input: String,
        position: usize,
        value: String,
    },

    #[error("Empty entry at position {position} in '{input}'. Expected a comma-separated list such as '2,0,3'.")]
    EmptyEntry { input: String, position: usize },
}

/// One cardinality vector as typed on the command line. Values are kept signed so
/// that negative entries reach the enumerator and are reported against their slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardinalityList(pub Vec<i64>);

/// Parses a comma-separated list such as `2,0,3`. A blank string is the empty vector.
pub fn parse_cardinalities(input: &str) -> Result<CardinalityList, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(CardinalityList(Vec::new()));
    }

    trimmed
        .split(',')
        .enumerate()
        .map(|(position, entry)| {
            let entry = entry.trim();
            if entry.is_empty() {
                return Err(ParseError::EmptyEntry {
                    input: input.to_string(),
                    position: position + 1,
                });
            }
            entry.parse::<i64>().map_err(|_| ParseError::InvalidValue {
                input: input.to_string(),
                position: position + 1,
                value: entry.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CardinalityList)
}

/// Splits a `--set` argument into its key and value.
pub fn split_key_value(pair: &str) -> Option<(&str, &str)> {
    let (key, value) = pair.split_once('=')?;
    let key = key.trim();
    (!key.is_empty()).then_some((key, value.trim()))
}
