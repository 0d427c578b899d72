use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unrecognized CDR name '{0}'. Expected one of H1, H2, H3, L1, L2, L3")]
    UnknownCdr(String),

    #[error("Unrecognized design type '{0}'. Expected FLXBB, FIXBB or RELAXED_DESIGN")]
    UnknownDesignType(String),
}
