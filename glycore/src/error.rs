use thiserror::Error;

use crate::chemistry::mass_dict::Adduct;

pub type Result<T> = std::result::Result<T, GlycoreError>;

/// Errors raised by dictionary construction, glycan parsing and m/z calculation.
///
/// All operations fail fast: the first offending input aborts the whole call,
/// batch variants included.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GlycoreError {
    #[error("invalid value {value:?} for argument `{argument}`")]
    InvalidArgument { argument: &'static str, value: String },

    #[error("adduct {adduct} is not compatible with charge {charge}")]
    InvalidAdduct { adduct: Adduct, charge: i32 },

    #[error("mass dictionary does not match the required key set (missing: [{}], unexpected: [{}])", .missing.join(", "), .unexpected.join(", "))]
    InvalidMassDictionary {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    #[error("unsupported monosaccharide residues: [{}]", .residues.join(", "))]
    UnsupportedResidue { residues: Vec<String> },

    #[error("could not parse glycan input {input:?}: {reason}")]
    UnparsableInput { input: String, reason: String },
}

impl GlycoreError {
    pub(crate) fn invalid_argument(argument: &'static str, value: &str) -> Self {
        let value = value.to_owned();

        Self::InvalidArgument { argument, value }
    }

    pub(crate) fn unparsable(input: &str, reason: impl Into<String>) -> Self {
        let input = input.to_owned();
        let reason = reason.into();

        Self::UnparsableInput { input, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::mass_dict::Adduct;

    #[test]
    fn test_error_messages() {
        let error = GlycoreError::invalid_argument("derivatization", "permthyl");
        assert_eq!(
            error.to_string(),
            "invalid value \"permthyl\" for argument `derivatization`"
        );

        let error = GlycoreError::InvalidAdduct {
            adduct: Adduct::Chloride,
            charge: 2,
        };
        assert_eq!(error.to_string(), "adduct Cl- is not compatible with charge 2");

        let error = GlycoreError::UnsupportedResidue {
            residues: vec!["Fuc".to_string(), "Xyl".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "unsupported monosaccharide residues: [Fuc, Xyl]"
        );
    }

    #[test]
    fn test_dictionary_error_message() {
        let error = GlycoreError::InvalidMassDictionary {
            missing: vec!["Kdn".to_string()],
            unexpected: vec!["Fuc".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "mass dictionary does not match the required key set (missing: [Kdn], unexpected: [Fuc])"
        );
    }
}
