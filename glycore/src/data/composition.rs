use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::data::structure::GlycanStructure;
use crate::error::{GlycoreError, Result};

/// Represents a glycan as residue counts without positional or linkage information.
///
/// Residue names are not restricted here, the m/z calculator rejects unknown
/// names with nonzero counts when it runs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GlycanComposition {
    pub counts: HashMap<String, u32>,
}

impl GlycanComposition {
    pub fn new() -> Self {
        GlycanComposition {
            counts: HashMap::new(),
        }
    }

    pub fn from_counts(counts: HashMap<String, u32>) -> Self {
        GlycanComposition { counts }
    }

    pub fn from_pairs(pairs: &[(&str, u32)]) -> Self {
        let counts = pairs
            .iter()
            .map(|(residue, count)| (residue.to_string(), *count))
            .collect();
        GlycanComposition { counts }
    }

    /// Returns the count of a residue, zero if the residue is absent.
    pub fn count(&self, residue: &str) -> u32 {
        self.counts.get(residue).copied().unwrap_or(0)
    }

    /// Sets the count of a residue, replacing any previous value.
    pub fn insert(&mut self, residue: &str, count: u32) {
        self.counts.insert(residue.to_string(), count);
    }
}

impl Display for GlycanComposition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let rendered: String = self
            .counts
            .iter()
            .filter(|(_, &count)| count > 0)
            .sorted()
            .map(|(residue, count)| format!("{}{}", residue, count))
            .join("");
        write!(f, "{}", rendered)
    }
}

impl FromStr for GlycanComposition {
    type Err = GlycoreError;

    fn from_str(s: &str) -> Result<Self> {
        parse_glycan_composition(s)
    }
}

/// Represents the glycan input forms accepted by the m/z calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GlycanInput {
    Composition(GlycanComposition),
    Shorthand(String),
    Structure(GlycanStructure),
}

impl GlycanInput {
    /// Resolves the input into a composition, parsing shorthand text and
    /// reducing structures where needed.
    pub fn to_composition(&self) -> Result<GlycanComposition> {
        match self {
            GlycanInput::Composition(composition) => Ok(composition.clone()),
            GlycanInput::Shorthand(text) => parse_glycan_composition(text),
            GlycanInput::Structure(structure) => Ok(structure.composition()),
        }
    }
}

impl From<GlycanComposition> for GlycanInput {
    fn from(composition: GlycanComposition) -> Self {
        GlycanInput::Composition(composition)
    }
}

impl From<&str> for GlycanInput {
    fn from(text: &str) -> Self {
        GlycanInput::Shorthand(text.to_string())
    }
}

impl From<String> for GlycanInput {
    fn from(text: String) -> Self {
        GlycanInput::Shorthand(text)
    }
}

impl From<GlycanStructure> for GlycanInput {
    fn from(structure: GlycanStructure) -> Self {
        GlycanInput::Structure(structure)
    }
}

/// Parse a shorthand residue count string into a composition
///
/// Two notations are read: bracketed counts like `HexNAc(2)Hex(3)` and condensed
/// counts like `Hex3HexNAc2`. Residue names are maximal alphabetic runs, so in
/// condensed notation a count is what separates adjacent names. A missing count
/// in condensed notation defaults to one. Repeated names are summed.
///
/// # Arguments
///
/// * `text` - shorthand composition string
///
/// # Returns
///
/// * `Result<GlycanComposition>` - the parsed composition, or `UnparsableInput`
///
/// # Example
///
/// ```
/// use glycore::data::composition::parse_glycan_composition;
///
/// let composition = parse_glycan_composition("HexNAc(2)Hex(3)").unwrap();
/// assert_eq!(composition.count("Hex"), 3);
/// assert_eq!(composition.count("HexNAc"), 2);
///
/// let condensed = parse_glycan_composition("Hex3HexNAc2").unwrap();
/// assert_eq!(condensed, composition);
/// ```
pub fn parse_glycan_composition(text: &str) -> Result<GlycanComposition> {
    if text.trim().is_empty() {
        return Err(GlycoreError::unparsable(text, "input is empty"));
    }
    if text.contains('(') || text.contains(')') {
        parse_bracketed_counts(text)
    } else {
        parse_condensed_counts(text)
    }
}

fn parse_bracketed_counts(text: &str) -> Result<GlycanComposition> {
    let pattern = Regex::new(r"([A-Za-z]+)\s*\(\s*(\d+)\s*\)").unwrap();
    check_remainder(text, pattern.replace_all(text, "").trim())?;

    let mut counts: HashMap<String, u32> = HashMap::new();
    for captures in pattern.captures_iter(text) {
        let count = parse_count(text, &captures[2])?;
        add_count(text, &mut counts, &captures[1], count)?;
    }
    Ok(GlycanComposition::from_counts(counts))
}

fn parse_condensed_counts(text: &str) -> Result<GlycanComposition> {
    let pattern = Regex::new(r"([A-Za-z]+)\s*(\d*)").unwrap();
    check_remainder(text, pattern.replace_all(text, "").trim())?;

    let mut counts: HashMap<String, u32> = HashMap::new();
    for captures in pattern.captures_iter(text) {
        let count = if captures[2].is_empty() {
            1
        } else {
            parse_count(text, &captures[2])?
        };
        add_count(text, &mut counts, &captures[1], count)?;
    }
    Ok(GlycanComposition::from_counts(counts))
}

// Anything the token pattern did not consume makes the whole input unreadable
fn check_remainder(text: &str, remainder: &str) -> Result<()> {
    if remainder.is_empty() {
        Ok(())
    } else {
        Err(GlycoreError::unparsable(
            text,
            format!("unexpected text {:?}", remainder),
        ))
    }
}

fn parse_count(text: &str, digits: &str) -> Result<u32> {
    digits
        .parse()
        .map_err(|_| GlycoreError::unparsable(text, format!("count {:?} is out of range", digits)))
}

fn add_count(
    text: &str,
    counts: &mut HashMap<String, u32>,
    residue: &str,
    count: u32,
) -> Result<()> {
    let entry = counts.entry(residue.to_string()).or_insert(0);
    *entry = entry
        .checked_add(count)
        .ok_or_else(|| GlycoreError::unparsable(text, "summed residue count is out of range"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bracketed_counts() {
        let composition = parse_glycan_composition("Hex(5)HexNAc(4)dHex(1)NeuAc(2)").unwrap();
        assert_eq!(composition.count("Hex"), 5);
        assert_eq!(composition.count("HexNAc"), 4);
        assert_eq!(composition.count("dHex"), 1);
        assert_eq!(composition.count("NeuAc"), 2);
        assert_eq!(composition.count("Pent"), 0);
    }

    #[test]
    fn test_parse_bracketed_counts_with_whitespace() {
        let composition = parse_glycan_composition("Hex (3) HexNAc ( 2 )").unwrap();
        assert_eq!(composition, GlycanComposition::from_pairs(&[("Hex", 3), ("HexNAc", 2)]));
    }

    #[test]
    fn test_parse_condensed_counts() {
        let composition = parse_glycan_composition("Hex3HexNAc2").unwrap();
        assert_eq!(composition, GlycanComposition::from_pairs(&[("Hex", 3), ("HexNAc", 2)]));
    }

    #[test]
    fn test_parse_condensed_counts_with_implied_one() {
        let composition = parse_glycan_composition("Hex3dHex").unwrap();
        assert_eq!(composition, GlycanComposition::from_pairs(&[("Hex", 3), ("dHex", 1)]));
    }

    #[test]
    fn test_parse_sums_repeated_names() {
        let composition = parse_glycan_composition("Hex(2)HexNAc(1)Hex(1)").unwrap();
        assert_eq!(composition.count("Hex"), 3);
        assert_eq!(composition.count("HexNAc"), 1);
    }

    #[test]
    fn test_parse_keeps_unknown_names() {
        // Unknown residues are a calculator concern, not a parser concern
        let composition = parse_glycan_composition("Fuc2Hex3").unwrap();
        assert_eq!(composition.count("Fuc"), 2);
        assert_eq!(composition.count("Hex"), 3);
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(matches!(
            parse_glycan_composition(""),
            Err(GlycoreError::UnparsableInput { .. })
        ));
        assert!(matches!(
            parse_glycan_composition("   "),
            Err(GlycoreError::UnparsableInput { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for text in ["Hex(two)", "Hex(3", "(3)", "5", "Hex-3", "Hex3;HexNAc2"] {
            assert!(
                matches!(
                    parse_glycan_composition(text),
                    Err(GlycoreError::UnparsableInput { .. })
                ),
                "input {:?} should not parse",
                text
            );
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range_counts() {
        assert!(matches!(
            parse_glycan_composition("Hex(4294967296)"),
            Err(GlycoreError::UnparsableInput { .. })
        ));
        assert!(matches!(
            parse_glycan_composition("Hex(4294967295)Hex(1)"),
            Err(GlycoreError::UnparsableInput { .. })
        ));
    }

    #[test]
    fn test_composition_from_str() {
        let composition: GlycanComposition = "HexNAc(2)Hex(3)".parse().unwrap();
        assert_eq!(composition.count("HexNAc"), 2);
    }

    #[test]
    fn test_composition_display_is_sorted_and_skips_zeros() {
        let mut composition = GlycanComposition::from_pairs(&[("HexNAc", 2), ("Hex", 3)]);
        composition.insert("NeuAc", 0);
        assert_eq!(composition.to_string(), "Hex3HexNAc2");
    }

    #[test]
    fn test_glycan_input_conversions() {
        let composition = GlycanComposition::from_pairs(&[("Hex", 3), ("HexNAc", 2)]);

        let from_composition = GlycanInput::from(composition.clone());
        assert_eq!(from_composition.to_composition().unwrap(), composition);

        let from_text = GlycanInput::from("Hex3HexNAc2");
        assert_eq!(from_text.to_composition().unwrap(), composition);

        let structure = GlycanStructure::new(
            "HexNAc",
            vec![GlycanStructure::new(
                "HexNAc",
                vec![
                    GlycanStructure::new("Hex", vec![]),
                    GlycanStructure::new("Hex", vec![GlycanStructure::new("Hex", vec![])]),
                ],
            )],
        );
        let from_structure = GlycanInput::from(structure);
        assert_eq!(from_structure.to_composition().unwrap(), composition);
    }

    #[test]
    fn test_glycan_input_propagates_parse_errors() {
        let input = GlycanInput::from("Hex(three)");
        assert!(matches!(
            input.to_composition(),
            Err(GlycoreError::UnparsableInput { .. })
        ));
    }

    #[test]
    fn test_composition_serialization_round_trip() {
        let composition = GlycanComposition::from_pairs(&[("Hex", 3), ("HexNAc", 2)]);
        let serialized = serde_json::to_string(&composition).unwrap();
        let deserialized: GlycanComposition = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, composition);

        let input = GlycanInput::from("Hex3HexNAc2");
        let serialized = serde_json::to_string(&input).unwrap();
        let deserialized: GlycanInput = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, input);
    }
}
