use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::chemistry::constants::{
    AVERAGE_MASS_AMMONIUM_CATION, AVERAGE_MASS_BICARBONATE_ANION, AVERAGE_MASS_CHLORIDE_ANION,
    AVERAGE_MASS_HYDROGEN, AVERAGE_MASS_POTASSIUM_CATION, AVERAGE_MASS_PROTON,
    AVERAGE_MASS_SODIUM_CATION, AVERAGE_MASS_WATER, MASS_AMMONIUM_CATION, MASS_BICARBONATE_ANION,
    MASS_CHLORIDE_ANION, MASS_HYDROGEN, MASS_POTASSIUM_CATION, MASS_PROTON, MASS_SODIUM_CATION,
    MASS_WATER,
};
use crate::chemistry::monosaccharide::{
    monosaccharide_residue_masses, Derivatization, MassType, MONOSACCHARIDE_RESIDUES,
};
use crate::error::{GlycoreError, Result};

/// A mapping from residue and ion names to masses in Dalton.
pub type MassDictionary = HashMap<&'static str, f64>;

/// Ion and molecule names present in every mass dictionary, independent of derivatization.
pub const ION_NAMES: [&str; 8] = ["H+", "H", "H2O", "K+", "Na+", "NH4+", "Cl-", "HCO3-"];

/// Represents the adduct ion attached to a glycan during ionization.
///
/// Positive charge states pair with `H+`, `K+`, `Na+` and `NH4+`, negative charge
/// states with `Cl-` and `HCO3-`.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Adduct {
    Proton,
    Potassium,
    Sodium,
    Ammonium,
    Chloride,
    Bicarbonate,
}

impl Adduct {
    /// Returns the dictionary key of the adduct.
    pub fn as_str(&self) -> &'static str {
        match self {
            Adduct::Proton => "H+",
            Adduct::Potassium => "K+",
            Adduct::Sodium => "Na+",
            Adduct::Ammonium => "NH4+",
            Adduct::Chloride => "Cl-",
            Adduct::Bicarbonate => "HCO3-",
        }
    }

    /// Returns true for cations, false for anions.
    pub fn is_positive(&self) -> bool {
        match self {
            Adduct::Proton | Adduct::Potassium | Adduct::Sodium | Adduct::Ammonium => true,
            Adduct::Chloride | Adduct::Bicarbonate => false,
        }
    }
}

impl Default for Adduct {
    fn default() -> Self {
        Adduct::Proton
    }
}

impl Display for Adduct {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Adduct {
    type Err = GlycoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "H+" => Ok(Adduct::Proton),
            "K+" => Ok(Adduct::Potassium),
            "Na+" => Ok(Adduct::Sodium),
            "NH4+" => Ok(Adduct::Ammonium),
            "Cl-" => Ok(Adduct::Chloride),
            "HCO3-" => Ok(Adduct::Bicarbonate),
            _ => Err(GlycoreError::invalid_argument("adduct", s)),
        }
    }
}

/// Fixed Ion Masses
///
/// # Arguments
///
/// * `mass_type` - monoisotopic or isotope averaged masses
///
/// # Returns
///
/// * `HashMap<&'static str, f64>` - a map of ion and molecule names to their masses in Dalton
///
/// # Example
///
/// ```
/// use glycore::chemistry::mass_dict::fixed_ion_masses;
/// use glycore::chemistry::monosaccharide::MassType;
///
/// let masses = fixed_ion_masses(MassType::Mono);
/// assert_eq!(masses.get("H+"), Some(&1.007276466621));
/// assert_eq!(masses.get("H2O"), Some(&18.0105646863));
/// ```
pub fn fixed_ion_masses(mass_type: MassType) -> HashMap<&'static str, f64> {
    let mut map = HashMap::new();
    match mass_type {
        MassType::Mono => {
            map.insert("H+", MASS_PROTON);
            map.insert("H", MASS_HYDROGEN);
            map.insert("H2O", MASS_WATER);
            map.insert("K+", MASS_POTASSIUM_CATION);
            map.insert("Na+", MASS_SODIUM_CATION);
            map.insert("NH4+", MASS_AMMONIUM_CATION);
            map.insert("Cl-", MASS_CHLORIDE_ANION);
            map.insert("HCO3-", MASS_BICARBONATE_ANION);
        }
        MassType::Average => {
            map.insert("H+", AVERAGE_MASS_PROTON);
            map.insert("H", AVERAGE_MASS_HYDROGEN);
            map.insert("H2O", AVERAGE_MASS_WATER);
            map.insert("K+", AVERAGE_MASS_POTASSIUM_CATION);
            map.insert("Na+", AVERAGE_MASS_SODIUM_CATION);
            map.insert("NH4+", AVERAGE_MASS_AMMONIUM_CATION);
            map.insert("Cl-", AVERAGE_MASS_CHLORIDE_ANION);
            map.insert("HCO3-", AVERAGE_MASS_BICARBONATE_ANION);
        }
    }
    map
}

/// Mass Dictionary
///
/// Merges the derivatization dependent residue masses with the fixed ion masses
/// into the single lookup table used by the m/z calculator.
///
/// # Arguments
///
/// * `derivatization` - derivatization scheme applied to the glycan
/// * `mass_type` - monoisotopic or isotope averaged masses
///
/// # Returns
///
/// * `MassDictionary` - a map of residue and ion names to masses in Dalton
///
/// # Example
///
/// ```
/// use glycore::chemistry::mass_dict::mass_dictionary;
/// use glycore::chemistry::monosaccharide::{Derivatization, MassType};
///
/// let dictionary = mass_dictionary(Derivatization::None, MassType::Mono);
/// assert_eq!(dictionary.len(), 21);
/// assert_eq!(dictionary.get("Hex"), Some(&162.0528234));
/// assert_eq!(dictionary.get("H+"), Some(&1.007276466621));
/// ```
pub fn mass_dictionary(derivatization: Derivatization, mass_type: MassType) -> MassDictionary {
    let mut map = monosaccharide_residue_masses(derivatization, mass_type);
    map.extend(fixed_ion_masses(mass_type));
    map
}

/// Returns the exact key set every mass dictionary must carry.
pub fn required_dictionary_keys() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = MONOSACCHARIDE_RESIDUES.to_vec();
    keys.push("red_end");
    keys.extend(ION_NAMES);
    keys
}

/// Validates the key set of a caller supplied mass dictionary.
///
/// The check is structural only, mass values are taken as given. Missing and
/// unexpected keys are reported sorted by name.
///
/// # Example
///
/// ```
/// use glycore::chemistry::mass_dict::{mass_dictionary, validate_mass_dictionary};
/// use glycore::chemistry::monosaccharide::{Derivatization, MassType};
///
/// let mut dictionary = mass_dictionary(Derivatization::None, MassType::Mono);
/// assert!(validate_mass_dictionary(&dictionary).is_ok());
///
/// dictionary.remove("Kdn");
/// assert!(validate_mass_dictionary(&dictionary).is_err());
/// ```
pub fn validate_mass_dictionary(dictionary: &MassDictionary) -> Result<()> {
    let required = required_dictionary_keys();
    let missing: Vec<String> = required
        .iter()
        .filter(|key| !dictionary.contains_key(*key))
        .map(|key| key.to_string())
        .sorted()
        .collect();
    let unexpected: Vec<String> = dictionary
        .keys()
        .filter(|key| !required.contains(*key))
        .map(|key| key.to_string())
        .sorted()
        .collect();

    if missing.is_empty() && unexpected.is_empty() {
        Ok(())
    } else {
        Err(GlycoreError::InvalidMassDictionary { missing, unexpected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_set_identical_across_schemes() {
        let schemes = [
            (Derivatization::None, MassType::Mono),
            (Derivatization::None, MassType::Average),
            (Derivatization::Permethyl, MassType::Mono),
            (Derivatization::Permethyl, MassType::Average),
            (Derivatization::Peracetyl, MassType::Mono),
            (Derivatization::Peracetyl, MassType::Average),
        ];
        let reference: Vec<&str> = mass_dictionary(Derivatization::None, MassType::Mono)
            .keys()
            .copied()
            .sorted()
            .collect();
        assert_eq!(reference.len(), 21);

        for (derivatization, mass_type) in schemes {
            let keys: Vec<&str> = mass_dictionary(derivatization, mass_type)
                .keys()
                .copied()
                .sorted()
                .collect();
            assert_eq!(keys, reference);
        }
    }

    #[test]
    fn test_fixed_masses_depend_on_mass_type_only() {
        let mono = fixed_ion_masses(MassType::Mono);
        let average = fixed_ion_masses(MassType::Average);
        assert_eq!(mono.len(), ION_NAMES.len());
        assert_eq!(average.len(), ION_NAMES.len());
        for ion in ION_NAMES {
            assert_ne!(mono[ion], average[ion], "ion {} has equal masses", ion);
        }

        let permethylated = mass_dictionary(Derivatization::Permethyl, MassType::Mono);
        for ion in ION_NAMES {
            assert_eq!(permethylated[ion], mono[ion]);
        }
    }

    #[test]
    fn test_validate_accepts_modified_values() {
        let mut dictionary = mass_dictionary(Derivatization::None, MassType::Mono);
        dictionary.insert("Hex", 163.0);
        assert!(validate_mass_dictionary(&dictionary).is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_and_unexpected_keys() {
        let mut dictionary = mass_dictionary(Derivatization::None, MassType::Mono);
        dictionary.remove("NeuAc");
        dictionary.remove("H2O");
        dictionary.insert("Fuc", 146.0579088);

        let error = validate_mass_dictionary(&dictionary).unwrap_err();
        assert_eq!(
            error,
            GlycoreError::InvalidMassDictionary {
                missing: vec!["H2O".to_string(), "NeuAc".to_string()],
                unexpected: vec!["Fuc".to_string()],
            }
        );
    }

    #[test]
    fn test_adduct_polarity() {
        assert!(Adduct::Proton.is_positive());
        assert!(Adduct::Potassium.is_positive());
        assert!(Adduct::Sodium.is_positive());
        assert!(Adduct::Ammonium.is_positive());
        assert!(!Adduct::Chloride.is_positive());
        assert!(!Adduct::Bicarbonate.is_positive());
    }

    #[test]
    fn test_adduct_from_str_round_trip() {
        for adduct in [
            Adduct::Proton,
            Adduct::Potassium,
            Adduct::Sodium,
            Adduct::Ammonium,
            Adduct::Chloride,
            Adduct::Bicarbonate,
        ] {
            assert_eq!(adduct.to_string().parse::<Adduct>().unwrap(), adduct);
        }
        assert!(matches!(
            "Mg2+".parse::<Adduct>(),
            Err(GlycoreError::InvalidArgument { argument: "adduct", .. })
        ));
    }

    #[test]
    fn test_every_adduct_has_a_dictionary_entry() {
        let dictionary = mass_dictionary(Derivatization::None, MassType::Mono);
        for adduct in [
            Adduct::Proton,
            Adduct::Potassium,
            Adduct::Sodium,
            Adduct::Ammonium,
            Adduct::Chloride,
            Adduct::Bicarbonate,
        ] {
            assert!(dictionary.contains_key(adduct.as_str()));
        }
    }

    #[test]
    fn test_adduct_serialization_round_trip() {
        let serialized = serde_json::to_string(&Adduct::Ammonium).unwrap();
        let deserialized: Adduct = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, Adduct::Ammonium);
    }
}
