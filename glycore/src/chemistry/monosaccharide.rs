use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chemistry::constants::{AVERAGE_MASS_WATER, MASS_WATER};
use crate::error::GlycoreError;

/// Residue names recognized by the m/z calculator, in canonical summation order.
pub const MONOSACCHARIDE_RESIDUES: [&str; 12] = [
    "Hex", "HexNAc", "dHex", "dHexNAc", "ddHex", "Pent", "HexA", "HexN", "NeuAc", "NeuGc", "Kdn",
    "Neu",
];

/// Represents the mass type used for residue and ion masses.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum MassType {
    Mono,
    Average,
}

impl Default for MassType {
    fn default() -> Self {
        MassType::Mono
    }
}

impl Display for MassType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MassType::Mono => write!(f, "mono"),
            MassType::Average => write!(f, "average"),
        }
    }
}

impl FromStr for MassType {
    type Err = GlycoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mono" => Ok(MassType::Mono),
            "average" => Ok(MassType::Average),
            _ => Err(GlycoreError::invalid_argument("mass_type", s)),
        }
    }
}

/// Represents the derivatization scheme applied to a glycan before measurement.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Derivatization {
    None,
    Permethyl,
    Peracetyl,
}

impl Default for Derivatization {
    fn default() -> Self {
        Derivatization::None
    }
}

impl Display for Derivatization {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Derivatization::None => write!(f, "none"),
            Derivatization::Permethyl => write!(f, "permethyl"),
            Derivatization::Peracetyl => write!(f, "peracetyl"),
        }
    }
}

impl FromStr for Derivatization {
    type Err = GlycoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Derivatization::None),
            "permethyl" => Ok(Derivatization::Permethyl),
            "peracetyl" => Ok(Derivatization::Peracetyl),
            _ => Err(GlycoreError::invalid_argument("derivatization", s)),
        }
    }
}

/// Monosaccharides
///
/// # Arguments
///
/// None
///
/// # Returns
///
/// * `HashMap<&'static str, &'static str>` - a map of monosaccharide names to their residue codes
///
/// # Example
///
/// ```
/// use glycore::chemistry::monosaccharide::monosaccharides;
///
/// let monosaccharides = monosaccharides();
/// assert_eq!(monosaccharides.get("N-Acetylhexosamine"), Some(&"HexNAc"));
/// ```
pub fn monosaccharides() -> HashMap<&'static str, &'static str> {
    let mut map = HashMap::new();
    map.insert("Hexose", "Hex");
    map.insert("N-Acetylhexosamine", "HexNAc");
    map.insert("Deoxyhexose", "dHex");
    map.insert("N-Acetyldeoxyhexosamine", "dHexNAc");
    map.insert("Dideoxyhexose", "ddHex");
    map.insert("Pentose", "Pent");
    map.insert("Hexuronic Acid", "HexA");
    map.insert("Hexosamine", "HexN");
    map.insert("N-Acetylneuraminic Acid", "NeuAc");
    map.insert("N-Glycolylneuraminic Acid", "NeuGc");
    map.insert("Ketodeoxynononic Acid", "Kdn");
    map.insert("Neuraminic Acid", "Neu");
    map
}

/// Monosaccharide Residue Masses
///
/// # Arguments
///
/// * `derivatization` - derivatization scheme applied to the glycan
/// * `mass_type` - monoisotopic or isotope averaged masses
///
/// # Returns
///
/// * `HashMap<&'static str, f64>` - a map of residue names to residue masses in Dalton,
///   including the reducing end addition under the key `red_end`
///
/// # Example
///
/// ```
/// use glycore::chemistry::monosaccharide::{monosaccharide_residue_masses, Derivatization, MassType};
///
/// let masses = monosaccharide_residue_masses(Derivatization::None, MassType::Mono);
/// assert_eq!(masses.get("Hex"), Some(&162.0528234));
/// assert_eq!(masses.get("red_end"), Some(&18.0105646863));
/// ```
pub fn monosaccharide_residue_masses(
    derivatization: Derivatization,
    mass_type: MassType,
) -> HashMap<&'static str, f64> {
    let mut map = HashMap::new();
    match (derivatization, mass_type) {
        (Derivatization::None, MassType::Mono) => {
            map.insert("Hex", 162.0528234);
            map.insert("HexNAc", 203.0793725);
            map.insert("dHex", 146.0579088);
            map.insert("dHexNAc", 187.0844579);
            map.insert("ddHex", 130.0629942);
            map.insert("Pent", 132.0422587);
            map.insert("HexA", 176.0320880);
            map.insert("HexN", 161.0688078);
            map.insert("NeuAc", 291.0954165);
            map.insert("NeuGc", 307.0903311);
            map.insert("Kdn", 250.0688674);
            map.insert("Neu", 249.0848518);
            map.insert("red_end", MASS_WATER);
        }
        (Derivatization::None, MassType::Average) => {
            map.insert("Hex", 162.1406);
            map.insert("HexNAc", 203.1925);
            map.insert("dHex", 146.1412);
            map.insert("dHexNAc", 187.1931);
            map.insert("ddHex", 130.1418);
            map.insert("Pent", 132.1146);
            map.insert("HexA", 176.1241);
            map.insert("HexN", 161.1558);
            map.insert("NeuAc", 291.2546);
            map.insert("NeuGc", 307.2540);
            map.insert("Kdn", 250.2027);
            map.insert("Neu", 249.2179);
            map.insert("red_end", AVERAGE_MASS_WATER);
        }
        (Derivatization::Permethyl, MassType::Mono) => {
            map.insert("Hex", 204.0997736);
            map.insert("HexNAc", 245.1263227);
            map.insert("dHex", 174.0892089);
            map.insert("dHexNAc", 215.1157580);
            map.insert("ddHex", 144.0786442);
            map.insert("Pent", 160.0735589);
            map.insert("HexA", 218.0790382);
            map.insert("HexN", 217.1314081);
            map.insert("NeuAc", 361.1736668);
            map.insert("NeuGc", 391.1842315);
            map.insert("Kdn", 320.1471177);
            map.insert("Neu", 333.1787522);
            map.insert("red_end", 46.0418648);
        }
        (Derivatization::Permethyl, MassType::Average) => {
            map.insert("Hex", 204.2203);
            map.insert("HexNAc", 245.2723);
            map.insert("dHex", 174.1944);
            map.insert("dHexNAc", 215.2463);
            map.insert("ddHex", 144.1684);
            map.insert("Pent", 160.1678);
            map.insert("HexA", 218.2039);
            map.insert("HexN", 217.2622);
            map.insert("NeuAc", 361.3875);
            map.insert("NeuGc", 391.4135);
            map.insert("Kdn", 320.3356);
            map.insert("Neu", 333.3774);
            map.insert("red_end", 46.06844);
        }
        (Derivatization::Peracetyl, MassType::Mono) => {
            map.insert("Hex", 288.0845175);
            map.insert("HexNAc", 287.1005019);
            map.insert("dHex", 230.0790382);
            map.insert("dHexNAc", 229.0950226);
            map.insert("ddHex", 172.0735589);
            map.insert("Pent", 216.0633881);
            map.insert("HexA", 260.0532174);
            map.insert("HexN", 287.1005019);
            map.insert("NeuAc", 459.1376753);
            map.insert("NeuGc", 517.1431546);
            map.insert("Kdn", 460.1216909);
            map.insert("Neu", 459.1376753);
            map.insert("red_end", 102.0316941);
        }
        (Derivatization::Peracetyl, MassType::Average) => {
            map.insert("Hex", 288.2506);
            map.insert("HexNAc", 287.2659);
            map.insert("dHex", 230.2146);
            map.insert("dHexNAc", 229.2298);
            map.insert("ddHex", 172.1785);
            map.insert("Pent", 216.1880);
            map.insert("HexA", 260.1975);
            map.insert("HexN", 287.2659);
            map.insert("NeuAc", 459.4013);
            map.insert("NeuGc", 517.4374);
            map.insert("Kdn", 460.3861);
            map.insert("Neu", 459.4013);
            map.insert("red_end", 102.08864);
        }
    }
    map
}
