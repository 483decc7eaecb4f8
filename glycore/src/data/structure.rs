use std::fmt;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::data::composition::GlycanComposition;

/// Represents a glycan tree as a residue carrying zero or more branches.
///
/// Only residue identities are kept. Linkage positions and anomeric
/// configuration do not change the mass and are not recorded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlycanStructure {
    pub residue: String,
    pub branches: Vec<GlycanStructure>,
}

impl GlycanStructure {
    pub fn new(residue: &str, branches: Vec<GlycanStructure>) -> Self {
        GlycanStructure {
            residue: residue.to_string(),
            branches,
        }
    }

    /// Reduces the tree to residue counts by walking all branches.
    ///
    /// # Example
    ///
    /// ```
    /// use glycore::data::structure::GlycanStructure;
    ///
    /// let structure = GlycanStructure::new(
    ///     "HexNAc",
    ///     vec![GlycanStructure::new(
    ///         "Hex",
    ///         vec![GlycanStructure::new("Hex", vec![])],
    ///     )],
    /// );
    /// let composition = structure.composition();
    /// assert_eq!(composition.count("HexNAc"), 1);
    /// assert_eq!(composition.count("Hex"), 2);
    /// ```
    pub fn composition(&self) -> GlycanComposition {
        let mut composition = GlycanComposition::new();
        self.collect_counts(&mut composition);
        composition
    }

    fn collect_counts(&self, composition: &mut GlycanComposition) {
        let count = composition.count(&self.residue).saturating_add(1);
        composition.insert(&self.residue, count);
        for branch in &self.branches {
            branch.collect_counts(composition);
        }
    }
}

impl Display for GlycanStructure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.branches.is_empty() {
            write!(f, "{}", self.residue)
        } else {
            write!(
                f,
                "{}({})",
                self.residue,
                self.branches.iter().map(GlycanStructure::to_string).join(",")
            )
        }
    }
}
