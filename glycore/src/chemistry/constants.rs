// Purpose: To store ion and reference masses used by the mass dictionaries

// Monoisotopic masses
pub const MASS_PROTON: f64 = 1.007276466621; // Unified atomic mass unit
pub const MASS_ELECTRON: f64 = 0.00054857990946; // Unified atomic mass unit
pub const MASS_HYDROGEN: f64 = 1.0078250319; // H atom; older dictionary tables carried the proton value 1.00728 under this name
pub const MASS_WATER: f64 = 18.0105646863; // Unified atomic mass unit
pub const MASS_SODIUM_CATION: f64 = 22.989220702; // Na minus one electron
pub const MASS_POTASSIUM_CATION: f64 = 38.963157906; // K minus one electron
pub const MASS_AMMONIUM_CATION: f64 = 18.033825553; // NH4 minus one electron
pub const MASS_CHLORIDE_ANION: f64 = 34.96940126; // Cl plus one electron
pub const MASS_BICARBONATE_ANION: f64 = 60.993117478; // HCO3 plus one electron

// Isotope averaged masses
pub const AVERAGE_MASS_PROTON: f64 = 1.00739;
pub const AVERAGE_MASS_HYDROGEN: f64 = 1.00794;
pub const AVERAGE_MASS_WATER: f64 = 18.01528;
pub const AVERAGE_MASS_SODIUM_CATION: f64 = 22.98922;
pub const AVERAGE_MASS_POTASSIUM_CATION: f64 = 39.09775;
pub const AVERAGE_MASS_AMMONIUM_CATION: f64 = 18.03791;
pub const AVERAGE_MASS_CHLORIDE_ANION: f64 = 35.45355;
pub const AVERAGE_MASS_BICARBONATE_ANION: f64 = 61.01739;
