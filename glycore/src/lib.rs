// chemistry module
pub mod chemistry {
    pub mod constants;
    pub mod mass_dict;
    pub mod monosaccharide;
}

// algorithm module
pub mod algorithm {
    pub mod mz;
    pub mod tolerance;
}

// data module
pub mod data {
    pub mod composition;
    pub mod structure;
}

pub mod error;
