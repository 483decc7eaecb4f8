use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use itertools::Itertools;

use crate::chemistry::mass_dict::{self, validate_mass_dictionary, Adduct, MassDictionary};
use crate::chemistry::monosaccharide::{Derivatization, MassType, MONOSACCHARIDE_RESIDUES};
use crate::data::composition::{GlycanComposition, GlycanInput};
use crate::error::{GlycoreError, Result};

/// calculate the neutral mass of a glycan composition
///
/// # Arguments
///
/// * `composition` - residue counts of the glycan
/// * `mass_dictionary` - optional dictionary override, defaults to underivatized monoisotopic masses
///
/// # Returns
///
/// * `Result<f64>` - the uncharged mass in Dalton, reducing end included
///
/// # Example
///
/// ```
/// use glycore::algorithm::mz::calculate_neutral_mass;
/// use glycore::data::composition::GlycanComposition;
///
/// let composition = GlycanComposition::from_pairs(&[("HexNAc", 2), ("Hex", 3)]);
/// let mass = calculate_neutral_mass(&composition, None).unwrap();
/// assert_eq!((mass * 1e2).round() / 1e2, 910.33);
/// ```
pub fn calculate_neutral_mass(
    composition: &GlycanComposition,
    mass_dictionary: Option<&MassDictionary>,
) -> Result<f64> {
    let dictionary = resolve_dictionary(mass_dictionary)?;
    validate_residues(composition)?;
    Ok(neutral_mass(composition, &dictionary))
}

/// calculate the m/z of a glycan
///
/// The glycan is resolved into a composition first, so shorthand text and
/// structures are accepted next to ready made compositions. With a nonzero
/// charge the adduct mass is added once per charge before dividing, with
/// charge zero the adduct is ignored and the neutral mass is returned.
///
/// # Arguments
///
/// * `glycan` - the glycan input
/// * `charge` - charge state, any sign, zero included
/// * `adduct` - adduct ion, must match the sign of the charge
/// * `mass_dictionary` - optional dictionary override, defaults to underivatized monoisotopic masses
///
/// # Returns
///
/// * `Result<f64>` - mass-over-charge of the glycan ion
///
/// # Example
///
/// ```
/// use glycore::algorithm::mz::calculate_mz;
/// use glycore::chemistry::mass_dict::Adduct;
/// use glycore::data::composition::GlycanInput;
///
/// let glycan = GlycanInput::from("HexNAc(2)Hex(3)");
/// let mz = calculate_mz(&glycan, 1, Adduct::Proton, None).unwrap();
/// assert_eq!((mz * 1e2).round() / 1e2, 911.34);
/// ```
pub fn calculate_mz(
    glycan: &GlycanInput,
    charge: i32,
    adduct: Adduct,
    mass_dictionary: Option<&MassDictionary>,
) -> Result<f64> {
    validate_adduct(adduct, charge)?;
    let dictionary = resolve_dictionary(mass_dictionary)?;
    let composition = glycan.to_composition()?;
    validate_residues(&composition)?;
    Ok(mz_from_neutral(
        neutral_mass(&composition, &dictionary),
        charge,
        adduct,
        &dictionary,
    ))
}

/// calculate the m/z of a sequence of glycans
///
/// All validation runs before any arithmetic, the first offending input fails
/// the whole batch. Results keep the input order and match single item calls
/// exactly.
///
/// # Arguments
///
/// * `glycans` - the glycan inputs
/// * `charge` - charge state shared by all inputs
/// * `adduct` - adduct ion shared by all inputs
/// * `mass_dictionary` - optional dictionary override
///
/// # Returns
///
/// * `Result<Vec<f64>>` - one m/z per input, in input order
pub fn calculate_mz_batch(
    glycans: &[GlycanInput],
    charge: i32,
    adduct: Adduct,
    mass_dictionary: Option<&MassDictionary>,
) -> Result<Vec<f64>> {
    let (compositions, dictionary) = prepare_batch(glycans, charge, adduct, mass_dictionary)?;
    Ok(compositions
        .iter()
        .map(|composition| {
            mz_from_neutral(neutral_mass(composition, &dictionary), charge, adduct, &dictionary)
        })
        .collect())
}

/// calculate the m/z of a sequence of glycans in parallel
///
/// Validation and input normalization run up front on the calling thread, the
/// per item arithmetic is spread over a dedicated thread pool. Results keep
/// the input order.
///
/// # Arguments
///
/// * `glycans` - the glycan inputs
/// * `charge` - charge state shared by all inputs
/// * `adduct` - adduct ion shared by all inputs
/// * `mass_dictionary` - optional dictionary override
/// * `num_threads` - number of worker threads
///
/// # Returns
///
/// * `Result<Vec<f64>>` - one m/z per input, in input order
pub fn calculate_mz_batch_par(
    glycans: &[GlycanInput],
    charge: i32,
    adduct: Adduct,
    mass_dictionary: Option<&MassDictionary>,
    num_threads: usize,
) -> Result<Vec<f64>> {
    let (compositions, dictionary) = prepare_batch(glycans, charge, adduct, mass_dictionary)?;
    let pool = ThreadPoolBuilder::new().num_threads(num_threads).build().unwrap();
    Ok(pool.install(|| {
        compositions
            .par_iter()
            .map(|composition| {
                mz_from_neutral(neutral_mass(composition, &dictionary), charge, adduct, &dictionary)
            })
            .collect()
    }))
}

fn prepare_batch(
    glycans: &[GlycanInput],
    charge: i32,
    adduct: Adduct,
    mass_dictionary: Option<&MassDictionary>,
) -> Result<(Vec<GlycanComposition>, MassDictionary)> {
    validate_adduct(adduct, charge)?;
    let dictionary = resolve_dictionary(mass_dictionary)?;
    let mut compositions = Vec::with_capacity(glycans.len());
    for glycan in glycans {
        let composition = glycan.to_composition()?;
        validate_residues(&composition)?;
        compositions.push(composition);
    }
    Ok((compositions, dictionary))
}

fn resolve_dictionary(mass_dictionary: Option<&MassDictionary>) -> Result<MassDictionary> {
    match mass_dictionary {
        Some(dictionary) => {
            validate_mass_dictionary(dictionary)?;
            Ok(dictionary.clone())
        }
        None => Ok(mass_dict::mass_dictionary(
            Derivatization::None,
            MassType::Mono,
        )),
    }
}

fn validate_adduct(adduct: Adduct, charge: i32) -> Result<()> {
    // Charge zero takes the adduct out of the formula entirely
    if charge == 0 {
        return Ok(());
    }
    let compatible = if charge > 0 {
        adduct.is_positive()
    } else {
        !adduct.is_positive()
    };
    if compatible {
        Ok(())
    } else {
        Err(GlycoreError::InvalidAdduct { adduct, charge })
    }
}

fn validate_residues(composition: &GlycanComposition) -> Result<()> {
    let unsupported: Vec<String> = composition
        .counts
        .iter()
        .filter(|(residue, &count)| {
            count > 0 && !MONOSACCHARIDE_RESIDUES.contains(&residue.as_str())
        })
        .map(|(residue, _)| residue.clone())
        .sorted()
        .collect();

    if unsupported.is_empty() {
        Ok(())
    } else {
        Err(GlycoreError::UnsupportedResidue {
            residues: unsupported,
        })
    }
}

// Residues are summed in declared order, never in map iteration order, which
// keeps results bit identical across single, batch and parallel calls
fn neutral_mass(composition: &GlycanComposition, dictionary: &MassDictionary) -> f64 {
    let residue_mass: f64 = MONOSACCHARIDE_RESIDUES
        .iter()
        .map(|residue| dictionary[residue] * composition.count(residue) as f64)
        .sum();
    residue_mass + dictionary["red_end"]
}

fn mz_from_neutral(neutral: f64, charge: i32, adduct: Adduct, dictionary: &MassDictionary) -> f64 {
    if charge == 0 {
        return neutral;
    }
    let charge_count = charge.unsigned_abs() as f64;
    (neutral + dictionary[adduct.as_str()] * charge_count) / charge_count
}
