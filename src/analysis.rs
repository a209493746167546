use crate::error::{CustomError, Result};
use crate::model::{Genotype, Profile, possible_offspring};
use indicatif::{ProgressBar, ProgressStyle};
use itertools::Itertools;
use std::collections::HashMap;
use std::fmt;

/// Below this many shared markers the panel is too thin for a dependable
/// verdict. The result is flagged, not rejected.
pub const LOW_PANEL_THRESHOLD: usize = 10;

/// Profiles keyed by the name they were registered under.
#[derive(Debug, Default)]
pub struct ProfileSet {
    profiles: HashMap<String, Profile>,
}

impl ProfileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, profile: Profile) {
        self.profiles.insert(profile.name().to_string(), profile);
    }

    /// Select the three profiles for one analysis. Every absent name is
    /// reported so the caller can fix all of them at once.
    pub fn trio(&self, mother: &str, father: &str, offspring: &str) -> Result<Trio<'_>> {
        let missing: Vec<&str> = [mother, father, offspring]
            .into_iter()
            .filter(|name| !self.profiles.contains_key(*name))
            .collect();
        if !missing.is_empty() {
            return Err(CustomError::MissingProfiles {
                names: missing.join(", "),
            });
        }
        Ok(Trio {
            mother: &self.profiles[mother],
            father: &self.profiles[father],
            offspring: &self.profiles[offspring],
        })
    }
}

/// The three profiles under test, borrowed from a [`ProfileSet`] for the
/// duration of one analysis.
#[derive(Debug)]
pub struct Trio<'a> {
    pub mother: &'a Profile,
    pub father: &'a Profile,
    pub offspring: &'a Profile,
}

impl Trio<'_> {
    /// Markers typed in all three profiles, sorted so repeated runs over the
    /// same input report markers in the same order.
    pub fn common_markers(&self) -> Vec<&str> {
        self.mother
            .marker_ids()
            .filter(|id| self.father.genotype(id).is_some() && self.offspring.genotype(id).is_some())
            .sorted()
            .collect()
    }
}

/// Decide whether the offspring genotype can be formed by drawing one allele
/// from each parent. The detail string lists the full possible set against
/// the observed genotype so exclusions can be audited later.
pub fn check_mendelian(
    mother: &Genotype,
    father: &Genotype,
    offspring: &Genotype,
) -> (bool, String) {
    let possible = possible_offspring(mother, father);
    let consistent = possible.contains(offspring);
    let detail = format!(
        "expected one of {{{}}}, got {}",
        possible.iter().join(", "),
        offspring
    );
    (consistent, detail)
}

/// One evaluated marker.
#[derive(Debug, Clone)]
pub struct MarkerResult {
    pub marker_id: String,
    pub mother: Genotype,
    pub father: Genotype,
    pub offspring: Genotype,
    pub consistent: bool,
    pub detail: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    VeryHigh,
    High,
    Moderate,
    Low,
}

impl Confidence {
    fn classify(consistent: usize, inconsistent: usize) -> Self {
        if inconsistent == 0 && consistent >= 20 {
            Confidence::VeryHigh
        } else if inconsistent <= 1 && consistent >= 15 {
            Confidence::High
        } else if inconsistent <= 2 && consistent >= 10 {
            Confidence::Moderate
        } else {
            Confidence::Low
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Confidence::VeryHigh => "Very High",
            Confidence::High => "High",
            Confidence::Moderate => "Moderate",
            Confidence::Low => "Low",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conclusion {
    Confirmed,
    Likely,
    Excluded,
    Inconclusive,
}

impl Conclusion {
    // Not the same cutoffs as Confidence::classify. The two ladders overlap
    // without matching; keep them separate.
    fn classify(consistent: usize, inconsistent: usize, testable: usize) -> (Self, String) {
        if inconsistent == 0 && consistent >= 15 {
            (
                Conclusion::Confirmed,
                format!("All {consistent} tested markers support the proposed parentage."),
            )
        } else if inconsistent <= 2 && consistent >= 10 {
            (
                Conclusion::Likely,
                format!("Only {inconsistent} exclusions found among {testable} markers."),
            )
        } else if inconsistent > consistent {
            (
                Conclusion::Excluded,
                format!(
                    "Too many exclusions ({inconsistent}) relative to consistent markers ({consistent})."
                ),
            )
        } else {
            (
                Conclusion::Inconclusive,
                "Results are ambiguous. Additional testing may be needed.".to_string(),
            )
        }
    }
}

impl fmt::Display for Conclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Conclusion::Confirmed => "Parentage Confirmed",
            Conclusion::Likely => "Parentage Likely",
            Conclusion::Excluded => "Parentage Excluded",
            Conclusion::Inconclusive => "Inconclusive",
        })
    }
}

/// Aggregate outcome of scoring one trio. Built in a single pass over the
/// common markers and immutable afterwards.
#[derive(Debug)]
pub struct AnalysisResult {
    pub total_common_markers: usize,
    pub testable_markers: usize,
    pub consistent_markers: usize,
    pub inconsistent_markers: usize,
    pub marker_results: Vec<MarkerResult>,
    pub exclusions: Vec<MarkerResult>,
    pub consistency_rate: f32,
    pub confidence: Confidence,
    pub conclusion: Conclusion,
    pub conclusion_detail: String,
    pub low_marker_panel: bool,
}

/// Score one trio. Selecting the trio is the only hard failure (see
/// [`ProfileSet::trio`]); data-quality problems inside a marker degrade into
/// the classification instead of erroring.
pub fn analyze(trio: &Trio<'_>) -> AnalysisResult {
    let common = trio.common_markers();

    let pb = ProgressBar::new(common.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:30} {pos}/{len} markers").unwrap(),
    );

    let mut marker_results = Vec::new();
    let mut testable = 0usize;
    let mut consistent_count = 0usize;
    let mut inconsistent_count = 0usize;

    for marker_id in &common {
        pb.inc(1);

        let mother = trio.mother.genotype(marker_id).and_then(Genotype::parse);
        let father = trio.father.genotype(marker_id).and_then(Genotype::parse);
        let offspring = trio.offspring.genotype(marker_id).and_then(Genotype::parse);

        // A marker without a usable genotype in all three profiles is not
        // testable; it still counts toward the common panel size.
        let (Some(mother), Some(father), Some(offspring)) = (mother, father, offspring) else {
            continue;
        };

        testable += 1;
        let (consistent, detail) = check_mendelian(&mother, &father, &offspring);
        if consistent {
            consistent_count += 1;
        } else {
            inconsistent_count += 1;
        }
        marker_results.push(MarkerResult {
            marker_id: (*marker_id).to_string(),
            mother,
            father,
            offspring,
            consistent,
            detail,
        });
    }
    pb.abandon();

    let exclusions: Vec<MarkerResult> = marker_results
        .iter()
        .filter(|r| !r.consistent)
        .cloned()
        .collect();
    let consistency_rate = if testable == 0 {
        0.0
    } else {
        consistent_count as f32 / testable as f32 * 100.0
    };
    let confidence = Confidence::classify(consistent_count, inconsistent_count);
    let (conclusion, conclusion_detail) =
        Conclusion::classify(consistent_count, inconsistent_count, testable);

    AnalysisResult {
        total_common_markers: common.len(),
        testable_markers: testable,
        consistent_markers: consistent_count,
        inconsistent_markers: inconsistent_count,
        marker_results,
        exclusions,
        consistency_rate,
        confidence,
        conclusion,
        conclusion_detail,
        low_marker_panel: common.len() < LOW_PANEL_THRESHOLD,
    }
}
