use crate::Args;
use crate::analysis::{self, ProfileSet};
use crate::error::Result;
use crate::output::{
    print_summary, write_exclusions, write_marker_details, write_summary, write_summary_json,
};
use crate::reader::load_profile;
use std::path::{Path, PathBuf};

pub const MOTHER: &str = "Mother";
pub const FATHER: &str = "Father";
pub const OFFSPRING: &str = "Offspring";

#[derive(Debug, Clone)]
pub struct InputSpec {
    mother: PathBuf,
    father: PathBuf,
    offspring: PathBuf,
    output_dir: PathBuf,
}

impl InputSpec {
    pub fn print_paths(&self) {
        println!("MOTHER   : {}", self.mother.display());
        println!("FATHER   : {}", self.father.display());
        println!("OFFSPRING: {}", self.offspring.display());
        println!();
    }

    pub fn load_profiles(&self) -> Result<ProfileSet> {
        let mut profiles = ProfileSet::new();
        for (name, path) in [
            (MOTHER, &self.mother),
            (FATHER, &self.father),
            (OFFSPRING, &self.offspring),
        ] {
            let profile = load_profile(path, name)?;
            println!(
                "Loaded {}: {} markers from {}",
                name,
                profile.n_markers(),
                path.display()
            );
            profiles.register(profile);
        }
        println!();
        Ok(profiles)
    }

    pub fn output_dir(&self) -> &Path {
        self.output_dir.as_path()
    }
}

pub fn build_input_spec(args: &Args) -> InputSpec {
    InputSpec {
        mother: PathBuf::from(&args.mother),
        father: PathBuf::from(&args.father),
        offspring: PathBuf::from(&args.offspring),
        output_dir: PathBuf::from(&args.output_directory),
    }
}

pub fn run(profiles: &ProfileSet, output_dir: impl AsRef<Path>) -> Result<()> {
    let trio = profiles.trio(MOTHER, FATHER, OFFSPRING)?;
    println!(
        "Analyzing: {} + {} -> {}",
        trio.mother.name(),
        trio.father.name(),
        trio.offspring.name()
    );

    let result = analysis::analyze(&trio);
    if result.low_marker_panel {
        println!(
            "WARNING: only {} common markers found; the shared panel may be too small for a reliable call",
            result.total_common_markers
        );
    }
    println!();
    print_summary(&result);
    println!();

    let summary_path = output_dir.as_ref().join("summary.csv");
    println!("Writing summary to {}...", summary_path.display());
    write_summary(&result, &summary_path)?;

    let json_path = output_dir.as_ref().join("analysis.json");
    println!("Writing JSON summary to {}...", json_path.display());
    write_summary_json(&result, &json_path)?;

    if !result.marker_results.is_empty() {
        let details_path = output_dir.as_ref().join("marker_details.csv");
        println!("Writing marker details to {}...", details_path.display());
        write_marker_details(&result, &details_path)?;
    }

    if !result.exclusions.is_empty() {
        let exclusions_path = output_dir.as_ref().join("exclusions.csv");
        println!("Writing exclusions to {}...", exclusions_path.display());
        write_exclusions(&result, &exclusions_path)?;
    }

    Ok(())
}
