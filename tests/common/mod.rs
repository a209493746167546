use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

pub struct Dataset {
    pub mother: PathBuf,
    pub father: PathBuf,
    pub offspring: PathBuf,
    pub output_dir: PathBuf,
}

pub fn create_dataset(
    label: &str,
    mother_rows: &[(String, String)],
    father_rows: &[(String, String)],
    offspring_rows: &[(String, String)],
) -> io::Result<Dataset> {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    let base_dir = std::env::temp_dir().join("parentcheck-tests").join(format!(
        "{}-{}-{}",
        std::process::id(),
        id,
        label
    ));
    fs::create_dir_all(&base_dir)?;

    let mother = base_dir.join("Mother.csv");
    let father = base_dir.join("Father.csv");
    let offspring = base_dir.join("Offspring.csv");
    let output_dir = base_dir.join("output");

    write_profile(&mother, mother_rows)?;
    write_profile(&father, father_rows)?;
    write_profile(&offspring, offspring_rows)?;

    Ok(Dataset {
        mother,
        father,
        offspring,
        output_dir,
    })
}

fn write_profile(path: &Path, rows: &[(String, String)]) -> io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "MarkerID,Location,Genotype")?;
    for (marker, genotype) in rows {
        writeln!(file, "{marker},,{genotype}")?;
    }
    Ok(())
}

pub fn rows(entries: &[(&str, &str)]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|(marker, genotype)| (marker.to_string(), genotype.to_string()))
        .collect()
}

pub fn uniform_rows(prefix: &str, n: usize, genotype: &str) -> Vec<(String, String)> {
    (1..=n)
        .map(|i| (format!("{prefix}{i:02}"), genotype.to_string()))
        .collect()
}
