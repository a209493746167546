use std::collections::HashMap;
use std::path::Path;

use crate::error::{CustomError, Result};
use crate::model::Profile;

// Rows carry either MarkerID,Genotype or MarkerID,Location,Genotype; some
// panel exports include the location column, which is ignored here.
const MIN_FIELDS: usize = 2;
const MAX_FIELDS: usize = 3;

/// Load one individual's genotype table from a CSV file.
///
/// Fully-blank rows and a leading header row are skipped. Rows with a blank
/// marker id or genotype are dropped, so the returned profile only holds
/// entries the analysis can attempt to score. Any other field count is a
/// format error naming the offending line.
pub fn load_profile(path: &impl AsRef<Path>, name: &str) -> Result<Profile> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| CustomError::CsvRead {
            source,
            path: path.to_path_buf(),
        })?;

    let mut markers: HashMap<String, String> = HashMap::new();
    for (record_idx, result) in reader.records().enumerate() {
        let record = result.map_err(|source| CustomError::CsvRead {
            source,
            path: path.to_path_buf(),
        })?;

        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        if record.len() < MIN_FIELDS || record.len() > MAX_FIELDS {
            return Err(CustomError::ProfileFields {
                path: path.to_path_buf(),
                line_num: record_idx + 1,
                n_fields: record.len(),
            });
        }

        let marker_id = record[0].trim();
        let genotype = record[record.len() - 1].trim();

        if markers.is_empty() && marker_id.eq_ignore_ascii_case("markerid") {
            continue;
        }
        if marker_id.is_empty() || genotype.is_empty() {
            continue;
        }
        // Duplicate marker ids within one table: last row wins.
        markers.insert(marker_id.to_string(), genotype.to_string());
    }

    Ok(Profile::new(name, markers))
}
