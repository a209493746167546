use crate::analysis::AnalysisResult;
use crate::error::{CustomError, Result};
use serde_json::json;
use std::fs::File;
use std::path::Path;

const MAX_PRINTED_EXCLUSIONS: usize = 5;

pub fn print_summary(result: &AnalysisResult) {
    println!("Analysis results:");
    println!("  Total common markers: {}", result.total_common_markers);
    println!("  Testable markers    : {}", result.testable_markers);
    println!("  Consistent          : {}", result.consistent_markers);
    println!("  Inconsistent        : {}", result.inconsistent_markers);
    println!("  Consistency rate    : {:.1}%", result.consistency_rate);
    println!("  Confidence level    : {}", result.confidence);
    println!();
    println!("{}", result.conclusion);
    println!("{}", result.conclusion_detail);

    if !result.exclusions.is_empty() {
        println!();
        println!("Exclusions ({} markers):", result.exclusions.len());
        for marker in result.exclusions.iter().take(MAX_PRINTED_EXCLUSIONS) {
            println!(
                "  {}: mother {}, father {}, offspring {} ({})",
                marker.marker_id, marker.mother, marker.father, marker.offspring, marker.detail
            );
        }
        if result.exclusions.len() > MAX_PRINTED_EXCLUSIONS {
            println!(
                "  ... and {} more",
                result.exclusions.len() - MAX_PRINTED_EXCLUSIONS
            );
        }
    }
}

pub fn write_summary(result: &AnalysisResult, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["Metric", "Value"])?;
    wtr.write_record([
        "Total Common Markers",
        result.total_common_markers.to_string().as_str(),
    ])?;
    wtr.write_record([
        "Testable Markers",
        result.testable_markers.to_string().as_str(),
    ])?;
    wtr.write_record([
        "Consistent Markers",
        result.consistent_markers.to_string().as_str(),
    ])?;
    wtr.write_record([
        "Inconsistent Markers",
        result.inconsistent_markers.to_string().as_str(),
    ])?;
    wtr.write_record([
        "Consistency Rate (%)",
        format!("{:.1}%", result.consistency_rate).as_str(),
    ])?;
    wtr.write_record(["Confidence Level", result.confidence.to_string().as_str()])?;
    wtr.flush().map_err(|e| CustomError::Write {
        source: e,
        path: path.to_path_buf(),
    })?;
    Ok(())
}

pub fn write_marker_details(result: &AnalysisResult, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record([
        "Marker_ID",
        "Mother_Genotype",
        "Father_Genotype",
        "Offspring_Genotype",
        "Consistent",
        "Details",
    ])?;
    for marker in &result.marker_results {
        wtr.write_record([
            marker.marker_id.as_str(),
            marker.mother.to_string().as_str(),
            marker.father.to_string().as_str(),
            marker.offspring.to_string().as_str(),
            if marker.consistent { "true" } else { "false" },
            marker.detail.as_str(),
        ])?;
    }
    wtr.flush().map_err(|e| CustomError::Write {
        source: e,
        path: path.to_path_buf(),
    })?;
    Ok(())
}

pub fn write_exclusions(result: &AnalysisResult, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record([
        "Marker_ID",
        "Mother_Genotype",
        "Father_Genotype",
        "Offspring_Genotype",
        "Issue",
    ])?;
    for marker in &result.exclusions {
        wtr.write_record([
            marker.marker_id.as_str(),
            marker.mother.to_string().as_str(),
            marker.father.to_string().as_str(),
            marker.offspring.to_string().as_str(),
            marker.detail.as_str(),
        ])?;
    }
    wtr.flush().map_err(|e| CustomError::Write {
        source: e,
        path: path.to_path_buf(),
    })?;
    Ok(())
}

/// Machine-readable counterpart of the summary sheet.
pub fn write_summary_json(result: &AnalysisResult, path: &Path) -> Result<()> {
    let summary = json!({
        "total_common_markers": result.total_common_markers,
        "testable_markers": result.testable_markers,
        "consistent_markers": result.consistent_markers,
        "inconsistent_markers": result.inconsistent_markers,
        "consistency_rate": result.consistency_rate,
        "confidence_level": result.confidence.to_string(),
        "conclusion": result.conclusion.to_string(),
        "explanation": result.conclusion_detail,
        "low_marker_panel": result.low_marker_panel,
        "exclusions": result
            .exclusions
            .iter()
            .map(|m| m.marker_id.as_str())
            .collect::<Vec<_>>(),
    });
    let file = File::create(path).map_err(|e| CustomError::Write {
        source: e,
        path: path.to_path_buf(),
    })?;
    serde_json::to_writer_pretty(file, &summary)?;
    Ok(())
}
