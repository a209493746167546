use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("could not read {path} as CSV")]
    CsvRead {
        #[source]
        source: csv::Error,
        path: std::path::PathBuf,
    },

    #[error("could not create output directory")]
    OutputDir {
        #[source]
        source: std::io::Error,
    },

    #[error("could not write to {path}")]
    Write {
        #[source]
        source: std::io::Error,
        path: std::path::PathBuf,
    },

    #[error("could not write to CSV")]
    CsvWrite(#[from] csv::Error),

    #[error("could not write JSON summary")]
    Json(#[from] serde_json::Error),

    #[error("expected 2 or 3 fields (got {n_fields}) in line {line_num} of {path}")]
    ProfileFields {
        path: std::path::PathBuf,
        line_num: usize,
        n_fields: usize,
    },

    #[error("missing profile(s): {names} (mother, father, and offspring must all be loaded)")]
    MissingProfiles { names: String },
}

pub type Result<T> = std::result::Result<T, CustomError>;
