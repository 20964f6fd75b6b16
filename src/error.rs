use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildcheckError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Workbook Error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("Report generation failed: {0}")]
    Report(String),

    #[error("Unknown building type '{0}'")]
    UnknownBuildingType(String),

    #[error("No assessment with id '{0}'")]
    RecordNotFound(String),

    #[error("Incomplete assessments: {}", .0.join(", "))]
    IncompleteRecords(Vec<String>),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type BcResult<T> = Result<T, BuildcheckError>;
