use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetScanError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Output folder not found: {0}")]
    OutputDirNotFound(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export error: {0}")]
    Export(#[from] asset_scan_common::ExportError),
}

pub type Result<T> = std::result::Result<T, AssetScanError>;
