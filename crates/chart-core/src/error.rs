// File: crates/chart-core/src/error.rs
// Summary: Error types for data-source access and rendering.

use std::path::PathBuf;

/// Failures while reading a measurement log.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("failed to open data source '{path}'")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read record {record} from data source")]
    Read {
        record: u64,
        #[source]
        source: csv::Error,
    },
}

/// Failures reported by a [`crate::Renderer`].
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: i32, height: i32 },
    #[error("failed to create raster surface")]
    Surface,
    #[error("failed to encode {0}")]
    Encode(&'static str),
    #[error("failed to write rendered image")]
    Io(#[from] std::io::Error),
}
