//! # 统一错误处理模块
//!
//! 定义 irpeaks 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// irpeaks 统一错误类型
#[derive(Error, Debug)]
pub enum IrError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 数据错误
    // ─────────────────────────────────────────────────────────────
    #[error("Malformed spectrum data in {path}\nReason: {reason}")]
    DataFormat { path: String, reason: String },

    #[error("Degenerate spectrum: {reason}")]
    DegenerateInput { reason: String },

    #[error("Transmittance {value} is outside the 0-100 range")]
    OutOfRange { value: f64 },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid threshold '{name}': {value} (must be a finite, non-negative number)")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid file pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("No valid files to process. Exiting...")]
    NoFilesFound,

    #[error("Plot rendering failed: {0}")]
    PlotError(String),
}

impl IrError {
    /// 构造不带文件路径的数据格式错误
    pub fn data_format(reason: impl Into<String>) -> Self {
        IrError::DataFormat {
            path: "<memory>".to_string(),
            reason: reason.into(),
        }
    }

    /// 为数据格式错误补充来源路径
    pub fn with_path(self, path: &str) -> Self {
        match self {
            IrError::DataFormat { reason, .. } => IrError::DataFormat {
                path: path.to_string(),
                reason,
            },
            other => other,
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, IrError>;
