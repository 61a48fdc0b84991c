//! # 统一错误处理模块
//!
//! 定义 potentials 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// potentials 统一错误类型
#[derive(Error, Debug)]
pub enum PotentialsError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
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

    #[error("Directory not found: {path}\nHint: set --local-dir or POTENTIALS_LOCAL_DIR to your record library")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 数据模型解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {style} record: {path}\nReason: {reason}")]
    ParseError {
        style: String,
        path: String,
        reason: String,
    },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Atom entry in '{record}' is missing '{field}' (required when element is not listed)")]
    MissingAtomField { record: String, field: String },

    // ─────────────────────────────────────────────────────────────
    // 数据库查询错误
    // ─────────────────────────────────────────────────────────────
    #[error("Remote database access is not supported; use a local record library")]
    RemoteUnsupported,

    #[error("No {style} record matches the given filters")]
    NoMatchingRecord { style: String },

    #[error("{count} {style} records match the given filters; narrow the query (e.g. --select ID)")]
    MultipleMatchingRecords { style: String, count: usize },

    #[error("Record already exists: {path} (use --overwrite to replace)")]
    RecordExists { path: String },

    // ─────────────────────────────────────────────────────────────
    // LAMMPS 命令生成错误
    // ─────────────────────────────────────────────────────────────
    #[error("Symbol '{symbol}' is not defined by potential '{potential}'")]
    UnknownSymbol { symbol: String, potential: String },

    #[error("No standard atomic mass for '{element}'; supply an explicit mass")]
    MassUnavailable { element: String },

    #[error("Supplied masses ({masses}) must be the same length as symbols ({symbols})")]
    MassCountMismatch { masses: usize, symbols: usize },

    #[error("Invalid pair_coeff in '{potential}': {reason}")]
    PairCoeffMismatch { potential: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, PotentialsError>;
