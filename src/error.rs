//! # 统一错误处理模块
//!
//! 定义 opacgen 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 配置错误：参数缺失 / 不一致 / 超出范围，在任何外部调用前报告
//! - 解析错误：光学常数目录缺失或不可读
//! - 执行错误：optool 不存在或单项调用失败
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// opacgen 统一错误类型
#[derive(Error, Debug)]
pub enum OpacgenError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 配置错误（在任何外部调用前触发）
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid temperature list '{0}': expected comma-separated positive values")]
    InvalidTemperatureList(String),

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    /// 扫描结束后仍有失败项（用于非零退出码）
    #[error("Scan incomplete: {generated}/{total} opacity files generated")]
    ScanIncomplete { generated: usize, total: usize },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, OpacgenError>;
