//! # generate 子命令 CLI 定义
//!
//! 批量调用 optool 生成 opacity 文件的参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/generate.rs`

use clap::Args;
use std::path::PathBuf;

/// generate 子命令参数
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Dust material for the core. Local materials resolve to .lnk files
    /// in --nk-dir; other names are passed through as built-in optool
    /// materials (run 'optool -c' for the full list)
    #[arg(long, default_value = "E40R")]
    pub material: String,

    /// Grain size in microns
    #[arg(long, default_value_t = 0.3)]
    pub grain_size: f64,

    /// Comma-separated temperatures in K
    #[arg(long, default_value = "10,100,200,300")]
    pub temperatures: String,

    /// Directory with .lnk optical-constants files
    #[arg(long, default_value = "data/nk_files")]
    pub nk_dir: PathBuf,

    /// Output directory for the generated dustkappa files
    #[arg(long, default_value = "radmc3d_model")]
    pub output_dir: PathBuf,

    /// Generate a single file without temperature dependency
    #[arg(long, default_value_t = false)]
    pub no_temp_dependent: bool,

    // ─────────────────────────────────────────────────────────────
    // Mantle options
    // ─────────────────────────────────────────────────────────────
    /// Mantle material (optional; requires --mantle-fraction)
    #[arg(long)]
    pub mantle_material: Option<String>,

    /// Mantle mass fraction relative to core mass, in (0, 1]
    #[arg(long)]
    pub mantle_fraction: Option<f64>,

    // ─────────────────────────────────────────────────────────────
    // Execution control
    // ─────────────────────────────────────────────────────────────
    /// optool executable name
    #[arg(long, default_value = "optool")]
    pub optool_exec: String,

    /// Print the planned optool commands without executing them
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
