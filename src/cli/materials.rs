//! # materials 子命令 CLI 定义
//!
//! 材料数据库列表与导出的参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/materials.rs`

use clap::Args;
use std::path::PathBuf;

/// materials 子命令参数
#[derive(Args, Debug)]
pub struct MaterialsArgs {
    /// Directory with .lnk optical-constants files
    #[arg(long, default_value = "data/nk_files")]
    pub nk_dir: PathBuf,

    /// Glob pattern to filter material names (e.g. 'E*R')
    #[arg(long)]
    pub pattern: Option<String>,

    /// Export the table to a CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,
}
