//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `generate`: 批量生成 dust opacity 文件
//! - `materials`: 列出本地材料数据库与可用 .lnk 文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: generate, materials

pub mod generate;
pub mod materials;

use clap::{Parser, Subcommand};

/// opacgen - dust opacity 生成工具箱
#[derive(Parser)]
#[command(name = "opacgen")]
#[command(version)]
#[command(about = "Generate dust opacity files for radiative transfer simulations", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Run optool to generate dust opacity files (RADMC-3D format)
    Generate(generate::GenerateArgs),

    /// List the local material database and available .lnk files
    Materials(materials::MaterialsArgs),
}
