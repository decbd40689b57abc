//! # opacgen - dust opacity 生成工具箱
//!
//! 批量调用外部程序 optool，为辐射转移模拟（RADMC-3D）生成
//! 不同材料、粒径、温度组合下的 dust opacity 文件。
//!
//! ## 子命令
//! - `generate` - 规划并执行 optool 调用序列，产出 dustkappa_*.inp
//! - `materials` - 列出本地材料数据库与可用 .lnk 文件
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── models/   (颗粒配置与材料数据库)
//!   │     ├── opac/     (幔分数编码、文件名规则、调用规划)
//!   │     ├── nk/       (.lnk 光学常数文件查找)
//!   │     └── scan/     (顺序执行与汇总报告)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod nk;
mod opac;
mod scan;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
