//! # 扫描执行模块
//!
//! 顺序执行规划好的 optool 调用序列。
//!
//! ## 功能
//! - 逐项同步执行，单项失败不中断剩余扫描
//! - 进度条显示
//! - 结果收集与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 调用
//! - 使用 `opac/planner.rs` 的 InvocationSpec
//! - 子模块: runner

pub mod runner;

pub use runner::{check_program, ScanOutcome, ScanReport, ScanRunner};
