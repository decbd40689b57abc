//! # 不透明度计算核心模块
//!
//! opacity 生成的领域逻辑：幔分数编码、输出文件名规则、
//! optool 调用序列规划。本模块只产生值，不执行外部程序。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 调用
//! - 使用 `models/`, `nk/`
//! - 子模块: encoding, planner

pub mod encoding;
pub mod planner;

pub use planner::{output_filename, plan_invocations, InvocationSpec, PlanOptions};
