//! # 数据模型模块
//!
//! 定义尘埃颗粒配置和材料数据库。
//!
//! ## 依赖关系
//! - 被 `commands/`, `opac/`, `nk/` 模块使用
//! - 子模块: material, config

pub mod config;
pub mod material;

pub use config::{GrainConfig, Mantle, RunConfig};
pub use material::MaterialSource;
