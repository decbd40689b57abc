//! # 颗粒与扫描配置模型
//!
//! 尘埃颗粒参数（核、幔、粒径）和一次扫描的完整配置。
//! 所有校验在构造时完成，规划与执行阶段不再出现配置错误。
//!
//! ## 不变量
//! - 幔材料与幔质量分数同时存在（合并在 `Mantle` 中，以 `Option` 携带）
//! - 粒径与温度均为正值，温度列表去重且保持输入顺序
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 构造
//! - 被 `opac/planner.rs` 消费

use crate::error::{OpacgenError, Result};

/// 幔层配置：材料名 + 相对核质量的分数，二者不可分离
#[derive(Debug, Clone, PartialEq)]
pub struct Mantle {
    pub material: String,
    pub fraction: f64,
}

impl Mantle {
    /// 创建幔层配置，校验名称非空、分数在 (0, 1]
    pub fn new(material: impl Into<String>, fraction: f64) -> Result<Self> {
        let material = material.into();
        if material.trim().is_empty() {
            return Err(OpacgenError::InvalidArgument(
                "mantle material must not be empty".to_string(),
            ));
        }
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(OpacgenError::InvalidArgument(format!(
                "mantle fraction must be in (0, 1], got {}",
                fraction
            )));
        }
        Ok(Mantle { material, fraction })
    }

    /// 由两个可选参数构造：必须同时给出或同时省略
    pub fn from_options(material: Option<String>, fraction: Option<f64>) -> Result<Option<Self>> {
        match (material, fraction) {
            (Some(m), Some(f)) => Ok(Some(Mantle::new(m, f)?)),
            (None, None) => Ok(None),
            (Some(_), None) => Err(OpacgenError::InvalidArgument(
                "--mantle-fraction is required when --mantle-material is specified".to_string(),
            )),
            (None, Some(_)) => Err(OpacgenError::InvalidArgument(
                "--mantle-material is required when --mantle-fraction is specified".to_string(),
            )),
        }
    }
}

/// 单个尘埃颗粒的配置
#[derive(Debug, Clone)]
pub struct GrainConfig {
    /// 核材料名称
    pub core_material: String,
    /// 粒径 (微米)
    pub grain_size: f64,
    /// 可选幔层
    pub mantle: Option<Mantle>,
}

impl GrainConfig {
    pub fn new(
        core_material: impl Into<String>,
        grain_size: f64,
        mantle: Option<Mantle>,
    ) -> Result<Self> {
        let core_material = core_material.into();
        if core_material.trim().is_empty() {
            return Err(OpacgenError::InvalidArgument(
                "core material must not be empty".to_string(),
            ));
        }
        if !(grain_size > 0.0) {
            return Err(OpacgenError::InvalidArgument(format!(
                "grain size must be positive, got {}",
                grain_size
            )));
        }
        Ok(GrainConfig {
            core_material,
            grain_size,
            mantle,
        })
    }
}

/// 一次完整扫描的配置
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub grain: GrainConfig,
    /// 去重后的温度列表 (K)，保持输入顺序
    pub temperatures: Vec<f64>,
    /// false 时只生成单个无温度后缀的文件
    pub temp_dependent: bool,
}

impl RunConfig {
    /// 温度相关模式：每个温度各生成一个 opacity 文件
    pub fn temperature_scan(grain: GrainConfig, temperatures: &[f64]) -> Result<Self> {
        if temperatures.is_empty() {
            return Err(OpacgenError::InvalidArgument(
                "temperature list must not be empty".to_string(),
            ));
        }

        let mut distinct: Vec<f64> = Vec::with_capacity(temperatures.len());
        for &t in temperatures {
            if !(t > 0.0) {
                return Err(OpacgenError::InvalidArgument(format!(
                    "temperature must be positive, got {}",
                    t
                )));
            }
            if !distinct.iter().any(|&seen| seen == t) {
                distinct.push(t);
            }
        }

        Ok(RunConfig {
            grain,
            temperatures: distinct,
            temp_dependent: true,
        })
    }

    /// 温度无关模式：仅一次调用，文件名省略温度段
    pub fn single(grain: GrainConfig) -> Self {
        RunConfig {
            grain,
            temperatures: Vec::new(),
            temp_dependent: false,
        }
    }
}
