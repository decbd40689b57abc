//! # 材料数据库模型
//!
//! 本地材料数据库（名称、密度、组分）以及材料来源的表示。
//! 数据库之外的名称按 optool 内置材料透传（完整列表见 `optool -c`）。
//!
//! ## 依赖关系
//! - 被 `commands/materials.rs` 用于列表和导出
//! - 被 `commands/generate.rs` 用于未知材料提示
//! - `MaterialSource` 被 `opac/planner.rs` 使用

use std::path::PathBuf;

/// 本地材料条目：名称、密度 (g/cm³)、组分说明
#[derive(Debug, Clone)]
pub struct MaterialInfo {
    pub name: &'static str,
    pub density: f64,
    pub composition: &'static str,
}

/// 本地材料数据库
///
/// MgO-SiO2 系列 (x...) 与 Mg-Fe-SiO3 系列 (E...)；R 后缀表示 Fe²⁺。
pub const LOCAL_MATERIALS: &[MaterialInfo] = &[
    MaterialInfo { name: "x035", density: 2.7, composition: "(0.65)MgO-(0.35)SiO2" },
    MaterialInfo { name: "x040", density: 2.7, composition: "(0.60)MgO-(0.40)SiO2" },
    MaterialInfo { name: "x050A", density: 2.7, composition: "(0.50)MgO-(0.50)SiO2 structure A" },
    MaterialInfo { name: "x050B", density: 2.7, composition: "(0.50)MgO-(0.50)SiO2 structure B" },
    MaterialInfo { name: "E10", density: 2.8, composition: "Mg(0.9)Fe(0.1)SiO3; Fe3+" },
    MaterialInfo { name: "E10R", density: 2.8, composition: "Mg(0.9)Fe(0.1)SiO3; Fe2+" },
    MaterialInfo { name: "E20", density: 2.9, composition: "Mg(0.8)Fe(0.2)SiO3; Fe3+" },
    MaterialInfo { name: "E20R", density: 2.9, composition: "Mg(0.8)Fe(0.2)SiO3; Fe2+" },
    MaterialInfo { name: "E30", density: 3.0, composition: "Mg(0.7)Fe(0.3)SiO3; Fe3+" },
    MaterialInfo { name: "E30R", density: 3.0, composition: "Mg(0.7)Fe(0.3)SiO3; Fe2+" },
    MaterialInfo { name: "E40", density: 3.1, composition: "Mg(0.6)Fe(0.4)SiO3; Fe3+" },
    MaterialInfo { name: "E40R", density: 3.1, composition: "Mg(0.6)Fe(0.4)SiO3; Fe2+" },
];

/// 查询本地材料数据库
pub fn material_info(name: &str) -> Option<&'static MaterialInfo> {
    LOCAL_MATERIALS.iter().find(|m| m.name == name)
}

/// 本地材料名称列表（用于提示信息）
pub fn local_material_names() -> String {
    LOCAL_MATERIALS
        .iter()
        .map(|m| m.name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// 材料来源：本地 .lnk 文件或 optool 内置材料名
///
/// 解析完成后不再变更，直接作为 optool 命令行参数。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterialSource {
    /// 本地光学常数文件
    Local(PathBuf),
    /// optool 内置材料，名称原样透传
    Builtin(String),
}

impl MaterialSource {
    /// 转为 optool 命令行参数
    pub fn to_arg(&self) -> String {
        match self {
            MaterialSource::Local(path) => path.display().to_string(),
            MaterialSource::Builtin(name) => name.clone(),
        }
    }
}
