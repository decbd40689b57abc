//! # materials 命令实现
//!
//! 列出本地材料数据库（名称、密度、组分、是否有本地 .lnk 文件），
//! 以及 nk 目录中数据库之外的 .lnk 文件。可按 glob 模式过滤，
//! 可导出为 CSV。
//!
//! ## 依赖关系
//! - 使用 `cli/materials.rs` 定义的参数
//! - 使用 `models/material.rs`, `nk/`, `utils/output.rs`
//! - 使用 `tabled` 渲染表格，`csv` 导出

use crate::cli::materials::MaterialsArgs;
use crate::error::{OpacgenError, Result};
use crate::models::material::LOCAL_MATERIALS;
use crate::nk::NkLibrary;
use crate::utils::output;

use serde::Serialize;
use std::path::Path;
use tabled::{Table, Tabled};

/// 数据库列表行（表格渲染与 CSV 导出共用）
#[derive(Debug, Clone, Tabled, Serialize)]
struct MaterialRow {
    #[tabled(rename = "Material")]
    #[serde(rename = "material")]
    name: String,
    #[tabled(rename = "Density (g/cm3)")]
    #[serde(rename = "density_g_cm3")]
    density: String,
    #[tabled(rename = "Composition")]
    #[serde(rename = "composition")]
    composition: String,
    #[tabled(rename = "Local .lnk")]
    #[serde(rename = "local_lnk")]
    local: String,
}

/// 执行 materials 命令
pub fn execute(args: MaterialsArgs) -> Result<()> {
    output::print_header("Material Database");

    let pattern = match args.pattern.as_deref() {
        Some(p) => Some(
            glob::Pattern::new(p)
                .map_err(|e| OpacgenError::InvalidArgument(format!("bad pattern '{}': {}", p, e)))?,
        ),
        None => None,
    };

    // nk 目录缺失时仅给出警告，表格的 Local 列显示 "-"
    let library = match NkLibrary::new(&args.nk_dir) {
        Ok(lib) => Some(lib),
        Err(e) => {
            output::print_warning(&format!("{}", e));
            None
        }
    };

    let rows: Vec<MaterialRow> = LOCAL_MATERIALS
        .iter()
        .filter(|m| pattern.as_ref().map(|p| p.matches(m.name)).unwrap_or(true))
        .map(|m| MaterialRow {
            name: m.name.to_string(),
            density: format!("{:.1}", m.density),
            composition: m.composition.to_string(),
            local: match library {
                Some(ref lib) if lib.contains(m.name) => "yes".to_string(),
                Some(_) => "no".to_string(),
                None => "-".to_string(),
            },
        })
        .collect();

    if rows.is_empty() {
        output::print_warning("No materials match the given pattern");
    } else {
        println!("{}", Table::new(&rows));
    }

    // 数据库之外的 .lnk 文件
    if let Some(ref lib) = library {
        let extras: Vec<String> = lib
            .lnk_files()
            .iter()
            .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(String::from))
            .filter(|stem| !LOCAL_MATERIALS.iter().any(|m| stem.starts_with(m.name)))
            .filter(|stem| pattern.as_ref().map(|p| p.matches(stem)).unwrap_or(true))
            .collect();

        if !extras.is_empty() {
            output::print_info(&format!(
                "Additional .lnk files in {}: {}",
                lib.dir().display(),
                extras.join(", ")
            ));
        }
    }

    output::print_info("For the full list of built-in optool materials, run: optool -c");

    if let Some(ref export_path) = args.export {
        export_csv(&rows, export_path)?;
        output::print_success(&format!("Exported {} rows to {}", rows.len(), export_path.display()));
    }

    Ok(())
}

/// 导出表格为 CSV
fn export_csv(rows: &[MaterialRow], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(OpacgenError::CsvError)?;

    // 表头由 serde 字段名生成
    for row in rows {
        wtr.serialize(row).map_err(OpacgenError::CsvError)?;
    }

    wtr.flush().map_err(|e| OpacgenError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_csv_writes_all_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("materials.csv");

        let rows = vec![
            MaterialRow {
                name: "E40R".to_string(),
                density: "3.1".to_string(),
                composition: "Mg(0.6)Fe(0.4)SiO3; Fe2+".to_string(),
                local: "yes".to_string(),
            },
            MaterialRow {
                name: "x035".to_string(),
                density: "2.7".to_string(),
                composition: "(0.65)MgO-(0.35)SiO2".to_string(),
                local: "no".to_string(),
            },
        ];

        export_csv(&rows, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "material,density_g_cm3,composition,local_lnk");
        assert!(lines[1].starts_with("E40R,3.1,"));
    }
}
