//! # 调用序列规划器
//!
//! 由扫描配置生成有序的 optool 调用规格列表：每个规格包含
//! 完整参数和期望的输出文件名。所有校验与解析在产出任何
//! 规格前完成（fail-fast），本模块不执行外部程序。
//!
//! ## 文件名契约
//! `dustkappa_{material}[_m{mantle}_{fraction}][_{T}K]_a{size}.inp`
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 调用
//! - 使用 `models/`, `nk/`, `opac/encoding.rs`
//! - 结果交由 `scan/runner.rs` 执行

use crate::error::Result;
use crate::models::{Mantle, MaterialSource, RunConfig};
use crate::nk::NkLibrary;
use crate::opac::encoding::format_mantle_fraction;
use crate::utils::output;

use regex::Regex;
use std::path::Path;

/// 单次 optool 调用规格：产出一次，执行一次，即弃
#[derive(Debug, Clone)]
pub struct InvocationSpec {
    /// 外部程序名
    pub program: String,
    /// 有序参数列表
    pub args: Vec<String>,
    /// 期望的输出文件名
    pub output_name: String,
    /// 对应的温度（温度无关模式为 None）
    pub temperature: Option<f64>,
}

impl InvocationSpec {
    /// 完整命令行（用于 dry-run 展示）
    pub fn command_line(&self) -> String {
        format!("{} {}", self.program, self.args.join(" "))
    }
}

/// 规划选项
pub struct PlanOptions<'a> {
    /// optool 可执行文件名
    pub program: &'a str,
    /// optool 原始输出的暂存目录
    pub staging_dir: &'a Path,
}

/// 生成调用序列
///
/// 温度相关模式下每个不同温度一个规格；否则恰好一个无温度
/// 参数的规格。核与幔材料逐温度解析（温度特定 .lnk 优先），
/// 未命中的名称按 optool 内置材料透传。
pub fn plan_invocations(
    config: &RunConfig,
    library: &NkLibrary,
    opts: &PlanOptions,
) -> Result<Vec<InvocationSpec>> {
    let temps: Vec<Option<f64>> = if config.temp_dependent {
        config.temperatures.iter().map(|&t| Some(t)).collect()
    } else {
        vec![None]
    };

    let mut specs = Vec::with_capacity(temps.len());

    for temp in temps {
        let core = resolve_source(library, &config.grain.core_material, temp, "core");

        let mut args = vec![
            core.to_arg(),
            "-radmc".to_string(),
            "-a".to_string(),
            config.grain.grain_size.to_string(),
            "-o".to_string(),
            opts.staging_dir.display().to_string(),
        ];

        if let Some(ref mantle) = config.grain.mantle {
            let mantle_source = resolve_source(library, &mantle.material, temp, "mantle");
            args.push("-m".to_string());
            args.push(mantle_source.to_arg());
            args.push(mantle.fraction.to_string());
        }

        specs.push(InvocationSpec {
            program: opts.program.to_string(),
            args,
            output_name: output_filename(
                &config.grain.core_material,
                config.grain.mantle.as_ref(),
                temp,
                config.grain.grain_size,
            ),
            temperature: temp,
        });
    }

    Ok(specs)
}

/// 解析材料来源，未命中时透传为内置材料名
fn resolve_source(
    library: &NkLibrary,
    material: &str,
    temperature: Option<f64>,
    role: &str,
) -> MaterialSource {
    match library.resolve(material, temperature) {
        Some(m) => {
            if !m.exact {
                if let Some(temp) = temperature {
                    output::print_warning(&format!(
                        "Using {} which may not match {}K exactly",
                        m.path.display(),
                        temp
                    ));
                }
            }
            MaterialSource::Local(m.path)
        }
        None => {
            output::print_info(&format!(
                "Using built-in optool material for {}: {}",
                role, material
            ));
            MaterialSource::Builtin(material.to_string())
        }
    }
}

/// 构造确定性的输出文件名
///
/// 材料名尾部的 `_<T>K` 先剥离，避免温度段重复出现。
pub fn output_filename(
    core_material: &str,
    mantle: Option<&Mantle>,
    temperature: Option<f64>,
    grain_size: f64,
) -> String {
    let base = Regex::new(r"_\d+K$")
        .unwrap()
        .replace(core_material, "")
        .into_owned();

    let mantle_segment = match mantle {
        Some(m) => format!("_m{}_{}", m.material, format_mantle_fraction(m.fraction)),
        None => String::new(),
    };

    match temperature {
        Some(temp) => format!(
            "dustkappa_{}{}_{}K_a{}.inp",
            base, mantle_segment, temp, grain_size
        ),
        None => format!("dustkappa_{}{}_a{}.inp", base, mantle_segment, grain_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GrainConfig, RunConfig};
    use std::fs;

    fn library_with(files: &[&str]) -> (tempfile::TempDir, NkLibrary) {
        let dir = tempfile::tempdir().unwrap();
        for name in files {
            fs::write(dir.path().join(name), "0.1 1.0 0.01\n").unwrap();
        }
        let library = NkLibrary::new(dir.path()).unwrap();
        (dir, library)
    }

    fn plan(config: &RunConfig, library: &NkLibrary) -> Vec<InvocationSpec> {
        let staging = Path::new("out/.optool_staging");
        plan_invocations(
            config,
            library,
            &PlanOptions {
                program: "optool",
                staging_dir: staging,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_temperature_scan_filenames() {
        let (_dir, library) = library_with(&["E40R.lnk"]);
        let grain = GrainConfig::new("E40R", 0.3, None).unwrap();
        let config =
            RunConfig::temperature_scan(grain, &[10.0, 100.0, 200.0, 300.0]).unwrap();

        let specs = plan(&config, &library);
        assert_eq!(specs.len(), 4);

        let names: Vec<_> = specs.iter().map(|s| s.output_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "dustkappa_E40R_10K_a0.3.inp",
                "dustkappa_E40R_100K_a0.3.inp",
                "dustkappa_E40R_200K_a0.3.inp",
                "dustkappa_E40R_300K_a0.3.inp",
            ]
        );
    }

    #[test]
    fn test_mantle_scenario_filename() {
        let (_dir, library) = library_with(&["E40R.lnk", "x035.lnk"]);
        let mantle = Mantle::new("x035", 0.2).unwrap();
        let grain = GrainConfig::new("E40R", 0.3, Some(mantle)).unwrap();
        let config = RunConfig::temperature_scan(grain, &[100.0]).unwrap();

        let specs = plan(&config, &library);
        assert_eq!(specs.len(), 1);
        assert_eq!(
            specs[0].output_name,
            "dustkappa_E40R_mx035_2e-01_100K_a0.3.inp"
        );
    }

    #[test]
    fn test_single_mode_omits_temperature_segment() {
        let (_dir, library) = library_with(&["E40R.lnk"]);
        let grain = GrainConfig::new("E40R", 0.3, None).unwrap();
        let config = RunConfig::single(grain);

        let specs = plan(&config, &library);
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].output_name, "dustkappa_E40R_a0.3.inp");
        assert!(specs[0].temperature.is_none());
    }

    #[test]
    fn test_argument_derivation() {
        let (_dir, library) = library_with(&["E40R.lnk"]);
        let mantle = Mantle::new("h2o", 0.3).unwrap();
        let grain = GrainConfig::new("E40R", 0.5, Some(mantle)).unwrap();
        let config = RunConfig::temperature_scan(grain, &[100.0]).unwrap();

        let specs = plan(&config, &library);
        let args = &specs[0].args;

        // 核材料解析到本地文件，幔材料透传为内置名
        assert!(args[0].ends_with("E40R.lnk"));
        assert_eq!(args[1], "-radmc");
        assert_eq!(args[2], "-a");
        assert_eq!(args[3], "0.5");
        assert_eq!(args[4], "-o");
        let tail = &args[args.len() - 3..];
        assert_eq!(tail, &["-m".to_string(), "h2o".to_string(), "0.3".to_string()]);
    }

    #[test]
    fn test_temperature_specific_lnk_preferred_per_item() {
        let (_dir, library) = library_with(&["E40R.lnk", "E40R_100K.lnk"]);
        let grain = GrainConfig::new("E40R", 0.3, None).unwrap();
        let config = RunConfig::temperature_scan(grain, &[100.0, 200.0]).unwrap();

        let specs = plan(&config, &library);
        assert!(specs[0].args[0].ends_with("E40R_100K.lnk"));
        assert!(specs[1].args[0].ends_with("E40R.lnk"));
    }

    #[test]
    fn test_temperature_suffix_stripped_from_base_name() {
        // 温度特定材料名不会在文件名里重复 K 段
        assert_eq!(
            output_filename("E40R_100K", None, Some(100.0), 0.3),
            "dustkappa_E40R_100K_a0.3.inp"
        );
    }

    #[test]
    fn test_filenames_unique_within_run() {
        let (_dir, library) = library_with(&["E40R.lnk"]);
        let grain = GrainConfig::new("E40R", 0.3, None).unwrap();
        let config =
            RunConfig::temperature_scan(grain, &[10.0, 100.0, 200.0, 300.0]).unwrap();

        let specs = plan(&config, &library);
        let mut names: Vec<_> = specs.iter().map(|s| s.output_name.clone()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), specs.len());
    }

    #[test]
    fn test_filename_injective_over_inputs() {
        let mantle = Mantle::new("x035", 0.2).unwrap();
        let variants = [
            output_filename("E40R", None, Some(100.0), 0.3),
            output_filename("E40R", Some(&mantle), Some(100.0), 0.3),
            output_filename("E40R", None, Some(200.0), 0.3),
            output_filename("E40R", None, Some(100.0), 0.5),
            output_filename("E20R", None, Some(100.0), 0.3),
            output_filename("E40R", None, None, 0.3),
        ];
        let mut unique: Vec<_> = variants.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), variants.len());
    }
}
