//! # generate 命令实现
//!
//! 批量调用 optool 生成 dust opacity 文件。
//!
//! ## 流程
//! - 校验全部参数（幔配对、分数范围、粒径、温度列表）
//! - 检查 optool 可用性
//! - 规划调用序列（逐温度解析 .lnk 文件）
//! - 顺序执行，单项失败不中断，最后汇总
//!
//! 所有配置错误在任何外部调用前报告；扫描有失败项时
//! 以 `ScanIncomplete` 结束，换取非零退出码。
//!
//! ## 依赖关系
//! - 使用 `cli/generate.rs` 定义的参数
//! - 使用 `models/`, `opac/`, `nk/`, `scan/`, `utils/output.rs`

use crate::cli::generate::GenerateArgs;
use crate::error::{OpacgenError, Result};
use crate::models::{material, GrainConfig, Mantle, RunConfig};
use crate::nk::NkLibrary;
use crate::opac::{plan_invocations, PlanOptions};
use crate::scan::{check_program, ScanRunner};
use crate::utils::output;

/// 执行 generate 命令
pub fn execute(args: GenerateArgs) -> Result<()> {
    output::print_header("Dust Opacity Generation");

    // 配置校验：失败必须发生在任何外部调用之前
    let mantle = Mantle::from_options(args.mantle_material.clone(), args.mantle_fraction)?;
    let grain = GrainConfig::new(&args.material, args.grain_size, mantle)?;

    let config = if args.no_temp_dependent {
        RunConfig::single(grain)
    } else {
        let temps = parse_temperature_list(&args.temperatures)?;
        RunConfig::temperature_scan(grain, &temps)?
    };

    let library = NkLibrary::new(&args.nk_dir)?;

    // 未知材料提示（不算错误，按内置材料透传）
    note_unknown_material(&config.grain.core_material);
    if let Some(ref m) = config.grain.mantle {
        note_unknown_material(&m.material);
    }

    if !args.dry_run && !check_program(&args.optool_exec) {
        output::print_info("See: https://github.com/cdominik/optool");
        return Err(OpacgenError::CommandNotFound {
            command: args.optool_exec,
        });
    }

    let runner = ScanRunner::new(&args.output_dir, args.dry_run);
    let specs = plan_invocations(
        &config,
        &library,
        &PlanOptions {
            program: &args.optool_exec,
            staging_dir: runner.staging_dir(),
        },
    )?;

    if config.temp_dependent {
        output::print_info(&format!(
            "Generating opacity files for {} temperatures, grain size {}um",
            specs.len(),
            config.grain.grain_size
        ));
    } else {
        output::print_info(&format!(
            "Generating a single opacity file, grain size {}um",
            config.grain.grain_size
        ));
    }
    if let Some(ref m) = config.grain.mantle {
        output::print_info(&format!(
            "Using mantle: {} ({:.1}% of core mass)",
            m.material,
            m.fraction * 100.0
        ));
    }

    let report = runner.run(&specs)?;

    if args.dry_run {
        output::print_done(&format!("Planned {} invocations (dry run)", specs.len()));
        return Ok(());
    }

    output::print_separator();
    for (name, reason) in &report.failures {
        output::print_error(&format!("{}: {}", name, reason));
    }
    output::print_done(&format!(
        "Successfully generated {}/{} files in {}",
        report.generated.len(),
        report.total(),
        args.output_dir.display()
    ));

    if report.all_succeeded() {
        Ok(())
    } else {
        Err(OpacgenError::ScanIncomplete {
            generated: report.generated.len(),
            total: report.total(),
        })
    }
}

/// 不在本地数据库中的材料只提示一次可用列表
fn note_unknown_material(name: &str) {
    if material::material_info(name).is_none() {
        output::print_info(&format!(
            "Material '{}' not in local database, will try as built-in optool material",
            name
        ));
        output::print_info(&format!(
            "Local materials available: {}",
            material::local_material_names()
        ));
    }
}

/// 解析逗号分隔的温度列表
fn parse_temperature_list(expr: &str) -> Result<Vec<f64>> {
    let mut temps = Vec::new();

    for chunk in expr.split(',') {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }
        let t: f64 = chunk
            .parse()
            .map_err(|_| OpacgenError::InvalidTemperatureList(expr.to_string()))?;
        temps.push(t);
    }

    if temps.is_empty() {
        return Err(OpacgenError::InvalidTemperatureList(expr.to_string()));
    }

    Ok(temps)
}
