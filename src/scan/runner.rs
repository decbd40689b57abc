//! # 顺序扫描执行器
//!
//! 按列表顺序逐项执行 InvocationSpec：调用 optool 写入暂存目录，
//! 成功后把 `dustkappa.inp` 移动到最终文件名。单项失败（退出码
//! 非零、暂存文件缺失、进程启动失败）记录后继续下一项，整个扫描
//! 折叠为一份逐项结果的汇总报告。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `std::process::Command` 调用外部程序

use crate::error::{OpacgenError, Result};
use crate::opac::InvocationSpec;
use crate::utils::{output, progress};

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// optool 在暂存目录中写出的固定文件名
const STAGED_OUTPUT: &str = "dustkappa.inp";

/// 单项执行结果
#[derive(Debug, Clone)]
pub enum ScanOutcome {
    /// 成功生成（最终文件名）
    Generated(String),
    /// 失败（文件名, 原因）
    Failed(String, String),
}

/// 扫描汇总报告
#[derive(Debug, Default)]
pub struct ScanReport {
    /// 成功生成的文件名
    pub generated: Vec<String>,
    /// 失败详情 (文件名, 原因)
    pub failures: Vec<(String, String)>,
}

impl ScanReport {
    /// 合并单项结果
    pub fn merge(&mut self, outcome: ScanOutcome) {
        match outcome {
            ScanOutcome::Generated(name) => self.generated.push(name),
            ScanOutcome::Failed(name, reason) => self.failures.push((name, reason)),
        }
    }

    pub fn total(&self) -> usize {
        self.generated.len() + self.failures.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// 检查外部程序是否可用（`<program> --version`）
pub fn check_program(program: &str) -> bool {
    let needle = program.to_lowercase();
    match Command::new(program).arg("--version").output() {
        Ok(out) => {
            out.status.success()
                || String::from_utf8_lossy(&out.stdout)
                    .to_lowercase()
                    .contains(&needle)
                || String::from_utf8_lossy(&out.stderr)
                    .to_lowercase()
                    .contains(&needle)
        }
        Err(_) => false,
    }
}

/// 顺序扫描执行器
pub struct ScanRunner {
    output_dir: PathBuf,
    staging_dir: PathBuf,
    dry_run: bool,
}

impl ScanRunner {
    pub fn new(output_dir: impl Into<PathBuf>, dry_run: bool) -> Self {
        let output_dir = output_dir.into();
        let staging_dir = output_dir.join(".optool_staging");
        ScanRunner {
            output_dir,
            staging_dir,
            dry_run,
        }
    }

    /// optool 原始输出的暂存目录
    pub fn staging_dir(&self) -> &Path {
        &self.staging_dir
    }

    /// 顺序执行整个调用序列
    pub fn run(&self, specs: &[InvocationSpec]) -> Result<ScanReport> {
        let mut report = ScanReport::default();

        if self.dry_run {
            for spec in specs {
                output::print_info(&format!(
                    "[DRY] {}  ->  {}",
                    spec.command_line(),
                    spec.output_name
                ));
            }
            return Ok(report);
        }

        fs::create_dir_all(&self.output_dir).map_err(|e| OpacgenError::FileWriteError {
            path: self.output_dir.display().to_string(),
            source: e,
        })?;
        fs::create_dir_all(&self.staging_dir).map_err(|e| OpacgenError::FileWriteError {
            path: self.staging_dir.display().to_string(),
            source: e,
        })?;

        let pb = progress::create_progress_bar(specs.len() as u64, "Running optool");

        for spec in specs {
            let outcome = self.run_one(spec);
            match &outcome {
                ScanOutcome::Generated(name) => pb.println(format!("Generated: {}", name)),
                ScanOutcome::Failed(name, reason) => {
                    pb.println(format!("Failed: {} ({})", name, reason))
                }
            }
            report.merge(outcome);
            pb.inc(1);
        }

        pb.finish_and_clear();

        // 清理暂存目录（尽力而为）
        fs::remove_dir_all(&self.staging_dir).ok();

        Ok(report)
    }

    /// 执行单项调用
    fn run_one(&self, spec: &InvocationSpec) -> ScanOutcome {
        let staged = self.staging_dir.join(STAGED_OUTPUT);
        // 清除上一项残留
        fs::remove_file(&staged).ok();

        match Command::new(&spec.program).args(&spec.args).output() {
            Ok(out) if out.status.success() => {
                if !staged.is_file() {
                    return ScanOutcome::Failed(
                        spec.output_name.clone(),
                        format!("expected output {} not produced", STAGED_OUTPUT),
                    );
                }
                let final_path = self.output_dir.join(&spec.output_name);
                match move_file(&staged, &final_path) {
                    Ok(()) => ScanOutcome::Generated(spec.output_name.clone()),
                    Err(e) => ScanOutcome::Failed(spec.output_name.clone(), e.to_string()),
                }
            }
            Ok(out) => {
                let stderr = String::from_utf8_lossy(&out.stderr);
                let reason = match stderr.trim() {
                    "" => format!("{} exited with {}", spec.program, out.status),
                    msg => msg.to_string(),
                };
                ScanOutcome::Failed(spec.output_name.clone(), reason)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => ScanOutcome::Failed(
                spec.output_name.clone(),
                format!("'{}' not found in PATH", spec.program),
            ),
            Err(e) => ScanOutcome::Failed(spec.output_name.clone(), e.to_string()),
        }
    }
}

/// 跨文件系统安全的移动（rename 失败时退化为 copy + remove）
fn move_file(src: &Path, dst: &Path) -> std::io::Result<()> {
    if fs::rename(src, dst).is_ok() {
        return Ok(());
    }
    fs::copy(src, dst)?;
    fs::remove_file(src)
}
