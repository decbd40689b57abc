//! # 光学常数文件库
//!
//! 按材料名在目录中查找 .lnk 光学常数文件。
//!
//! ## 查找顺序
//! 1. 温度特定文件 `{material}_{T}K.lnk`（给定温度时）
//! 2. 精确匹配 `{material}.lnk`
//! 3. 大小写不敏感的子串匹配（标记为 partial，供上层提示）
//!
//! 未命中时由规划器将名称按 optool 内置材料透传。
//!
//! ## 依赖关系
//! - 被 `opac/planner.rs`, `commands/materials.rs` 使用
//! - 使用 `walkdir` 遍历目录

use crate::error::{OpacgenError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 一次查找的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NkMatch {
    pub path: PathBuf,
    /// false 表示子串回退匹配，可能与请求的温度不符
    pub exact: bool,
}

/// .lnk 文件库
pub struct NkLibrary {
    dir: PathBuf,
}

impl NkLibrary {
    /// 打开文件库目录，目录不存在时报错
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(OpacgenError::DirectoryNotFound {
                path: dir.display().to_string(),
            });
        }
        Ok(NkLibrary { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 材料是否有精确匹配的 .lnk 文件
    pub fn contains(&self, material: &str) -> bool {
        self.dir.join(format!("{}.lnk", material)).is_file()
    }

    /// 解析材料名到本地 .lnk 文件
    pub fn resolve(&self, material: &str, temperature: Option<f64>) -> Option<NkMatch> {
        // 优先温度特定文件
        if let Some(temp) = temperature {
            let temp_file = self.dir.join(format!("{}_{}K.lnk", material, temp));
            if temp_file.is_file() {
                return Some(NkMatch {
                    path: temp_file,
                    exact: true,
                });
            }
        }

        let exact_file = self.dir.join(format!("{}.lnk", material));
        if exact_file.is_file() {
            return Some(NkMatch {
                path: exact_file,
                exact: true,
            });
        }

        // 子串回退，遍历顺序排序以保证确定性
        let needle = material.to_lowercase();
        self.lnk_files()
            .into_iter()
            .find(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .map(|n| n.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
            .map(|path| NkMatch { path, exact: false })
    }

    /// 目录下全部 .lnk 文件，按文件名排序
    pub fn lnk_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(&self.dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|p| {
                p.extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext.eq_ignore_ascii_case("lnk"))
                    .unwrap_or(false)
            })
            .collect();
        files.sort();
        files
    }
}
