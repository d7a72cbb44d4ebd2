//! # 文件收集器
//!
//! 将命令行给出的路径/通配符展开为待处理文件列表。
//!
//! ## 功能
//! - 通配符展开（`glob`），按参数顺序拼接
//! - 目录参数：匹配目录内文件，可递归
//! - 结果顺序即报告输出顺序
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `glob` 展开模式，`walkdir` 遍历目录

use crate::error::{IrError, Result};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入参数（文件、目录或通配符）
    inputs: Vec<String>,
    /// 目录内文件的匹配模式列表
    patterns: Vec<String>,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(inputs: Vec<String>) -> Self {
        Self {
            inputs,
            patterns: vec!["*.csv".to_string()],
            recursive: false,
        }
    }

    /// 设置目录内匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.patterns = pattern
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if self.patterns.is_empty() {
            self.patterns = vec!["*.csv".to_string()];
        }
        self
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let patterns = self
            .patterns
            .iter()
            .map(|p| {
                glob::Pattern::new(p).map_err(|e| IrError::InvalidPattern {
                    pattern: p.clone(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut files = Vec::new();
        for input in &self.inputs {
            let path = Path::new(input);
            if path.is_dir() {
                files.extend(self.collect_directory(path, &patterns));
            } else {
                files.extend(expand_glob(input)?);
            }
        }

        Ok(files)
    }

    /// 收集目录内匹配的文件（排序）
    fn collect_directory(&self, dir: &Path, patterns: &[glob::Pattern]) -> Vec<PathBuf> {
        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut files: Vec<PathBuf> = WalkDir::new(dir)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .map(|name| patterns.iter().any(|p| p.matches(name)))
                    .unwrap_or(false)
            })
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }
}

/// 展开单个通配符参数，只保留普通文件
fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries = glob::glob(pattern).map_err(|e| IrError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;

    Ok(entries
        .filter_map(|e| e.ok())
        .filter(|p| p.is_file())
        .collect())
}
