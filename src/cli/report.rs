//! # report 子命令 CLI 定义
//!
//! 批量分析红外光谱 CSV，输出峰报告、谱图和可选的标注数据。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/report.rs`

use crate::cli::analysis::AnalysisArgs;

use clap::Args;
use std::path::PathBuf;

/// 文件名占位符
pub const FILENAME_PLACEHOLDER: &str = "{FILENAME}";

/// report 子命令参数
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Files, directories or wildcard patterns to process
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<String>,

    /// File the IR writeup is appended to (STDOUT if not specified)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Plot path pattern; {FILENAME} is replaced with the input path without '.csv'. Extension selects SVG or raster output
    #[arg(short, long, default_value = "{FILENAME}.svg")]
    pub plot: String,

    /// Skip plot generation
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,

    /// Resolution for raster plot outputs (ignored for SVG)
    #[arg(long, default_value_t = 600)]
    pub dpi: u32,

    /// Also export peak annotations as CSV; same {FILENAME} substitution as --plot
    #[arg(long, value_name = "PATTERN")]
    pub export: Option<String>,

    /// Omit the summary line for spectra without peaks
    #[arg(long, default_value_t = false)]
    pub suppress_empty: bool,

    #[command(flatten)]
    pub analysis: AnalysisArgs,

    // ─────────────────────────────────────────────────────────────
    // 批量处理参数
    // ─────────────────────────────────────────────────────────────
    /// Glob pattern for files inside directory inputs
    #[arg(long, default_value = "*.csv")]
    pub pattern: String,

    /// Recurse into subdirectories of directory inputs
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,
}
