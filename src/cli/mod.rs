//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `report`: 批量分析光谱并输出峰报告与谱图
//! - `inspect`: 单个光谱的详细峰表
//! - `tabulate`: 将已有报告文件展开为表格
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: analysis, report, inspect, tabulate

pub mod analysis;
pub mod inspect;
pub mod report;
pub mod tabulate;

use clap::{Parser, Subcommand};

/// irpeaks - 红外光谱快速处理工具
#[derive(Parser)]
#[command(name = "irpeaks")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Quick IR processing tools: peak picking, classification and annotated plots",
    long_about = "Quick IR processing tools. Default parameters should be universally useful, \
                  but the options allow varying them for specific needs. By default, the \
                  transmittance data is normalized to the most intense peak."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze IR spectra (CSV exports) and write the peak report
    Report(report::ReportArgs),

    /// Print a detailed peak table for a single spectrum
    Inspect(inspect::InspectArgs),

    /// Expand the summary lines of an existing report file into a table
    Tabulate(tabulate::TabulateArgs),
}
