//! # 分析参数 CLI 定义
//!
//! `report` 与 `inspect` 共用的峰检测参数。默认值取自 `AnalysisConfig::default()`，
//! 也可通过 `IRPEAKS_*` 环境变量设置。
//!
//! ## 依赖关系
//! - 被 `cli/report.rs`, `cli/inspect.rs` 使用
//! - 转换为 `ir/config.rs` 的 AnalysisConfig

use crate::ir::{AnalysisConfig, EmptySummary};

use clap::Args;

/// 峰检测与分类参数
#[derive(Args, Debug, Clone)]
pub struct AnalysisArgs {
    /// Width of a peak (in cm-1) to be considered broad
    #[arg(short = 'b', long, allow_negative_numbers = true, env = "IRPEAKS_BROAD_WIDTH",
          default_value_t = AnalysisConfig::default().broad_width)]
    pub broad_peak_min_width: f64,

    /// Minimal distance between the peaks (in cm-1); within reach only the most prominent peak is kept
    #[arg(short = 'd', long, allow_negative_numbers = true, env = "IRPEAKS_MIN_DISTANCE",
          default_value_t = AnalysisConfig::default().min_distance)]
    pub peak_min_distance: f64,

    /// Minimal FWHM (in cm-1) of the peak to be considered real
    #[arg(short = 'w', long, allow_negative_numbers = true, env = "IRPEAKS_MIN_WIDTH",
          default_value_t = AnalysisConfig::default().min_width)]
    pub peak_min_width: f64,

    /// Minimal prominence of the peak (in %T)
    #[arg(short = 'r', long, allow_negative_numbers = true, env = "IRPEAKS_MIN_PROMINENCE",
          default_value_t = AnalysisConfig::default().min_prominence)]
    pub peak_min_prominence: f64,

    /// Separator between the intensity and breadth tags (must not contain , ( ) .)
    #[arg(long, default_value_t = AnalysisConfig::default().separator)]
    pub separator: String,

    /// Use raw transmittance values (no normalization to the most intense peak)
    #[arg(long, default_value_t = false)]
    pub raw: bool,
}

impl AnalysisArgs {
    /// 转换为分析参数
    pub fn to_config(&self, suppress_empty: bool) -> AnalysisConfig {
        AnalysisConfig {
            normalize: !self.raw,
            min_prominence: self.peak_min_prominence,
            min_width: self.peak_min_width,
            min_distance: self.peak_min_distance,
            broad_width: self.broad_peak_min_width,
            separator: self.separator.clone(),
            empty_summary: if suppress_empty {
                EmptySummary::Suppress
            } else {
                EmptySummary::Emit
            },
        }
    }
}
