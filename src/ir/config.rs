//! # 分析参数
//!
//! 峰检测与报告生成的全部参数集中在 `AnalysisConfig` 中，默认值只在此定义。
//!
//! ## 依赖关系
//! - 被 `ir/report.rs` 和 `commands/` 使用

use crate::error::{IrError, Result};

/// 零峰文件的汇总行策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptySummary {
    /// 输出 `IR (ATR): .`
    #[default]
    Emit,
    /// 不输出汇总行
    Suppress,
}

/// 单个光谱的分析参数
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// 是否按最强吸收归一化透过率
    pub normalize: bool,
    /// 最小突出度 (%T)
    pub min_prominence: f64,
    /// 最小半高宽 (cm⁻¹)
    pub min_width: f64,
    /// 相邻峰最小间距 (cm⁻¹)
    pub min_distance: f64,
    /// 宽峰阈值 (cm⁻¹)，宽度严格大于此值记为 "br"
    pub broad_width: f64,
    /// 标签分隔符
    pub separator: String,
    pub empty_summary: EmptySummary,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            normalize: true,
            min_prominence: 5.0,
            min_width: 4.0,
            min_distance: 30.0,
            broad_width: 100.0,
            separator: " ".to_string(),
            empty_summary: EmptySummary::Emit,
        }
    }
}

impl AnalysisConfig {
    /// 校验阈值（有限非负数）与分隔符
    pub fn validate(&self) -> Result<()> {
        self.thresholds().validate()?;
        check_threshold("broad_peak_min_width", self.broad_width)?;

        check_separator(&self.separator)
    }

    /// 检测阈值
    pub fn thresholds(&self) -> DetectionThresholds {
        DetectionThresholds {
            min_prominence: self.min_prominence,
            min_width: self.min_width,
            min_distance: self.min_distance,
        }
    }
}

/// 峰检测阈值（宽度与间距单位为 cm⁻¹）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionThresholds {
    pub min_prominence: f64,
    pub min_width: f64,
    pub min_distance: f64,
}

impl DetectionThresholds {
    pub fn validate(&self) -> Result<()> {
        check_threshold("peak_min_prominence", self.min_prominence)?;
        check_threshold("peak_min_width", self.min_width)?;
        check_threshold("peak_min_distance", self.min_distance)
    }
}

/// 汇总行中 `,` `(` `)` `.` 是结构字符，分隔符不能包含它们
const RESERVED_SEPARATOR_CHARS: [char; 4] = [',', '(', ')', '.'];

/// 校验标签分隔符：非空，且不含汇总行的结构字符
pub fn check_separator(separator: &str) -> Result<()> {
    if separator.is_empty() {
        return Err(IrError::InvalidArgument(
            "tag separator must not be empty".to_string(),
        ));
    }
    if separator.contains(RESERVED_SEPARATOR_CHARS) {
        return Err(IrError::InvalidArgument(format!(
            "tag separator '{}' must not contain any of , ( ) .",
            separator
        )));
    }
    Ok(())
}

fn check_threshold(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(IrError::InvalidThreshold { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.normalize);
        assert_eq!(config.separator, " ");
        assert_eq!(config.empty_summary, EmptySummary::Emit);
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let config = AnalysisConfig {
            min_distance: -1.0,
            ..Default::default()
        };
        match config.validate() {
            Err(IrError::InvalidThreshold { name, value }) => {
                assert_eq!(name, "peak_min_distance");
                assert_eq!(value, -1.0);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let config = AnalysisConfig {
            broad_width: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(IrError::InvalidThreshold { .. })
        ));
    }

    #[test]
    fn test_empty_separator_rejected() {
        let config = AnalysisConfig {
            separator: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(IrError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_reserved_separator_rejected() {
        for sep in [", ", ",", " (", ")", "."] {
            let config = AnalysisConfig {
                separator: sep.to_string(),
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(IrError::InvalidArgument(_))),
                "separator {:?} accepted",
                sep
            );
        }

        for sep in [" ", "/", "; ", "-"] {
            assert!(check_separator(sep).is_ok(), "separator {:?} rejected", sep);
        }
    }
}
