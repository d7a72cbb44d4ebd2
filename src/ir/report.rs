//! # 峰报告生成
//!
//! 串联 归一化 → 峰检测 → 分类 → 格式化，生成单个光谱的文字报告与绘图标注数据；
//! `SummaryParser` 将汇总行还原为峰列表。
//!
//! ## 输出格式
//! - 逐峰行：`1715 s br`
//! - 汇总行：`IR (ATR): 1715 (s br), 2920 (w).`，无峰时为 `IR (ATR): .`
//!
//! 峰按样本下标顺序输出，不按波数或强度重排。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `ir/normalize.rs`, `ir/detector.rs`, `ir/classifier.rs`
//! - 标注数据交给 `ir/plot.rs` 与 `ir/export.rs`

use crate::error::{IrError, Result};
use crate::ir::classifier;
use crate::ir::config::{check_separator, AnalysisConfig, EmptySummary};
use crate::ir::detector;
use crate::ir::normalize;
use crate::models::{Classification, Intensity, PeakCandidate, PeakDescriptor, Spectrum};

use regex::Regex;

/// 汇总行前缀
pub const SUMMARY_PREFIX: &str = "IR (ATR): ";

/// 绘图标注点
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayPoint {
    pub index: usize,
    pub wavenumber: f64,
    pub transmittance: f64,
    /// 不带括号的标签，如 `s br`
    pub label: String,
}

/// 单个光谱的分析报告
#[derive(Debug, Clone)]
pub struct SpectrumReport {
    /// 来源标识（通常为文件路径）
    pub label: String,
    /// 分析所用的（归一化后）光谱
    pub spectrum: Spectrum,
    /// 检测到的峰（与 `peaks` 一一对应）
    pub candidates: Vec<PeakCandidate>,
    pub peaks: Vec<PeakDescriptor>,
    /// 逐峰行
    pub lines: Vec<String>,
    /// 汇总行；无峰且设置为省略时为 None
    pub summary: Option<String>,
    pub overlay: Vec<OverlayPoint>,
}

/// 分析单个光谱
///
/// 任一峰分类失败则整个报告失败，不返回部分结果。
pub fn generate_report(
    spectrum: &Spectrum,
    label: &str,
    config: &AnalysisConfig,
) -> Result<SpectrumReport> {
    config.validate()?;

    let spectrum = normalize::normalize(spectrum, config.normalize)?;
    let candidates = detector::detect_peaks(&spectrum, &config.thresholds())?;

    let peaks = candidates
        .iter()
        .map(|c| -> Result<PeakDescriptor> {
            let classification =
                classifier::classify(c.transmittance, c.width, config.broad_width)?;
            Ok(PeakDescriptor {
                index: c.index,
                wavenumber: c.wavenumber,
                transmittance: c.transmittance,
                classification,
                tag: classification.descriptor(&config.separator),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let lines = peaks
        .iter()
        .map(|p| format_line(p.wavenumber, &p.classification, &config.separator))
        .collect();

    let summary = if peaks.is_empty() && config.empty_summary == EmptySummary::Suppress {
        None
    } else {
        Some(format_summary(&peaks))
    };

    let overlay = peaks
        .iter()
        .map(|p| OverlayPoint {
            index: p.index,
            wavenumber: p.wavenumber,
            transmittance: p.transmittance,
            label: p.classification.tags(&config.separator),
        })
        .collect();

    Ok(SpectrumReport {
        label: label.to_string(),
        spectrum,
        candidates,
        peaks,
        lines,
        summary,
        overlay,
    })
}

/// 波数取整（半数取偶）
pub fn format_wavenumber(wavenumber: f64) -> String {
    format!("{:.0}", wavenumber)
}

/// 逐峰行，如 `1715 s br`
pub fn format_line(wavenumber: f64, classification: &Classification, sep: &str) -> String {
    format!(
        "{} {}",
        format_wavenumber(wavenumber),
        classification.tags(sep)
    )
}

/// 汇总行，如 `IR (ATR): 1715 (s br), 2920 (w).`
pub fn format_summary(peaks: &[PeakDescriptor]) -> String {
    let joined = peaks
        .iter()
        .map(|p| format!("{} {}", format_wavenumber(p.wavenumber), p.tag))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}{}.", SUMMARY_PREFIX, joined)
}

/// 汇总行解析器，正则只编译一次，可复用于整份报告
pub struct SummaryParser {
    entry: Regex,
    sep: String,
}

impl SummaryParser {
    pub fn new(sep: &str) -> Result<Self> {
        check_separator(sep)?;
        let entry = Regex::new(r"^(-?\d+) \((.+)\)$")
            .map_err(|e| IrError::InvalidArgument(e.to_string()))?;
        Ok(SummaryParser {
            entry,
            sep: sep.to_string(),
        })
    }

    /// 从汇总行还原各峰的波数与分类
    pub fn parse(&self, line: &str) -> Result<Vec<(i64, Classification)>> {
        let body = line
            .trim_end()
            .strip_prefix(SUMMARY_PREFIX)
            .and_then(|rest| rest.strip_suffix('.'))
            .ok_or_else(|| IrError::data_format(format!("not an IR summary line: '{}'", line)))?;

        if body.is_empty() {
            return Ok(Vec::new());
        }

        body.split(", ")
            .map(|item| self.parse_entry(item))
            .collect()
    }

    fn parse_entry(&self, item: &str) -> Result<(i64, Classification)> {
        let caps = self
            .entry
            .captures(item)
            .ok_or_else(|| IrError::data_format(format!("malformed peak entry '{}'", item)))?;

        let wavenumber: i64 = caps[1]
            .parse()
            .map_err(|_| IrError::data_format(format!("bad wavenumber in '{}'", item)))?;

        let mut tags = caps[2].split(self.sep.as_str());
        let intensity = tags
            .next()
            .and_then(Intensity::from_tag)
            .ok_or_else(|| IrError::data_format(format!("unknown intensity in '{}'", item)))?;
        let broad = match tags.next() {
            None => false,
            Some(Classification::BROAD_TAG) => true,
            Some(other) => {
                return Err(IrError::data_format(format!(
                    "unknown tag '{}' in '{}'",
                    other, item
                )))
            }
        };
        if tags.next().is_some() {
            return Err(IrError::data_format(format!("too many tags in '{}'", item)));
        }

        Ok((wavenumber, Classification { intensity, broad }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::detector::tests::synthetic_spectrum;

    fn scenario_config() -> AnalysisConfig {
        AnalysisConfig {
            normalize: false,
            min_prominence: 2.0,
            min_width: 2.0,
            min_distance: 20.0,
            broad_width: 100.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_two_dip_scenario() {
        // index 50: T = 20, 窄峰；index 300: T = 80, 宽 150
        let s = synthetic_spectrum(600, &[(50, 80.0, 5.0), (300, 20.0, 150.0)]);
        let report = generate_report(&s, "scenario.csv", &scenario_config()).unwrap();

        assert_eq!(report.peaks.len(), 2);
        assert_eq!(report.peaks[0].index, 50);
        assert_eq!(report.peaks[0].tag, "(s)");
        assert_eq!(report.peaks[1].index, 300);
        assert_eq!(report.peaks[1].tag, "(w br)");

        assert_eq!(report.lines, vec!["3950 s", "3700 w br"]);
        assert_eq!(
            report.summary.as_deref(),
            Some("IR (ATR): 3950 (s), 3700 (w br).")
        );

        assert_eq!(report.overlay.len(), 2);
        assert_eq!(report.overlay[1].label, "w br");
        assert_eq!(report.overlay[1].wavenumber, 3700.0);
    }

    #[test]
    fn test_two_dip_scenario_normalized() {
        let s = synthetic_spectrum(600, &[(50, 80.0, 5.0), (300, 20.0, 150.0)]);
        let config = AnalysisConfig {
            normalize: true,
            ..scenario_config()
        };
        let report = generate_report(&s, "scenario.csv", &config).unwrap();
        let tags: Vec<_> = report.peaks.iter().map(|p| p.tag.as_str()).collect();
        assert_eq!(tags, vec!["(s)", "(w br)"]);
        assert!(report.peaks[0].transmittance.abs() < 1e-9);
    }

    #[test]
    fn test_order_follows_sample_index() {
        // 波数升序存储：下标顺序与波数顺序一致，但强峰在后
        let base = synthetic_spectrum(400, &[(100, 10.0, 6.0), (300, 90.0, 6.0)]);
        let ascending = Spectrum::new(
            (0..400).map(|i| 500.0 + i as f64).collect(),
            base.transmittance.clone(),
        )
        .unwrap();
        let report = generate_report(&ascending, "asc", &scenario_config()).unwrap();
        assert_eq!(report.lines, vec!["600 w", "800 s"]);
    }

    #[test]
    fn test_zero_peaks_emit() {
        let s = Spectrum::new(vec![3.0, 2.0, 1.0], vec![100.0; 3]).unwrap();
        let report = generate_report(&s, "flat", &scenario_config()).unwrap();
        assert!(report.peaks.is_empty());
        assert!(report.lines.is_empty());
        assert_eq!(report.summary.as_deref(), Some("IR (ATR): ."));
    }

    #[test]
    fn test_zero_peaks_suppress() {
        let s = Spectrum::new(vec![3.0, 2.0, 1.0], vec![100.0; 3]).unwrap();
        let config = AnalysisConfig {
            empty_summary: EmptySummary::Suppress,
            ..scenario_config()
        };
        let report = generate_report(&s, "flat", &config).unwrap();
        assert!(report.summary.is_none());
    }

    #[test]
    fn test_flat_spectrum_normalized_is_degenerate() {
        let s = Spectrum::new(vec![3.0, 2.0, 1.0], vec![100.0; 3]).unwrap();
        let config = AnalysisConfig {
            normalize: true,
            ..scenario_config()
        };
        let err = generate_report(&s, "flat", &config).unwrap_err();
        assert!(matches!(err, IrError::DegenerateInput { .. }));
    }

    #[test]
    fn test_out_of_range_is_all_or_nothing() {
        // 原始数据（未归一化）中的吸收谷低于 0 %T
        let s = synthetic_spectrum(200, &[(50, 30.0, 5.0), (150, 120.0, 5.0)]);
        let err = generate_report(&s, "bad", &scenario_config()).unwrap_err();
        assert!(matches!(err, IrError::OutOfRange { .. }));
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let s = synthetic_spectrum(100, &[(50, 30.0, 5.0)]);
        let config = AnalysisConfig {
            min_prominence: -5.0,
            ..scenario_config()
        };
        let err = generate_report(&s, "x", &config).unwrap_err();
        assert!(matches!(err, IrError::InvalidThreshold { .. }));
    }

    #[test]
    fn test_format_wavenumber_rounding() {
        assert_eq!(format_wavenumber(1715.4), "1715");
        assert_eq!(format_wavenumber(1715.6), "1716");
        assert_eq!(format_wavenumber(2919.5), "2920");
    }

    #[test]
    fn test_summary_roundtrip() {
        let s = synthetic_spectrum(
            900,
            &[
                (60, 85.0, 6.0),
                (200, 50.0, 140.0),
                (450, 20.0, 12.0),
                (700, 55.0, 8.0),
            ],
        );
        for sep in [" ", "; "] {
            let config = AnalysisConfig {
                separator: sep.to_string(),
                ..scenario_config()
            };
            let report = generate_report(&s, "rt", &config).unwrap();
            assert_eq!(report.peaks.len(), 4);

            let summary = report.summary.clone().unwrap();
            let parsed = SummaryParser::new(sep).unwrap().parse(&summary).unwrap();
            assert_eq!(parsed.len(), report.peaks.len());
            for ((wn, c), p) in parsed.iter().zip(report.peaks.iter()) {
                assert_eq!(*wn, p.wavenumber.round() as i64);
                assert_eq!(c.intensity, p.classification.intensity);
                assert_eq!(c.broad, p.classification.broad);
            }
        }
    }

    #[test]
    fn test_comma_separator_cannot_write_unparseable_summary() {
        let s = synthetic_spectrum(600, &[(50, 80.0, 5.0), (300, 20.0, 150.0)]);
        let config = AnalysisConfig {
            separator: ", ".to_string(),
            ..scenario_config()
        };
        let err = generate_report(&s, "comma", &config).unwrap_err();
        assert!(matches!(err, IrError::InvalidArgument(_)));
        assert!(SummaryParser::new(", ").is_err());
    }

    #[test]
    fn test_parse_summary_empty_and_malformed() {
        let parser = SummaryParser::new(" ").unwrap();
        assert!(parser.parse("IR (ATR): .").unwrap().is_empty());
        assert!(parser.parse("IR: 1715 (s).").is_err());
        assert!(parser.parse("IR (ATR): 1715 (x).").is_err());
        assert!(parser.parse("IR (ATR): 1715 (s foo).").is_err());
        assert!(parser.parse("IR (ATR): 1715 s.").is_err());
    }
}
