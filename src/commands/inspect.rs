//! # inspect 命令实现
//!
//! 分析单个光谱并以表格列出全部峰的检测参数，便于调节阈值。
//! 宽度同时给出 cm⁻¹ 与样本点两种单位。
//!
//! ## 依赖关系
//! - 使用 `cli/inspect.rs` 定义的 InspectArgs
//! - 使用 `parsers/`, `ir/`
//! - 使用 `tabled` 打印表格

use crate::cli::inspect::InspectArgs;
use crate::error::{IrError, Result};
use crate::ir::{self, SpectrumReport};
use crate::parsers;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 峰表行
#[derive(Debug, Clone, Tabled)]
struct PeakRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Index")]
    index: usize,
    #[tabled(rename = "ν (cm⁻¹)")]
    wavenumber: String,
    #[tabled(rename = "%T")]
    transmittance: String,
    #[tabled(rename = "Prominence")]
    prominence: String,
    #[tabled(rename = "FWHM (cm⁻¹)")]
    width: String,
    #[tabled(rename = "Width (pts)")]
    width_samples: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

/// 执行 inspect 命令
pub fn execute(args: InspectArgs) -> Result<()> {
    let config = args.analysis.to_config(false);
    config.validate()?;

    if !args.input.is_file() {
        return Err(IrError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    output::print_header(&format!("IR peaks: {}", args.input.display()));

    let spectrum = parsers::parse_spectrum_file(&args.input)?;
    output::print_info(&format!(
        "Loaded {} points ({:.1} - {:.1} cm-1, {:.3} cm-1/point)",
        spectrum.len(),
        spectrum.wavenumbers[0],
        spectrum.wavenumbers[spectrum.len() - 1],
        spectrum.sample_spacing()
    ));

    let report = ir::generate_report(&spectrum, &args.input.display().to_string(), &config)?;

    if report.peaks.is_empty() {
        output::print_warning("No peaks found with the current thresholds.");
    } else {
        println!("{}", Table::new(peak_rows(&report, &config.separator)));
    }

    if let Some(summary) = &report.summary {
        println!("{}", summary);
    }

    Ok(())
}

/// 生成表格行
fn peak_rows(report: &SpectrumReport, sep: &str) -> Vec<PeakRow> {
    report
        .candidates
        .iter()
        .zip(report.peaks.iter())
        .enumerate()
        .map(|(i, (c, p))| PeakRow {
            rank: i + 1,
            index: c.index,
            wavenumber: format!("{:.1}", c.wavenumber),
            transmittance: format!("{:.1}", c.transmittance),
            prominence: format!("{:.1}", c.prominence),
            width: format!("{:.1}", c.width),
            width_samples: format!("{:.1}", c.width_samples),
            tags: p.classification.tags(sep),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::detector::tests::synthetic_spectrum;
    use crate::cli::{Cli, Commands};
    use crate::ir::AnalysisConfig;
    use clap::Parser;

    #[test]
    fn test_peak_rows() {
        let s = synthetic_spectrum(600, &[(50, 80.0, 5.0), (300, 20.0, 150.0)]);
        let config = AnalysisConfig {
            normalize: false,
            min_prominence: 2.0,
            min_width: 2.0,
            min_distance: 20.0,
            ..Default::default()
        };
        let report = ir::generate_report(&s, "t", &config).unwrap();
        let rows = peak_rows(&report, " ");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].index, 50);
        assert_eq!(rows[0].wavenumber, "3950.0");
        assert_eq!(rows[0].tags, "s");
        assert_eq!(rows[1].tags, "w br");

        let table = Table::new(&rows).to_string();
        assert!(table.contains("3700.0"));
    }

    #[test]
    fn test_missing_input_is_file_not_found() {
        let missing = std::env::temp_dir().join("irpeaks-inspect-missing/none.csv");
        let cli = Cli::try_parse_from(["irpeaks", "inspect", missing.to_str().unwrap()]).unwrap();
        let args = match cli.command {
            Commands::Inspect(args) => args,
            _ => panic!("expected inspect command"),
        };
        match execute(args) {
            Err(IrError::FileNotFound { path }) => assert!(path.ends_with("none.csv")),
            other => panic!("unexpected result: {:?}", other.err()),
        }
    }
}
