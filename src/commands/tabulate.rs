//! # tabulate 命令实现
//!
//! 读回 `report` 写出的报告文件，将各文件的汇总行展开为表格。
//!
//! ## 依赖关系
//! - 使用 `cli/tabulate.rs` 定义的 TabulateArgs
//! - 使用 `ir/report.rs` 的 SummaryParser
//! - 使用 `tabled` 打印表格

use crate::cli::tabulate::TabulateArgs;
use crate::error::{IrError, Result};
use crate::ir::report::{SummaryParser, SUMMARY_PREFIX};
use crate::utils::output;

use std::fs;
use tabled::{Table, Tabled};

/// 报告文件中每个输入文件的标记前缀
const FILE_MARKER: &str = ">>> ";

/// 表格行
#[derive(Debug, Clone, PartialEq, Tabled)]
struct ReportRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "ν (cm⁻¹)")]
    wavenumber: i64,
    #[tabled(rename = "Intensity")]
    intensity: String,
    #[tabled(rename = "Broad")]
    broad: String,
}

/// 执行 tabulate 命令
pub fn execute(args: TabulateArgs) -> Result<()> {
    let content = fs::read_to_string(&args.input).map_err(|e| IrError::FileReadError {
        path: args.input.display().to_string(),
        source: e,
    })?;

    let rows = parse_report(&content, &args.separator)
        .map_err(|e| e.with_path(&args.input.display().to_string()))?;

    if rows.is_empty() {
        output::print_warning("No peaks found in report.");
    } else {
        println!("{}", Table::new(&rows));
    }

    Ok(())
}

/// 解析报告文本
fn parse_report(content: &str, sep: &str) -> Result<Vec<ReportRow>> {
    let parser = SummaryParser::new(sep)?;
    let mut rows = Vec::new();
    let mut current = String::new();

    for line in content.lines() {
        if let Some(path) = line.strip_prefix(FILE_MARKER) {
            current = path.trim().to_string();
        } else if line.starts_with(SUMMARY_PREFIX) {
            for (wavenumber, c) in parser.parse(line)? {
                rows.push(ReportRow {
                    file: current.clone(),
                    wavenumber,
                    intensity: c.intensity.to_string(),
                    broad: (if c.broad { "yes" } else { "" }).to_string(),
                });
            }
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report() {
        let content = "\
>>> /data/a.csv
IR (ATR): 3400 (m br), 1715 (s).
>>> /data/empty.csv
IR (ATR): .
>>> /data/b.csv
IR (ATR): 2920 (w).
";
        let rows = parse_report(content, " ").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].file, "/data/a.csv");
        assert_eq!(rows[0].wavenumber, 3400);
        assert_eq!(rows[0].intensity, "m");
        assert_eq!(rows[0].broad, "yes");
        assert_eq!(rows[1].wavenumber, 1715);
        assert_eq!(rows[1].broad, "");
        assert_eq!(rows[2].file, "/data/b.csv");
        assert_eq!(rows[2].intensity, "w");
    }

    #[test]
    fn test_parse_report_custom_separator() {
        let content = ">>> /data/a.csv\nIR (ATR): 3400 (m/br), 1715 (s).\n";
        let rows = parse_report(content, "/").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].broad, "yes");

        let err = parse_report(content, ", ").unwrap_err();
        assert!(matches!(err, IrError::InvalidArgument(_)));
    }

    #[test]
    fn test_parse_report_malformed() {
        let err = parse_report(">>> a\nIR (ATR): 1715 (q).\n", " ").unwrap_err();
        assert!(matches!(err, IrError::DataFormat { .. }));
    }
}
