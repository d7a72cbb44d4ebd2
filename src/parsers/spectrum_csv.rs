//! # 红外光谱 CSV 解析器
//!
//! 解析光谱仪导出的 CSV 文件。
//!
//! ## 格式说明
//! ```text
//! <仪器/样品标题行，忽略>
//! cm-1,%T
//! 3999.64,98.12
//! 3997.71,98.10
//! ...
//! ```
//! 第二行为列名行，必须包含 `cm-1` 与 `%T` 两列；其余列忽略，列顺序任意。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/spectrum.rs`
//! - 使用 `csv` + `serde` 反序列化数据行

use crate::error::{IrError, Result};
use crate::models::Spectrum;

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// 波数列名
pub const WAVENUMBER_COLUMN: &str = "cm-1";
/// 透过率列名
pub const TRANSMITTANCE_COLUMN: &str = "%T";

/// CSV 数据行
#[derive(Debug, Deserialize)]
struct SpectrumRow {
    #[serde(rename = "cm-1")]
    wavenumber: f64,
    #[serde(rename = "%T")]
    transmittance: f64,
}

/// 解析光谱 CSV 文件
pub fn parse_spectrum_file(path: &Path) -> Result<Spectrum> {
    let content = fs::read_to_string(path).map_err(|e| IrError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_spectrum_content(&content).map_err(|e| e.with_path(&path.display().to_string()))
}

/// 从字符串内容解析光谱
pub fn parse_spectrum_content(content: &str) -> Result<Spectrum> {
    // 跳过第一行标题
    let body = match content.split_once('\n') {
        Some((_, rest)) => rest,
        None => return Err(IrError::data_format("missing column header row")),
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| IrError::data_format(format!("unreadable header row: {}", e)))?
        .clone();

    for column in [WAVENUMBER_COLUMN, TRANSMITTANCE_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(IrError::data_format(format!(
                "required column '{}' not found (header: {})",
                column,
                headers.iter().collect::<Vec<_>>().join(",")
            )));
        }
    }

    let mut wavenumbers = Vec::new();
    let mut transmittance = Vec::new();

    for (i, row) in reader.deserialize::<SpectrumRow>().enumerate() {
        // 行号：标题行 + 列名行 + 1 起始
        let row = row.map_err(|e| {
            IrError::data_format(format!("data row {} is invalid: {}", i + 3, e))
        })?;
        wavenumbers.push(row.wavenumber);
        transmittance.push(row.transmittance);
    }

    Spectrum::new(wavenumbers, transmittance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let content = "Sample 42 ATR\ncm-1,%T\n4000.0,99.5\n3998.0,99.1\n3996.0,97.0\n";
        let spectrum = parse_spectrum_content(content).unwrap();
        assert_eq!(spectrum.len(), 3);
        assert_eq!(spectrum.wavenumbers[0], 4000.0);
        assert_eq!(spectrum.transmittance[2], 97.0);
    }

    #[test]
    fn test_parse_extra_columns_and_whitespace() {
        let content = "title,,\n%T , note, cm-1\n 98.5 , a , 1715.2\n97.0,b,1713.3\n";
        let spectrum = parse_spectrum_content(content).unwrap();
        assert_eq!(spectrum.wavenumbers, vec![1715.2, 1713.3]);
        assert_eq!(spectrum.transmittance, vec![98.5, 97.0]);
    }

    #[test]
    fn test_parse_missing_column() {
        let content = "title\ncm-1,A\n4000,0.1\n";
        let err = parse_spectrum_content(content).unwrap_err();
        match err {
            IrError::DataFormat { reason, .. } => assert!(reason.contains("%T")),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_parse_bad_number() {
        let content = "title\ncm-1,%T\n4000,abc\n";
        let err = parse_spectrum_content(content).unwrap_err();
        assert!(matches!(err, IrError::DataFormat { .. }));
    }

    #[test]
    fn test_parse_no_rows() {
        let content = "title\ncm-1,%T\n";
        let err = parse_spectrum_content(content).unwrap_err();
        assert!(matches!(err, IrError::DataFormat { .. }));
    }

    #[test]
    fn test_parse_ragged_row() {
        let content = "title\ncm-1,%T\n4000,99\n3998\n";
        let err = parse_spectrum_content(content).unwrap_err();
        assert!(matches!(err, IrError::DataFormat { .. }));
    }

    #[test]
    fn test_parse_single_line() {
        let err = parse_spectrum_content("cm-1,%T").unwrap_err();
        assert!(matches!(err, IrError::DataFormat { .. }));
    }
}
