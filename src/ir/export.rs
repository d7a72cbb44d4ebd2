//! # 峰标注数据导出
//!
//! 将绘图标注点导出为 CSV，供其他绘图工具使用。
//!
//! ## 格式
//! `index,wavenumber,transmittance,label`
//!
//! ## 依赖关系
//! - 被 `commands/report.rs` 调用
//! - 使用 `ir/report.rs` 的 OverlayPoint
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{IrError, Result};
use crate::ir::report::OverlayPoint;

use std::io::Write;
use std::path::Path;

/// 写出到任意 writer
pub fn write_overlay<W: Write>(points: &[OverlayPoint], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["index", "wavenumber", "transmittance", "label"])?;

    for point in points {
        wtr.write_record(&[
            point.index.to_string(),
            format!("{:.4}", point.wavenumber),
            format!("{:.2}", point.transmittance),
            point.label.clone(),
        ])?;
    }

    wtr.flush().map_err(|e| IrError::FileWriteError {
        path: "<overlay>".to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出标注点为 CSV 文件
pub fn to_csv(points: &[OverlayPoint], output_path: &Path) -> Result<()> {
    let file = std::fs::File::create(output_path).map_err(|e| IrError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    write_overlay(points, file)
}
