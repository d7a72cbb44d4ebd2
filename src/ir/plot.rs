//! # 红外谱图绘制
//!
//! 使用 `plotters` 绘制透过率曲线并标注吸收峰。
//!
//! ## 功能
//! - 波数轴从 4000 到 450 cm⁻¹（左高右低）
//! - 每个峰下方画短竖线并竖排标注 `波数 标签`
//! - 按扩展名输出 SVG 或位图 (PNG 等)
//!
//! ## 依赖关系
//! - 被 `commands/report.rs` 调用
//! - 使用 `ir/report.rs` 的 SpectrumReport
//! - 使用 `plotters` 渲染图表

use crate::error::{IrError, Result};
use crate::ir::report::SpectrumReport;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// 波数轴范围 (cm⁻¹)
const X_START: f64 = 4000.0;
const X_END: f64 = 450.0;
/// 透过率轴范围 (%T)
const Y_MIN: f64 = -20.0;
const Y_MAX: f64 = 100.0;

/// 图幅 (英寸)
const FIGURE_WIDTH_IN: f64 = 8.0;
const FIGURE_HEIGHT_IN: f64 = 4.0;
/// SVG 输出的等效分辨率
const SVG_DPI: u32 = 100;

/// 图像尺寸与字号设置
#[derive(Debug, Clone, Copy)]
pub struct PlotSize {
    pub width: u32,
    pub height: u32,
    /// 每磅对应的像素数
    scale: f64,
}

impl PlotSize {
    pub fn from_dpi(dpi: u32) -> Self {
        PlotSize {
            width: (FIGURE_WIDTH_IN * dpi as f64).round() as u32,
            height: (FIGURE_HEIGHT_IN * dpi as f64).round() as u32,
            scale: dpi as f64 / 72.0,
        }
    }

    fn px(&self, points: f64) -> f64 {
        points * self.scale
    }
}

/// 判断输出路径是否为 SVG
pub fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}

/// 绘制谱图；`dpi` 仅对位图有效
pub fn render_plot(report: &SpectrumReport, output_path: &Path, dpi: u32) -> Result<()> {
    if is_svg(output_path) {
        let size = PlotSize::from_dpi(SVG_DPI);
        let root = SVGBackend::new(output_path, (size.width, size.height)).into_drawing_area();
        draw_spectrum_chart(&root, report, &size)?;
        root.present()
            .map_err(|e| IrError::PlotError(e.to_string()))?;
    } else {
        let size = PlotSize::from_dpi(dpi);
        let root = BitMapBackend::new(output_path, (size.width, size.height)).into_drawing_area();
        draw_spectrum_chart(&root, report, &size)?;
        root.present()
            .map_err(|e| IrError::PlotError(e.to_string()))?;
    }
    Ok(())
}

/// 绘制谱图的核心逻辑
///
/// plotters 的数值轴只能递增，这里以 `-波数` 作横坐标，标签再取反显示。
fn draw_spectrum_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    report: &SpectrumReport,
    size: &PlotSize,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| IrError::PlotError(format!("{:?}", e)))?;

    let font = size.px(8.0);

    let mut chart = ChartBuilder::on(root)
        .caption(&report.label, ("sans-serif", font * 1.2).into_font())
        .margin(size.px(10.0) as i32)
        .x_label_area_size(size.px(28.0) as i32)
        .y_label_area_size(size.px(36.0) as i32)
        .build_cartesian_2d(-X_START..-X_END, Y_MIN..Y_MAX)
        .map_err(|e| IrError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(8)
        .y_labels(13)
        .x_label_formatter(&|x| format!("{:.0}", -x))
        .y_label_formatter(&|y| format!("{:.0}", y))
        .x_desc("Wavenumber [cm-1]")
        .y_desc("% Transmittance (normalized)")
        .x_label_style(("sans-serif", font))
        .y_label_style(("sans-serif", font))
        .axis_desc_style(("sans-serif", font))
        .draw()
        .map_err(|e| IrError::PlotError(format!("{:?}", e)))?;

    let line_color = RGBColor(0, 0, 76);
    chart
        .draw_series(LineSeries::new(
            report
                .spectrum
                .wavenumbers
                .iter()
                .zip(report.spectrum.transmittance.iter())
                .map(|(w, t)| (-*w, *t)),
            line_color.stroke_width(size.px(0.75).max(1.0) as u32),
        ))
        .map_err(|e| IrError::PlotError(format!("{:?}", e)))?;

    // 峰标注：竖线 y-3 → y-7，逐峰行文字自 y-8 向下
    let label_style = ("sans-serif", size.px(7.0))
        .into_font()
        .transform(FontTransform::Rotate90)
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));

    for (point, line) in report.overlay.iter().zip(report.lines.iter()) {
        let x = -point.wavenumber;
        let y = point.transmittance;

        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(x, y - 3.0), (x, y - 7.0)],
                BLACK.stroke_width(size.px(0.5).max(1.0) as u32),
            )))
            .map_err(|e| IrError::PlotError(format!("{:?}", e)))?;

        chart
            .draw_series(std::iter::once(Text::new(
                line.clone(),
                (x, y - 8.0),
                label_style.clone(),
            )))
            .map_err(|e| IrError::PlotError(format!("{:?}", e)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_size_from_dpi() {
        let size = PlotSize::from_dpi(600);
        assert_eq!(size.width, 4800);
        assert_eq!(size.height, 2400);
        assert!((size.px(72.0) - 600.0).abs() < 1e-9);
    }

    #[test]
    fn test_is_svg() {
        assert!(is_svg(Path::new("a/b/sample.svg")));
        assert!(is_svg(Path::new("sample.SVG")));
        assert!(!is_svg(Path::new("sample.png")));
        assert!(!is_svg(Path::new("sample")));
    }
}
