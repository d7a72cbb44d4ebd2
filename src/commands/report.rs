//! # report 命令实现
//!
//! 批量分析红外光谱并写出峰报告。
//!
//! ## 功能
//! - 展开文件参数（通配符/目录）
//! - 并行分析（rayon），按输入顺序写出报告
//! - 每个文件：`>>> <绝对路径>` + `IR (ATR): ...` 汇总行
//! - 可选谱图 (SVG/PNG) 与标注数据 CSV
//! - 单个文件分析失败时跳过该文件，不输出其任何报告行；
//!   谱图或导出写入失败只打印警告，报告行照常输出
//!
//! ## 依赖关系
//! - 使用 `cli/report.rs` 定义的 ReportArgs
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 `ir/` 模块进行分析、绘图、导出
//! - 使用 `parsers/` 读取光谱

use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::report::{ReportArgs, FILENAME_PLACEHOLDER};
use crate::error::{IrError, Result};
use crate::ir::{self, AnalysisConfig};
use crate::parsers;
use crate::utils::output;

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// 绘图与导出设置
struct ArtifactOptions {
    plot: Option<String>,
    export: Option<String>,
    dpi: u32,
}

/// 单个文件的处理产物
struct FileOutput {
    /// 报告文本（含换行）
    text: String,
    /// (输入文件, 谱图路径)
    plot: Option<(String, String)>,
    /// 谱图/导出失败信息，不影响报告文本
    warnings: Vec<String>,
}

/// 执行 report 命令
pub fn execute(args: ReportArgs) -> Result<()> {
    output::print_banner();

    // 参数在读取任何文件之前校验
    let config = args.analysis.to_config(args.suppress_empty);
    config.validate()?;

    let files = FileCollector::new(args.files.clone())
        .with_pattern(&args.pattern)
        .recursive(args.recursive)
        .collect()?;

    if files.is_empty() {
        return Err(IrError::NoFilesFound);
    }

    output::print_info(&format!("Requested to process {} files.", files.len()));

    let options = ArtifactOptions {
        plot: if args.no_plot {
            None
        } else {
            Some(args.plot.clone())
        },
        export: args.export.clone(),
        dpi: args.dpi,
    };

    let runner = BatchRunner::new(args.jobs);
    let result = runner.run(&files, |file| match process_file(file, &config, &options) {
        Ok(out) => ProcessResult::Success(out),
        Err(e) => ProcessResult::Failed(file.display().to_string(), e.to_string()),
    })?;

    // 按输入顺序写出
    let mut sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| IrError::FileWriteError {
                    path: path.display().to_string(),
                    source: e,
                })?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let sink_name = args
        .output
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdout>".to_string());

    for out in &result.outputs {
        if let Some((input, plot)) = &out.plot {
            output::print_plot(input, plot);
        }
        for warning in &out.warnings {
            output::print_warning(warning);
        }
        sink.write_all(out.text.as_bytes())
            .map_err(|e| IrError::FileWriteError {
                path: sink_name.clone(),
                source: e,
            })?;
    }
    sink.flush().map_err(|e| IrError::FileWriteError {
        path: sink_name,
        source: e,
    })?;

    // 打印统计
    output::print_separator();
    for (path, err) in &result.failures {
        output::print_error(&format!("{}: {}", path, err));
    }
    output::print_success(&format!(
        "Batch complete: {} files, {} success, {} failed",
        result.total(),
        result.success,
        result.failed
    ));

    Ok(())
}

/// 分析单个文件并生成报告文本与附属文件
fn process_file(
    path: &Path,
    config: &AnalysisConfig,
    options: &ArtifactOptions,
) -> Result<FileOutput> {
    let spectrum = parsers::parse_spectrum_file(path)?;
    let label = path.display().to_string();
    let report = ir::generate_report(&spectrum, &label, config)?;

    // 分析成功后，谱图与导出失败只降级为警告
    let mut warnings = Vec::new();

    let mut plot = None;
    if let Some(pattern) = &options.plot {
        let target = artifact_path(pattern, path);
        match ir::plot::render_plot(&report, &target, options.dpi) {
            Ok(()) => plot = Some((label.clone(), target.display().to_string())),
            Err(e) => warnings.push(format!(
                "{}: plot {} not written: {}",
                label,
                target.display(),
                e
            )),
        }
    }

    if let Some(pattern) = &options.export {
        let target = artifact_path(pattern, path);
        if let Err(e) = ir::export::to_csv(&report.overlay, &target) {
            warnings.push(format!(
                "{}: export {} not written: {}",
                label,
                target.display(),
                e
            ));
        }
    }

    Ok(FileOutput {
        text: render_text(&absolute_path(path), report.summary.as_deref()),
        plot,
        warnings,
    })
}

/// 单个文件的报告文本
fn render_text(path: &Path, summary: Option<&str>) -> String {
    let mut text = format!(">>> {}\n", path.display());
    if let Some(summary) = summary {
        text.push_str(summary);
        text.push('\n');
    }
    text
}

/// 以 `{FILENAME}` 替换生成输出路径（去掉输入的 `.csv` 后缀）
fn artifact_path(pattern: &str, input: &Path) -> PathBuf {
    let name = input.display().to_string();
    let stem = name.strip_suffix(".csv").unwrap_or(&name);
    PathBuf::from(pattern.replace(FILENAME_PLACEHOLDER, stem))
}

/// 转换为绝对路径（不解析符号链接）
fn absolute_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|dir| dir.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
