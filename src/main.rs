//! # irpeaks - 红外光谱快速处理工具
//!
//! 读取光谱仪导出的红外透过率 CSV，自动找峰、按强度与宽度分类，
//! 输出 `IR (ATR): ...` 格式的峰报告并绘制带标注的谱图。
//!
//! ## 子命令
//! - `report`  - 批量分析并写出报告/谱图
//! - `inspect` - 单个光谱的详细峰表
//! - `tabulate` - 报告文件转表格
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (CSV 解析)
//!   │     ├── ir/        (归一化、找峰、分类、报告、绘图)
//!   │     ├── batch/     (文件收集与并行执行)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod ir;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
