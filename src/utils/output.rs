//! # 美化输出工具
//!
//! 提供统一的终端输出样式。报告正文占用 STDOUT，
//! 这里的提示信息全部写到 STDERR。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印启动横幅
pub fn print_banner() {
    let rule = "=".repeat(80);
    eprintln!("{}", rule.dimmed());
    eprintln!("{}", "IR Spectral Processing".bold());
    eprintln!("{}", rule.dimmed());
}

/// 打印成功消息
pub fn print_success(msg: &str) {
    eprintln!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    eprintln!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印绘图输出消息
pub fn print_plot(from: &str, to: &str) {
    eprintln!("Plot {} {} {}", from.dimmed(), "-->".cyan(), to);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    eprintln!("\n{}", line.dimmed());
    eprintln!("  {}", title.bold());
    eprintln!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    eprintln!("{}", "─".repeat(60).dimmed());
}
