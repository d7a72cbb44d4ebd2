//! # tabulate 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/tabulate.rs`

use clap::Args;
use std::path::PathBuf;

/// tabulate 子命令参数
#[derive(Args, Debug)]
pub struct TabulateArgs {
    /// Report file previously written by `irpeaks report -o`
    pub input: PathBuf,

    /// Tag separator used when the report was written
    #[arg(long, default_value = " ")]
    pub separator: String,
}
