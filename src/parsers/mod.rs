//! # 解析器模块
//!
//! 提供光谱仪导出文件的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: spectrum_csv

pub mod spectrum_csv;

pub use spectrum_csv::parse_spectrum_file;
