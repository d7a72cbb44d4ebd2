//! # 红外峰分析模块
//!
//! 提供红外透过率光谱的峰检测、分类与报告功能。
//!
//! ## 子模块
//! - `config`: 分析参数与默认值
//! - `normalize`: 透过率归一化
//! - `detector`: 吸收峰检测
//! - `classifier`: 强度/宽峰分类
//! - `report`: 报告生成与汇总行解析
//! - `plot`: 图表生成
//! - `export`: 标注数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/`

pub mod classifier;
pub mod config;
pub mod detector;
pub mod export;
pub mod normalize;
pub mod plot;
pub mod report;

pub use config::{AnalysisConfig, EmptySummary};
pub use report::{generate_report, SpectrumReport};
