//! # 数据模型模块
//!
//! 定义光谱与吸收峰的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`ir/` 和 `commands/` 使用
//! - 子模块: spectrum, peak

pub mod peak;
pub mod spectrum;

pub use peak::{Classification, Intensity, PeakCandidate, PeakDescriptor};
pub use spectrum::Spectrum;
