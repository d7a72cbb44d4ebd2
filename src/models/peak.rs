//! # 吸收峰数据模型
//!
//! 峰检测的中间结果 (`PeakCandidate`) 与分类结果 (`Classification`, `PeakDescriptor`)。
//!
//! ## 依赖关系
//! - 被 `ir/` 使用
//! - 无外部模块依赖

use std::fmt;

/// 检测到的吸收峰候选
#[derive(Debug, Clone, PartialEq)]
pub struct PeakCandidate {
    /// 样本下标
    pub index: usize,
    /// 峰位波数 (cm⁻¹)
    pub wavenumber: f64,
    /// 峰位透过率 (%T)
    pub transmittance: f64,
    /// 相对局部基线的突出度 (%T)
    pub prominence: f64,
    /// 半突出度处的宽度，样本单位
    pub width_samples: f64,
    /// 半突出度处的宽度 (cm⁻¹)
    pub width: f64,
}

/// 强度等级
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    /// 强 (0 ≤ %T ≤ 33)
    Strong,
    /// 中 (33 < %T ≤ 66)
    Medium,
    /// 弱 (66 < %T ≤ 100)
    Weak,
}

impl Intensity {
    /// 报告中使用的缩写
    pub fn tag(self) -> &'static str {
        match self {
            Intensity::Strong => "s",
            Intensity::Medium => "m",
            Intensity::Weak => "w",
        }
    }

    /// 从缩写还原
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "s" => Some(Intensity::Strong),
            "m" => Some(Intensity::Medium),
            "w" => Some(Intensity::Weak),
            _ => None,
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// 单峰的定性描述
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub intensity: Intensity,
    /// 宽峰标记 ("br")
    pub broad: bool,
}

impl Classification {
    pub const BROAD_TAG: &'static str = "br";

    /// 不带括号的标签串，如 `s br`
    pub fn tags(&self, sep: &str) -> String {
        let mut parts = vec![self.intensity.tag()];
        if self.broad {
            parts.push(Self::BROAD_TAG);
        }
        parts.join(sep)
    }

    /// 带括号的标签串，如 `(s br)`
    pub fn descriptor(&self, sep: &str) -> String {
        format!("({})", self.tags(sep))
    }
}

/// 分类完成的峰
#[derive(Debug, Clone, PartialEq)]
pub struct PeakDescriptor {
    pub index: usize,
    pub wavenumber: f64,
    pub transmittance: f64,
    pub classification: Classification,
    /// 带括号的标签串
    pub tag: String,
}
