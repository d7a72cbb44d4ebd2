//! # 光谱数据模型
//!
//! 定义红外透过率光谱的统一表示：等长的波数序列与透过率序列。
//!
//! ## 依赖关系
//! - 被 `parsers/spectrum_csv.rs` 和 `ir/` 使用
//! - 无外部模块依赖

use crate::error::{IrError, Result};

/// 红外光谱
///
/// 样本顺序即报告顺序：峰按样本下标升序输出，与波数升降无关。
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    /// 波数 (cm⁻¹)，通常从 ~4000 递减到 ~450
    pub wavenumbers: Vec<f64>,
    /// 透过率 (%T)
    pub transmittance: Vec<f64>,
}

impl Spectrum {
    /// 创建光谱，校验两列等长、非空且均为有限数值
    pub fn new(wavenumbers: Vec<f64>, transmittance: Vec<f64>) -> Result<Self> {
        if wavenumbers.len() != transmittance.len() {
            return Err(IrError::data_format(format!(
                "column length mismatch: {} wavenumbers vs {} transmittance values",
                wavenumbers.len(),
                transmittance.len()
            )));
        }
        if wavenumbers.is_empty() {
            return Err(IrError::data_format("spectrum contains no data points"));
        }
        if let Some(i) = wavenumbers
            .iter()
            .zip(transmittance.iter())
            .position(|(w, t)| !w.is_finite() || !t.is_finite())
        {
            return Err(IrError::data_format(format!(
                "non-finite value at data point {}",
                i
            )));
        }

        Ok(Spectrum {
            wavenumbers,
            transmittance,
        })
    }

    /// 数据点数
    pub fn len(&self) -> usize {
        self.wavenumbers.len()
    }

    /// 光谱总是非空（由构造函数保证）
    pub fn is_empty(&self) -> bool {
        self.wavenumbers.is_empty()
    }

    /// 反转信号 `100 - %T`，吸收谷变为峰
    pub fn inverted(&self) -> Vec<f64> {
        self.transmittance.iter().map(|t| 100.0 - t).collect()
    }

    /// 平均采样间隔 (cm⁻¹ / 点)
    ///
    /// 单点或波数全部相同时返回 1.0，此时阈值按样本单位解释。
    pub fn sample_spacing(&self) -> f64 {
        let n = self.len();
        if n < 2 {
            return 1.0;
        }
        let span = (self.wavenumbers[n - 1] - self.wavenumbers[0]).abs();
        let spacing = span / (n - 1) as f64;
        if spacing > 0.0 {
            spacing
        } else {
            1.0
        }
    }
}
