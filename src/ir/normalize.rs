//! # 透过率归一化
//!
//! 将最强吸收（最低透过率）拉伸到 0 %T，基线保持 100 %T：
//! `T' = 100 - 100 * (100 - T) / max(100 - T)`。
//!
//! ## 依赖关系
//! - 被 `ir/report.rs` 调用
//! - 使用 `models/spectrum.rs`

use crate::error::{IrError, Result};
use crate::models::Spectrum;

/// 按需归一化光谱
///
/// `enabled` 为 false 时原样返回副本。
pub fn normalize(spectrum: &Spectrum, enabled: bool) -> Result<Spectrum> {
    if !enabled {
        return Ok(spectrum.clone());
    }

    let inverted = spectrum.inverted();
    let max_inverted = inverted.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // 全透射（或高于 100 %T）的光谱没有可供缩放的吸收
    if max_inverted <= 0.0 {
        return Err(IrError::DegenerateInput {
            reason: format!(
                "no absorption to normalize against (minimum transmittance {:.3} %T)",
                100.0 - max_inverted
            ),
        });
    }

    let transmittance = inverted
        .iter()
        .map(|a| 100.0 - 100.0 * a / max_inverted)
        .collect();

    Ok(Spectrum {
        wavenumbers: spectrum.wavenumbers.clone(),
        transmittance,
    })
}
