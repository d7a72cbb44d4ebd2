//! # 吸收峰定性分类
//!
//! 根据峰位透过率划分强/中/弱，根据宽度标记宽峰。
//!
//! | 透过率 (%T)     | 标签 |
//! |-----------------|------|
//! | 0 ≤ T ≤ 33      | s    |
//! | 33 < T ≤ 66     | m    |
//! | 66 < T ≤ 100    | w    |
//!
//! 超出 0-100 的透过率直接报错，不做截断。
//!
//! ## 依赖关系
//! - 被 `ir/report.rs` 调用
//! - 使用 `models/peak.rs`

use crate::error::{IrError, Result};
use crate::models::{Classification, Intensity};

/// 强度分级
pub fn intensity(transmittance: f64) -> Result<Intensity> {
    let t = transmittance;
    if (0.0..=33.0).contains(&t) {
        Ok(Intensity::Strong)
    } else if t > 33.0 && t <= 66.0 {
        Ok(Intensity::Medium)
    } else if t > 66.0 && t <= 100.0 {
        Ok(Intensity::Weak)
    } else {
        Err(IrError::OutOfRange { value: t })
    }
}

/// 对单峰分类
pub fn classify(transmittance: f64, width: f64, broad_width: f64) -> Result<Classification> {
    Ok(Classification {
        intensity: intensity(transmittance)?,
        broad: width > broad_width,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_boundaries() {
        assert_eq!(intensity(0.0).unwrap(), Intensity::Strong);
        assert_eq!(intensity(33.0).unwrap(), Intensity::Strong);
        assert_eq!(intensity(33.0001).unwrap(), Intensity::Medium);
        assert_eq!(intensity(66.0).unwrap(), Intensity::Medium);
        assert_eq!(intensity(66.0001).unwrap(), Intensity::Weak);
        assert_eq!(intensity(100.0).unwrap(), Intensity::Weak);
    }

    #[test]
    fn test_out_of_range() {
        for t in [100.0001, -0.0001, f64::NAN, f64::INFINITY] {
            assert!(matches!(intensity(t), Err(IrError::OutOfRange { .. })));
        }
    }

    #[test]
    fn test_broad_flag() {
        let at = classify(50.0, 100.0, 100.0).unwrap();
        assert!(!at.broad);
        let above = classify(50.0, 100.0 + 1e-9, 100.0).unwrap();
        assert!(above.broad);
    }

    #[test]
    fn test_descriptor() {
        let describe = |t: f64, w: f64, sep: &str| classify(t, w, 100.0).map(|c| c.descriptor(sep));
        assert_eq!(describe(10.0, 150.0, " ").unwrap(), "(s br)");
        assert_eq!(describe(80.0, 5.0, " ").unwrap(), "(w)");
        assert_eq!(describe(50.0, 101.0, " ").unwrap(), "(m br)");
        assert_eq!(describe(50.0, 101.0, "/").unwrap(), "(m/br)");
        assert!(describe(120.0, 5.0, " ").is_err());
    }
}
