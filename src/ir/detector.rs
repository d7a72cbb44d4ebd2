//! # 吸收峰检测
//!
//! 在反转信号 `100 - %T` 上寻找局部极大值，并按突出度、半高宽和最小间距筛选。
//!
//! ## 算法概述
//! 1. 局部极大值（平台取中点）
//! 2. 突出度：向两侧行进，直到遇到不低于峰高的点或信号边界，
//!    取两侧最低点中较高者为基线
//! 3. 宽度：在 `峰高 - 突出度/2` 处线性插值得到左右交点
//! 4. 间距：按突出度从高到低保留，距离不足的较弱峰被剔除；
//!    突出度相同时下标小者优先
//!
//! 宽度和间距阈值以 cm⁻¹ 给出，按光谱平均采样间隔换算为样本单位。
//!
//! ## 依赖关系
//! - 被 `ir/report.rs` 调用
//! - 使用 `models/` 的 Spectrum, PeakCandidate
//! - 使用 `ir/config.rs` 的 DetectionThresholds

use crate::error::Result;
use crate::ir::config::DetectionThresholds;
use crate::models::{PeakCandidate, Spectrum};

use std::cmp::Ordering;

/// 局部极大值（含平台边界）
#[derive(Debug, Clone, Copy)]
struct LocalMax {
    index: usize,
    left_edge: usize,
    right_edge: usize,
}

/// 突出度与宽度计算结果
#[derive(Debug, Clone, Copy)]
struct PeakShape {
    prominence: f64,
    width_samples: f64,
}

/// 检测光谱中的吸收峰，按样本下标升序返回
pub fn detect_peaks(
    spectrum: &Spectrum,
    thresholds: &DetectionThresholds,
) -> Result<Vec<PeakCandidate>> {
    thresholds.validate()?;

    let signal = spectrum.inverted();
    let spacing = spectrum.sample_spacing();

    let mut accepted: Vec<(LocalMax, PeakShape)> = Vec::new();
    for peak in local_maxima(&signal) {
        let shape = peak_shape(&signal, &peak);
        if shape.prominence < thresholds.min_prominence {
            continue;
        }
        if shape.width_samples * spacing < thresholds.min_width {
            continue;
        }
        accepted.push((peak, shape));
    }

    let keep = select_by_distance(&accepted, thresholds.min_distance / spacing);

    let candidates = accepted
        .into_iter()
        .zip(keep)
        .filter(|(_, keep)| *keep)
        .map(|((peak, shape), _)| PeakCandidate {
            index: peak.index,
            wavenumber: spectrum.wavenumbers[peak.index],
            transmittance: spectrum.transmittance[peak.index],
            prominence: shape.prominence,
            width_samples: shape.width_samples,
            width: shape.width_samples * spacing,
        })
        .collect();

    Ok(candidates)
}

/// 查找局部极大值，平台取中点（偏左）
fn local_maxima(x: &[f64]) -> Vec<LocalMax> {
    let mut maxima = Vec::new();
    if x.len() < 3 {
        return maxima;
    }

    let i_max = x.len() - 1;
    let mut i = 1;
    while i < i_max {
        if x[i - 1] < x[i] {
            let mut ahead = i + 1;
            while ahead < i_max && x[ahead] == x[i] {
                ahead += 1;
            }
            if x[ahead] < x[i] {
                let right_edge = ahead - 1;
                maxima.push(LocalMax {
                    index: (i + right_edge) / 2,
                    left_edge: i,
                    right_edge,
                });
                i = ahead;
            }
        }
        i += 1;
    }

    maxima
}

/// 计算突出度与半突出度宽度
fn peak_shape(x: &[f64], peak: &LocalMax) -> PeakShape {
    let height = x[peak.index];

    // 左侧基线
    let mut left_min = height;
    let mut left_base = peak.left_edge;
    let mut i = peak.left_edge;
    while i > 0 {
        i -= 1;
        if x[i] >= height {
            break;
        }
        if x[i] < left_min {
            left_min = x[i];
            left_base = i;
        }
    }

    // 右侧基线
    let mut right_min = height;
    let mut right_base = peak.right_edge;
    let mut i = peak.right_edge;
    while i + 1 < x.len() {
        i += 1;
        if x[i] >= height {
            break;
        }
        if x[i] < right_min {
            right_min = x[i];
            right_base = i;
        }
    }

    let prominence = height - left_min.max(right_min);
    let half = height - 0.5 * prominence;

    let mut i = peak.index;
    while left_base < i && half < x[i] {
        i -= 1;
    }
    let mut left_ip = i as f64;
    if x[i] < half {
        left_ip += (half - x[i]) / (x[i + 1] - x[i]);
    }

    let mut i = peak.index;
    while i < right_base && half < x[i] {
        i += 1;
    }
    let mut right_ip = i as f64;
    if x[i] < half {
        right_ip -= (half - x[i]) / (x[i - 1] - x[i]);
    }

    PeakShape {
        prominence,
        width_samples: right_ip - left_ip,
    }
}

/// 按最小间距筛选，返回与输入对齐的保留标记
fn select_by_distance(peaks: &[(LocalMax, PeakShape)], distance: f64) -> Vec<bool> {
    let n = peaks.len();
    let mut keep = vec![true; n];
    if distance <= 0.0 || n < 2 {
        return keep;
    }

    // 突出度降序，相同时下标升序
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        peaks[b]
            .1
            .prominence
            .partial_cmp(&peaks[a].1.prominence)
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });

    for j in order {
        if !keep[j] {
            continue;
        }
        let center = peaks[j].0.index;

        let mut k = j;
        while k > 0 && ((center - peaks[k - 1].0.index) as f64) < distance {
            k -= 1;
            keep[k] = false;
        }

        let mut k = j + 1;
        while k < n && ((peaks[k].0.index - center) as f64) < distance {
            keep[k] = false;
            k += 1;
        }
    }

    keep
}
