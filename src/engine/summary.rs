// ==========================================
// 水泥温室气体核算系统 - 批次汇总引擎
// ==========================================
// 依据: GHG_Methodology_Spec_v1.0.md - 3. 报表口径
// 职责: 排放结果序列 → 均值与占比
// 红线: 报表口径独立于核算引擎,只读 EmissionsRecord
// ==========================================

use crate::domain::emissions::{EmissionsRecord, EmissionsSummary};
use crate::engine::error::{CalcError, CalcResult};

pub struct SummaryEngine;

impl SummaryEngine {
    pub fn new() -> Self {
        Self
    }

    /// 计算批次均值与各 Scope 占比
    ///
    /// 占比按均值口径: scope_mean / total_mean × 100
    /// 总均值为 0 时占比记 0（全零批次合法,如停产年份表）
    pub fn summarize(&self, records: &[EmissionsRecord]) -> CalcResult<EmissionsSummary> {
        if records.is_empty() {
            return Err(CalcError::EmptyBatch);
        }

        let n = records.len() as f64;
        let scope1_mean_tco2 = records.iter().map(|r| r.scope1_total_tco2).sum::<f64>() / n;
        let scope2_mean_tco2 = records.iter().map(|r| r.scope2_electricity_tco2).sum::<f64>() / n;
        let scope3_mean_tco2 = records.iter().map(|r| r.scope3_total_tco2).sum::<f64>() / n;
        let total_mean_tco2 = records.iter().map(|r| r.total_emissions_tco2).sum::<f64>() / n;

        let share = |mean: f64| {
            if total_mean_tco2 == 0.0 {
                0.0
            } else {
                mean / total_mean_tco2 * 100.0
            }
        };

        Ok(EmissionsSummary {
            years: records.len(),
            scope1_mean_tco2,
            scope2_mean_tco2,
            scope3_mean_tco2,
            total_mean_tco2,
            scope1_share_pct: share(scope1_mean_tco2),
            scope2_share_pct: share(scope2_mean_tco2),
            scope3_share_pct: share(scope3_mean_tco2),
        })
    }
}

impl Default for SummaryEngine {
    fn default() -> Self {
        Self::new()
    }
}
