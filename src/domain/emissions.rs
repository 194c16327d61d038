// ==========================================
// 水泥温室气体核算系统 - 排放结果领域模型
// ==========================================
// 依据: GHG_Methodology_Spec_v1.0.md - PART C 输出数据体系
// 红线: 输出列名与列序是对外契约,serde 字段名即 CSV 表头
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// EmissionsRecord - 年度排放结果
// ==========================================
// 用途: 引擎层写出,导出层与汇总层只读
// 不变量: 每条结果仅由同年 YearlyRecord + 固定配置推导,无跨年依赖
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionsRecord {
    pub year: i32,

    // ===== 直通列（吨）=====
    pub cement_t: f64,
    pub local_t: f64,
    pub exp_n_t: f64,
    pub exp_s_t: f64,
    pub total_exp_t: f64,

    // ===== 排放结果（tCO2）=====
    pub scope1a_combustion_tco2: f64,  // Scope 1a 燃烧
    pub scope1b_calcination_tco2: f64, // Scope 1b 煅烧
    pub scope1_total_tco2: f64,
    pub scope2_electricity_tco2: f64,  // Scope 2 外购电力
    pub scope3_local_tco2: f64,
    pub scope3_exp_n_tco2: f64,
    pub scope3_exp_s_tco2: f64,
    pub scope3_total_tco2: f64,
    pub total_emissions_tco2: f64,
}

// ==========================================
// EmissionsSummary - 批次汇总（均值与占比）
// ==========================================
// 用途: 汇总报告步骤输出,核算引擎之外的报表口径
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionsSummary {
    pub years: usize, // 参与汇总的年份数

    pub scope1_mean_tco2: f64,
    pub scope2_mean_tco2: f64,
    pub scope3_mean_tco2: f64,
    pub total_mean_tco2: f64,

    // 各 Scope 均值占总均值的百分比
    pub scope1_share_pct: f64,
    pub scope2_share_pct: f64,
    pub scope3_share_pct: f64,
}
