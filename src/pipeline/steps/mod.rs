// ==========================================
// 水泥温室气体核算系统 - 编号步骤
// ==========================================
// 依据: Pipeline_Spec_v1.0.md - 步骤清单
// 步骤按序号依次执行,每步读前置输出文件
// ==========================================

pub mod s01_historical_scopes;
pub mod s02_scope_summary;

pub use s01_historical_scopes::{
    HistoricalScopesStep, OUTPUT_DQ_REPORT, OUTPUT_HISTORICAL_SCOPES,
};
pub use s02_scope_summary::{ScopeSummaryStep, OUTPUT_SCOPE_SUMMARY};
