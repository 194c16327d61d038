// ==========================================
// 水泥温室气体核算系统 - 流水线层
// ==========================================
// 依据: Pipeline_Spec_v1.0.md
// ==========================================
// 职责: 编号步骤的顺序执行与前置约束
// 红线: 步骤间只通过输出文件衔接,无内存共享
// ==========================================

pub mod error;
pub mod runner;
pub mod step;
pub mod steps;

// 重导出核心类型
pub use error::{PipelineError, PipelineResult};
pub use runner::PipelineRunner;
pub use step::{PipelineContext, PipelineStep, StepOutcome};
pub use steps::{
    HistoricalScopesStep, ScopeSummaryStep, OUTPUT_DQ_REPORT, OUTPUT_HISTORICAL_SCOPES,
    OUTPUT_SCOPE_SUMMARY,
};
