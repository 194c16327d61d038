// ==========================================
// 水泥温室气体核算系统 - 步骤 02: 批次汇总报告
// ==========================================
// 依据: Pipeline_Spec_v1.0.md - 步骤 02
// ==========================================
// 流程: 读回步骤 01 输出 → 均值/占比汇总 → 汇总落盘
// 输入: 01_historical_scopes.csv
// 输出: 02_scope_summary.csv
// ==========================================

use crate::engine::SummaryEngine;
use crate::exporter::EmissionsCsvWriter;
use crate::pipeline::error::PipelineResult;
use crate::pipeline::step::{PipelineContext, PipelineStep, StepOutcome};
use crate::pipeline::steps::s01_historical_scopes::OUTPUT_HISTORICAL_SCOPES;
use std::path::PathBuf;
use tracing::{info, instrument};

// 输出文件名
pub const OUTPUT_SCOPE_SUMMARY: &str = "02_scope_summary.csv";

pub struct ScopeSummaryStep;

impl PipelineStep for ScopeSummaryStep {
    fn name(&self) -> &'static str {
        "02_scope_summary"
    }

    fn prerequisite(&self) -> Option<&'static str> {
        Some("01_historical_scopes")
    }

    fn input_path(&self, ctx: &PipelineContext) -> PathBuf {
        ctx.output_path(OUTPUT_HISTORICAL_SCOPES)
    }

    #[instrument(skip(self, ctx))]
    fn run(&self, ctx: &PipelineContext) -> PipelineResult<StepOutcome> {
        // 1. 读回前置步骤输出（步骤间契约: 文件,不共享内存）
        let writer = EmissionsCsvWriter;
        let records = writer.read_emissions_csv(self.input_path(ctx))?;

        // 2. 汇总
        let summary = SummaryEngine::new().summarize(&records)?;
        info!(
            years = summary.years,
            scope1_mean_tco2 = summary.scope1_mean_tco2,
            scope1_share_pct = summary.scope1_share_pct,
            scope2_mean_tco2 = summary.scope2_mean_tco2,
            scope2_share_pct = summary.scope2_share_pct,
            scope3_mean_tco2 = summary.scope3_mean_tco2,
            scope3_share_pct = summary.scope3_share_pct,
            total_mean_tco2 = summary.total_mean_tco2,
            "排放占比汇总完成"
        );

        // 3. 落盘
        let output = ctx.output_path(OUTPUT_SCOPE_SUMMARY);
        writer.write_summary_csv(&output, &summary)?;

        Ok(StepOutcome {
            step: self.name(),
            rows: 1,
            output,
        })
    }
}
