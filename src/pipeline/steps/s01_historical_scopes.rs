// ==========================================
// 水泥温室气体核算系统 - 步骤 01: 历史排放核算
// ==========================================
// 依据: GHG_Methodology_Spec_v1.0.md - 2. 计算口径
// 依据: Pipeline_Spec_v1.0.md - 步骤 01
// ==========================================
// 流程: 导入年度数据 → 逐年核算 Scope 1/2/3 → 结果落盘
// 输入: 年度运行数据源文件
// 输出: 01_historical_scopes.csv (+ 01_dq_report.json, 有告警时)
// ==========================================

use crate::engine::EmissionsEngine;
use crate::exporter::EmissionsCsvWriter;
use crate::importer::{YearlyImporter, YearlyImporterImpl};
use crate::pipeline::error::PipelineResult;
use crate::pipeline::step::{PipelineContext, PipelineStep, StepOutcome};
use std::path::PathBuf;
use tracing::{info, instrument};

// 输出文件名（对外契约,后续步骤按此名读取）
pub const OUTPUT_HISTORICAL_SCOPES: &str = "01_historical_scopes.csv";
pub const OUTPUT_DQ_REPORT: &str = "01_dq_report.json";

pub struct HistoricalScopesStep;

impl PipelineStep for HistoricalScopesStep {
    fn name(&self) -> &'static str {
        "01_historical_scopes"
    }

    fn prerequisite(&self) -> Option<&'static str> {
        None // 首步,输入为外部源文件
    }

    fn input_path(&self, ctx: &PipelineContext) -> PathBuf {
        ctx.source_path.clone()
    }

    #[instrument(skip(self, ctx))]
    fn run(&self, ctx: &PipelineContext) -> PipelineResult<StepOutcome> {
        // 1. 导入（解析 → 映射 → 清洗 → 校验）
        let importer = YearlyImporterImpl::with_defaults();
        let outcome = importer.import_from_file(&ctx.source_path)?;

        // 2. 逐年核算
        let engine = EmissionsEngine::new(ctx.config)?;
        let results = engine.compute_batch(&outcome.records)?;

        if let (Some(first), Some(last)) = (results.first(), results.last()) {
            info!(
                years = results.len(),
                from = first.year,
                to = last.year,
                "排放核算完成"
            );
        }

        // 3. 落盘（全有或全无）
        let writer = EmissionsCsvWriter;
        let output = ctx.output_path(OUTPUT_HISTORICAL_SCOPES);
        writer.write_emissions_csv(&output, &results)?;

        // DQ 告警随行落盘,便于操作员追溯
        if outcome.dq_report.has_warnings() {
            writer.write_dq_report_json(ctx.output_path(OUTPUT_DQ_REPORT), &outcome.dq_report)?;
        }

        Ok(StepOutcome {
            step: self.name(),
            rows: results.len(),
            output,
        })
    }
}
