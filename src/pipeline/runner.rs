// ==========================================
// 水泥温室气体核算系统 - 流水线执行器
// ==========================================
// 依据: Pipeline_Spec_v1.0.md - 执行顺序与前置约束
// 职责: 按序执行编号步骤,执行前确认输入存在
// 红线: 缺输入即停,报出前置步骤,不做任何重试
// ==========================================

use crate::pipeline::error::{PipelineError, PipelineResult};
use crate::pipeline::step::{PipelineContext, PipelineStep, StepOutcome};
use crate::pipeline::steps::{HistoricalScopesStep, ScopeSummaryStep};
use tracing::{info, instrument};

// ==========================================
// PipelineRunner - 流水线执行器
// ==========================================
pub struct PipelineRunner {
    steps: Vec<Box<dyn PipelineStep>>,
}

impl PipelineRunner {
    /// 标准流水线（步骤 01 → 02）
    pub fn standard() -> Self {
        Self {
            steps: vec![
                Box::new(HistoricalScopesStep),
                Box::new(ScopeSummaryStep),
            ],
        }
    }

    /// 自定义步骤序列（测试或单步补跑用）
    pub fn with_steps(steps: Vec<Box<dyn PipelineStep>>) -> Self {
        Self { steps }
    }

    /// 按序执行全部步骤
    #[instrument(skip(self, ctx))]
    pub fn run(&self, ctx: &PipelineContext) -> PipelineResult<Vec<StepOutcome>> {
        // 输出目录先就位
        std::fs::create_dir_all(&ctx.out_dir)
            .map_err(|e| PipelineError::OutDirError(e.to_string()))?;

        let mut outcomes = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            let input = step.input_path(ctx);

            // 前置检查: 输入缺失即停,指明补跑哪一步
            if !input.exists() {
                return Err(match step.prerequisite() {
                    Some(prerequisite) => PipelineError::InputNotFound {
                        step: step.name().to_string(),
                        path: input.display().to_string(),
                        prerequisite: prerequisite.to_string(),
                    },
                    None => PipelineError::SourceNotFound {
                        step: step.name().to_string(),
                        path: input.display().to_string(),
                    },
                });
            }

            info!(step = step.name(), input = %input.display(), "开始执行步骤");
            let outcome = step.run(ctx)?;
            info!(
                step = outcome.step,
                rows = outcome.rows,
                output = %outcome.output.display(),
                "步骤执行完成"
            );
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
}
