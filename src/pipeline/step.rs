// ==========================================
// 水泥温室气体核算系统 - 流水线步骤接口
// ==========================================
// 依据: Pipeline_Spec_v1.0.md - 步骤契约
// 职责: 定义编号步骤的统一接口
// 红线: 每步只读前置输出,写本步输出,步骤间无内存共享
// ==========================================

use crate::config::EmissionConfig;
use crate::pipeline::error::PipelineResult;
use std::path::{Path, PathBuf};

// ==========================================
// PipelineContext - 流水线运行上下文
// ==========================================
#[derive(Debug, Clone)]
pub struct PipelineContext {
    /// 年度运行数据源文件（.xlsx/.xls/.csv）
    pub source_path: PathBuf,

    /// 输出目录（各步骤 CSV/JSON 落盘位置）
    pub out_dir: PathBuf,

    /// 核算常量
    pub config: EmissionConfig,
}

impl PipelineContext {
    pub fn new<S: AsRef<Path>, O: AsRef<Path>>(
        source_path: S,
        out_dir: O,
        config: EmissionConfig,
    ) -> Self {
        Self {
            source_path: source_path.as_ref().to_path_buf(),
            out_dir: out_dir.as_ref().to_path_buf(),
            config,
        }
    }

    /// 输出目录下的文件路径
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.out_dir.join(file_name)
    }
}

// ==========================================
// StepOutcome - 步骤执行结果
// ==========================================
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub step: &'static str,
    pub rows: usize,
    pub output: PathBuf,
}

// ==========================================
// PipelineStep Trait
// ==========================================
// 实现者: HistoricalScopesStep, ScopeSummaryStep
pub trait PipelineStep {
    /// 步骤名（带序号,亦作日志与错误定位用）
    fn name(&self) -> &'static str;

    /// 前置步骤名（首步为 None）
    fn prerequisite(&self) -> Option<&'static str>;

    /// 本步骤的输入文件路径
    fn input_path(&self, ctx: &PipelineContext) -> PathBuf;

    /// 执行步骤（输入已由 Runner 确认存在）
    fn run(&self, ctx: &PipelineContext) -> PipelineResult<StepOutcome>;
}
