// ==========================================
// 水泥温室气体核算系统 - 流水线错误类型
// ==========================================
// 依据: Pipeline_Spec_v1.0.md - 步骤顺序与前置约束
// 工具: thiserror 派生宏
// ==========================================

use crate::config::ConfigError;
use crate::engine::CalcError;
use crate::exporter::ExportError;
use crate::importer::ImportError;
use thiserror::Error;

/// 流水线错误类型
///
/// 不重试: 静态文件上的确定性批处理,任何失败都由操作员
/// 修正源数据或补跑前置步骤后重跑。
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("源数据文件不存在 (步骤 {step}): {path},请检查年度数据文件路径")]
    SourceNotFound { step: String, path: String },

    #[error("输入文件不存在 (步骤 {step}): {path},请先运行前置步骤 {prerequisite}")]
    InputNotFound {
        step: String,
        path: String,
        prerequisite: String,
    },

    #[error("输出目录创建失败: {0}")]
    OutDirError(String),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result 类型别名
pub type PipelineResult<T> = Result<T, PipelineError>;
