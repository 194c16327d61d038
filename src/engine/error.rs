// ==========================================
// 水泥温室气体核算系统 - 引擎层错误类型
// ==========================================
// 依据: GHG_Methodology_Spec_v1.0.md - 7. 错误分级
// 工具: thiserror 派生宏
// ==========================================

use crate::config::ConfigError;
use thiserror::Error;

/// 核算引擎错误类型
///
/// 批次级致命错误: 不重试,由操作员修正源数据后重跑
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("除零退化 ({year} 财年, 字段 {field}): 载重为 0,趟次无法计算")]
    DivisionByZero { year: i32, field: String },

    #[error("批次为空,无可汇总数据")]
    EmptyBatch,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result 类型别名
pub type CalcResult<T> = Result<T, CalcError>;
