// ==========================================
// 水泥温室气体核算系统 - 领域模型层
// ==========================================
// 依据: GHG_Methodology_Spec_v1.0.md - PART B/C 数据体系
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含文件访问逻辑,不含引擎逻辑
// ==========================================

pub mod emissions;
pub mod types;
pub mod yearly;

// 重导出核心类型
pub use emissions::{EmissionsRecord, EmissionsSummary};
pub use types::{LoadRegime, TransportLeg};
pub use yearly::{DqLevel, DqReport, DqSummary, DqViolation, RawYearlyRecord, YearlyRecord};
