// ==========================================
// 水泥温室气体核算系统 - 配置层
// ==========================================
// 依据: GHG_Methodology_Spec_v1.0.md - 11. 配置项全集
// ==========================================
// 职责: 核算常量管理
// 存储: 内置默认值 + 可选 JSON 覆写文件
// ==========================================

pub mod emission_config;

// 重导出核心配置类型
pub use emission_config::{ConfigError, EmissionConfig};
