// ==========================================
// 水泥温室气体核算系统 - 核算配置
// ==========================================
// 依据: GHG_Methodology_Spec_v1.0.md - 11. 配置项全集
// ==========================================
// 职责: 核算常量的加载与校验
// 红线: 配置以显式参数传入引擎,不允许隐式全局量
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

// 载重口径权重校验容差
const SPLIT_SUM_TOLERANCE: f64 = 1e-9;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {0}")]
    FileReadError(String),

    #[error("配置文件格式错误: {0}")]
    ParseError(String),

    #[error("载重权重之和必须为 1.0: allowed_frac={allowed} + overload_frac={overload} = {sum}")]
    SplitNotUnit {
        allowed: f64,
        overload: f64,
        sum: f64,
    },

    #[error("配置值超出范围 (字段 {field}): {value} 不在 [0,1] 内")]
    OutOfRange { field: String, value: f64 },
}

// ==========================================
// EmissionConfig - 核算常量
// ==========================================
// 这些是批次级常量,不随年份变化
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmissionConfig {
    /// 煅烧排放因子口径: true = 按吨熟料, false = 按吨水泥
    pub calc_ef_is_per_clinker: bool,

    /// 核定载重车次权重
    pub allowed_frac: f64,

    /// 超载车次权重
    pub overload_frac: f64,
}

impl Default for EmissionConfig {
    fn default() -> Self {
        // 口径: 煅烧因子按吨熟料;车队 40% 核定载重 / 60% 超载
        Self {
            calc_ef_is_per_clinker: true,
            allowed_frac: 0.40,
            overload_frac: 0.60,
        }
    }
}

impl EmissionConfig {
    /// 从 JSON 配置文件加载并校验
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: EmissionConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置
    ///
    /// # 规则
    /// - allowed_frac / overload_frac 各自落在 [0,1]
    /// - 两者之和为 1.0（容差 1e-9）
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("allowed_frac", self.allowed_frac),
            ("overload_frac", self.overload_frac),
        ] {
            if !(0.0..=1.0).contains(&value) || !value.is_finite() {
                return Err(ConfigError::OutOfRange {
                    field: field.to_string(),
                    value,
                });
            }
        }

        let sum = self.allowed_frac + self.overload_frac;
        if (sum - 1.0).abs() > SPLIT_SUM_TOLERANCE {
            return Err(ConfigError::SplitNotUnit {
                allowed: self.allowed_frac,
                overload: self.overload_frac,
                sum,
            });
        }

        Ok(())
    }
}
