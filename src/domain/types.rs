// ==========================================
// 水泥温室气体核算系统 - 领域类型定义
// ==========================================
// 依据: GHG_Methodology_Spec_v1.0.md - 0.2 运输段与载重口径
// 依据: data_dictionary_v1.0.md - 数据字典
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 运输段 (Transport Leg)
// ==========================================
// Scope 3 按三个运输段分别核算,段间互不混算
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportLeg {
    Local,       // 本地发运
    ExportNorth, // 北向出口
    ExportSouth, // 南向出口
}

impl TransportLeg {
    // 固定遍历顺序,与输出列顺序一致
    pub const ALL: [TransportLeg; 3] = [
        TransportLeg::Local,
        TransportLeg::ExportNorth,
        TransportLeg::ExportSouth,
    ];
}

impl fmt::Display for TransportLeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportLeg::Local => write!(f, "LOCAL"),
            TransportLeg::ExportNorth => write!(f, "EXP_N"),
            TransportLeg::ExportSouth => write!(f, "EXP_S"),
        }
    }
}

// ==========================================
// 载重口径 (Load Regime)
// ==========================================
// 红线: 两种载重口径按固定权重混算,权重之和必须为 1.0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoadRegime {
    Allowed,  // 核定载重
    Overload, // 超载
}

impl fmt::Display for LoadRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadRegime::Allowed => write!(f, "ALLOWED"),
            LoadRegime::Overload => write!(f, "OVERLOAD"),
        }
    }
}
