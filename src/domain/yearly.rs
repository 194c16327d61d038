// ==========================================
// 水泥温室气体核算系统 - 年度运行数据领域模型
// ==========================================
// 依据: GHG_Methodology_Spec_v1.0.md - PART B 输入数据体系
// 依据: Field_Mapping_GHG_v1.0.md - 字段映射规范
// 依据: data_dictionary_v1.0.md - 数据字典
// ==========================================

use crate::domain::types::{LoadRegime, TransportLeg};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// RawYearlyRecord - 导入中间结构体
// ==========================================
// 用途: 导入管道中间产物（文件解析 → 字段映射 → 此结构）
// 生命周期: 仅在导入流程内,校验通过后晋升为 YearlyRecord
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawYearlyRecord {
    // 主键
    pub year: Option<i32>, // 财年（7月-次年6月）

    // ===== 产量与发运（吨）=====
    pub cement_t: Option<f64>,    // 水泥总产量
    pub local_t: Option<f64>,     // 本地发运量
    pub exp_n_t: Option<f64>,     // 北向出口量
    pub exp_s_t: Option<f64>,     // 南向出口量
    pub total_exp_t: Option<f64>, // 出口总量（直通列,不参与公式）

    // ===== 能耗强度 =====
    pub coal_int_kgpt: Option<f64>,   // 煤耗强度（kg 煤 / 吨水泥）
    pub elec_int_kwhpt: Option<f64>,  // 电耗强度（kWh / 吨水泥）

    // ===== 熟料与排放因子 =====
    pub clinker_ratio: Option<f64>,      // 熟料比（分数,>1.5 视为百分数输入）
    pub ncv: Option<f64>,                // 煤低位发热量（TJ/kt）
    pub co2_ef_tco2_per_tj: Option<f64>, // 燃烧排放因子（tCO2/TJ）
    pub oxid_frac: Option<f64>,          // 碳氧化率（[0,1]）
    pub calc_ef: Option<f64>,            // 煅烧排放因子（tCO2/吨熟料）
    pub grid_ef_kg_per_kwh: Option<f64>, // 电网排放因子（kgCO2/kWh）

    // ===== 运输参数 =====
    pub cap_allowed_t: Option<f64>,  // 卡车核定载重（吨,>0）
    pub cap_over_t: Option<f64>,     // 卡车超载载重（吨,>0）
    pub ef_allowed_gpkm: Option<f64>, // 核定载重排放因子（gCO2/km）
    pub ef_over_gpkm: Option<f64>,    // 超载排放因子（gCO2/km）
    pub dist_local_km: Option<f64>,   // 本地运距（km）
    pub dist_exp_n_km: Option<f64>,   // 北向出口运距（km）
    pub dist_exp_s_km: Option<f64>,   // 南向出口运距（km）

    // 元信息
    pub row_number: usize, // 原始文件行号（用于 DQ 报告）
}

// ==========================================
// YearlyRecord - 年度运行数据（校验后）
// ==========================================
// 红线: 所有字段必填且有限,引擎层只读,不做字符串匹配
// 用途: 导入层写出,引擎层输入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyRecord {
    pub year: i32,

    pub cement_t: f64,
    pub local_t: f64,
    pub exp_n_t: f64,
    pub exp_s_t: f64,
    pub total_exp_t: f64,

    pub coal_int_kgpt: f64,
    pub elec_int_kwhpt: f64,

    pub clinker_ratio: f64, // 已标准化为 [0,1] 分数
    pub ncv: f64,
    pub co2_ef_tco2_per_tj: f64,
    pub oxid_frac: f64,
    pub calc_ef: f64,
    pub grid_ef_kg_per_kwh: f64,

    pub cap_allowed_t: f64,
    pub cap_over_t: f64,
    pub ef_allowed_gpkm: f64,
    pub ef_over_gpkm: f64,
    pub dist_local_km: f64,
    pub dist_exp_n_km: f64,
    pub dist_exp_s_km: f64,
}

impl YearlyRecord {
    /// 运输段发运量（吨）
    pub fn leg_tonnage(&self, leg: TransportLeg) -> f64 {
        match leg {
            TransportLeg::Local => self.local_t,
            TransportLeg::ExportNorth => self.exp_n_t,
            TransportLeg::ExportSouth => self.exp_s_t,
        }
    }

    /// 运输段运距（km）
    pub fn leg_distance_km(&self, leg: TransportLeg) -> f64 {
        match leg {
            TransportLeg::Local => self.dist_local_km,
            TransportLeg::ExportNorth => self.dist_exp_n_km,
            TransportLeg::ExportSouth => self.dist_exp_s_km,
        }
    }

    /// 载重口径对应的卡车载重（吨）
    pub fn capacity_t(&self, regime: LoadRegime) -> f64 {
        match regime {
            LoadRegime::Allowed => self.cap_allowed_t,
            LoadRegime::Overload => self.cap_over_t,
        }
    }

    /// 载重口径对应的载重字段名（用于错误定位）
    pub fn capacity_field(regime: LoadRegime) -> &'static str {
        match regime {
            LoadRegime::Allowed => "cap_allowed_t",
            LoadRegime::Overload => "cap_over_t",
        }
    }

    /// 载重口径对应的单车排放因子（gCO2/km）
    pub fn ef_gpkm(&self, regime: LoadRegime) -> f64 {
        match regime {
            LoadRegime::Allowed => self.ef_allowed_gpkm,
            LoadRegime::Overload => self.ef_over_gpkm,
        }
    }
}

// ==========================================
// DQ 等级 / 违规 / 报告
// ==========================================
// 依据: Field_Mapping_GHG_v1.0.md - 6. 数据质量规则
// Error 级违规阻断整批导入（全有或全无）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DqLevel {
    Error,   // 阻断整批
    Warning, // 记录但放行
    Info,    // 仅提示
}

impl fmt::Display for DqLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DqLevel::Error => write!(f, "ERROR"),
            DqLevel::Warning => write!(f, "WARNING"),
            DqLevel::Info => write!(f, "INFO"),
        }
    }
}

/// 单条 DQ 违规
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DqViolation {
    pub row_number: usize,  // 原始文件行号
    pub year: Option<i32>,  // 财年（年份本身缺失时为 None）
    pub level: DqLevel,
    pub field: String,
    pub message: String,
}

/// DQ 统计摘要
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DqSummary {
    pub total_rows: usize, // 数据总行数
    pub promoted: usize,   // 晋升为 YearlyRecord 的行数
    pub error: usize,
    pub warning: usize,
    pub info: usize,
}

/// DQ 报告（可序列化为 JSON 落盘）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DqReport {
    pub source_file: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub summary: DqSummary,
    pub violations: Vec<DqViolation>,
}

impl DqReport {
    pub fn has_errors(&self) -> bool {
        self.summary.error > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.summary.warning > 0 || self.summary.info > 0
    }
}
