// ==========================================
// 水泥温室气体核算系统 - 排放核算引擎
// ==========================================
// 依据: GHG_Methodology_Spec_v1.0.md - 2. Scope 1/2/3 计算口径
// 红线: 逐年纯函数,无跨年依赖,无隐式全局量
// ==========================================
// 职责: YearlyRecord → EmissionsRecord 批量推导
// 输入: 校验后的年度记录 + 核算常量
// 输出: 等长同序的排放结果序列
// ==========================================

use crate::config::{ConfigError, EmissionConfig};
use crate::domain::emissions::EmissionsRecord;
use crate::domain::types::{LoadRegime, TransportLeg};
use crate::domain::yearly::YearlyRecord;
use crate::engine::error::{CalcError, CalcResult};
use tracing::instrument;

// ==========================================
// EmissionsEngine - 排放核算引擎
// ==========================================
pub struct EmissionsEngine {
    config: EmissionConfig,
}

impl EmissionsEngine {
    /// 创建排放核算引擎（构造时即校验配置）
    pub fn new(config: EmissionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EmissionConfig {
        &self.config
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 批量核算（一一对应,保持输入顺序,不丢行）
    #[instrument(skip(self, records), fields(count = records.len()))]
    pub fn compute_batch(&self, records: &[YearlyRecord]) -> CalcResult<Vec<EmissionsRecord>> {
        records.iter().map(|r| self.compute_single(r)).collect()
    }

    /// 单年核算
    ///
    /// 仅依赖本条记录与核算常量,不读不写任何外部状态
    pub fn compute_single(&self, record: &YearlyRecord) -> CalcResult<EmissionsRecord> {
        let scope1a_combustion_tco2 = self.scope1a_combustion(record);
        let scope1b_calcination_tco2 = self.scope1b_calcination(record);
        let scope1_total_tco2 = scope1a_combustion_tco2 + scope1b_calcination_tco2;

        let scope2_electricity_tco2 = self.scope2_electricity(record);

        let scope3_local_tco2 = self.scope3_leg(record, TransportLeg::Local)?;
        let scope3_exp_n_tco2 = self.scope3_leg(record, TransportLeg::ExportNorth)?;
        let scope3_exp_s_tco2 = self.scope3_leg(record, TransportLeg::ExportSouth)?;
        let scope3_total_tco2 = scope3_local_tco2 + scope3_exp_n_tco2 + scope3_exp_s_tco2;

        Ok(EmissionsRecord {
            year: record.year,
            cement_t: record.cement_t,
            local_t: record.local_t,
            exp_n_t: record.exp_n_t,
            exp_s_t: record.exp_s_t,
            total_exp_t: record.total_exp_t,
            scope1a_combustion_tco2,
            scope1b_calcination_tco2,
            scope1_total_tco2,
            scope2_electricity_tco2,
            scope3_local_tco2,
            scope3_exp_n_tco2,
            scope3_exp_s_tco2,
            scope3_total_tco2,
            total_emissions_tco2: scope1_total_tco2 + scope2_electricity_tco2 + scope3_total_tco2,
        })
    }

    // ==========================================
    // Scope 1a: 燃煤燃烧
    // ==========================================

    /// 燃烧排放（tCO2）
    ///
    /// 单位链: (kg煤/吨水泥 × 吨水泥) × (TJ/kt) × (tCO2/TJ) × 氧化率 / 1e6
    /// 1e6 为 kg → kt 换算
    fn scope1a_combustion(&self, r: &YearlyRecord) -> f64 {
        r.coal_int_kgpt * r.cement_t * r.ncv * r.co2_ef_tco2_per_tj * r.oxid_frac / 1e6
    }

    // ==========================================
    // Scope 1b: 煅烧
    // ==========================================

    /// 煅烧排放（tCO2）
    ///
    /// 口径由 calc_ef_is_per_clinker 决定:
    /// - 按吨熟料: clinker_t = cement_t × clinker_ratio, 再乘 calc_ef
    /// - 按吨水泥: cement_t × calc_ef
    fn scope1b_calcination(&self, r: &YearlyRecord) -> f64 {
        if self.config.calc_ef_is_per_clinker {
            let clinker_t = r.cement_t * r.clinker_ratio;
            clinker_t * r.calc_ef
        } else {
            r.cement_t * r.calc_ef
        }
    }

    // ==========================================
    // Scope 2: 外购电力
    // ==========================================

    /// 外购电力排放（tCO2）
    ///
    /// 单位链: (kWh/吨水泥 × 吨水泥) × (kgCO2/kWh) / 1000, kg → t
    fn scope2_electricity(&self, r: &YearlyRecord) -> f64 {
        r.elec_int_kwhpt * r.cement_t * r.grid_ef_kg_per_kwh / 1000.0
    }

    // ==========================================
    // Scope 3: 公路运输（按运输段）
    // ==========================================

    /// 单运输段排放（tCO2）
    ///
    /// 两种载重口径分别算趟次与 gCO2,按固定权重混合后 g → t（/1e6）。
    /// 载重为 0 时趟次除法退化,必须报出财年与字段。
    fn scope3_leg(&self, r: &YearlyRecord, leg: TransportLeg) -> CalcResult<f64> {
        let tonnage = r.leg_tonnage(leg);
        let distance_km = r.leg_distance_km(leg);

        let mut grams = [0.0_f64; 2];
        for (slot, regime) in [LoadRegime::Allowed, LoadRegime::Overload]
            .into_iter()
            .enumerate()
        {
            let capacity = r.capacity_t(regime);
            if capacity == 0.0 {
                return Err(CalcError::DivisionByZero {
                    year: r.year,
                    field: YearlyRecord::capacity_field(regime).to_string(),
                });
            }
            let trips = tonnage / capacity;
            grams[slot] = trips * distance_km * r.ef_gpkm(regime);
        }

        let blended_g =
            self.config.allowed_frac * grams[0] + self.config.overload_frac * grams[1];
        Ok(blended_g / 1e6)
    }
}
