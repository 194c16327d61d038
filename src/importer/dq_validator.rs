// ==========================================
// 水泥温室气体核算系统 - 数据质量校验器实现
// ==========================================
// 依据: Field_Mapping_GHG_v1.0.md - 6. 数据质量规则
// 职责: 必填/有限性/范围/年份唯一性校验 + 晋升 + DQ 报告生成
// 红线: Error 级违规阻断整批,必须报出财年与字段
// ==========================================

use crate::domain::yearly::{
    DqLevel, DqReport, DqSummary, DqViolation, RawYearlyRecord, YearlyRecord,
};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::yearly_importer_trait::DqValidator as DqValidatorTrait;
use chrono::Utc;
use std::collections::HashSet;

// 出口拆分一致性容差（吨）
const EXPORT_SPLIT_TOLERANCE_T: f64 = 0.5;

pub struct DqValidator;

impl DqValidator {
    pub fn new() -> Self {
        Self
    }

    /// 必填数值字段提取（缺失/非有限即 Error）
    fn require(value: Option<f64>, year: i32, field: &str) -> ImportResult<f64> {
        let v = value.ok_or_else(|| ImportError::MissingField {
            year,
            field: field.to_string(),
        })?;
        if !v.is_finite() {
            return Err(ImportError::NonFinite {
                year,
                field: field.to_string(),
                value: v,
            });
        }
        Ok(v)
    }
}

impl Default for DqValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl DqValidatorTrait for DqValidator {
    /// 校验主键（year 非空且批次内唯一）
    fn validate_year_keys(&self, records: &[RawYearlyRecord]) -> Vec<DqViolation> {
        let mut violations = Vec::new();
        let mut seen_years = HashSet::new();

        for record in records {
            let year = match record.year {
                None => {
                    violations.push(DqViolation {
                        row_number: record.row_number,
                        year: None,
                        level: DqLevel::Error,
                        field: "year".to_string(),
                        message: "财年缺失".to_string(),
                    });
                    continue;
                }
                Some(y) => y,
            };

            // 财年重复（同批次内）
            if !seen_years.insert(year) {
                violations.push(DqViolation {
                    row_number: record.row_number,
                    year: Some(year),
                    level: DqLevel::Error,
                    field: "year".to_string(),
                    message: format!("财年重复: {}", year),
                });
            }
        }

        violations
    }

    /// 校验数值范围
    fn validate_ranges(&self, record: &RawYearlyRecord) -> Vec<DqViolation> {
        let mut violations = Vec::new();

        // 载重必须为正（引擎要做除法）
        for (field, value) in [
            ("cap_allowed_t", record.cap_allowed_t),
            ("cap_over_t", record.cap_over_t),
        ] {
            if let Some(cap) = value {
                if cap <= 0.0 {
                    violations.push(DqViolation {
                        row_number: record.row_number,
                        year: record.year,
                        level: DqLevel::Error,
                        field: field.to_string(),
                        message: format!("载重 <= 0: {:.3},趟次除法会退化", cap),
                    });
                }
            }
        }

        // 分数字段范围 [0,1]（清洗后仍越界则告警）
        for (field, value) in [
            ("oxid_frac", record.oxid_frac),
            ("clinker_ratio", record.clinker_ratio),
        ] {
            if let Some(frac) = value {
                if !(0.0..=1.0).contains(&frac) {
                    violations.push(DqViolation {
                        row_number: record.row_number,
                        year: record.year,
                        level: DqLevel::Warning,
                        field: field.to_string(),
                        message: format!("分数超出 [0,1]: {:.4}", frac),
                    });
                }
            }
        }

        // 吨位与运距非负
        for (field, value) in [
            ("cement_t", record.cement_t),
            ("local_t", record.local_t),
            ("exp_n_t", record.exp_n_t),
            ("exp_s_t", record.exp_s_t),
            ("dist_local_km", record.dist_local_km),
            ("dist_exp_n_km", record.dist_exp_n_km),
            ("dist_exp_s_km", record.dist_exp_s_km),
        ] {
            if let Some(v) = value {
                if v < 0.0 {
                    violations.push(DqViolation {
                        row_number: record.row_number,
                        year: record.year,
                        level: DqLevel::Warning,
                        field: field.to_string(),
                        message: format!("数值为负: {:.3}", v),
                    });
                }
            }
        }

        // 出口拆分一致性: exp_n + exp_s 应等于 total_exp_t（不强制,仅告警）
        if let (Some(n), Some(s), Some(total)) =
            (record.exp_n_t, record.exp_s_t, record.total_exp_t)
        {
            if (n + s - total).abs() > EXPORT_SPLIT_TOLERANCE_T {
                violations.push(DqViolation {
                    row_number: record.row_number,
                    year: record.year,
                    level: DqLevel::Warning,
                    field: "total_exp_t".to_string(),
                    message: format!(
                        "出口拆分不一致: exp_n + exp_s = {:.1} ≠ total_exp_t = {:.1}",
                        n + s,
                        total
                    ),
                });
            }
        }

        violations
    }

    /// 提取首个 Error 级阻断条件为类型化错误
    ///
    /// 与 validate_year_keys / validate_ranges 的 Error 级判定保持同一口径,
    /// 差异仅在于返回可直接上抛的 ImportError。
    fn blocking_error(&self, records: &[RawYearlyRecord]) -> Option<ImportError> {
        let mut seen_years = HashSet::new();

        for record in records {
            let year = match record.year {
                None => return Some(ImportError::MissingYear(record.row_number)),
                Some(y) => y,
            };

            if !seen_years.insert(year) {
                return Some(ImportError::DuplicateYear {
                    year,
                    row: record.row_number,
                });
            }

            for (field, value) in [
                ("cap_allowed_t", record.cap_allowed_t),
                ("cap_over_t", record.cap_over_t),
            ] {
                if let Some(cap) = value {
                    if cap <= 0.0 {
                        return Some(ImportError::ValueRange {
                            year,
                            field: field.to_string(),
                            value: cap,
                            min: f64::MIN_POSITIVE,
                            max: f64::MAX,
                        });
                    }
                }
            }
        }

        None
    }

    /// 晋升为 YearlyRecord（必填字段缺失/非有限即失败,报出财年与字段）
    fn promote(&self, record: &RawYearlyRecord) -> ImportResult<YearlyRecord> {
        let year = record
            .year
            .ok_or(ImportError::MissingYear(record.row_number))?;

        let exp_n_t = Self::require(record.exp_n_t, year, "exp_n_t")?;
        let exp_s_t = Self::require(record.exp_s_t, year, "exp_s_t")?;

        Ok(YearlyRecord {
            year,
            cement_t: Self::require(record.cement_t, year, "cement_t")?,
            local_t: Self::require(record.local_t, year, "local_t")?,
            exp_n_t,
            exp_s_t,
            // 总出口量缺失时按拆分求和补齐（直通列,不参与公式）
            total_exp_t: match record.total_exp_t {
                Some(v) => Self::require(Some(v), year, "total_exp_t")?,
                None => exp_n_t + exp_s_t,
            },
            coal_int_kgpt: Self::require(record.coal_int_kgpt, year, "coal_int_kgpt")?,
            elec_int_kwhpt: Self::require(record.elec_int_kwhpt, year, "elec_int_kwhpt")?,
            clinker_ratio: Self::require(record.clinker_ratio, year, "clinker_ratio")?,
            ncv: Self::require(record.ncv, year, "ncv")?,
            co2_ef_tco2_per_tj: Self::require(record.co2_ef_tco2_per_tj, year, "co2_ef_tco2_per_tj")?,
            oxid_frac: Self::require(record.oxid_frac, year, "oxid_frac")?,
            calc_ef: Self::require(record.calc_ef, year, "calc_ef")?,
            grid_ef_kg_per_kwh: Self::require(record.grid_ef_kg_per_kwh, year, "grid_ef_kg_per_kwh")?,
            cap_allowed_t: Self::require(record.cap_allowed_t, year, "cap_allowed_t")?,
            cap_over_t: Self::require(record.cap_over_t, year, "cap_over_t")?,
            ef_allowed_gpkm: Self::require(record.ef_allowed_gpkm, year, "ef_allowed_gpkm")?,
            ef_over_gpkm: Self::require(record.ef_over_gpkm, year, "ef_over_gpkm")?,
            dist_local_km: Self::require(record.dist_local_km, year, "dist_local_km")?,
            dist_exp_n_km: Self::require(record.dist_exp_n_km, year, "dist_exp_n_km")?,
            dist_exp_s_km: Self::require(record.dist_exp_s_km, year, "dist_exp_s_km")?,
        })
    }

    /// 生成 DQ 报告
    fn generate_dq_report(
        &self,
        source_file: Option<String>,
        total_rows: usize,
        promoted: usize,
        violations: Vec<DqViolation>,
    ) -> DqReport {
        let error = violations
            .iter()
            .filter(|v| matches!(v.level, DqLevel::Error))
            .count();
        let warning = violations
            .iter()
            .filter(|v| matches!(v.level, DqLevel::Warning))
            .count();
        let info = violations
            .iter()
            .filter(|v| matches!(v.level, DqLevel::Info))
            .count();

        DqReport {
            source_file,
            generated_at: Utc::now(),
            summary: DqSummary {
                total_rows,
                promoted,
                error,
                warning,
                info,
            },
            violations,
        }
    }
}
