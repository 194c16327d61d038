// ==========================================
// 水泥温室气体核算系统 - 字段映射器实现
// ==========================================
// 依据: Field_Mapping_GHG_v1.0.md - 标准字段映射表
// 职责: 源列名 → 标准字段映射 + 类型转换
// 红线: 源列名是对外契约,引擎层永不接触列名字符串
// ==========================================

use crate::domain::yearly::RawYearlyRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::yearly_importer_trait::FieldMapper as FieldMapperTrait;
use std::collections::HashMap;

// ==========================================
// 标准字段映射表（对外契约,人工评审后冻结）
// ==========================================
pub const COLUMN_MAPPING: &[(&str, &str)] = &[
    ("Fiscal Year - July - June", "year"),
    ("Total Cement Production-Tons", "cement_t"),
    ("Local dispatches (North, South)-Tons", "local_t"),
    ("Total Exports-Tons", "total_exp_t"),
    ("Exports (South)-Tons", "exp_s_t"),
    ("Exports (North)-Tons", "exp_n_t"),
    ("Coal intensity - (kg coal / ton cement)", "coal_int_kgpt"),
    ("Electricity intensity - (kWh / ton cement)", "elec_int_kwhpt"),
    ("Clinker ratio-%", "clinker_ratio"),
    ("Coal parameters: NCV", "ncv"),
    ("Coal parameters: CO2 combustion EF", "co2_ef_tco2_per_tj"),
    ("Coal parameters: Oxidized carbon fraction", "oxid_frac"),
    (
        "Calcination emission factor - (tCO2 / ton clinker)",
        "calc_ef",
    ),
    ("Grid electricity EF - (kgCO2 / kWh)", "grid_ef_kg_per_kwh"),
    ("Truck capcity Tons- (Allowed Load)", "cap_allowed_t"),
    ("Truck capcity Tons - (Over Load)", "cap_over_t"),
    ("Truck emission factor - Allowed (g CO2 /km)", "ef_allowed_gpkm"),
    ("Truck emission factor - OverLoad (g CO2 /km)", "ef_over_gpkm"),
    ("Local Transport distances - (km)", "dist_local_km"),
    ("North Export Transport distances - (km)", "dist_exp_n_km"),
    ("South Export Transport distances- (km)", "dist_exp_s_km"),
];

pub struct FieldMapper;

impl FieldMapperTrait for FieldMapper {
    fn map_to_raw_yearly(
        &self,
        row: HashMap<String, String>,
        row_number: usize,
    ) -> Result<RawYearlyRecord, Box<dyn std::error::Error>> {
        Ok(RawYearlyRecord {
            // 主键
            year: self.parse_year(&row, row_number)?,

            // 产量与发运
            cement_t: self.parse_f64(&row, "cement_t", row_number)?,
            local_t: self.parse_f64(&row, "local_t", row_number)?,
            exp_n_t: self.parse_f64(&row, "exp_n_t", row_number)?,
            exp_s_t: self.parse_f64(&row, "exp_s_t", row_number)?,
            total_exp_t: self.parse_f64(&row, "total_exp_t", row_number)?,

            // 能耗强度
            coal_int_kgpt: self.parse_f64(&row, "coal_int_kgpt", row_number)?,
            elec_int_kwhpt: self.parse_f64(&row, "elec_int_kwhpt", row_number)?,

            // 熟料与排放因子
            clinker_ratio: self.parse_f64(&row, "clinker_ratio", row_number)?,
            ncv: self.parse_f64(&row, "ncv", row_number)?,
            co2_ef_tco2_per_tj: self.parse_f64(&row, "co2_ef_tco2_per_tj", row_number)?,
            oxid_frac: self.parse_f64(&row, "oxid_frac", row_number)?,
            calc_ef: self.parse_f64(&row, "calc_ef", row_number)?,
            grid_ef_kg_per_kwh: self.parse_f64(&row, "grid_ef_kg_per_kwh", row_number)?,

            // 运输参数
            cap_allowed_t: self.parse_f64(&row, "cap_allowed_t", row_number)?,
            cap_over_t: self.parse_f64(&row, "cap_over_t", row_number)?,
            ef_allowed_gpkm: self.parse_f64(&row, "ef_allowed_gpkm", row_number)?,
            ef_over_gpkm: self.parse_f64(&row, "ef_over_gpkm", row_number)?,
            dist_local_km: self.parse_f64(&row, "dist_local_km", row_number)?,
            dist_exp_n_km: self.parse_f64(&row, "dist_exp_n_km", row_number)?,
            dist_exp_s_km: self.parse_f64(&row, "dist_exp_s_km", row_number)?,

            // 元信息
            row_number,
        })
    }
}

impl FieldMapper {
    /// 标准字段名 → 源列名
    fn source_column(field: &str) -> Option<&'static str> {
        COLUMN_MAPPING
            .iter()
            .find(|(_, std_name)| *std_name == field)
            .map(|(source, _)| *source)
    }

    /// 按标准字段名提取原始字符串（返回 Option,空白视为缺失）
    fn get_string(&self, row: &HashMap<String, String>, field: &str) -> Option<String> {
        let source = Self::source_column(field)?;
        row.get(source).and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    /// 解析浮点数（千分位逗号兼容）
    fn parse_f64(
        &self,
        row: &HashMap<String, String>,
        field: &str,
        row_number: usize,
    ) -> ImportResult<Option<f64>> {
        match self.get_string(row, field) {
            None => Ok(None),
            Some(value) => {
                let normalized = value.replace(',', "");
                normalized
                    .parse::<f64>()
                    .map(Some)
                    .map_err(|_| ImportError::TypeMismatch {
                        row: row_number,
                        field: field.to_string(),
                        value,
                    })
            }
        }
    }

    /// 解析财年
    ///
    /// 兼容两种写法: "2020" 与 "2019-20"（取起始年）
    fn parse_year(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<Option<i32>> {
        match self.get_string(row, "year") {
            None => Ok(None),
            Some(value) => {
                let lead = value.split('-').next().unwrap_or(&value).trim();
                lead.parse::<i32>()
                    .map(Some)
                    .map_err(|_| ImportError::TypeMismatch {
                        row: row_number,
                        field: "year".to_string(),
                        value,
                    })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_with(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_mapping_table_covers_all_fields() {
        // 21 个源列,标准字段名不重复
        assert_eq!(COLUMN_MAPPING.len(), 21);
        let mut seen = std::collections::HashSet::new();
        for (_, std_name) in COLUMN_MAPPING {
            assert!(seen.insert(*std_name), "标准字段名重复: {}", std_name);
        }
    }

    #[test]
    fn test_field_mapper_basic() {
        let row = row_with(&[
            ("Fiscal Year - July - June", "2020"),
            ("Total Cement Production-Tons", "1000000"),
            ("Clinker ratio-%", "72"),
        ]);

        let mapper = FieldMapper;
        let record = mapper.map_to_raw_yearly(row, 1).unwrap();

        assert_eq!(record.year, Some(2020));
        assert_eq!(record.cement_t, Some(1_000_000.0));
        assert_eq!(record.clinker_ratio, Some(72.0));
        assert_eq!(record.ncv, None);
    }

    #[test]
    fn test_field_mapper_fiscal_year_range_format() {
        let row = row_with(&[("Fiscal Year - July - June", "2019-20")]);

        let mapper = FieldMapper;
        let record = mapper.map_to_raw_yearly(row, 1).unwrap();

        assert_eq!(record.year, Some(2019));
    }

    #[test]
    fn test_field_mapper_thousands_separator() {
        let row = row_with(&[("Total Cement Production-Tons", "1,250,000")]);

        let mapper = FieldMapper;
        let record = mapper.map_to_raw_yearly(row, 1).unwrap();

        assert_eq!(record.cement_t, Some(1_250_000.0));
    }

    #[test]
    fn test_field_mapper_empty_as_none() {
        let row = row_with(&[
            ("Fiscal Year - July - June", "2020"),
            ("Coal parameters: NCV", "   "),
        ]);

        let mapper = FieldMapper;
        let record = mapper.map_to_raw_yearly(row, 1).unwrap();

        assert_eq!(record.ncv, None);
    }

    #[test]
    fn test_field_mapper_invalid_number() {
        let row = row_with(&[
            ("Fiscal Year - July - June", "2020"),
            ("Grid electricity EF - (kgCO2 / kWh)", "n/a"),
        ]);

        let mapper = FieldMapper;
        let result = mapper.map_to_raw_yearly(row, 3);

        assert!(result.is_err());
        let message = result.err().unwrap().to_string();
        assert!(message.contains("grid_ef_kg_per_kwh"));
        assert!(message.contains("行 3") || message.contains("3"));
    }
}
