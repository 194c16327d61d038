// ==========================================
// 水泥温室气体核算系统 - 数据清洗器实现
// ==========================================
// 依据: Field_Mapping_GHG_v1.0.md - 6. 数据质量规则
// 职责: NULL 标准化 / 熟料比单位归一
// 红线: 熟料比单位判定逐行独立,不依赖批次统计量
// ==========================================

use crate::domain::yearly::{DqLevel, DqViolation, RawYearlyRecord};
use crate::importer::yearly_importer_trait::DataCleaner as DataCleanerTrait;

// 熟料比单位判定阈值: 合理分数不超过 1.0,超过 1.5 视为百分数输入
pub const CLINKER_PCT_THRESHOLD: f64 = 1.5;

pub struct DataCleaner;

impl DataCleanerTrait for DataCleaner {
    fn normalize_null(&self, value: Option<String>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    /// 熟料比单位归一（百分数 → 分数）
    ///
    /// 返回: (归一后的值, 是否做了换算)
    fn normalize_clinker_ratio(&self, value: f64) -> (f64, bool) {
        if value > CLINKER_PCT_THRESHOLD {
            (value / 100.0, true)
        } else {
            (value, false)
        }
    }

    /// 清洗单条记录（就地修改）,返回产生的 DQ 违规
    fn clean_record(&self, record: &mut RawYearlyRecord) -> Vec<DqViolation> {
        let mut violations = Vec::new();

        if let Some(ratio) = record.clinker_ratio {
            let (normalized, converted) = self.normalize_clinker_ratio(ratio);
            if converted {
                record.clinker_ratio = Some(normalized);
                violations.push(DqViolation {
                    row_number: record.row_number,
                    year: record.year,
                    level: DqLevel::Info,
                    field: "clinker_ratio".to_string(),
                    message: format!("熟料比按百分数输入,已换算: {} -> {}", ratio, normalized),
                });
            }
        }

        violations
    }
}
