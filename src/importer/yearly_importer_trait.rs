// ==========================================
// 水泥温室气体核算系统 - 年度数据导入 Trait
// ==========================================
// 依据: Field_Mapping_GHG_v1.0.md - 导入管道
// 职责: 定义导入管道各阶段接口（不包含实现）
// ==========================================

use crate::domain::yearly::{DqReport, DqViolation, RawYearlyRecord, YearlyRecord};
use crate::importer::error::ImportResult;
use std::error::Error;
use std::path::Path;

// ==========================================
// YearlyImporter Trait
// ==========================================
// 用途: 年度数据导入主接口
// 实现者: YearlyImporterImpl
pub trait YearlyImporter {
    /// 从表格文件导入年度运行数据
    ///
    /// # 参数
    /// - file_path: 数据文件路径（.xlsx/.xls/.csv）
    ///
    /// # 返回
    /// - Ok(ImportOutcome): 校验通过的记录 + DQ 报告
    /// - Err(ImportError): 文件错误或 Error 级数据质量违规
    ///
    /// # 导入流程（4个阶段）
    /// 1. 文件读取与解析
    /// 2. 字段映射与类型转换
    /// 3. 清洗（NULL 标准化 / 熟料比单位归一）
    /// 4. DQ 校验 + 晋升 + DQ 报告生成
    fn import_from_file<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<ImportOutcome>;
}

/// 导入结果（整批成功时返回）
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub records: Vec<YearlyRecord>,
    pub dq_report: DqReport,
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: CsvParser, ExcelParser
pub trait FileParser {
    /// 解析文件为原始行记录（HashMap<列名, 值>）
    ///
    /// # 返回
    /// - Ok(Vec<HashMap<String, String>>): 行记录列表（表头已 TRIM,空行已剔除）
    /// - Err: 文件读取错误、格式错误、无数据行
    fn parse_to_raw_rows(
        &self,
        file_path: &Path,
    ) -> Result<Vec<std::collections::HashMap<String, String>>, Box<dyn Error>>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 字段映射接口（阶段 1）
// 实现者: FieldMapper
pub trait FieldMapper {
    /// 将原始行记录映射为 RawYearlyRecord
    ///
    /// # 参数
    /// - row: 原始行记录（HashMap<列名, 值>）
    /// - row_number: 数据行号（用于 DQ 报告）
    ///
    /// # 返回
    /// - Ok(RawYearlyRecord): 映射后的中间结构体
    /// - Err: 类型转换错误
    fn map_to_raw_yearly(
        &self,
        row: std::collections::HashMap<String, String>,
        row_number: usize,
    ) -> Result<RawYearlyRecord, Box<dyn Error>>;
}

// ==========================================
// DataCleaner Trait
// ==========================================
// 用途: 数据清洗接口（阶段 2）
// 实现者: DataCleaner
pub trait DataCleaner {
    /// 标准化 NULL 值（空字符串/空白 → None）
    fn normalize_null(&self, value: Option<String>) -> Option<String>;

    /// 熟料比单位归一（> 1.5 视为百分数,换算为分数）
    ///
    /// # 返回
    /// - (f64, bool): (归一后的值, 是否做了换算)
    fn normalize_clinker_ratio(&self, value: f64) -> (f64, bool);

    /// 清洗单条记录（就地修改）
    ///
    /// # 返回
    /// - Vec<DqViolation>: 清洗过程产生的 Info 级违规（如单位换算记录）
    fn clean_record(&self, record: &mut RawYearlyRecord) -> Vec<DqViolation>;
}

// ==========================================
// DqValidator Trait
// ==========================================
// 用途: 数据质量校验接口（阶段 3）
// 实现者: DqValidator
pub trait DqValidator {
    /// 校验主键（year 非空且批次内唯一）
    fn validate_year_keys(&self, records: &[RawYearlyRecord]) -> Vec<DqViolation>;

    /// 校验数值范围（载重为正、分数范围、吨位非负、出口拆分一致性）
    fn validate_ranges(&self, record: &RawYearlyRecord) -> Vec<DqViolation>;

    /// 提取首个 Error 级阻断条件为类型化错误
    ///
    /// # 返回
    /// - Some(ImportError): 存在阻断条件（年份缺失/重复、载重非正）
    /// - None: 无阻断条件
    fn blocking_error(&self, records: &[RawYearlyRecord]) -> Option<crate::importer::error::ImportError>;

    /// 晋升为 YearlyRecord
    ///
    /// # 返回
    /// - Ok(YearlyRecord): 所有必填字段齐备且有限
    /// - Err(ImportError): 缺失/非有限,错误信息报出财年与字段
    fn promote(&self, record: &RawYearlyRecord) -> ImportResult<YearlyRecord>;

    /// 生成 DQ 报告
    fn generate_dq_report(
        &self,
        source_file: Option<String>,
        total_rows: usize,
        promoted: usize,
        violations: Vec<DqViolation>,
    ) -> DqReport;
}
