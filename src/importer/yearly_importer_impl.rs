// ==========================================
// 水泥温室气体核算系统 - 年度数据导入器实现
// ==========================================
// 依据: Field_Mapping_GHG_v1.0.md - 字段映射规范
// ==========================================
// 职责: 整合导入流程,从文件到校验后的 YearlyRecord 批次
// 流程: 解析 → 映射 → 清洗 → 校验 → 晋升 → DQ 报告
// 红线: Error 级违规阻断整批,不落盘部分结果
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::yearly_importer_trait::{
    DataCleaner, DqValidator, FieldMapper, FileParser, ImportOutcome, YearlyImporter,
};
use std::path::Path;
use tracing::{debug, error, info, instrument, warn};

// ==========================================
// YearlyImporterImpl - 年度数据导入器实现
// ==========================================
pub struct YearlyImporterImpl {
    // 导入组件（各阶段可独立替换）
    file_parser: Box<dyn FileParser>,
    field_mapper: Box<dyn FieldMapper>,
    data_cleaner: Box<dyn DataCleaner>,
    dq_validator: Box<dyn DqValidator>,
}

impl YearlyImporterImpl {
    /// 创建新的 YearlyImporter 实例
    ///
    /// # 参数
    /// - file_parser: 文件解析器
    /// - field_mapper: 字段映射器
    /// - data_cleaner: 数据清洗器
    /// - dq_validator: DQ 校验器
    pub fn new(
        file_parser: Box<dyn FileParser>,
        field_mapper: Box<dyn FieldMapper>,
        data_cleaner: Box<dyn DataCleaner>,
        dq_validator: Box<dyn DqValidator>,
    ) -> Self {
        Self {
            file_parser,
            field_mapper,
            data_cleaner,
            dq_validator,
        }
    }

    /// 使用默认组件组装导入器
    pub fn with_defaults() -> Self {
        Self::new(
            Box::new(crate::importer::file_parser::UniversalFileParser),
            Box::new(crate::importer::field_mapper::FieldMapper),
            Box::new(crate::importer::data_cleaner::DataCleaner),
            Box::new(crate::importer::dq_validator::DqValidator::new()),
        )
    }
}

impl YearlyImporter for YearlyImporterImpl {
    #[instrument(skip(self, file_path))]
    fn import_from_file<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<ImportOutcome> {
        let path = file_path.as_ref();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string());
        info!(file = %path.display(), "开始导入年度运行数据");

        // === 步骤 1: 解析文件 ===
        debug!("步骤 1: 解析文件");
        let raw_rows = self.file_parser.parse_to_raw_rows(path).map_err(|e| {
            error!(error = %e, "文件解析失败");
            match e.downcast::<ImportError>() {
                Ok(import_err) => *import_err,
                Err(other) => ImportError::FileReadError(other.to_string()),
            }
        })?;
        let total_rows = raw_rows.len();
        info!(rows = total_rows, "文件解析完成");

        // === 步骤 2: 字段映射与类型转换 ===
        debug!("步骤 2: 字段映射");
        let mut raw_records = Vec::with_capacity(total_rows);
        for (idx, row) in raw_rows.into_iter().enumerate() {
            // 数据行号从 1 起算（表头行不计）
            let row_number = idx + 1;
            let record = self
                .field_mapper
                .map_to_raw_yearly(row, row_number)
                .map_err(|e| match e.downcast::<ImportError>() {
                    Ok(import_err) => *import_err,
                    Err(other) => ImportError::InternalError(other.to_string()),
                })?;
            raw_records.push(record);
        }

        // === 步骤 3: 清洗 ===
        debug!("步骤 3: 数据清洗");
        let mut violations = Vec::new();
        for record in raw_records.iter_mut() {
            violations.extend(self.data_cleaner.clean_record(record));
        }

        // === 步骤 4: DQ 校验 ===
        debug!("步骤 4: DQ 校验");
        violations.extend(self.dq_validator.validate_year_keys(&raw_records));
        for record in raw_records.iter() {
            violations.extend(self.dq_validator.validate_ranges(record));
        }

        // Error 级违规: 报出首个并阻断整批
        if let Some(blocking) = self.dq_validator.blocking_error(&raw_records) {
            error!(error = %blocking, "DQ 校验失败,阻断整批");
            return Err(blocking);
        }

        // === 步骤 5: 晋升 ===
        debug!("步骤 5: 晋升为 YearlyRecord");
        let mut records = Vec::with_capacity(raw_records.len());
        for raw in raw_records.iter() {
            records.push(self.dq_validator.promote(raw)?);
        }

        // === 步骤 6: DQ 报告 ===
        let dq_report =
            self.dq_validator
                .generate_dq_report(file_name, total_rows, records.len(), violations);
        if dq_report.has_warnings() {
            warn!(
                warning = dq_report.summary.warning,
                info = dq_report.summary.info,
                "导入完成,存在 DQ 告警"
            );
        } else {
            info!(promoted = records.len(), "导入完成,无 DQ 告警");
        }

        Ok(ImportOutcome { records, dq_report })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn importer() -> YearlyImporterImpl {
        YearlyImporterImpl::with_defaults()
    }

    fn write_minimal_csv(rows: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .unwrap();
        // 源列名中含逗号（如 "Local dispatches (North, South)-Tons"），
        // 必须经 CSV 转义写出，否则重新解析时列会错位。
        let mut header_writer = csv::WriterBuilder::new().from_writer(Vec::new());
        header_writer
            .write_record(
                crate::importer::field_mapper::COLUMN_MAPPING
                    .iter()
                    .map(|(source, _)| *source),
            )
            .unwrap();
        header_writer.flush().unwrap();
        let header_bytes = header_writer.into_inner().unwrap();
        file.write_all(&header_bytes).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file
    }

    // 与 COLUMN_MAPPING 同序的完整数据行
    const ROW_2020: &str = "2020,1000000,600000,400000,150000,250000,100,95,72,25,94.6,0.98,0.52,0.45,20,25,900,1100,50,1500,1100";

    #[test]
    fn test_import_complete_csv() {
        let file = write_minimal_csv(&[ROW_2020]);

        let outcome = importer().import_from_file(file.path()).unwrap();

        assert_eq!(outcome.records.len(), 1);
        let record = &outcome.records[0];
        assert_eq!(record.year, 2020);
        // 熟料比 72 应已归一为 0.72
        assert!((record.clinker_ratio - 0.72).abs() < 1e-12);
        assert!(!outcome.dq_report.has_errors());
    }

    #[test]
    fn test_import_missing_file() {
        let result = importer().import_from_file("no_such_file.csv");
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_import_duplicate_year_blocks_batch() {
        let file = write_minimal_csv(&[ROW_2020, ROW_2020]);

        let result = importer().import_from_file(file.path());
        assert!(result.is_err());
    }
}
