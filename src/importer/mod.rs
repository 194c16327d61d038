// ==========================================
// 水泥温室气体核算系统 - 导入层
// ==========================================
// 依据: Field_Mapping_GHG_v1.0.md - 导入管道
// ==========================================
// 职责: 外部表格数据导入,生成校验后的年度记录
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod dq_validator;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod yearly_importer_impl;
pub mod yearly_importer_trait;

// 重导出核心类型
pub use data_cleaner::{DataCleaner as DataCleanerImpl, CLINKER_PCT_THRESHOLD};
pub use dq_validator::DqValidator as DqValidatorImpl;
pub use error::{ImportError, ImportResult};
pub use field_mapper::{FieldMapper as FieldMapperImpl, COLUMN_MAPPING};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use yearly_importer_impl::YearlyImporterImpl;

// 重导出 Trait 接口
pub use yearly_importer_trait::{
    DataCleaner, DqValidator, FieldMapper, FileParser, ImportOutcome, YearlyImporter,
};
