// ==========================================
// 水泥温室气体核算系统 - 导入模块错误类型
// ==========================================
// 依据: Field_Mapping_GHG_v1.0.md - 7. 错误分级
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
///
/// 所有错误均为批次级致命错误: 不重试,不落盘部分结果,
/// 由操作员修正源数据后重跑。
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    #[error("文件无数据行: {0}")]
    NoDataRows(String),

    // ===== 数据映射错误 =====
    #[error("类型转换失败 (行 {row}, 字段 {field}): 无法解析为数值: {value}")]
    TypeMismatch {
        row: usize,
        field: String,
        value: String,
    },

    #[error("年份缺失 (行 {0}): year 为空,无法定位记录")]
    MissingYear(usize),

    // ===== 数据质量错误 =====
    #[error("必填字段缺失 ({year} 财年, 字段 {field})")]
    MissingField { year: i32, field: String },

    #[error("数值非有限 ({year} 财年, 字段 {field}): {value}")]
    NonFinite { year: i32, field: String, value: f64 },

    #[error("数值范围错误 ({year} 财年, 字段 {field}): 值 {value} 超出范围 [{min}, {max}]")]
    ValueRange {
        year: i32,
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("年份重复 ({year} 财年, 行 {row}): 财年必须唯一")]
    DuplicateYear { year: i32, row: usize },

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
