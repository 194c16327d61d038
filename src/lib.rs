// ==========================================
// 水泥温室气体核算系统 - 核心库
// ==========================================
// 依据: GHG_Methodology_Spec_v1.0.md - 系统宪法
// 技术栈: Rust + 平面 CSV 文件
// 系统定位: 年度 Scope 1/2/3 排放批量核算
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 外部数据
pub mod importer;

// 引擎层 - 核算规则
pub mod engine;

// 导出层 - 结果落盘
pub mod exporter;

// 流水线层 - 编号步骤
pub mod pipeline;

// 配置层 - 核算常量
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{LoadRegime, TransportLeg};

// 领域实体
pub use domain::{
    DqLevel, DqReport, DqSummary, DqViolation, EmissionsRecord, EmissionsSummary,
    RawYearlyRecord, YearlyRecord,
};

// 引擎
pub use engine::{CalcError, EmissionsEngine, SummaryEngine};

// 导入
pub use importer::{ImportError, ImportOutcome, YearlyImporter, YearlyImporterImpl};

// 导出
pub use exporter::{EmissionsCsvWriter, ExportError};

// 流水线
pub use pipeline::{PipelineContext, PipelineError, PipelineRunner};

// 配置
pub use config::{ConfigError, EmissionConfig};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "水泥温室气体核算系统";
