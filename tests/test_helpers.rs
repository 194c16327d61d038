// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的源数据 CSV 构造器
// ==========================================

#![allow(dead_code)]

use cement_ghg_pipeline::importer::COLUMN_MAPPING;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// 单行源数据构造器（按标准字段名设值,落盘时按对外列序展开）
#[derive(Clone)]
pub struct SourceRowBuilder {
    values: HashMap<String, String>,
}

impl SourceRowBuilder {
    /// 以完整、一致的默认值起步（2020 财年口径）
    pub fn new(year: i32) -> Self {
        let defaults: &[(&str, &str)] = &[
            ("cement_t", "1000000"),
            ("local_t", "600000"),
            ("total_exp_t", "400000"),
            ("exp_s_t", "150000"),
            ("exp_n_t", "250000"),
            ("coal_int_kgpt", "100"),
            ("elec_int_kwhpt", "95"),
            ("clinker_ratio", "72"),
            ("ncv", "25"),
            ("co2_ef_tco2_per_tj", "94.6"),
            ("oxid_frac", "0.98"),
            ("calc_ef", "0.52"),
            ("grid_ef_kg_per_kwh", "0.45"),
            ("cap_allowed_t", "20"),
            ("cap_over_t", "25"),
            ("ef_allowed_gpkm", "900"),
            ("ef_over_gpkm", "1100"),
            ("dist_local_km", "50"),
            ("dist_exp_n_km", "1500"),
            ("dist_exp_s_km", "1100"),
        ];

        let mut values: HashMap<String, String> = defaults
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        values.insert("year".to_string(), year.to_string());

        Self { values }
    }

    /// 覆写某个标准字段
    pub fn set(mut self, field: &str, value: &str) -> Self {
        self.values.insert(field.to_string(), value.to_string());
        self
    }

    /// 清空某个标准字段（模拟源文件缺值）
    pub fn clear(mut self, field: &str) -> Self {
        self.values.insert(field.to_string(), String::new());
        self
    }

    /// 按 COLUMN_MAPPING 列序展开为一行 CSV
    pub fn build(&self) -> String {
        COLUMN_MAPPING
            .iter()
            .map(|(_, std_name)| self.values.get(*std_name).cloned().unwrap_or_default())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// CSV 字段转义：含逗号/引号/换行的字段需用双引号包裹并转义内部引号。
/// 源列名中存在逗号（如 "Local dispatches (North, South)-Tons"），
/// 不转义会导致重新解析时列错位。
fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// 对外契约表头（源列名,按映射表列序）
pub fn source_header() -> String {
    COLUMN_MAPPING
        .iter()
        .map(|(source, _)| csv_escape(source))
        .collect::<Vec<_>>()
        .join(",")
}

/// 将若干行构造器写为临时源数据 CSV
pub fn source_csv_file(rows: &[SourceRowBuilder]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("创建临时文件失败");

    writeln!(file, "{}", source_header()).expect("写表头失败");
    for row in rows {
        writeln!(file, "{}", row.build()).expect("写数据行失败");
    }
    file
}

/// 在指定路径写源数据 CSV（流水线测试用）
pub fn write_source_csv(path: &Path, rows: &[SourceRowBuilder]) {
    let mut content = String::new();
    content.push_str(&source_header());
    content.push('\n');
    for row in rows {
        content.push_str(&row.build());
        content.push('\n');
    }
    std::fs::write(path, content).expect("写源数据文件失败");
}
