// ==========================================
// YearlyImporter 集成测试
// ==========================================
// 测试目标: 验证完整的年度数据导入流程
// ==========================================

mod test_helpers;

use cement_ghg_pipeline::importer::{ImportError, YearlyImporter, YearlyImporterImpl};
use cement_ghg_pipeline::logging;
use test_helpers::{source_csv_file, SourceRowBuilder};

fn importer() -> YearlyImporterImpl {
    YearlyImporterImpl::with_defaults()
}

#[test]
fn test_import_csv_basic() {
    logging::init_test();

    let file = source_csv_file(&[
        SourceRowBuilder::new(2018),
        SourceRowBuilder::new(2019),
        SourceRowBuilder::new(2020),
    ]);

    let outcome = importer().import_from_file(file.path()).unwrap();

    assert_eq!(outcome.records.len(), 3);
    assert_eq!(outcome.dq_report.summary.total_rows, 3);
    assert_eq!(outcome.dq_report.summary.promoted, 3);
    assert!(!outcome.dq_report.has_errors());

    // 行序保持,无重排
    let years: Vec<i32> = outcome.records.iter().map(|r| r.year).collect();
    assert_eq!(years, vec![2018, 2019, 2020]);
}

#[test]
fn test_import_normalizes_clinker_percentage() {
    logging::init_test();

    // 同一批内既有百分数又有分数写法,逐行独立判定
    let file = source_csv_file(&[
        SourceRowBuilder::new(2019).set("clinker_ratio", "72"),
        SourceRowBuilder::new(2020).set("clinker_ratio", "0.68"),
    ]);

    let outcome = importer().import_from_file(file.path()).unwrap();

    assert!((outcome.records[0].clinker_ratio - 0.72).abs() < 1e-12);
    assert!((outcome.records[1].clinker_ratio - 0.68).abs() < 1e-12);
    // 换算应留下 Info 级 DQ 记录
    assert!(outcome.dq_report.summary.info >= 1);
}

#[test]
fn test_import_missing_required_field_names_year_and_field() {
    logging::init_test();

    let file = source_csv_file(&[
        SourceRowBuilder::new(2019),
        SourceRowBuilder::new(2020).clear("grid_ef_kg_per_kwh"),
    ]);

    let err = importer().import_from_file(file.path()).unwrap_err();

    // 必须报出字段与财年,不得静默传播 NaN
    match err {
        ImportError::MissingField { year, field } => {
            assert_eq!(year, 2020);
            assert_eq!(field, "grid_ef_kg_per_kwh");
        }
        other => panic!("期望 MissingField,实际 {:?}", other),
    }
}

#[test]
fn test_import_non_numeric_value() {
    logging::init_test();

    let file = source_csv_file(&[SourceRowBuilder::new(2020).set("ncv", "unknown")]);

    let err = importer().import_from_file(file.path()).unwrap_err();

    match err {
        ImportError::TypeMismatch { field, value, .. } => {
            assert_eq!(field, "ncv");
            assert_eq!(value, "unknown");
        }
        other => panic!("期望 TypeMismatch,实际 {:?}", other),
    }
}

#[test]
fn test_import_duplicate_year_blocks_batch() {
    logging::init_test();

    let file = source_csv_file(&[SourceRowBuilder::new(2020), SourceRowBuilder::new(2020)]);

    let err = importer().import_from_file(file.path()).unwrap_err();
    assert!(matches!(err, ImportError::DuplicateYear { year: 2020, .. }));
}

#[test]
fn test_import_zero_capacity_blocks_batch() {
    logging::init_test();

    let file = source_csv_file(&[SourceRowBuilder::new(2020).set("cap_allowed_t", "0")]);

    let err = importer().import_from_file(file.path()).unwrap_err();

    match err {
        ImportError::ValueRange { year, field, .. } => {
            assert_eq!(year, 2020);
            assert_eq!(field, "cap_allowed_t");
        }
        other => panic!("期望 ValueRange,实际 {:?}", other),
    }
}

#[test]
fn test_import_export_split_mismatch_is_warning_only() {
    logging::init_test();

    // 拆分和 400,000 ≠ 总量 390,000: 不强制,放行并告警
    let file = source_csv_file(&[SourceRowBuilder::new(2020).set("total_exp_t", "390000")]);

    let outcome = importer().import_from_file(file.path()).unwrap();

    assert_eq!(outcome.records.len(), 1);
    assert!(outcome.dq_report.summary.warning >= 1);
    assert!(outcome
        .dq_report
        .violations
        .iter()
        .any(|v| v.field == "total_exp_t"));
}

#[test]
fn test_import_file_not_found() {
    logging::init_test();

    let result = importer().import_from_file("tests/fixtures/no_such_input.csv");
    assert!(matches!(result, Err(ImportError::FileNotFound(_))));
}

#[test]
fn test_import_years_need_not_be_contiguous() {
    logging::init_test();

    // 财年递增但允许跳年
    let file = source_csv_file(&[
        SourceRowBuilder::new(2016),
        SourceRowBuilder::new(2019),
        SourceRowBuilder::new(2023),
    ]);

    let outcome = importer().import_from_file(file.path()).unwrap();
    assert_eq!(outcome.records.len(), 3);
}
