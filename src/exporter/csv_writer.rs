// ==========================================
// 水泥温室气体核算系统 - 结果导出器实现
// ==========================================
// 依据: GHG_Methodology_Spec_v1.0.md - PART C 输出数据体系
// 职责: 排放结果/汇总/DQ 报告落盘
// 红线: 全有或全无,先在内存完成序列化,再一次性写文件
// ==========================================

use crate::domain::emissions::{EmissionsRecord, EmissionsSummary};
use crate::domain::yearly::DqReport;
use crate::exporter::error::{ExportError, ExportResult};
use std::path::Path;
use tracing::info;

// ==========================================
// EmissionsCsvWriter - 结果 CSV 导出器
// ==========================================
// 列名与列序由 EmissionsRecord 的 serde 字段序决定（对外契约）
pub struct EmissionsCsvWriter;

impl EmissionsCsvWriter {
    /// 写出年度排放结果 CSV
    ///
    /// 先序列化到内存缓冲,全部成功后才落盘,失败不留部分文件
    pub fn write_emissions_csv<P: AsRef<Path>>(
        &self,
        path: P,
        records: &[EmissionsRecord],
    ) -> ExportResult<()> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for record in records {
            writer.serialize(record)?;
        }
        let buffer = writer
            .into_inner()
            .map_err(|e| ExportError::CsvError(e.to_string()))?;

        std::fs::write(path.as_ref(), buffer)?;
        info!(file = %path.as_ref().display(), rows = records.len(), "排放结果已写出");
        Ok(())
    }

    /// 读回年度排放结果 CSV（后续步骤的输入口径）
    pub fn read_emissions_csv<P: AsRef<Path>>(&self, path: P) -> ExportResult<Vec<EmissionsRecord>> {
        let mut reader = csv::Reader::from_path(path.as_ref())
            .map_err(|e| ExportError::FileReadError(e.to_string()))?;

        let mut records = Vec::new();
        for result in reader.deserialize() {
            let record: EmissionsRecord = result?;
            records.push(record);
        }
        Ok(records)
    }

    /// 写出批次汇总 CSV（单行）
    pub fn write_summary_csv<P: AsRef<Path>>(
        &self,
        path: P,
        summary: &EmissionsSummary,
    ) -> ExportResult<()> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(summary)?;
        let buffer = writer
            .into_inner()
            .map_err(|e| ExportError::CsvError(e.to_string()))?;

        std::fs::write(path.as_ref(), buffer)?;
        info!(file = %path.as_ref().display(), "批次汇总已写出");
        Ok(())
    }

    /// 写出 DQ 报告 JSON
    pub fn write_dq_report_json<P: AsRef<Path>>(
        &self,
        path: P,
        report: &DqReport,
    ) -> ExportResult<()> {
        let buffer = serde_json::to_vec_pretty(report)?;
        std::fs::write(path.as_ref(), buffer)?;
        info!(
            file = %path.as_ref().display(),
            warning = report.summary.warning,
            info = report.summary.info,
            "DQ 报告已写出"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(year: i32) -> EmissionsRecord {
        EmissionsRecord {
            year,
            cement_t: 1_000_000.0,
            local_t: 500_000.0,
            exp_n_t: 250_000.0,
            exp_s_t: 150_000.0,
            total_exp_t: 400_000.0,
            scope1a_combustion_tco2: 231_770.0,
            scope1b_calcination_tco2: 374_400.0,
            scope1_total_tco2: 606_170.0,
            scope2_electricity_tco2: 42_750.0,
            scope3_local_tco2: 990.0,
            scope3_exp_n_tco2: 14_850.0,
            scope3_exp_s_tco2: 6_534.0,
            scope3_total_tco2: 22_374.0,
            total_emissions_tco2: 671_294.0,
        }
    }

    #[test]
    fn test_write_header_column_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("01_historical_scopes.csv");

        let writer = EmissionsCsvWriter;
        writer.write_emissions_csv(&path, &[sample_record(2020)]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let header = content.lines().next().unwrap();
        // 列序是对外契约,顺序不可变
        assert_eq!(
            header,
            "year,cement_t,local_t,exp_n_t,exp_s_t,total_exp_t,\
             scope1a_combustion_tco2,scope1b_calcination_tco2,scope1_total_tco2,\
             scope2_electricity_tco2,scope3_local_tco2,scope3_exp_n_tco2,\
             scope3_exp_s_tco2,scope3_total_tco2,total_emissions_tco2"
        );
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let records = vec![sample_record(2019), sample_record(2020)];

        let writer = EmissionsCsvWriter;
        writer.write_emissions_csv(&path, &records).unwrap();
        let read_back = writer.read_emissions_csv(&path).unwrap();

        assert_eq!(read_back, records);
    }

    #[test]
    fn test_read_missing_file() {
        let writer = EmissionsCsvWriter;
        let result = writer.read_emissions_csv("no_such_output.csv");
        assert!(result.is_err());
    }
}
