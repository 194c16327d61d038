// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成年度运行数据测试 CSV 文件
// 输出: tests/fixtures/datasets/*.csv
// ==========================================

use cement_ghg_pipeline::importer::COLUMN_MAPPING;
use csv::Writer;
use std::error::Error;
use std::fs::File;

// 年度运行数据行（全部以字符串落盘,与源文件口径一致）
#[derive(Clone)]
struct AnnualRow {
    year: String,
    cement_t: String,
    local_t: String,
    total_exp_t: String,
    exp_s_t: String,
    exp_n_t: String,
    coal_int_kgpt: String,
    elec_int_kwhpt: String,
    clinker_ratio: String,
    ncv: String,
    co2_ef_tco2_per_tj: String,
    oxid_frac: String,
    calc_ef: String,
    grid_ef_kg_per_kwh: String,
    cap_allowed_t: String,
    cap_over_t: String,
    ef_allowed_gpkm: String,
    ef_over_gpkm: String,
    dist_local_km: String,
    dist_exp_n_km: String,
    dist_exp_s_km: String,
}

impl AnnualRow {
    // 与 COLUMN_MAPPING 同序展开
    fn to_row(&self) -> Vec<String> {
        vec![
            self.year.clone(),
            self.cement_t.clone(),
            self.local_t.clone(),
            self.total_exp_t.clone(),
            self.exp_s_t.clone(),
            self.exp_n_t.clone(),
            self.coal_int_kgpt.clone(),
            self.elec_int_kwhpt.clone(),
            self.clinker_ratio.clone(),
            self.ncv.clone(),
            self.co2_ef_tco2_per_tj.clone(),
            self.oxid_frac.clone(),
            self.calc_ef.clone(),
            self.grid_ef_kg_per_kwh.clone(),
            self.cap_allowed_t.clone(),
            self.cap_over_t.clone(),
            self.ef_allowed_gpkm.clone(),
            self.ef_over_gpkm.clone(),
            self.dist_local_km.clone(),
            self.dist_exp_n_km.clone(),
            self.dist_exp_s_km.clone(),
        ]
    }
}

// 生成正常年度记录（产量逐年爬坡,能耗强度缓降）
fn generate_normal_row(index: usize) -> AnnualRow {
    let year = 2014 + index as i32;
    let cement_t = 900_000.0 + index as f64 * 35_000.0;
    let local_share = 0.6;
    let local_t = cement_t * local_share;
    let exp_n_t = cement_t * 0.25;
    let exp_s_t = cement_t * 0.15;

    AnnualRow {
        year: year.to_string(),
        cement_t: format!("{:.0}", cement_t),
        local_t: format!("{:.0}", local_t),
        total_exp_t: format!("{:.0}", exp_n_t + exp_s_t),
        exp_s_t: format!("{:.0}", exp_s_t),
        exp_n_t: format!("{:.0}", exp_n_t),
        coal_int_kgpt: format!("{:.1}", 105.0 - index as f64 * 0.8),
        elec_int_kwhpt: format!("{:.1}", 98.0 - index as f64 * 0.5),
        clinker_ratio: format!("{:.1}", 74.0 - index as f64 * 0.3), // 百分数口径
        ncv: "25.0".to_string(),
        co2_ef_tco2_per_tj: "94.6".to_string(),
        oxid_frac: "0.98".to_string(),
        calc_ef: "0.52".to_string(),
        grid_ef_kg_per_kwh: format!("{:.3}", 0.48 - index as f64 * 0.004),
        cap_allowed_t: "20".to_string(),
        cap_over_t: "25".to_string(),
        ef_allowed_gpkm: "900".to_string(),
        ef_over_gpkm: "1100".to_string(),
        dist_local_km: "50".to_string(),
        dist_exp_n_km: "1500".to_string(),
        dist_exp_s_km: "1100".to_string(),
    }
}

fn write_dataset(path: &str, rows: &[AnnualRow]) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    let mut writer = Writer::from_writer(file);

    let header: Vec<&str> = COLUMN_MAPPING.iter().map(|(source, _)| *source).collect();
    writer.write_record(&header)?;
    for row in rows {
        writer.write_record(row.to_row())?;
    }
    writer.flush()?;

    println!("已生成: {} ({} 行)", path, rows.len());
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    std::fs::create_dir_all("tests/fixtures/datasets")?;

    // 数据集 1: 正常十年数据（熟料比为百分数口径）
    let normal: Vec<AnnualRow> = (0..10).map(generate_normal_row).collect();
    write_dataset("tests/fixtures/datasets/annual_normal.csv", &normal)?;

    // 数据集 2: 熟料比混合口径（分数与百分数并存,逐行判定）
    let mut mixed = vec![generate_normal_row(0), generate_normal_row(1)];
    mixed[1].clinker_ratio = "0.72".to_string();
    write_dataset("tests/fixtures/datasets/annual_clinker_mixed.csv", &mixed)?;

    // 数据集 3: 缺必填字段（电网排放因子为空,导入应整批阻断）
    let mut missing = vec![generate_normal_row(0), generate_normal_row(1)];
    missing[1].grid_ef_kg_per_kwh = String::new();
    write_dataset("tests/fixtures/datasets/annual_missing_grid_ef.csv", &missing)?;

    Ok(())
}
