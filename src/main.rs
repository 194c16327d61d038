// ==========================================
// 水泥温室气体核算系统 - 主入口
// ==========================================
// 依据: Pipeline_Spec_v1.0.md
// 技术栈: Rust + 平面 CSV 文件
// 系统定位: 年度 Scope 1/2/3 排放批量核算
// ==========================================
// 用法:
//   cement-ghg-pipeline <年度数据文件.xlsx|.csv> [--out-dir 输出目录] [--config 配置.json]
// ==========================================

use anyhow::{bail, Context, Result};
use cement_ghg_pipeline::config::EmissionConfig;
use cement_ghg_pipeline::pipeline::{PipelineContext, PipelineRunner};
use cement_ghg_pipeline::{logging, APP_NAME, VERSION};
use std::path::PathBuf;

/// 命令行参数（参数极少,不引入解析框架）
struct CliArgs {
    source_path: PathBuf,
    out_dir: PathBuf,
    config_path: Option<PathBuf>,
}

fn parse_args() -> Result<CliArgs> {
    let mut args = std::env::args().skip(1);

    let source_path = match args.next() {
        Some(p) if p != "--help" && p != "-h" => PathBuf::from(p),
        _ => {
            eprintln!(
                "用法: cement-ghg-pipeline <年度数据文件.xlsx|.csv> [--out-dir 输出目录] [--config 配置.json]"
            );
            bail!("缺少年度数据文件参数");
        }
    };

    let mut out_dir = PathBuf::from("outputs");
    let mut config_path = None;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--out-dir" => {
                out_dir = PathBuf::from(
                    args.next().context("--out-dir 缺少取值")?,
                );
            }
            "--config" => {
                config_path = Some(PathBuf::from(
                    args.next().context("--config 缺少取值")?,
                ));
            }
            other => bail!("未知参数: {}", other),
        }
    }

    Ok(CliArgs {
        source_path,
        out_dir,
        config_path,
    })
}

fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 年度 Scope 1/2/3 排放批量核算", APP_NAME);
    tracing::info!("系统版本: {}", VERSION);
    tracing::info!("==================================================");

    let cli = parse_args()?;

    // 核算常量: 内置默认值,可被 JSON 配置文件覆写
    let config = match &cli.config_path {
        Some(path) => EmissionConfig::from_json_file(path)
            .with_context(|| format!("加载配置失败: {}", path.display()))?,
        None => EmissionConfig::default(),
    };
    tracing::info!(
        calc_ef_is_per_clinker = config.calc_ef_is_per_clinker,
        allowed_frac = config.allowed_frac,
        overload_frac = config.overload_frac,
        "核算常量就绪"
    );

    // 按序执行流水线
    let ctx = PipelineContext::new(&cli.source_path, &cli.out_dir, config);
    let outcomes = PipelineRunner::standard()
        .run(&ctx)
        .context("流水线执行失败")?;

    for outcome in &outcomes {
        tracing::info!(
            step = outcome.step,
            rows = outcome.rows,
            output = %outcome.output.display(),
            "产出文件"
        );
    }

    tracing::info!("全部步骤执行完成");
    Ok(())
}
