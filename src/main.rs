// ==========================================
// 食堂点餐系统 - 命令行入口
// ==========================================
// 用法:
//   canteen-menu parse <menu.txt> [provider|own]
//   canteen-menu validate <schedule.json> <dishes.json>
//
// dishes.json: [{"id": 1, "type": "SOUP"}, ...]
// ==========================================

use anyhow::{bail, Context};
use canteen_menu::config::{MenuConfig, MenuConfigReader};
use canteen_menu::domain::{DishId, DishType, MenuSource, WeeklyScheduleRequest};
use canteen_menu::engine::AllocationValidator;
use canteen_menu::i18n::{set_locale, t};
use canteen_menu::importer::{ImportError, MenuImporter, MenuImporterImpl};
use serde::Deserialize;
use std::collections::HashMap;
use std::process::ExitCode;

const USAGE: &str = "usage:
  canteen-menu parse <menu.txt> [provider|own]
  canteen-menu validate <schedule.json> <dishes.json>";

/// 已落库菜品的类型快照
#[derive(Debug, Deserialize)]
struct DishTypeRecord {
    id: DishId,
    #[serde(rename = "type")]
    dish_type: DishType,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    canteen_menu::logging::init();

    let config = MenuConfig::load().context("加载配置失败")?;
    set_locale(&config.locale);

    tracing::info!(version = canteen_menu::VERSION, "{} 启动", canteen_menu::APP_NAME);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("parse") => {
            let path = args.get(1).context(USAGE)?;
            let source = match args.get(2) {
                Some(raw) => raw.parse::<MenuSource>().map_err(anyhow::Error::msg)?,
                None => config.default_source(),
            };
            run_parse(config, path, source).await
        }
        Some("validate") => {
            let schedule_path = args.get(1).context(USAGE)?;
            let dishes_path = args.get(2).context(USAGE)?;
            run_validate(&config, schedule_path, dishes_path)
        }
        _ => bail!(USAGE),
    }
}

async fn run_parse(config: MenuConfig, path: &str, source: MenuSource) -> anyhow::Result<ExitCode> {
    let importer = MenuImporterImpl::new(config);

    match importer.import_file(path, source).await {
        Ok(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            eprintln!("{}", t("import.menu_updated"));
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ (ImportError::NoDishesFound { .. } | ImportError::InvalidEncoding)) => {
            eprintln!("{}", e.localized_message());
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

fn run_validate(config: &MenuConfig, schedule_path: &str, dishes_path: &str) -> anyhow::Result<ExitCode> {
    let schedule: WeeklyScheduleRequest = serde_json::from_str(
        &std::fs::read_to_string(schedule_path)
            .with_context(|| format!("读取 {} 失败", schedule_path))?,
    )
    .with_context(|| format!("解析 {} 失败", schedule_path))?;

    let dishes: Vec<DishTypeRecord> = serde_json::from_str(
        &std::fs::read_to_string(dishes_path)
            .with_context(|| format!("读取 {} 失败", dishes_path))?,
    )
    .with_context(|| format!("解析 {} 失败", dishes_path))?;

    let catalog: HashMap<DishId, DishType> =
        dishes.into_iter().map(|d| (d.id, d.dish_type)).collect();

    let validator = AllocationValidator::new(config.allocation_limits());
    match validator.validate(&schedule, &catalog) {
        Ok(()) => {
            let summaries: Vec<_> = schedule
                .schedule
                .iter()
                .map(|entry| validator.day_summary(entry, &catalog))
                .collect();
            println!("{}", serde_json::to_string_pretty(&summaries)?);
            eprintln!("{}", t("allocation.accepted"));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", e.localized_message());
            Ok(ExitCode::FAILURE)
        }
    }
}
