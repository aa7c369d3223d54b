// ==========================================
// 食堂点餐系统 - 菜单导入器实现
// ==========================================
// 职责: 整合导入流程，从上传内容到导入报告
// 流程: 解码 → 解析 → 空结果判定 → 汇总
// ==========================================

use crate::config::MenuConfigReader;
use crate::domain::menu::{MenuImportReport, MenuImportSummary};
use crate::domain::types::MenuSource;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::menu_importer_trait::MenuImporter;
use crate::importer::menu_parser::{split_lines, MenuTextParser};
use crate::importer::text_decoder::decode_upload;
use chrono::Utc;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// MenuImporterImpl - 菜单导入器实现
// ==========================================
pub struct MenuImporterImpl<C>
where
    C: MenuConfigReader,
{
    // 配置读取器
    config: C,

    // 文本解析器（词表来自配置）
    parser: MenuTextParser,
}

impl<C> MenuImporterImpl<C>
where
    C: MenuConfigReader,
{
    /// 创建新的 MenuImporter 实例
    pub fn new(config: C) -> Self {
        let parser = MenuTextParser::with_vocabulary(config.vocabulary());
        Self { config, parser }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// 未指定来源时使用配置的默认来源
    pub fn import_bytes_default(&self, bytes: &[u8]) -> ImportResult<MenuImportReport> {
        self.import_bytes(bytes, self.config.default_source())
    }

    fn build_report(
        &self,
        text: &str,
        encoding: &str,
        source: MenuSource,
        start_time: Instant,
    ) -> ImportResult<MenuImportReport> {
        let batch_id = Uuid::new_v4().to_string();
        info!(batch_id = %batch_id, source = %source, encoding, "开始解析菜单");

        let outcome = self.parser.parse(text);
        if outcome.is_empty() {
            warn!(
                batch_id = %batch_id,
                skipped = outcome.diagnostics.len(),
                "未解析出任何菜品"
            );
            return Err(ImportError::NoDishesFound {
                diagnostics: outcome.diagnostics,
            });
        }

        let total_lines = split_lines(text).count();
        let summary = MenuImportSummary::from_parts(total_lines, &outcome.dishes, &outcome.diagnostics);
        info!(
            batch_id = %batch_id,
            dishes = summary.dishes,
            malformed = summary.malformed,
            "菜单解析完成"
        );

        Ok(MenuImportReport {
            batch_id,
            source,
            encoding: encoding.to_string(),
            imported_at: Utc::now(),
            summary,
            dishes: outcome.dishes,
            diagnostics: outcome.diagnostics,
            elapsed_time: start_time.elapsed(),
        })
    }
}

#[async_trait::async_trait]
impl<C> MenuImporter for MenuImporterImpl<C>
where
    C: MenuConfigReader,
{
    fn import_text(&self, text: &str, source: MenuSource) -> ImportResult<MenuImportReport> {
        self.build_report(text, "UTF-8", source, Instant::now())
    }

    fn import_bytes(&self, bytes: &[u8], source: MenuSource) -> ImportResult<MenuImportReport> {
        let start_time = Instant::now();

        // === 步骤 1: 解码 ===
        let decoded = decode_upload(bytes)?;
        debug!(bytes = bytes.len(), encoding = decoded.encoding, "解码完成");

        // === 步骤 2-4: 解析 + 汇总 ===
        self.build_report(&decoded.text, decoded.encoding, source, start_time)
    }

    #[instrument(skip(self, file_path, source), fields(source = %source))]
    async fn import_file<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
        source: MenuSource,
    ) -> ImportResult<MenuImportReport> {
        let path = file_path.as_ref();
        info!(file_path = %path.display(), "读取菜单文件");

        let bytes = tokio::fs::read(path).await?;
        self.import_bytes(&bytes, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MenuConfig;
    use crate::domain::types::DishType;

    #[test]
    fn test_import_text_report() {
        let importer = MenuImporterImpl::new(MenuConfig::default());
        let report = importer
            .import_text("Салаты\nОливье\nКартофель, горошек\n150 г\n95 руб\nхвост", MenuSource::OwnKitchen)
            .unwrap();

        assert_eq!(report.source, MenuSource::OwnKitchen);
        assert_eq!(report.summary.total_lines, 6);
        assert_eq!(report.summary.dishes, 1);
        assert_eq!(report.summary.by_type.get(&DishType::Salad), Some(&1));
        assert!(Uuid::parse_str(&report.batch_id).is_ok());
    }

    #[test]
    fn test_headers_only_is_no_dishes() {
        let importer = MenuImporterImpl::new(MenuConfig::default());
        let result = importer.import_text("Название\nСостав\nЦена\nСупы\n", MenuSource::Provider);
        assert!(matches!(result, Err(ImportError::NoDishesFound { .. })));
    }

    #[test]
    fn test_default_source_from_config() {
        let config = MenuConfig {
            default_source: MenuSource::OwnKitchen,
            ..MenuConfig::default()
        };
        let importer = MenuImporterImpl::new(config);
        let report = importer
            .import_bytes_default("Хлеб\nБородинский\nМука\n40 г\n5".as_bytes())
            .unwrap();
        assert_eq!(report.source, MenuSource::OwnKitchen);
        assert_eq!(report.dishes[0].dish_type, DishType::Bread);
    }
}
