// ==========================================
// 食堂点餐系统 - 菜单导入 Trait
// ==========================================
// 职责: 定义菜单导入接口（不包含实现）
// 红线: 导入只产出报告，不落库
// ==========================================

use crate::domain::menu::MenuImportReport;
use crate::domain::types::MenuSource;
use crate::importer::error::ImportResult;
use async_trait::async_trait;
use std::path::Path;

// ==========================================
// MenuImporter Trait
// ==========================================
// 用途: 菜单上传主接口
// 实现者: MenuImporterImpl
#[async_trait]
pub trait MenuImporter: Send + Sync {
    /// 从已解码文本导入
    ///
    /// # 返回
    /// - Ok(MenuImportReport): 至少解析出一个菜品
    /// - Err(ImportError::NoDishesFound): 没有任何可用菜品
    fn import_text(&self, text: &str, source: MenuSource) -> ImportResult<MenuImportReport>;

    /// 从上传的原始字节导入
    ///
    /// # 导入流程
    /// 1. 解码（UTF-8 → Windows-1251）
    /// 2. 文本解析（分类/分组/数值提取）
    /// 3. 空结果判定
    /// 4. 生成报告（批次 ID、汇总、诊断）
    fn import_bytes(&self, bytes: &[u8], source: MenuSource) -> ImportResult<MenuImportReport>;

    /// 从文件导入
    ///
    /// # 参数
    /// - file_path: 价目表文本文件路径
    /// - source: 菜单来源
    async fn import_file<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
        source: MenuSource,
    ) -> ImportResult<MenuImportReport>;
}
