// ==========================================
// 食堂点餐系统 - 菜单配置读取 Trait
// ==========================================
// 职责: 定义导入/校验模块所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::domain::types::MenuSource;
use crate::engine::AllocationLimits;
use crate::importer::vocabulary::MenuVocabulary;

// ==========================================
// MenuConfigReader Trait
// ==========================================
// 实现者: MenuConfig（JSON 文件 / 默认值）
pub trait MenuConfigReader: Send + Sync {
    /// 单日同类菜品上限
    ///
    /// # 默认值
    /// - 2
    fn max_dishes_per_type_per_day(&self) -> usize;

    /// 菜单词表（内置词条 + 配置追加的别名）
    fn vocabulary(&self) -> MenuVocabulary;

    /// 未指定来源时的菜单来源
    ///
    /// # 默认值
    /// - PROVIDER
    fn default_source(&self) -> MenuSource;

    /// 分配上限
    fn allocation_limits(&self) -> AllocationLimits {
        AllocationLimits {
            max_per_type_per_day: self.max_dishes_per_type_per_day(),
        }
    }
}
