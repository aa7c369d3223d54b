// ==========================================
// 食堂点餐系统 - 菜单词表
// ==========================================
// 职责: 分类标题 → 菜品类型映射、可忽略的表头集合
// 红线: 构造后只读，无写入路径
// ==========================================

use crate::domain::types::DishType;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// 供应商价目表中的分类标题（小写）
pub const CATEGORY_HEADERS: [(&str, DishType); 9] = [
    ("вторые горячие блюда", DishType::Main),
    ("гарниры", DishType::Garnish),
    ("готовое кулинарное блюдо", DishType::Prepared),
    ("напитки", DishType::Drink),
    ("салаты", DishType::Salad),
    ("супы", DishType::Soup),
    ("первые блюда", DishType::Soup),
    ("хлеб", DishType::Bread),
    ("выпечка", DishType::Bread),
];

/// 价目表中的表头行（小写），解析时直接跳过
pub const IGNORED_HEADERS: [&str; 6] = [
    "название",
    "состав",
    "кол-во (г/шт.)",
    "цена",
    "период действия в меню",
    "штрихкод",
];

static DEFAULT_VOCABULARY: LazyLock<MenuVocabulary> = LazyLock::new(MenuVocabulary::builtin);

// ==========================================
// LineClass - 行分类结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Empty,
    IgnoredHeader,
    CategoryHeader(DishType),
    Content,
}

// ==========================================
// MenuVocabulary - 菜单词表
// ==========================================
#[derive(Debug, Clone)]
pub struct MenuVocabulary {
    categories: HashMap<String, DishType>,
    ignored: HashSet<String>,
}

impl MenuVocabulary {
    fn builtin() -> Self {
        Self {
            categories: CATEGORY_HEADERS
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
            ignored: IGNORED_HEADERS.iter().map(|h| h.to_string()).collect(),
        }
    }

    /// 进程级共享的内置词表
    pub fn shared() -> &'static MenuVocabulary {
        &DEFAULT_VOCABULARY
    }

    /// 在内置词表基础上追加别名（键统一 TRIM + 小写）
    pub fn with_extensions<'a, C, I>(extra_categories: C, extra_ignored: I) -> Self
    where
        C: IntoIterator<Item = (&'a str, DishType)>,
        I: IntoIterator<Item = &'a str>,
    {
        let mut vocabulary = Self::builtin();
        for (alias, dish_type) in extra_categories {
            vocabulary
                .categories
                .insert(alias.trim().to_lowercase(), dish_type);
        }
        for header in extra_ignored {
            vocabulary.ignored.insert(header.trim().to_lowercase());
        }
        vocabulary
    }

    /// 查询分类标题（输入需已 TRIM + 小写）
    pub fn category_for(&self, lower_line: &str) -> Option<DishType> {
        self.categories.get(lower_line).copied()
    }

    pub fn is_ignored(&self, lower_line: &str) -> bool {
        self.ignored.contains(lower_line)
    }

    /// 对已 TRIM 的行分类
    ///
    /// 表头优先于分类标题: 两个集合若有交集，按表头跳过
    pub fn classify(&self, trimmed: &str) -> LineClass {
        if trimmed.is_empty() {
            return LineClass::Empty;
        }

        let lower = trimmed.to_lowercase();
        if self.is_ignored(&lower) {
            LineClass::IgnoredHeader
        } else if let Some(dish_type) = self.category_for(&lower) {
            LineClass::CategoryHeader(dish_type)
        } else {
            LineClass::Content
        }
    }
}

impl Default for MenuVocabulary {
    fn default() -> Self {
        Self::shared().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_builtin() {
        let v = MenuVocabulary::shared();
        assert_eq!(v.classify(""), LineClass::Empty);
        assert_eq!(v.classify("Цена"), LineClass::IgnoredHeader);
        assert_eq!(v.classify("ШТРИХКОД"), LineClass::IgnoredHeader);
        assert_eq!(v.classify("Супы"), LineClass::CategoryHeader(DishType::Soup));
        assert_eq!(
            v.classify("Первые блюда"),
            LineClass::CategoryHeader(DishType::Soup)
        );
        assert_eq!(v.classify("Борщ"), LineClass::Content);
    }

    #[test]
    fn test_header_match_is_exact() {
        let v = MenuVocabulary::shared();
        // 包含分类词但不完全相等 → 普通内容
        assert_eq!(v.classify("Супы дня"), LineClass::Content);
        assert_eq!(v.classify("цена: 123"), LineClass::Content);
    }

    #[test]
    fn test_extensions() {
        let v = MenuVocabulary::with_extensions(
            [("  Десерты ", DishType::Prepared)],
            ["Артикул"],
        );
        assert_eq!(
            v.classify("десерты"),
            LineClass::CategoryHeader(DishType::Prepared)
        );
        assert_eq!(v.classify("АРТИКУЛ"), LineClass::IgnoredHeader);
        // 内置词条仍然有效
        assert_eq!(v.classify("хлеб"), LineClass::CategoryHeader(DishType::Bread));
        // 共享词表不受影响
        assert_eq!(MenuVocabulary::shared().classify("десерты"), LineClass::Content);
    }
}
