// ==========================================
// 食堂点餐系统 - 菜单配置
// ==========================================
// 存储: JSON 文件（路径由 CANTEEN_MENU_CONFIG 指定），缺省时使用默认值
// 职责: 配置加载、校验、向导入/校验模块提供参数
// ==========================================

use crate::config::menu_config_reader::MenuConfigReader;
use crate::domain::types::{DishType, MenuSource};
use crate::engine::DEFAULT_MAX_DISHES_PER_TYPE_PER_DAY;
use crate::i18n::SUPPORTED_LOCALES;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::vocabulary::MenuVocabulary;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "CANTEEN_MENU_CONFIG";

/// 默认语言
pub const DEFAULT_LOCALE: &str = "ru";

// ==========================================
// 配置键（JSON 字段名）
// ==========================================
pub mod config_keys {
    // 分配校验
    pub const MAX_DISHES_PER_TYPE_PER_DAY: &str = "max_dishes_per_type_per_day";

    // 词表扩展
    pub const EXTRA_CATEGORY_ALIASES: &str = "extra_category_aliases";
    pub const EXTRA_IGNORED_HEADERS: &str = "extra_ignored_headers";

    // 导入
    pub const DEFAULT_SOURCE: &str = "default_source";

    // 国际化
    pub const LOCALE: &str = "locale";
}

fn default_max_dishes_per_type_per_day() -> usize {
    DEFAULT_MAX_DISHES_PER_TYPE_PER_DAY
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

// ==========================================
// MenuConfig - 菜单配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// 单日同类菜品上限（>= 1）
    #[serde(default = "default_max_dishes_per_type_per_day")]
    pub max_dishes_per_type_per_day: usize,

    /// 追加的分类标题别名（标题 → 类型）
    #[serde(default)]
    pub extra_category_aliases: BTreeMap<String, DishType>,

    /// 追加的表头行
    #[serde(default)]
    pub extra_ignored_headers: Vec<String>,

    #[serde(default)]
    pub default_source: MenuSource,

    /// 用户消息语言（ru / en / zh-CN）
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            max_dishes_per_type_per_day: default_max_dishes_per_type_per_day(),
            extra_category_aliases: BTreeMap::new(),
            extra_ignored_headers: Vec::new(),
            default_source: MenuSource::default(),
            locale: default_locale(),
        }
    }
}

impl MenuConfig {
    /// 从 JSON 字符串加载并校验
    pub fn from_json_str(json: &str) -> ImportResult<Self> {
        let config: MenuConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件加载并校验
    pub fn from_file<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ImportError::ConfigReadError {
            key: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config = Self::from_json_str(&raw)?;
        info!(path = %path.display(), "配置文件加载完成");
        Ok(config)
    }

    /// 按环境变量加载配置，未设置时使用默认值
    pub fn load() -> ImportResult<Self> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim()),
            _ => {
                debug!("未指定配置文件，使用默认配置");
                Ok(Self::default())
            }
        }
    }

    /// 校验配置值
    pub fn validate(&self) -> ImportResult<()> {
        if self.max_dishes_per_type_per_day == 0 {
            return Err(ImportError::ConfigValueError {
                key: config_keys::MAX_DISHES_PER_TYPE_PER_DAY.to_string(),
                value: "0".to_string(),
                message: "上限必须大于 0".to_string(),
            });
        }

        if let Some(alias) = self
            .extra_category_aliases
            .keys()
            .find(|k| k.trim().is_empty())
        {
            return Err(ImportError::ConfigValueError {
                key: config_keys::EXTRA_CATEGORY_ALIASES.to_string(),
                value: alias.clone(),
                message: "分类标题不能为空".to_string(),
            });
        }

        if let Some(header) = self.extra_ignored_headers.iter().find(|h| h.trim().is_empty()) {
            return Err(ImportError::ConfigValueError {
                key: config_keys::EXTRA_IGNORED_HEADERS.to_string(),
                value: header.clone(),
                message: "表头不能为空".to_string(),
            });
        }

        if !SUPPORTED_LOCALES.contains(&self.locale.as_str()) {
            return Err(ImportError::ConfigValueError {
                key: config_keys::LOCALE.to_string(),
                value: self.locale.clone(),
                message: format!("仅支持 {}", SUPPORTED_LOCALES.join(" / ")),
            });
        }

        Ok(())
    }
}

impl MenuConfigReader for MenuConfig {
    fn max_dishes_per_type_per_day(&self) -> usize {
        self.max_dishes_per_type_per_day
    }

    fn vocabulary(&self) -> MenuVocabulary {
        if self.extra_category_aliases.is_empty() && self.extra_ignored_headers.is_empty() {
            return MenuVocabulary::default();
        }

        MenuVocabulary::with_extensions(
            self.extra_category_aliases
                .iter()
                .map(|(alias, dish_type)| (alias.as_str(), *dish_type)),
            self.extra_ignored_headers.iter().map(String::as_str),
        )
    }

    fn default_source(&self) -> MenuSource {
        self.default_source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::vocabulary::LineClass;

    #[test]
    fn test_defaults_from_empty_json() {
        let config = MenuConfig::from_json_str("{}").unwrap();
        assert_eq!(config, MenuConfig::default());
        assert_eq!(config.max_dishes_per_type_per_day, 2);
        assert_eq!(config.locale, "ru");
        assert_eq!(config.allocation_limits().max_per_type_per_day, 2);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let result = MenuConfig::from_json_str(r#"{"max_dishes_per_type_per_day": 0}"#);
        assert!(matches!(
            result,
            Err(ImportError::ConfigValueError { ref key, .. }) if key == "max_dishes_per_type_per_day"
        ));
    }

    #[test]
    fn test_unknown_locale_rejected() {
        let result = MenuConfig::from_json_str(r#"{"locale": "de"}"#);
        assert!(matches!(result, Err(ImportError::ConfigValueError { .. })));
    }

    #[test]
    fn test_invalid_json_is_read_error() {
        let result = MenuConfig::from_json_str("{not json");
        assert!(matches!(result, Err(ImportError::ConfigReadError { .. })));
    }

    #[test]
    fn test_vocabulary_extensions() {
        let config = MenuConfig::from_json_str(
            r#"{"extra_category_aliases": {"Десерты": "PREPARED"}, "extra_ignored_headers": ["Артикул"]}"#,
        )
        .unwrap();
        let vocabulary = config.vocabulary();

        assert_eq!(
            vocabulary.classify("ДЕСЕРТЫ"),
            LineClass::CategoryHeader(DishType::Prepared)
        );
        assert_eq!(vocabulary.classify("артикул"), LineClass::IgnoredHeader);
    }
}
