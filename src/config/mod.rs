// ==========================================
// 食堂点餐系统 - 配置层
// ==========================================
// 职责: 菜单配置加载与校验
// 存储: JSON 文件 / 默认值
// ==========================================

pub mod menu_config;
pub mod menu_config_reader;

// 重导出核心配置
pub use menu_config::{config_keys, MenuConfig, CONFIG_PATH_ENV, DEFAULT_LOCALE};
pub use menu_config_reader::MenuConfigReader;
