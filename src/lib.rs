// ==========================================
// 食堂点餐系统 - 菜单核心库
// ==========================================
// 菜单导入: 供应商价目表文本 → 菜品候选
// 分配校验: 周菜单单日同类菜品上限
// 系统定位: 纯计算核心（存储、鉴权、HTTP 由调用方负责）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "ru");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 分配校验
pub mod engine;

// 导入层 - 菜单文本
pub mod importer;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    DayEntry, DiagnosticKind, DishCandidate, DishId, DishType, MenuImportReport,
    MenuImportSummary, MenuParseOutcome, MenuSource, ParseDiagnostic, WeeklyScheduleRequest,
};

// 引擎
pub use engine::{
    AllocationError, AllocationLimits, AllocationValidator, DishTypeResolver,
    DEFAULT_MAX_DISHES_PER_TYPE_PER_DAY,
};

// 导入
pub use importer::{
    parse_menu_text, ImportError, ImportResult, MenuImporter, MenuImporterImpl, MenuTextParser,
};

// 配置
pub use config::{MenuConfig, MenuConfigReader};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "canteen-menu";
