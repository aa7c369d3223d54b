// ==========================================
// 食堂点餐系统 - 领域模型层
// ==========================================
// 职责: 定义菜品候选、菜单导入结果、周菜单分配请求
// 红线: 不含数据访问逻辑,不含解析/校验逻辑
// ==========================================

pub mod dish;
pub mod menu;
pub mod schedule;
pub mod types;

// 重导出核心类型
pub use dish::{DiagnosticKind, DishCandidate, MenuParseOutcome, ParseDiagnostic};
pub use menu::{MenuImportReport, MenuImportSummary};
pub use schedule::{DayEntry, DishId, WeeklyScheduleRequest, DAYS_PER_WEEK};
pub use types::{DishType, MenuSource};
