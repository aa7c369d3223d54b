// ==========================================
// 食堂点餐系统 - 周菜单分配请求
// ==========================================
// 字段名与上游请求体一致: schedule / day_of_week / dish_ids
// 红线: 校验器不创建、不缓存菜品数据
// ==========================================

use serde::{Deserialize, Serialize};

/// 菜品 ID（持久层主键）
pub type DishId = i64;

/// 一周天数（0 = 周一 … 6 = 周日）
pub const DAYS_PER_WEEK: u8 = 7;

// ==========================================
// DayEntry - 单日分配
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    pub day_of_week: u8,
    pub dish_ids: Vec<DishId>,
}

impl DayEntry {
    pub fn new(day_of_week: u8, dish_ids: Vec<DishId>) -> Self {
        Self {
            day_of_week,
            dish_ids,
        }
    }
}

// ==========================================
// WeeklyScheduleRequest - 周菜单分配请求
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyScheduleRequest {
    pub schedule: Vec<DayEntry>,
}

impl WeeklyScheduleRequest {
    pub fn new(schedule: Vec<DayEntry>) -> Self {
        Self { schedule }
    }

    /// 请求中的菜品 ID 总数（含重复）
    pub fn total_assignments(&self) -> usize {
        self.schedule.iter().map(|d| d.dish_ids.len()).sum()
    }
}
