// ==========================================
// 食堂点餐系统 - 周菜单分配校验器
// ==========================================
// 红线: 单日同一类型菜品不超过上限（默认 2）
// ==========================================
// 输入: 周菜单分配请求 + 菜品类型解析器（调用方提供）
// 输出: 接受 / 首个违规原因（快速失败）
// ==========================================
// 注: 无法解析的菜品 ID 不计数，存在性由调用方校验
// 注: 同一天内重复的菜品 ID 只计一次
// ==========================================

use crate::domain::schedule::{DayEntry, DishId, WeeklyScheduleRequest, DAYS_PER_WEEK};
use crate::domain::types::DishType;
use crate::engine::error::{AllocationError, AllocationResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::{debug, info, warn};

/// 单日同类菜品默认上限
pub const DEFAULT_MAX_DISHES_PER_TYPE_PER_DAY: usize = 2;

// ==========================================
// DishTypeResolver - 菜品类型解析
// ==========================================
// 实现者: 调用方（通常基于已落库菜品查询）
pub trait DishTypeResolver {
    /// 返回 None 表示该 ID 无法解析
    fn resolve(&self, dish_id: DishId) -> Option<DishType>;
}

impl DishTypeResolver for HashMap<DishId, DishType> {
    fn resolve(&self, dish_id: DishId) -> Option<DishType> {
        self.get(&dish_id).copied()
    }
}

impl DishTypeResolver for BTreeMap<DishId, DishType> {
    fn resolve(&self, dish_id: DishId) -> Option<DishType> {
        self.get(&dish_id).copied()
    }
}

impl<F> DishTypeResolver for F
where
    F: Fn(DishId) -> Option<DishType>,
{
    fn resolve(&self, dish_id: DishId) -> Option<DishType> {
        self(dish_id)
    }
}

// ==========================================
// AllocationLimits - 分配上限
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationLimits {
    pub max_per_type_per_day: usize,
}

impl Default for AllocationLimits {
    fn default() -> Self {
        Self {
            max_per_type_per_day: DEFAULT_MAX_DISHES_PER_TYPE_PER_DAY,
        }
    }
}

// ==========================================
// DaySummary - 单日统计
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    pub day_of_week: u8,
    pub counts: BTreeMap<DishType, usize>, // 已解析菜品按类型计数
    pub unresolved: Vec<DishId>,           // 未解析的 ID（不计数，升序）
}

// ==========================================
// AllocationValidator - 分配校验器
// ==========================================
// 无状态: 每次调用只依赖入参
#[derive(Debug, Clone, Default)]
pub struct AllocationValidator {
    limits: AllocationLimits,
}

impl AllocationValidator {
    pub fn new(limits: AllocationLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> AllocationLimits {
        self.limits
    }

    /// 统计单日各类型菜品数量
    pub fn day_summary<R>(&self, entry: &DayEntry, resolver: &R) -> DaySummary
    where
        R: DishTypeResolver + ?Sized,
    {
        let mut summary = DaySummary {
            day_of_week: entry.day_of_week,
            ..Default::default()
        };

        let distinct: BTreeSet<DishId> = entry.dish_ids.iter().copied().collect();
        for dish_id in distinct {
            match resolver.resolve(dish_id) {
                Some(dish_type) => *summary.counts.entry(dish_type).or_insert(0) += 1,
                None => summary.unresolved.push(dish_id),
            }
        }

        summary
    }

    /// 校验单日分配
    ///
    /// 超限类型按 DishType 声明顺序检查，保证报告结果稳定
    pub fn validate_day<R>(&self, entry: &DayEntry, resolver: &R) -> AllocationResult<DaySummary>
    where
        R: DishTypeResolver + ?Sized,
    {
        let summary = self.day_summary(entry, resolver);

        if !summary.unresolved.is_empty() {
            debug!(
                day_of_week = entry.day_of_week,
                unresolved = ?summary.unresolved,
                "存在未解析的菜品 ID，不参与计数"
            );
        }

        for dish_type in DishType::ALL {
            let count = summary.counts.get(&dish_type).copied().unwrap_or(0);
            if count > self.limits.max_per_type_per_day {
                return Err(AllocationError::CategoryOverflow {
                    day_of_week: entry.day_of_week,
                    dish_type,
                    count,
                    limit: self.limits.max_per_type_per_day,
                });
            }
        }

        Ok(summary)
    }

    /// 校验整周分配
    ///
    /// # 返回
    /// - Ok(()): 全部日期通过，整体接受
    /// - Err(AllocationError): 第一个违规（后续日期不再检查）
    pub fn validate<R>(&self, schedule: &WeeklyScheduleRequest, resolver: &R) -> AllocationResult<()>
    where
        R: DishTypeResolver + ?Sized,
    {
        for entry in &schedule.schedule {
            if entry.day_of_week >= DAYS_PER_WEEK {
                warn!(day_of_week = entry.day_of_week, "日期索引超出 0-6 范围");
            }

            if let Err(e) = self.validate_day(entry, resolver) {
                warn!(error = %e, "周菜单分配被拒绝");
                return Err(e);
            }
        }

        info!(
            days = schedule.schedule.len(),
            assignments = schedule.total_assignments(),
            "周菜单分配校验通过"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> HashMap<DishId, DishType> {
        HashMap::from([
            (1, DishType::Soup),
            (2, DishType::Soup),
            (3, DishType::Soup),
            (4, DishType::Main),
            (5, DishType::Drink),
        ])
    }

    #[test]
    fn test_day_summary_counts_and_unresolved() {
        let validator = AllocationValidator::default();
        let summary = validator.day_summary(&DayEntry::new(2, vec![1, 2, 4, 99]), &catalog());

        assert_eq!(summary.day_of_week, 2);
        assert_eq!(summary.counts.get(&DishType::Soup), Some(&2));
        assert_eq!(summary.counts.get(&DishType::Main), Some(&1));
        assert_eq!(summary.unresolved, vec![99]);
    }

    #[test]
    fn test_limit_is_inclusive() {
        let validator = AllocationValidator::default();
        assert!(validator
            .validate_day(&DayEntry::new(0, vec![1, 2]), &catalog())
            .is_ok());
        assert!(validator
            .validate_day(&DayEntry::new(0, vec![1, 2, 3]), &catalog())
            .is_err());
    }

    #[test]
    fn test_custom_limit() {
        let validator = AllocationValidator::new(AllocationLimits {
            max_per_type_per_day: 3,
        });
        assert!(validator
            .validate_day(&DayEntry::new(0, vec![1, 2, 3]), &catalog())
            .is_ok());
    }

    #[test]
    fn test_closure_resolver() {
        let validator = AllocationValidator::default();
        let resolver = |_id: DishId| Some(DishType::Bread);
        let request = WeeklyScheduleRequest::new(vec![DayEntry::new(6, vec![10, 11, 12])]);

        let err = validator.validate(&request, &resolver).unwrap_err();
        assert_eq!(
            err,
            AllocationError::CategoryOverflow {
                day_of_week: 6,
                dish_type: DishType::Bread,
                count: 3,
                limit: 2,
            }
        );
    }

    #[test]
    fn test_duplicate_ids_count_once() {
        let validator = AllocationValidator::default();
        let summary = validator
            .validate_day(&DayEntry::new(1, vec![1, 1, 2, 2, 2]), &catalog())
            .unwrap();
        assert_eq!(summary.counts.get(&DishType::Soup), Some(&2));
    }
}
