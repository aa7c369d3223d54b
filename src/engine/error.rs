// ==========================================
// 食堂点餐系统 - 分配校验错误类型
// ==========================================
// 所有拒绝必须给出显式原因: 日期索引 + 菜品类型 + 数量
// ==========================================

use crate::domain::types::DishType;
use crate::i18n::t_with_args;
use thiserror::Error;

/// 周菜单分配校验错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// 单日同类菜品数量超限
    #[error("第 {day_of_week} 天: {dish_type} 类菜品过多 ({count} 个, 上限 {limit})")]
    CategoryOverflow {
        day_of_week: u8,
        dish_type: DishType,
        count: usize,
        limit: usize,
    },
}

impl AllocationError {
    /// 面向用户的本地化消息
    pub fn localized_message(&self) -> String {
        match self {
            AllocationError::CategoryOverflow {
                day_of_week,
                dish_type,
                count,
                limit,
            } => {
                let day = day_of_week.to_string();
                let count = count.to_string();
                let limit = limit.to_string();
                t_with_args(
                    "allocation.category_overflow",
                    &[
                        ("day", day.as_str()),
                        ("type", dish_type.as_str()),
                        ("count", count.as_str()),
                        ("limit", limit.as_str()),
                    ],
                )
            }
        }
    }
}

/// Result 类型别名
pub type AllocationResult<T> = Result<T, AllocationError>;
