// ==========================================
// 食堂点餐系统 - 引擎层
// ==========================================
// 职责: 菜单业务规则校验，不访问存储
// 红线: 所有拒绝必须输出原因
// ==========================================

pub mod allocation_validator;
pub mod error;

// 重导出核心引擎
pub use allocation_validator::{
    AllocationLimits, AllocationValidator, DaySummary, DishTypeResolver,
    DEFAULT_MAX_DISHES_PER_TYPE_PER_DAY,
};
pub use error::{AllocationError, AllocationResult};
