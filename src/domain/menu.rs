// ==========================================
// 食堂点餐系统 - 菜单导入结果
// ==========================================
// 用途: MenuImporter 返回值，交由调用方按来源整体替换落库
// ==========================================

use crate::domain::dish::{DishCandidate, ParseDiagnostic};
use crate::domain::types::{DishType, MenuSource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// MenuImportSummary - 导入汇总
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuImportSummary {
    pub total_lines: usize,                 // 输入总行数（含空行）
    pub dishes: usize,                      // 成功解析菜品数
    pub malformed: usize,                   // 被跳过的分组数
    pub by_type: BTreeMap<DishType, usize>, // 按类型统计
}

impl MenuImportSummary {
    pub fn from_parts(
        total_lines: usize,
        dishes: &[DishCandidate],
        diagnostics: &[ParseDiagnostic],
    ) -> Self {
        let mut by_type = BTreeMap::new();
        for dish in dishes {
            *by_type.entry(dish.dish_type).or_insert(0) += 1;
        }

        Self {
            total_lines,
            dishes: dishes.len(),
            malformed: diagnostics.len(),
            by_type,
        }
    }
}

// ==========================================
// MenuImportReport - 导入报告
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuImportReport {
    pub batch_id: String,                  // 批次 ID
    pub source: MenuSource,                // 菜单来源
    pub encoding: String,                  // 实际使用的解码
    pub imported_at: DateTime<Utc>,        // 导入时间
    pub summary: MenuImportSummary,        // 汇总统计
    pub dishes: Vec<DishCandidate>,        // 菜品候选
    pub diagnostics: Vec<ParseDiagnostic>, // 诊断明细
    pub elapsed_time: std::time::Duration, // 导入耗时
}
