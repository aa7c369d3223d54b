// ==========================================
// 食堂点餐系统 - 菜品候选领域模型
// ==========================================
// 职责: 菜单文本解析的输出结构（尚未落库）
// 红线: 候选记录无独立身份，由调用方落库或丢弃
// ==========================================

use crate::domain::types::DishType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ==========================================
// DishCandidate - 菜品候选
// ==========================================
// 每条候选对应连续 4 行非空、非标题的输入行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishCandidate {
    pub name: String,            // 第 1 行: 菜名
    #[serde(rename = "type")]
    pub dish_type: DishType,     // 当前分类标题决定
    pub composition: String,     // 第 2 行: 成分
    pub quantity_grams: u64,     // 第 3 行: 份量（克），无数字时为 0
    pub price_rub: Decimal,      // 第 4 行: 价格（卢布），无数字时为 0
}

// ==========================================
// DiagnosticKind - 诊断类型
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticKind {
    MalformedEntry, // 分组无法构造候选，已跳过
}

// ==========================================
// ParseDiagnostic - 解析诊断
// ==========================================
// 诊断是数据而非控制流: 单条分组失败不会中断整体解析
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseDiagnostic {
    pub line_number: usize,      // 分组首行（菜名行）的行号，从 1 开始
    pub dish_name: String,       // 分组首行文本
    pub kind: DiagnosticKind,
    pub message: String,
}

// ==========================================
// MenuParseOutcome - 解析结果（双通道）
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuParseOutcome {
    pub dishes: Vec<DishCandidate>,
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl MenuParseOutcome {
    /// 是否没有任何可用菜品（调用方据此拒绝整个上传）
    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
