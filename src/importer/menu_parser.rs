// ==========================================
// 食堂点餐系统 - 菜单文本解析器
// ==========================================
// 输入: 供应商价目表的纯文本（调用方已完成解码）
// 输出: 菜品候选 + 诊断（双通道，不抛出单条错误）
// ==========================================
// 算法: 单次从左到右扫描
// 1. 按行切分，TRIM；空行跳过（不影响缓冲区）
// 2. 表头行跳过（不影响缓冲区与当前分类）
// 3. 分类标题: 切换当前分类并清空缓冲区
// 4. 其他行进入缓冲区，满 4 行即构造候选并清空
// 5. 结束时不足 4 行的缓冲区直接丢弃
// ==========================================

use crate::domain::dish::{DiagnosticKind, DishCandidate, MenuParseOutcome, ParseDiagnostic};
use crate::domain::types::DishType;
use crate::importer::numeric::{extract_price_rub, extract_quantity_grams, ExtractError};
use crate::importer::vocabulary::{LineClass, MenuVocabulary};
use tracing::{debug, warn};

/// 每个菜品占用的行数: 菜名 / 成分 / 份量 / 价格
pub const LINES_PER_DISH: usize = 4;

/// 切分行: 兼容 \n、\r\n 以及单独的 \r
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().flat_map(|line| line.split('\r'))
}

// ==========================================
// PendingGroup - 正在累积的分组
// ==========================================
#[derive(Debug, Default)]
struct PendingGroup<'a> {
    first_line_number: usize,
    lines: Vec<&'a str>,
}

impl<'a> PendingGroup<'a> {
    fn push(&mut self, line_number: usize, line: &'a str) {
        if self.lines.is_empty() {
            self.first_line_number = line_number;
        }
        self.lines.push(line);
    }

    fn is_full(&self) -> bool {
        self.lines.len() == LINES_PER_DISH
    }

    fn clear(&mut self) {
        self.lines.clear();
    }
}

// ==========================================
// MenuTextParser - 菜单文本解析器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct MenuTextParser {
    vocabulary: MenuVocabulary,
}

impl MenuTextParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vocabulary(vocabulary: MenuVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &MenuVocabulary {
        &self.vocabulary
    }

    /// 解析菜单文本
    ///
    /// 全函数: 任何输入都返回结果，失败的分组进入 diagnostics
    pub fn parse(&self, text: &str) -> MenuParseOutcome {
        let mut outcome = MenuParseOutcome::default();
        let mut current_type = DishType::default();
        let mut group = PendingGroup::default();

        for (idx, raw_line) in split_lines(text).enumerate() {
            let line_number = idx + 1;
            let line = raw_line.trim();

            match self.vocabulary.classify(line) {
                LineClass::Empty | LineClass::IgnoredHeader => continue,
                LineClass::CategoryHeader(dish_type) => {
                    if !group.lines.is_empty() {
                        debug!(
                            line_number,
                            dropped = group.lines.len(),
                            "分类标题前的未完成分组被丢弃"
                        );
                    }
                    current_type = dish_type;
                    group.clear();
                    continue;
                }
                LineClass::Content => group.push(line_number, line),
            }

            if group.is_full() {
                match build_candidate(&group.lines, current_type) {
                    Ok(dish) => outcome.dishes.push(dish),
                    Err(e) => {
                        let diagnostic = ParseDiagnostic {
                            line_number: group.first_line_number,
                            dish_name: group.lines[0].to_string(),
                            kind: DiagnosticKind::MalformedEntry,
                            message: e.to_string(),
                        };
                        warn!(
                            line_number = diagnostic.line_number,
                            dish = %diagnostic.dish_name,
                            error = %e,
                            "菜品解析失败，已跳过"
                        );
                        outcome.diagnostics.push(diagnostic);
                    }
                }
                group.clear();
            }
        }

        if !group.lines.is_empty() {
            debug!(dropped = group.lines.len(), "文本末尾的未完成分组被丢弃");
        }

        outcome
    }
}

/// 由 4 行构造菜品候选
fn build_candidate(lines: &[&str], dish_type: DishType) -> Result<DishCandidate, ExtractError> {
    Ok(DishCandidate {
        name: lines[0].to_string(),
        dish_type,
        composition: lines[1].to_string(),
        quantity_grams: extract_quantity_grams(lines[2])?,
        price_rub: extract_price_rub(lines[3])?,
    })
}

/// 使用内置词表解析菜单文本
pub fn parse_menu_text(text: &str) -> MenuParseOutcome {
    MenuTextParser::new().parse(text)
}
