// ==========================================
// 食堂点餐系统 - 数值字段提取
// ==========================================
// 职责: 从份量行/价格行中提取第一个数字
// 规则: 无数字 → 0（容忍单位、货币符号等噪声）
//       全角等兼容数字先经 NFKC 折叠为 ASCII
//       数字超出类型范围 → 提取失败（由解析器记录诊断）
// ==========================================

use regex::Regex;
use rust_decimal::Decimal;
use std::borrow::Cow;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

// 匹配前已做 NFKC 折叠，此处只需 ASCII 数字
static QUANTITY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());
static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:[.,][0-9]+)?").unwrap());

/// 数值提取错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("{field} 数值超出范围: {token}")]
    OutOfRange { field: &'static str, token: String },
}

/// 兼容数字折叠（"３００" → "300"），纯 ASCII 行不分配
fn fold_digits(line: &str) -> Cow<'_, str> {
    if line.is_ascii() {
        Cow::Borrowed(line)
    } else {
        Cow::Owned(line.nfkc().collect())
    }
}

/// 提取份量（克）: 第一段连续数字
///
/// # 示例
/// - "300г" → 300
/// - "３００г" → 300
/// - "нет данных" → 0
pub fn extract_quantity_grams(line: &str) -> Result<u64, ExtractError> {
    let folded = fold_digits(line);
    match QUANTITY_RE.find(&folded) {
        Some(m) => m.as_str().parse::<u64>().map_err(|_| ExtractError::OutOfRange {
            field: "quantity_grams",
            token: m.as_str().to_string(),
        }),
        None => Ok(0),
    }
}

/// 提取价格（卢布）: 第一段数字，可带 `.` 或 `,` 小数部分
///
/// 整数价格保持精确值（"123" → 123）
pub fn extract_price_rub(line: &str) -> Result<Decimal, ExtractError> {
    let folded = fold_digits(line);
    match PRICE_RE.find(&folded) {
        Some(m) => {
            let token = m.as_str().replace(',', ".");
            Decimal::from_str(&token).map_err(|_| ExtractError::OutOfRange {
                field: "price_rub",
                token: m.as_str().to_string(),
            })
        }
        None => Ok(Decimal::ZERO),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_basic() {
        assert_eq!(extract_quantity_grams("300г"), Ok(300));
        assert_eq!(extract_quantity_grams("Вес: 250 / 50 г"), Ok(250));
        assert_eq!(extract_quantity_grams("1 шт."), Ok(1));
    }

    #[test]
    fn test_quantity_no_digits() {
        assert_eq!(extract_quantity_grams("нет данных"), Ok(0));
        assert_eq!(extract_quantity_grams(""), Ok(0));
    }

    #[test]
    fn test_quantity_beyond_u32() {
        assert_eq!(extract_quantity_grams("5000000000 g"), Ok(5_000_000_000));
    }

    #[test]
    fn test_fullwidth_digits_folded() {
        assert_eq!(extract_quantity_grams("３００г"), Ok(300));
        assert_eq!(extract_price_rub("１５０，５０ руб").unwrap(), Decimal::new(15050, 2));
    }

    #[test]
    fn test_quantity_overflow() {
        let result = extract_quantity_grams("99999999999999999999999 г");
        assert!(matches!(
            result,
            Err(ExtractError::OutOfRange { field: "quantity_grams", .. })
        ));
    }

    #[test]
    fn test_price_integer_is_exact() {
        let price = extract_price_rub("цена: 123").unwrap();
        assert_eq!(price, Decimal::new(123, 0));
        assert_eq!(price.to_string(), "123");
    }

    #[test]
    fn test_price_with_fraction() {
        assert_eq!(extract_price_rub("89,90 руб").unwrap(), Decimal::new(8990, 2));
        assert_eq!(extract_price_rub("89.5₽").unwrap(), Decimal::new(895, 1));
        // 小数点后无数字: 只取整数部分
        assert_eq!(extract_price_rub("150. руб").unwrap(), Decimal::new(150, 0));
    }

    #[test]
    fn test_price_no_digits() {
        assert_eq!(extract_price_rub("договорная").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_price_overflow() {
        let result = extract_price_rub("1234567890123456789012345678901234567890");
        assert!(matches!(
            result,
            Err(ExtractError::OutOfRange { field: "price_rub", .. })
        ));
    }
}
