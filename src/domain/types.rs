// ==========================================
// 食堂点餐系统 - 领域类型定义
// ==========================================
// 菜品类型与菜单来源
// 序列化格式: SCREAMING_SNAKE_CASE (与数据库一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 菜品类型 (Dish Type)
// ==========================================
// 顺序即校验顺序: 分配校验按声明顺序报告超限类型
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DishType {
    #[default]
    Main,     // 第二道热菜（未遇到分类标题时的默认类型）
    Garnish,  // 配菜
    Prepared, // 成品菜
    Drink,    // 饮品
    Salad,    // 沙拉
    Soup,     // 汤
    Bread,    // 面包/烘焙
}

impl DishType {
    /// 全部类型（声明顺序）
    pub const ALL: [DishType; 7] = [
        DishType::Main,
        DishType::Garnish,
        DishType::Prepared,
        DishType::Drink,
        DishType::Salad,
        DishType::Soup,
        DishType::Bread,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DishType::Main => "MAIN",
            DishType::Garnish => "GARNISH",
            DishType::Prepared => "PREPARED",
            DishType::Drink => "DRINK",
            DishType::Salad => "SALAD",
            DishType::Soup => "SOUP",
            DishType::Bread => "BREAD",
        }
    }
}

impl fmt::Display for DishType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DishType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        DishType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == upper)
            .ok_or_else(|| format!("未知菜品类型: {}", s))
    }
}

// ==========================================
// 菜单来源 (Menu Source)
// ==========================================
// 供应商菜单与自有厨房菜单分别整体替换
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuSource {
    #[default]
    Provider,   // 供应商
    OwnKitchen, // 自有厨房
}

impl MenuSource {
    /// 对应持久层的 is_provider 标志
    pub fn is_provider(&self) -> bool {
        matches!(self, MenuSource::Provider)
    }
}

impl fmt::Display for MenuSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuSource::Provider => write!(f, "PROVIDER"),
            MenuSource::OwnKitchen => write!(f, "OWN_KITCHEN"),
        }
    }
}

impl FromStr for MenuSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "provider" => Ok(MenuSource::Provider),
            "own" | "own_kitchen" => Ok(MenuSource::OwnKitchen),
            _ => Err(format!("未知菜单来源: {}", s)),
        }
    }
}
