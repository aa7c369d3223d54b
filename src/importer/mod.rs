// ==========================================
// 食堂点餐系统 - 导入层
// ==========================================
// 职责: 供应商价目表文本 → 菜品候选 + 诊断
// 红线: 不访问存储，落库由调用方负责
// ==========================================

// 模块声明
pub mod error;
pub mod menu_importer;
pub mod menu_importer_trait;
pub mod menu_parser;
pub mod numeric;
pub mod text_decoder;
pub mod vocabulary;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use menu_importer::MenuImporterImpl;
pub use menu_parser::{parse_menu_text, MenuTextParser, LINES_PER_DISH};
pub use numeric::{extract_price_rub, extract_quantity_grams, ExtractError};
pub use text_decoder::{decode_upload, DecodedText};
pub use vocabulary::{LineClass, MenuVocabulary};

// 重导出 Trait 接口
pub use menu_importer_trait::MenuImporter;
