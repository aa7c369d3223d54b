// ==========================================
// 食堂点餐系统 - 上传文件解码
// ==========================================
// 规则: 先按 UTF-8 严格解码（去除 BOM），失败后回退 Windows-1251
// 供应商价目表常由旧版办公软件导出为 Windows-1251
// 注: 0x98 在 Windows-1251 中未定义，encoding_rs 将其映射为 U+0098，按解码失败处理
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use encoding_rs::{Encoding, UTF_8, WINDOWS_1251};
use tracing::debug;

/// 解码结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding: &'static str,
}

/// Windows-1251 未定义码位 0x98 的解码结果
const CP1251_UNDEFINED: char = '\u{98}';

pub fn decode_upload(bytes: &[u8]) -> ImportResult<DecodedText> {
    // 按候选顺序尝试解码
    let candidates: [&'static Encoding; 2] = [UTF_8, WINDOWS_1251];

    for encoding in candidates {
        let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
        let undefined_byte = encoding == WINDOWS_1251 && text.contains(CP1251_UNDEFINED);
        if had_errors || undefined_byte {
            debug!(encoding = encoding.name(), "解码失败，尝试下一种编码");
            continue;
        }

        return Ok(DecodedText {
            text: text.into_owned(),
            encoding: encoding.name(),
        });
    }

    Err(ImportError::InvalidEncoding)
}
