//! # 内联编码模块
//!
//! ## 设计思路
//!
//! 把一条图片记录的十六进制负载转成可直接充当 `src` 的
//! Data URL（`data:<type>;base64,<...>`）。
//! 编码器自身不报错：类型不可解码、负载缺失或十六进制非法
//! 一律返回 `None`，由重写侧按“类型不支持”处理，
//! 绝不产出半截或损坏的 Data URL。
//!
//! ## 实现思路
//!
//! - 十六进制解析失败返回 [`FilterError::InvalidHex`]，编码器就地降级并告警。
//! - Base64 使用 `base64` crate 的标准引擎。

use base64::{Engine as _, engine::general_purpose};

use crate::error::FilterError;
use crate::rtf::classify::is_supported;
use crate::rtf::record::ImageRecord;

/// 将记录编码为 Data URL；类型不可解码或负载不可用时返回 `None`。
pub fn encode_image_src(record: &ImageRecord) -> Option<String> {
    if record.image_type.is_empty() || !is_supported(&record.image_type) {
        return None;
    }

    let hex = record.hex.as_deref()?;

    match hex_to_bytes(hex) {
        Ok(bytes) => Some(format!(
            "data:{};base64,{}",
            record.image_type,
            general_purpose::STANDARD.encode(bytes)
        )),
        Err(e) => {
            log::warn!("⚠️ 图片负载解码失败，按不支持类型处理: {}", e);
            None
        }
    }
}

/// 将无空白的十六进制文本解析为字节。
pub(crate) fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, FilterError> {
    if hex.len() % 2 != 0 {
        return Err(FilterError::InvalidHex(format!(
            "长度为奇数（{} 个字符）",
            hex.len()
        )));
    }

    let mut bytes = Vec::with_capacity(hex.len() / 2);

    for pair in hex.as_bytes().chunks(2) {
        let pair = std::str::from_utf8(pair)
            .map_err(|_| FilterError::InvalidHex("含多字节字符".to_string()))?;
        let byte = u8::from_str_radix(pair, 16)
            .map_err(|_| FilterError::InvalidHex(format!("非法十六进制对: {:?}", pair)))?;
        bytes.push(byte);
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(image_type: &str, hex: Option<&str>) -> ImageRecord {
        ImageRecord {
            id: Some("a1".to_string()),
            hex: hex.map(str::to_string),
            image_type: image_type.to_string(),
        }
    }

    #[test]
    fn png_record_encodes_to_data_url() {
        let encoded = encode_image_src(&record("image/png", Some("89504E47")));

        // 89 50 4E 47 → iVBORw==
        assert_eq!(encoded.as_deref(), Some("data:image/png;base64,iVBORw=="));
    }

    #[test]
    fn unsupported_type_encodes_to_none() {
        assert!(encode_image_src(&record("image/wmf", Some("0100"))).is_none());
        assert!(encode_image_src(&record("unknown", Some("0100"))).is_none());
        assert!(encode_image_src(&record("", Some("0100"))).is_none());
    }

    #[test]
    fn missing_payload_encodes_to_none() {
        assert!(encode_image_src(&record("image/png", None)).is_none());
    }

    #[test]
    fn invalid_hex_degrades_to_none() {
        assert!(encode_image_src(&record("image/png", Some("89g0"))).is_none());
        assert!(encode_image_src(&record("image/png", Some("895"))).is_none());
    }

    #[test]
    fn hex_parsing_accepts_both_cases() {
        assert_eq!(
            hex_to_bytes("89504e47").expect("parse failed"),
            vec![0x89, 0x50, 0x4e, 0x47]
        );
        assert_eq!(
            hex_to_bytes("FFD8FFE0").expect("parse failed"),
            vec![0xff, 0xd8, 0xff, 0xe0]
        );
    }

    #[test]
    fn hex_parsing_rejects_odd_length() {
        assert!(matches!(
            hex_to_bytes("895"),
            Err(FilterError::InvalidHex(_))
        ));
    }
}
