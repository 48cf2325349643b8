//! # HTML/RTF 对账模块
//!
//! ## 设计思路
//!
//! HTML 的 `<img>` 标签序列与 RTF 的图片记录序列是两条独立解析出的
//! 有序列表，之间只有“位置”这一条关联。对账因此是全有或全无的：
//! 计数一旦不一致，对应关系对每个标签都失效，整体放弃替换比
//! 错位替换安全得多。
//!
//! ## 实现思路
//!
//! 1. 提取记录，为空直接原样返回；
//! 2. 逐条编码为 Data URL（与记录等长等序）；
//! 3. 严格计数校验，不一致则上报并返回原 HTML；
//! 4. 按位置逐个替换：只动 `file://` 前缀的占位符，
//!    不可解码的位置上报后仅跳过该标签。

use crate::encode::encode_image_src;
use crate::html::replace_img_src;
use crate::report::{FilterEvent, ReportSink};
use crate::rtf::extract::extract_image_records;

/// 本地文件路径协议前缀。只有带此前缀的占位符会被改写，
/// 已解析的 URL 与 VML 图形占位符一律不碰。
pub const LOCAL_FILE_SCHEME: &str = "file://";

/// 将 RTF 嵌入图片按位置写回 HTML 的 `<img>` 占位符。
///
/// `img_tags` 是调用方已扫描好的 `src` 序列（与 `html` 同源）。
/// 无论发生什么，返回值都是合法 HTML；无可替换时与输入逐字节相同。
pub fn reconcile(html: &str, rtf: &str, img_tags: &[String], sink: &dyn ReportSink) -> String {
    let records = extract_image_records(rtf);
    if records.is_empty() {
        log::debug!("🖼️ RTF 中没有图片记录，HTML 原样返回");
        return html.to_string();
    }

    let encoded: Vec<Option<String>> = records.iter().map(encode_image_src).collect();

    if img_tags.len() != encoded.len() {
        sink.report(FilterEvent::ExtractionCountMismatch {
            rtf_count: encoded.len(),
            html_count: img_tags.len(),
        });
        return html.to_string();
    }

    let mut result = html.to_string();

    for (index, tag_src) in img_tags.iter().enumerate() {
        if !tag_src.starts_with(LOCAL_FILE_SCHEME) {
            continue;
        }

        match &encoded[index] {
            Some(data_url) => {
                result = replace_img_src(&result, tag_src, data_url);
            }
            None => {
                let image_type = records
                    .get(index)
                    .map(|record| record.image_type.clone())
                    .unwrap_or_default();
                sink.report(FilterEvent::UnsupportedImageType { image_type, index });
            }
        }
    }

    result
}
