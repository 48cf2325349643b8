//! # 类型识别模块
//!
//! ## 设计思路
//!
//! RTF 图片分组用控制字标记编码格式（`\pngblip`、`\jpegblip` 等）。
//! 识别表是有序的不可变常量，首个命中即返回；
//! 可解码集合（PNG/JPEG）同样是常量，不提供运行时注册入口。
//!
//! ## 实现思路
//!
//! 通过 `once_cell::sync::Lazy` 在首次调用时编译正则，后续零成本复用。

use once_cell::sync::Lazy;
use regex::Regex;

/// PNG 图片的 MIME 类型标签。
pub const TYPE_PNG: &str = "image/png";
/// JPEG 图片的 MIME 类型标签。
pub const TYPE_JPEG: &str = "image/jpeg";
/// EMF 矢量图的 MIME 类型标签（可识别，不可解码）。
pub const TYPE_EMF: &str = "image/emf";
/// WMF 矢量图的 MIME 类型标签（可识别，不可解码）。
pub const TYPE_WMF: &str = "image/wmf";
/// 未命中任何标记时的类型标签。
pub const TYPE_UNKNOWN: &str = "unknown";

/// 有序的标记→类型识别表，首个命中即返回。
static TYPE_MARKERS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"\\pngblip").unwrap(), TYPE_PNG),
        (Regex::new(r"\\jpegblip").unwrap(), TYPE_JPEG),
        (Regex::new(r"\\emfblip").unwrap(), TYPE_EMF),
        (Regex::new(r"\\wmetafile\d").unwrap(), TYPE_WMF),
    ]
});

/// 可提取字节负载的类型集合。
const SUPPORTED_TYPES: [&str; 2] = [TYPE_PNG, TYPE_JPEG];

/// 基于标记识别分组内容的图片类型。
pub fn classify(group_content: &str) -> &'static str {
    for (marker, image_type) in TYPE_MARKERS.iter() {
        if marker.is_match(group_content) {
            return image_type;
        }
    }
    TYPE_UNKNOWN
}

/// 判断类型是否属于可解码集合。
pub fn is_supported(image_type: &str) -> bool {
    SUPPORTED_TYPES.contains(&image_type)
}
