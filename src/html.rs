//! # HTML 标签扫描与重写模块
//!
//! ## 设计思路
//!
//! HTML 侧只需要两件事：按文档序收集 `<img>` 的 `src` 值，
//! 以及把指定 `src` 的首次出现替换成新值。除位置外不赋予标签任何身份，
//! 位置对应是与 RTF 记录之间唯一的关联手段。
//!
//! ## 实现思路
//!
//! - 扫描用预编译正则，非贪婪匹配到引号闭合为止，兼容两种引号。
//! - 替换模式按标签 `src` 动态构建，字面值整体转义
//!   （本地文件路径里的反斜杠不转义会被解释成正则元字符）。

use once_cell::sync::Lazy;
use regex::Regex;

/// `<img ... src="...">` 的 src 捕获模式。
static IMG_SRC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<img[^>]*?src=["']([^"']*)["']"#).unwrap());

/// 按文档序扫描出每个 `<img>` 的 `src` 值。
///
/// 空 HTML 或无匹配时返回空序列。
pub fn scan_img_tags(html: &str) -> Vec<String> {
    IMG_SRC_PATTERN
        .captures_iter(html)
        .filter_map(|captures| captures.get(1))
        .map(|src| src.as_str().to_string())
        .collect()
}

/// 将 `src` 值等于 `target_src` 的首个 `<img>` 改写为 `new_src`，
/// `src` 值之前的内容原样保留。
pub(crate) fn replace_img_src(html: &str, target_src: &str, new_src: &str) -> String {
    let pattern = format!(
        r#"(?i)(<img[^>]*?src=["']){}"#,
        regex::escape(target_src)
    );

    match Regex::new(&pattern) {
        Ok(found) => found
            .replace(html, |captures: &regex::Captures| {
                format!("{}{}", &captures[1], new_src)
            })
            .into_owned(),
        Err(e) => {
            log::warn!("⚠️ 构建 src 替换模式失败: {}", e);
            html.to_string()
        }
    }
}
