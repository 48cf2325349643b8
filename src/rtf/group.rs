//! # 分组原语模块
//!
//! ## 设计思路
//!
//! RTF 的结构单元是以控制字开头的平衡花括号分组（如 `{\pict ...}`）。
//! 本模块提供三个与图片语义无关的底层原语：按控制字删除分组、
//! 按控制字收集分组、剥离分组头部取出内部负载。
//! 上层提取逻辑只在这些原语之上做策略，不直接碰花括号。
//!
//! ## 实现思路
//!
//! - 分组起点用正则定位（`{\控制字` + 词边界），终点用深度计数扫描。
//! - 转义序列（`\{`、`\}`、`\\`）在扫描时整体跳过，不参与深度计数。
//! - 花括号不平衡时放弃当前匹配并记录告警，原文本尽量保留，不会 panic。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::FilterError;

/// 分组头部：控制字、`{\*\...}` 属性子分组与空白交错出现的前缀段。
///
/// 必须按“交错”整体匹配：若先删子分组再删控制字，
/// `\pich100{\*\blipuid ...}89504e47` 会把数字参数和十六进制负载粘连。
static GROUP_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{(?:\\[\w-]+|\{\\\*\\[\w-]+ ?[^{}]*\}|\s)*").unwrap());

/// 游离在头部之后的属性子分组，如 `{\*\blipuid 8fa6b2c3}`。
static PROPERTY_SUBGROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\\\*\\[\w-]+ ?[^{}]*\}").unwrap());

/// 一个完整的平衡花括号分组（含首尾花括号）。
#[derive(Debug, Clone)]
pub struct RtfGroup {
    /// 分组全文，从 `{` 到配对的 `}`。
    pub content: String,
}

/// 删除所有控制字匹配 `control_word_pattern` 的分组。
///
/// 页眉/页脚等分组内部可能嵌套与正文无关的图片分组，
/// 必须整组删除，否则会被误认为真实的嵌入图片。
pub(crate) fn remove_groups(rtf: &str, control_word_pattern: &str) -> String {
    let Some(opening) = build_opening_pattern(control_word_pattern) else {
        return rtf.to_string();
    };

    let mut result = String::with_capacity(rtf.len());
    let mut rest = rtf;

    while let Some(found) = opening.find(rest) {
        result.push_str(&rest[..found.start()]);

        match find_group_end(rest, found.start()) {
            Some(end) => {
                rest = &rest[end..];
            }
            None => {
                log::warn!(
                    "⚠️ {}",
                    FilterError::UnbalancedGroup(format!(
                        "删除 {} 分组时未找到配对花括号",
                        control_word_pattern
                    ))
                );
                result.push_str(&rest[found.start()..]);
                return result;
            }
        }
    }

    result.push_str(rest);
    result
}

/// 按文档序收集每个以 `control_word` 开头的分组。
pub(crate) fn get_groups(rtf: &str, control_word: &str) -> Vec<RtfGroup> {
    let Some(opening) = build_opening_pattern(control_word) else {
        return Vec::new();
    };

    let mut groups = Vec::new();
    let mut offset = 0;

    while let Some(found) = opening.find(&rtf[offset..]) {
        let start = offset + found.start();

        match find_group_end(rtf, start) {
            Some(end) => {
                groups.push(RtfGroup {
                    content: rtf[start..end].to_string(),
                });
                offset = end;
            }
            None => {
                log::warn!(
                    "⚠️ {}",
                    FilterError::UnbalancedGroup(format!(
                        "收集 {} 分组时未找到配对花括号",
                        control_word
                    ))
                );
                break;
            }
        }
    }

    groups
}

/// 剥离分组的花括号与头部控制字，返回内部负载文本。
///
/// 对图片分组而言，剩下的就是（可能被换行打断的）十六进制数据。
pub(crate) fn extract_group_content(group: &str) -> String {
    let without_header = GROUP_HEADER.replace(group, "");
    let without_subgroups = PROPERTY_SUBGROUP.replace_all(&without_header, "");
    without_subgroups
        .strip_suffix('}')
        .unwrap_or(&without_subgroups)
        .to_string()
}

/// 构建分组起点模式：`{\控制字` 后接词边界，避免前缀误匹配（如 `pict` 命中 `picture`）。
fn build_opening_pattern(control_word: &str) -> Option<Regex> {
    match Regex::new(&format!(r"\{{\\{}\b", control_word)) {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            log::warn!("⚠️ 分组控制字模式无效: {}（{}）", control_word, e);
            None
        }
    }
}

/// 从 `start`（指向 `{`）开始做深度计数扫描，返回分组结束后的字节偏移。
///
/// 返回 `None` 表示花括号不平衡，由调用方决定如何降级。
fn find_group_end(text: &str, start: usize) -> Option<usize> {
    let mut depth: usize = 0;
    let mut chars = text[start..].char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            // 转义序列整体跳过：\{ \} \\ 均不影响深度
            '\\' => {
                chars.next();
            }
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(start + i + 1);
                }
            }
            _ => {}
        }
    }

    None
}
