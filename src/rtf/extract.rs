//! # 图片记录提取模块
//!
//! ## 设计思路
//!
//! 字处理器生成的 RTF 里，同一张逻辑图片可能以多个分组出现：
//! 真重复（相同标识相同类型）、备用格式副本（相同标识不同类型，
//! 紧跟在原件之后）、以及 WordArt 之类的装饰图形。
//! 提取策略要在保持文档序的前提下，把这些“噪音分组”折叠或丢弃，
//! 产出与 HTML `<img>` 占位符一一对应的记录序列。
//!
//! ## 实现思路
//!
//! 对每个定位到的 `\pict` 分组依次执行：
//! 1. 提取标识（`\blipuid` 优先，退回 `\bliptag`）；
//! 2. 识别类型；
//! 3. 按标识查找已产出记录，计算重复/备用格式/装饰图形标志；
//! 4. 真重复 → 追加同一记录的引用；备用格式或装饰图形 → 整组丢弃；
//!    其余 → 构建新记录（可解码类型才带负载），原位覆盖或追加。

use once_cell::sync::Lazy;
use regex::Regex;

use super::classify::{classify, is_supported};
use super::group::{extract_group_content, get_groups, remove_groups};
use super::record::{ImageRecord, ImageRecords};

/// 定位图片分组前需要整组删除的控制字：
/// 页眉/页脚、非 Word 图片回退件、绘图对象渲染结果。
/// 这些分组内部可能嵌套与正文无关的 `\pict`，不能混入真实嵌入图片。
const IGNORED_WRAPPER_GROUPS: &str = r"(?:(?:header|footer)[flr]?|nonshppict|shprslt)";

/// 图片分组的控制字。
const PICTURE_GROUP: &str = "pict";

/// 装饰图形（WordArt 等文字作图对象）的标记，命中即整组丢弃。
const DECORATIVE_SHAPE_MARKER: &str = r"\defshp";

/// 唯一标识标记：`\blipuid 8fa6b2c3`。
static BLIP_UID: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\blipuid\s+(\w+)").unwrap());

/// 标签标识标记（退回方案）：`\bliptag-1231456`。
static BLIP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\bliptag(-?\d+)").unwrap());

/// 从 RTF 文本提取按文档序排列的图片记录序列。
pub fn extract_image_records(rtf: &str) -> ImageRecords {
    let cleaned = remove_groups(rtf, IGNORED_WRAPPER_GROUPS);
    let groups = get_groups(&cleaned, PICTURE_GROUP);
    log::debug!("🖼️ 定位到 {} 个图片分组", groups.len());

    let mut records = ImageRecords::default();

    for group in &groups {
        let id = extract_image_id(&group.content);
        let image_type = classify(&group.content);
        let existing = records.find_by_id(id.as_deref());

        if let Some(idx) = existing {
            let already_has_payload = records.stored(idx).hex.is_some();
            let same_type = records.stored(idx).image_type == image_type;

            if already_has_payload && same_type {
                // 真重复：追加同一记录的引用，不新建
                records.push_reference(idx);
                continue;
            }

            if already_has_payload && !same_type && records.is_last(idx) {
                // 紧跟原件的备用格式副本，整组丢弃
                log::debug!("🗑️ 丢弃备用格式分组（{} 已有 {}）", image_type, records.stored(idx).image_type);
                continue;
            }
        }

        if group.content.contains(DECORATIVE_SHAPE_MARKER) {
            log::debug!("🗑️ 丢弃装饰图形分组");
            continue;
        }

        let hex = if is_supported(image_type) {
            Some(strip_whitespace(&extract_group_content(&group.content)))
        } else {
            None
        };

        let record = ImageRecord {
            id,
            hex,
            image_type: image_type.to_string(),
        };

        match existing {
            // 标识重复且并非备用格式：认为后出现的分组携带更完整的数据，原位覆盖
            Some(idx) => records.overwrite(idx, record),
            None => records.push(record),
        }
    }

    log::debug!("🖼️ 提取出 {} 条图片记录", records.len());
    records
}

/// 提取分组的标识：`\blipuid` 优先，退回 `\bliptag`，都没有则为 `None`。
fn extract_image_id(group_content: &str) -> Option<String> {
    BLIP_UID
        .captures(group_content)
        .or_else(|| BLIP_TAG.captures(group_content))
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_string())
}

/// 去除负载里的全部空白（RTF 会把十六进制数据任意换行）。
fn strip_whitespace(content: &str) -> String {
    content.chars().filter(|c| !c.is_whitespace()).collect()
}
