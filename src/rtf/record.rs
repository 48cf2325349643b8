//! # 图片记录模型模块
//!
//! ## 设计思路
//!
//! 提取结果是一份按 RTF 文档序排列的记录序列，但序列里可能出现
//! “同一条记录的多次引用”（真重复分组不新建记录）。
//! 为了让“同一性”判断有意义，序列建模为共享存储 + 索引句柄：
//! `store` 每个逻辑图片一条，`order` 按文档序存句柄，
//! 重复时把同一个句柄再压一次，而不是深拷贝。
//!
//! ## 实现思路
//!
//! - `index_by_id` 维护“标识 → 存储位置”映射，替代对已产出序列的线性扫描。
//! - 原位覆盖只替换 `store` 槽位内容，所有指向它的句柄随之看到新数据。
//! - 无标识（`id == None`）的记录永远不会匹配任何其他记录。

use std::collections::HashMap;

/// 一条嵌入图片记录。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// RTF 标识标记派生的 id；来源未提供时为 `None`，视为永远唯一
    pub id: Option<String>,
    /// 去除全部空白后的十六进制负载；类型不可解码时为 `None`
    pub hex: Option<String>,
    /// 分类器给出的 MIME 类型标签，或 `"unknown"`
    pub image_type: String,
}

/// 按文档序排列、支持引用式重复的记录序列。
#[derive(Debug, Default)]
pub struct ImageRecords {
    /// 每个逻辑图片一条
    store: Vec<ImageRecord>,
    /// 文档序句柄，真重复时同一句柄出现多次
    order: Vec<usize>,
    /// 标识 → 存储位置
    index_by_id: HashMap<String, usize>,
}

impl ImageRecords {
    /// 序列长度（含重复引用）。
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// 取文档序第 `position` 条记录。
    ///
    /// 重复位置返回同一条记录的引用，指针相等。
    pub fn get(&self, position: usize) -> Option<&ImageRecord> {
        self.order.get(position).map(|&idx| &self.store[idx])
    }

    /// 按文档序迭代记录（重复引用会重复出现）。
    pub fn iter(&self) -> impl Iterator<Item = &ImageRecord> {
        self.order.iter().map(|&idx| &self.store[idx])
    }

    /// 查找标识对应的存储位置；`None` 标识永远视为未找到。
    pub(crate) fn find_by_id(&self, id: Option<&str>) -> Option<usize> {
        id.and_then(|id| self.index_by_id.get(id).copied())
    }

    /// 取存储位置上的记录（供提取策略读取现有类型与负载）。
    pub(crate) fn stored(&self, idx: usize) -> &ImageRecord {
        &self.store[idx]
    }

    /// 判断存储位置是否是当前序列的最后一个元素。
    pub(crate) fn is_last(&self, idx: usize) -> bool {
        self.order.last() == Some(&idx)
    }

    /// 追加一条新记录并登记其标识。
    pub(crate) fn push(&mut self, record: ImageRecord) {
        let idx = self.store.len();
        if let Some(id) = &record.id {
            self.index_by_id.insert(id.clone(), idx);
        }
        self.store.push(record);
        self.order.push(idx);
    }

    /// 在存储位置上追加同一记录的引用（真重复，不新建）。
    pub(crate) fn push_reference(&mut self, idx: usize) {
        self.order.push(idx);
    }

    /// 原位覆盖存储位置上的记录，不改变文档序。
    pub(crate) fn overwrite(&mut self, idx: usize, record: ImageRecord) {
        if let Some(id) = &record.id {
            self.index_by_id.insert(id.clone(), idx);
        }
        self.store[idx] = record;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_record(id: &str, hex: &str) -> ImageRecord {
        ImageRecord {
            id: Some(id.to_string()),
            hex: Some(hex.to_string()),
            image_type: "image/png".to_string(),
        }
    }

    #[test]
    fn push_reference_yields_identity_equal_positions() {
        let mut records = ImageRecords::default();
        records.push(png_record("a1", "89504e47"));
        records.push_reference(0);

        assert_eq!(records.len(), 2);
        assert!(std::ptr::eq(
            records.get(0).expect("missing record"),
            records.get(1).expect("missing record"),
        ));
    }

    #[test]
    fn overwrite_updates_all_references() {
        let mut records = ImageRecords::default();
        records.push(png_record("a1", "89504e47"));
        records.push_reference(0);
        records.overwrite(0, png_record("a1", "ffd8ffe0"));

        assert_eq!(records.get(1).and_then(|r| r.hex.as_deref()), Some("ffd8ffe0"));
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn find_by_id_ignores_missing_identity() {
        let mut records = ImageRecords::default();
        records.push(ImageRecord {
            id: None,
            hex: None,
            image_type: "unknown".to_string(),
        });

        assert_eq!(records.find_by_id(None), None);
        assert_eq!(records.find_by_id(Some("a1")), None);
    }

    #[test]
    fn is_last_tracks_order_not_store() {
        let mut records = ImageRecords::default();
        records.push(png_record("a1", "11"));
        records.push(png_record("b2", "22"));

        assert!(!records.is_last(0));
        assert!(records.is_last(1));

        records.push_reference(0);
        assert!(records.is_last(0));
    }
}
