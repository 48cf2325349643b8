//! # 事件上报模块
//!
//! ## 设计思路
//!
//! 重写链路中的两类可恢复状况（计数不匹配、类型不支持）不是错误：
//! 过滤器照常返回 HTML，只是把状况交给观测侧。
//! 通过 `ReportSink` trait 解耦上报目的地，宿主可以接入自己的
//! 遥测通道，默认实现走 `log`。
//!
//! ## 实现思路
//!
//! - `FilterEvent` 用 serde 带标签枚举建模，负载字段即上报负载。
//! - `LogReportSink` 将事件序列化为 JSON 后以 warn 级别输出。
//! - 事件派生 `PartialEq`，测试侧可直接断言收到的事件序列。

use serde::Serialize;

/// 重写链路产生的可观测事件。
///
/// 两个变体分别对应“整体放弃替换”与“跳过单个标签”两种恢复策略。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FilterEvent {
    /// RTF 提取出的图片记录数与 HTML `<img>` 标签数不一致。
    ///
    /// 位置对应是两份负载之间唯一的关联手段，计数不一致意味着
    /// 对应关系整体失效，本次粘贴不做任何替换。
    ExtractionCountMismatch {
        /// RTF 侧提取出的图片记录数
        rtf_count: usize,
        /// HTML 侧扫描到的 `<img>` 标签数
        html_count: usize,
    },

    /// 位置对应的图片类型不在可解码集合内，仅跳过该标签。
    UnsupportedImageType {
        /// 分类器给出的类型标签（如 `image/wmf` 或 `unknown`）
        image_type: String,
        /// 对应 `<img>` 标签在文档中的序号（从 0 起）
        index: usize,
    },
}

/// 事件上报目的地。
///
/// 上报是纯观测行为，实现方不得影响过滤流程。
pub trait ReportSink {
    fn report(&self, event: FilterEvent);
}

/// 默认上报实现：序列化为 JSON 写入日志。
#[derive(Debug, Default)]
pub struct LogReportSink;

impl ReportSink for LogReportSink {
    fn report(&self, event: FilterEvent) {
        match serde_json::to_string(&event) {
            Ok(payload) => log::warn!("📋 粘贴图片过滤事件: {}", payload),
            Err(e) => log::warn!("📋 粘贴图片过滤事件序列化失败: {}（{:?}）", e, event),
        }
    }
}
