//! # 粘贴图片过滤入口模块
//!
//! ## 设计思路
//!
//! `PasteImageFilter` 是整条链路的唯一入口：先做宿主能力门禁，
//! 再扫描 HTML 占位符，最后按 RTF 负载有无分派到对账路径或
//! blob 提取路径。每次调用都是对输入字符串的纯函数，
//! 调用之间不保留任何状态。
//!
//! ## 实现思路
//!
//! - 能力检查抽象为 `ContentCapabilities` trait，并为闭包提供
//!   覆盖实现，测试与宿主接入都不需要定义新类型。
//! - 上报通道以 `Box<dyn ReportSink>` 注入，默认走日志。

use crate::html::scan_img_tags;
use crate::reconcile::reconcile;
use crate::report::{LogReportSink, ReportSink};

/// 能力检查使用的图片元素选择器。
pub const IMAGE_SELECTOR: &str = "img";

/// 宿主编辑器的内容过滤能力检查。
pub trait ContentCapabilities {
    /// 目标位置是否允许包含指定元素。
    fn can_contain(&self, element_selector: &str) -> bool;
}

/// 允许用闭包直接充当能力检查。
impl<F> ContentCapabilities for F
where
    F: Fn(&str) -> bool,
{
    fn can_contain(&self, element_selector: &str) -> bool {
        self(element_selector)
    }
}

/// 粘贴图片过滤器。
///
/// # 示例
/// ```
/// use paste_image_filter::PasteImageFilter;
///
/// let filter = PasteImageFilter::new();
/// let html = r#"<img src="file://C:/tmp/1.png">"#;
/// let rtf = r"{\rtf1{\pict\pngblip{\*\blipuid a1} 89504e47}}";
///
/// let rewritten = filter.apply(html, &|_: &str| true, Some(rtf));
/// assert!(rewritten.contains("data:image/png;base64,"));
/// ```
pub struct PasteImageFilter {
    sink: Box<dyn ReportSink>,
}

impl Default for PasteImageFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl PasteImageFilter {
    /// 创建使用默认日志上报的过滤器。
    pub fn new() -> Self {
        Self {
            sink: Box::new(LogReportSink),
        }
    }

    /// 创建使用指定上报通道的过滤器。
    pub fn with_sink(sink: Box<dyn ReportSink>) -> Self {
        Self { sink }
    }

    /// 对一次粘贴负载执行图片过滤，返回（可能被改写的）HTML。
    ///
    /// - 宿主不允许图片、或 HTML 中没有 `<img>`：原样返回；
    /// - 带 RTF 兄弟负载：走 HTML/RTF 对账路径；
    /// - 无 RTF：走 blob 提取路径（当前为透传桩）。
    pub fn apply(
        &self,
        html: &str,
        capabilities: &dyn ContentCapabilities,
        rtf: Option<&str>,
    ) -> String {
        if !capabilities.can_contain(IMAGE_SELECTOR) {
            log::debug!("🚫 宿主不允许插入图片，跳过粘贴图片过滤");
            return html.to_string();
        }

        let img_tags = scan_img_tags(html);
        if img_tags.is_empty() {
            return html.to_string();
        }

        match rtf {
            Some(rtf) => reconcile(html, rtf, &img_tags, self.sink.as_ref()),
            None => self.extract_from_blobs(html),
        }
    }

    /// 浏览器对象 URL（blob）图片提取路径。
    ///
    /// TODO(blob 路径): 接入宿主浏览器环境后读取 blob 字节，当前按原样透传。
    fn extract_from_blobs(&self, html: &str) -> String {
        log::debug!("🔗 blob 图片提取路径未实现，HTML 原样返回");
        html.to_string()
    }
}
