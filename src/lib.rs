//! # 粘贴图片过滤器 — 库入口
//!
//! ## 架构总览
//!
//! 有些粘贴来源（典型如字处理器）在 HTML 里只写本地文件路径的
//! `<img>` 占位符，真正的图片字节在 RTF 兄弟负载里。
//! 本库把两份负载对账，将占位符改写为内联 Data URL：
//!
//! ```text
//! HTML + RTF
//!    ↓
//! filter ──── PasteImageFilter（能力门禁 + 路径分派）
//!    ├─ html ──────── <img> src 扫描 / 首次出现替换
//!    └─ reconcile ─── 严格位置对账（全有或全无）
//!         ├─ rtf ───── 分组原语 · 类型识别 · 记录提取（去重/丢弃策略）
//!         ├─ encode ── 十六进制 → Base64 Data URL
//!         └─ report ── 可恢复状况上报（计数不匹配 / 类型不支持）
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`filter`] | 入口 `PasteImageFilter`：能力门禁、RTF/blob 路径分派 |
//! | [`reconcile`] | HTML 标签与 RTF 记录的位置对账与改写 |
//! | [`rtf`] | RTF 分组原语、MIME 识别、图片记录提取 |
//! | [`html`] | `<img>` src 扫描与替换 |
//! | [`encode`] | 记录负载的 Data URL 编码 |
//! | [`report`] | 事件模型与上报通道 |
//! | [`error`] | 内部原语错误类型 `FilterError` |
//!
//! 每次 `apply` 调用都是对输入的纯函数：同步、单线程、调用间无共享状态。

pub mod encode;
pub mod error;
pub mod filter;
pub mod html;
pub mod reconcile;
pub mod report;
pub mod rtf;

pub use encode::encode_image_src;
pub use error::FilterError;
pub use filter::{ContentCapabilities, IMAGE_SELECTOR, PasteImageFilter};
pub use html::scan_img_tags;
pub use reconcile::{LOCAL_FILE_SCHEME, reconcile};
pub use report::{FilterEvent, LogReportSink, ReportSink};
pub use rtf::extract::extract_image_records;
pub use rtf::record::{ImageRecord, ImageRecords};
