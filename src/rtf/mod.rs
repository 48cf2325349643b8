//! # RTF 图片提取模块（rtf）
//!
//! ## 设计思路
//!
//! 字处理器粘贴时，HTML 里的 `<img>` 往往只是本地文件路径占位符，
//! 真正的图片字节藏在 RTF 兄弟负载的 `{\pict ...}` 分组里。
//! 该模块负责把 RTF 文本还原成一份有序的图片记录序列，
//! 按职责拆分为多个子模块：
//!
//! - `group`：平衡花括号分组原语（删除、收集、取内容）
//! - `classify`：基于控制字标记的 MIME 类型识别
//! - `record`：图片记录与“按索引共享句柄”的有序序列模型
//! - `extract`：遍历图片分组，应用去重/丢弃策略，产出记录序列
//!
//! ## 实现思路
//!
//! 调用链自上而下：
//!
//! ```text
//! extract::extract_image_records
//!    ├─ group::remove_groups（剔除页眉/页脚/非 Word 图片/绘图对象）
//!    ├─ group::get_groups（按文档序收集 \pict 分组）
//!    ├─ classify::classify（\pngblip 等标记 → MIME 类型）
//!    └─ record::ImageRecords（去重引用、原位覆盖、装饰图形丢弃）
//! ```

pub mod classify;
pub mod extract;
pub mod group;
pub mod record;
