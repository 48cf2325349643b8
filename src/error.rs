//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 过滤器对外承诺“永不失败”：`apply` 总是返回一份合法 HTML，
//! 所有可恢复问题走事件上报通道（见 [`crate::report`]）。
//! 因此这里的 `FilterError` 只承载内部原语的失败点
//! （十六进制负载解析、RTF 分组扫描），由调用方就地降级处理，
//! 不会穿透到公共 API。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 实现 `Serialize` 将错误序列化为字符串，便于日志与上报负载携带。

use serde::Serialize;

/// 粘贴图片过滤内部错误类型。
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// 十六进制图片负载无效（长度为奇数或含非法字符）
    #[error("十六进制负载无效: {0}")]
    InvalidHex(String),

    /// RTF 分组花括号不平衡，无法确定分组边界
    #[error("RTF 分组不平衡: {0}")]
    UnbalancedGroup(String),
}

/// 将错误序列化为人类可读的字符串。
impl Serialize for FilterError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
