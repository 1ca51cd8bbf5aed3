//! # 错误类型模块
//!
//! 核心编解码过程中可能出现的错误。文件 I/O 相关的错误由 `handler` 使用
//! `anyhow` 附加上下文后报告。

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// 消息序列化后的比特数超过了载体字节数。在写入任何比特之前返回。
    #[error("Not enough space in the image to hide the message. Required: {required} bits, Available: {available} bits")]
    CapacityExceeded { required: usize, available: usize },

    /// 字符的码位超出单字节范围，无法用 8 bit 表示。
    #[error("Character {ch:?} at index {index} is outside the single-byte range and cannot be hidden")]
    UnencodableChar { ch: char, index: usize },
}
