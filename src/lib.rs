//! # lsb_message 库
//!
//! 本库包含 LSB 文本隐写工具的核心逻辑：
//! [`bitstream`] 负责消息与比特流之间的转换，
//! [`steganography`] 负责把比特流写入或读出像素通道字节的最低有效位。

pub mod bitstream;
pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod steganography;

pub use error::StegoError;
pub use steganography::{hide_message, recover_message};
