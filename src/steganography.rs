use log::{debug, warn};

use crate::bitstream::{self, decode_until_terminator};
use crate::constants::{BITS_PER_CHAR, TERMINATOR};
use crate::error::StegoError;

/// 将比特流依次写入像素通道字节的最低有效位。
///
/// 容量检查先于任何写入，失败时 `pix` 保持原样。
/// 超出比特流长度的字节不会被修改。
pub fn embed(pix: &mut [u8], bits: &[u8]) -> Result<(), StegoError> {
    if bits.len() > pix.len() {
        return Err(StegoError::CapacityExceeded {
            required: bits.len(),
            available: pix.len(),
        });
    }

    for (byte, &bit) in pix.iter_mut().zip(bits) {
        *byte = (*byte & 0xFE) | (bit & 1);
    }

    Ok(())
}

/// 按顺序读出每个像素通道字节的最低有效位，长度与 `pix` 相同。
pub fn extract(pix: &[u8]) -> Vec<u8> {
    pix.iter().map(|&byte| byte & 1).collect()
}

/// 给定载体字节数，最多能隐藏的消息字符数 (不含结束标记)。
pub fn capacity(pix_len: usize) -> usize {
    (pix_len / BITS_PER_CHAR).saturating_sub(TERMINATOR.len())
}

/// 序列化消息并写入像素缓冲区。
pub fn hide_message(pix: &mut [u8], message: &str) -> Result<(), StegoError> {
    let bits = bitstream::serialize(message)?;
    debug!(
        "embedding {} bits into {} channel bytes",
        bits.len(),
        pix.len()
    );
    embed(pix, &bits)
}

/// 从像素缓冲区读出比特流并解码出消息。
///
/// 没有找到结束标记时返回整个缓冲区解出的文本，调用者应将结果视为未经验证的数据。
pub fn recover_message(pix: &[u8]) -> String {
    let (bytes, terminated) = decode_until_terminator(&extract(pix));
    if terminated {
        debug!("terminator found after {} characters", bytes.len());
    } else {
        warn!(
            "no terminator found in {} channel bytes; returning all decoded data",
            pix.len()
        );
    }
    bytes.into_iter().map(char::from).collect()
}
