//! # 比特流编解码模块
//!
//! 负责在文本消息与比特序列之间转换。序列中的每个元素都是 `0` 或 `1`，
//! 每个字符展开为 8 bit (高位在前)，消息末尾追加 [`TERMINATOR`]。

use crate::constants::{BITS_PER_CHAR, TERMINATOR};
use crate::error::StegoError;

/// 计算隐藏 `message_chars` 个字符 (含结束标记) 所需的比特数。
pub fn bits_required(message_chars: usize) -> usize {
    message_chars.saturating_add(TERMINATOR.len()) * BITS_PER_CHAR
}

/// 将消息连同结束标记序列化为比特流。
///
/// 每个字符必须位于 U+0000..=U+00FF 之间，并按 8 bit 大端顺序展开。
///
/// # Errors
///
/// 如果某个字符的码位大于 255，返回 [`StegoError::UnencodableChar`]。
pub fn serialize(message: &str) -> Result<Vec<u8>, StegoError> {
    let mut bits = Vec::with_capacity(bits_required(message.chars().count()));

    for (index, ch) in message.chars().chain(TERMINATOR.chars()).enumerate() {
        let byte = u8::try_from(ch).map_err(|_| StegoError::UnencodableChar { ch, index })?;
        bits.extend((0..BITS_PER_CHAR).rev().map(|shift| (byte >> shift) & 1));
    }

    Ok(bits)
}

/// 将比特流反序列化为消息。
///
/// 每 8 bit 组成一个字符，每解出一个完整字符后检查结尾是否为结束标记；
/// 若是则立即停止，并返回去掉结束标记的文本。末尾不足 8 bit 的部分被忽略。
/// 如果始终没有遇到结束标记，则返回全部解出的文本。
pub fn deserialize(bits: &[u8]) -> String {
    let (bytes, _) = decode_until_terminator(bits);
    bytes.into_iter().map(char::from).collect()
}

/// 逐字节解码，返回解出的字节 (已剥离结束标记) 以及是否找到了结束标记。
pub(crate) fn decode_until_terminator(bits: &[u8]) -> (Vec<u8>, bool) {
    let terminator = TERMINATOR.as_bytes();
    let mut bytes = Vec::with_capacity(bits.len() / BITS_PER_CHAR);

    for group in bits.chunks_exact(BITS_PER_CHAR) {
        let byte = group.iter().fold(0u8, |acc, &bit| (acc << 1) | (bit & 1));
        bytes.push(byte);

        if bytes.ends_with(terminator) {
            bytes.truncate(bytes.len() - terminator.len());
            return (bytes, true);
        }
    }

    (bytes, false)
}
