/// 追加在每条消息末尾的结束标记。
/// 解码时一旦读出这个序列就停止，并将其从结果中剥离。
pub const TERMINATOR: &str = "####";

/// 每个字符占用的比特数。
/// 字符按单字节 (U+0000..=U+00FF) 处理，每个像素通道字节只承载 1 bit，
/// 因此一个字符需要 8 个通道字节。
pub const BITS_PER_CHAR: usize = 8;

/// 允许作为输出的无损图像扩展名。
/// 有损格式会重新压缩像素，破坏最低有效位。
pub const LOSSLESS_EXTENSIONS: &[&str] = &["png", "bmp", "tif", "tiff", "webp", "qoi"];

/// 未指定输出路径时，隐写图像文件名的前缀。
pub const DEFAULT_IMAGE_PREFIX: &str = "doctored_";
