//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::path::PathBuf;

/// 基于 LSB (最低有效位) 隐写术的命令行工具，将文本消息逐位写入 RGB 图像的通道字节中。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "基于 LSB (最低有效位) 隐写术的命令行工具，将文本消息逐位写入无损格式 RGB 图像 (如 PNG, BMP) 的通道字节中，并以 \"####\" 标记消息结尾。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：encode (隐藏) 和 decode (提取)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 将消息隐藏到图像中。
    Encode(EncodeArgs),

    /// 从隐写图像中提取消息。
    Decode(DecodeArgs),
}

/// 'encode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// 用作载体的输入图像路径。
    #[arg(short, long)]
    pub input: PathBuf,

    /// 输出的隐写图像路径 (必须是无损格式)。
    /// 省略时在输入图像旁生成 `doctored_<文件名>.png`。
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 要隐藏的消息。
    #[arg(short, long, required_unless_present = "text", conflicts_with = "text")]
    pub message: Option<String>,

    /// 从文本文件读取要隐藏的消息。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'decode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// 隐写图像路径。
    #[arg(short, long)]
    pub input: PathBuf,

    /// 将恢复的消息写入此文本文件，省略时打印到标准输出。
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}
