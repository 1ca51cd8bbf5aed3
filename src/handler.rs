//! # 命令处理逻辑模块
//!
//! 包含处理 `encode` 和 `decode` 子命令的高级业务逻辑。
//! 本模块负责协调图像文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::bitstream::bits_required;
use crate::cli::{DecodeArgs, EncodeArgs};
use crate::constants::{DEFAULT_IMAGE_PREFIX, LOSSLESS_EXTENSIONS};
use crate::steganography::{capacity, hide_message, recover_message};
use anyhow::{Context, Result};
use colored::Colorize;
use image::RgbImage;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Encode' 命令的执行逻辑。
///
/// 读取载体图像并转换为 RGB 通道缓冲区，检查容量后写入消息，
/// 最后以无损格式保存到目标路径。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与消息来源的 `EncodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 目标路径不是无损格式，或目标文件已存在且未指定 `--force`。
/// * 无法读取输入图像或文本文件。
/// * 图像没有足够的空间来隐藏消息。
/// * 消息包含超出单字节范围的字符。
/// * 无法写入目标图像文件。
pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    let dest = args
        .output
        .clone()
        .unwrap_or_else(|| default_image_path(&args.input));

    ensure_lossless(&dest)?;
    ensure_writable(&dest, args.force)?;

    let message = match (&args.message, &args.text) {
        (Some(message), _) => message.clone(),
        (None, Some(text)) => fs::read_to_string(text).with_context(|| {
            format!(
                "Unable to read text file: {}",
                text.to_string_lossy().red().bold()
            )
        })?,
        (None, None) => anyhow::bail!("No message given. Use --message or --text."),
    };

    let picture = open_rgb(&args.input)?;
    let (width, height) = picture.dimensions();
    let mut pixels = picture.into_raw();

    let required_space = bits_required(message.chars().count());
    let available_space = pixels.len();
    debug!(
        "{}x{} carrier, {} bits required, {} bits available (up to {} characters)",
        width,
        height,
        required_space,
        available_space,
        capacity(available_space)
    );

    anyhow::ensure!(
        available_space >= required_space,
        "Not enough space in the image to hide the message. \nRequired: {}, Available: {}",
        required_space.to_string().red().bold(),
        available_space.to_string().green().bold()
    );

    hide_message(&mut pixels, &message).with_context(|| {
        "Failed to hide the message in the image. \nOnly characters in the range U+0000..=U+00FF can be hidden."
    })?;

    let stego = RgbImage::from_raw(width, height, pixels)
        .context("The modified pixel buffer no longer matches the image dimensions.")?;

    stego.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The message has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Decode' 命令的执行逻辑。
///
/// 读取隐写图像并恢复消息。未指定输出文件时打印到标准输出。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入图像。
/// * 目标文件已存在且未指定 `--force`，或无法写入目标文件。
pub fn handle_decode(args: DecodeArgs) -> Result<()> {
    if let Some(dest) = &args.output {
        ensure_writable(dest, args.force)?;
    }

    let message = decode_image(&args.input)?;

    match &args.output {
        Some(dest) => {
            fs::write(dest, &message).with_context(|| {
                format!(
                    "Unable to write to target text file: {}",
                    dest.to_string_lossy().red().bold()
                )
            })?;
            println!(
                "The message has been successfully recovered and saved: {}",
                dest.to_string_lossy().green().bold()
            );
        }
        None => {
            println!("{}", "Hidden message:".green().bold());
            println!("{message}");
        }
    }

    Ok(())
}

/// 从图像文件中恢复隐藏的消息。
///
/// 图像中没有结束标记时，返回整个图像解出的文本。
pub fn decode_image(path: &Path) -> Result<String> {
    let picture = open_rgb(path)?;
    Ok(recover_message(picture.as_raw()))
}

/// 未指定输出路径时使用的隐写图像路径：与输入同目录的 `doctored_<文件名>.png`。
pub fn default_image_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_owned());
    input.with_file_name(format!("{DEFAULT_IMAGE_PREFIX}{stem}.png"))
}

fn open_rgb(path: &Path) -> Result<RgbImage> {
    let picture = image::open(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;
    Ok(picture.to_rgb8())
}

fn ensure_lossless(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    anyhow::ensure!(
        LOSSLESS_EXTENSIONS.contains(&extension.as_str()),
        "Output image must use a lossless format ({}): {}",
        LOSSLESS_EXTENSIONS.join(", "),
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}
