use lsb_message::{
    StegoError,
    bitstream::{bits_required, deserialize, serialize},
    hide_message, recover_message,
    steganography::{embed, extract},
};
use rand::{Rng, RngCore};

fn random_pixels(len: usize) -> Vec<u8> {
    let mut pix = vec![0u8; len];
    rand::rng().fill_bytes(&mut pix);
    pix
}

/// 随机生成只包含单字节字符的消息
fn random_message(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len).map(|_| char::from(rng.random::<u8>())).collect()
}

#[test]
fn round_trip_recovers_message() {
    for len in [0, 1, 7, 64, 250] {
        // 避免随机消息中出现结束标记
        let message = random_message(len).replace('#', "_");
        let mut pix = random_pixels(bits_required(len) + 17);

        hide_message(&mut pix, &message).unwrap();
        assert_eq!(recover_message(&pix), message);
        assert_eq!(deserialize(&extract(&pix)), message);
    }
}

#[test]
fn hello_decodes_without_terminator() {
    let mut pix = random_pixels(300);
    hide_message(&mut pix, "HELLO").unwrap();
    assert_eq!(recover_message(&pix), "HELLO");
}

#[test]
fn empty_message_embeds_only_terminator() {
    let original = random_pixels(64);
    let mut pix = original.clone();

    hide_message(&mut pix, "").unwrap();

    assert_eq!(recover_message(&pix), "");
    assert_eq!(&pix[32..], &original[32..]);
}

#[test]
fn capacity_boundary_is_exact() {
    let message = "boundary";
    let required = bits_required(message.chars().count());

    let mut exact = random_pixels(required);
    assert!(hide_message(&mut exact, message).is_ok());
    assert_eq!(recover_message(&exact), message);

    let mut short = random_pixels(required - 1);
    let original = short.clone();
    assert_eq!(
        hide_message(&mut short, message),
        Err(StegoError::CapacityExceeded {
            required,
            available: required - 1,
        })
    );
    assert_eq!(short, original, "buffer must be untouched on failure");
}

#[test]
fn embed_preserves_upper_bits() {
    let original = random_pixels(500);
    let mut pix = original.clone();
    let bits = serialize("LSB isolation check").unwrap();

    embed(&mut pix, &bits).unwrap();

    for (i, (&after, &before)) in pix.iter().zip(&original).enumerate() {
        assert_eq!(after & 0xFE, before & 0xFE, "upper bits changed at {i}");
        if i < bits.len() {
            assert_eq!(after & 1, bits[i]);
        } else {
            assert_eq!(after, before, "byte {i} beyond the bitstream changed");
        }
    }
}

#[test]
fn unencodable_message_leaves_buffer_untouched() {
    let original = random_pixels(400);
    let mut pix = original.clone();

    let result = hide_message(&mut pix, "snow ☃");
    assert_eq!(
        result,
        Err(StegoError::UnencodableChar { ch: '☃', index: 5 })
    );
    assert_eq!(pix, original);
}

#[test]
fn missing_terminator_returns_full_buffer() {
    // LSB 全为 1，每个字符都是 U+00FF，不会构成结束标记
    let pix = vec![0xFFu8; 83];
    let decoded = recover_message(&pix);
    assert_eq!(decoded.chars().count(), 83 / 8);
    assert!(decoded.chars().all(|ch| ch == 'ÿ'));
}

#[test]
fn terminator_in_message_truncates_decode() {
    let mut pix = random_pixels(400);
    hide_message(&mut pix, "before####after").unwrap();
    assert_eq!(recover_message(&pix), "before");
}
