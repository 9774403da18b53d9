//! Malformed blobs must be rejected as a whole.

use crate::common::*;
use gamelog::{CodecError, CompressionCodec, LimitError, ZstdCodec};

fn record_header(tag: i32) -> Vec<u8> {
    // Empty pool, then a record with timestamp 0
    let mut bytes = vec![0, 0, 0, 0];
    bytes.extend_from_slice(&tag.to_be_bytes());
    bytes.push(0);
    bytes
}

#[test]
fn every_prefix_fails_or_yields_fewer_events() {
    let creator = bedwars_creator();
    let bytes = creator.build_game_log(&mut short_match(), false).unwrap();

    for len in 0..bytes.len() {
        match creator.parse_game_log(&bytes[..len], false) {
            Ok(sequence) => assert!(sequence.len() < 4, "prefix {} decoded fully", len),
            Err(e) => assert!(e.is_corruption(), "prefix {}: {}", len, e),
        }
    }
}

#[test]
fn cut_inside_last_record() {
    let creator = bedwars_creator();
    let bytes = creator.build_game_log(&mut short_match(), false).unwrap();
    let result = creator.parse_game_log(&bytes[..bytes.len() - 1], false);
    assert!(matches!(result, Err(Error::TruncatedInput { .. })));
}

#[test]
fn unknown_event_id() {
    let creator = bedwars_creator();
    for tag in [0, 5, -1, i32::MAX] {
        let result = creator.parse_game_log(&record_header(tag), false);
        assert!(
            matches!(result, Err(Error::UnknownEventId(t)) if t == tag),
            "tag {}",
            tag
        );
    }
}

#[test]
fn pool_index_past_end() {
    let creator = bedwars_creator();
    let mut bytes = record_header(4);
    bytes.extend_from_slice(&0i32.to_be_bytes());
    bytes.extend_from_slice(&0i32.to_be_bytes());

    let result = creator.parse_game_log(&bytes, false);
    assert!(matches!(
        result,
        Err(Error::PoolIndexOutOfRange {
            index: 0,
            pool_len: 0,
        })
    ));
}

#[test]
fn negative_pool_index() {
    let creator = bedwars_creator();
    let mut bytes = vec![0, 0, 0, 1, 0, 0, 0, 1, b'x'];
    bytes.extend_from_slice(&4i32.to_be_bytes());
    bytes.push(0);
    bytes.extend_from_slice(&(-1i32).to_be_bytes());
    bytes.extend_from_slice(&0i32.to_be_bytes());

    let result = creator.parse_game_log(&bytes, false);
    assert!(matches!(
        result,
        Err(Error::PoolIndexOutOfRange {
            index: -1,
            pool_len: 1,
        })
    ));
}

#[test]
fn oversized_timestamp() {
    let creator = bedwars_creator();
    let mut bytes = vec![0, 0, 0, 0, 0, 0, 0, 1];
    bytes.extend_from_slice(&[0xFF; 11]);
    bytes.push(0x01);

    let result = creator.parse_game_log(&bytes, false);
    assert!(matches!(result, Err(Error::VarLongTooLarge)));
}

#[test]
fn negative_pool_size() {
    let creator = bedwars_creator();
    let result = creator.parse_game_log(&(-3i32).to_be_bytes(), false);
    assert!(matches!(result, Err(Error::InvalidLength(-3))));
}

#[test]
fn pool_size_larger_than_input() {
    let creator = bedwars_creator();
    let result = creator.parse_game_log(&1_000i32.to_be_bytes(), false);
    assert!(matches!(result, Err(Error::TruncatedInput { .. })));
}

#[test]
fn pool_size_over_limit() {
    let creator = small_limits_creator();
    let mut bytes = 17i32.to_be_bytes().to_vec();
    bytes.extend(std::iter::repeat(0u8).take(17 * 4));

    let result = creator.parse_game_log(&bytes, false);
    assert!(matches!(
        result,
        Err(Error::LimitExceeded(LimitError::PoolTooLarge {
            actual: 17,
            max: 16,
        }))
    ));
}

#[test]
fn invalid_utf8_in_pool() {
    let creator = bedwars_creator();
    let mut bytes = vec![0, 0, 0, 1, 0, 0, 0, 2, 0xC3, 0x28];
    bytes.extend_from_slice(&4i32.to_be_bytes());
    bytes.push(0);
    bytes.extend_from_slice(&0i32.to_be_bytes());
    bytes.extend_from_slice(&0i32.to_be_bytes());

    let result = creator.parse_game_log(&bytes, false);
    assert!(matches!(result, Err(Error::InvalidUtf8)));
}

#[test]
fn garbage_compressed_blob() {
    let creator = bedwars_creator();
    let result = creator.parse_game_log(b"definitely not a zstd frame", true);
    assert!(matches!(result, Err(Error::Codec(_))));
}

#[test]
fn small_blob_inflating_past_limit() {
    let limits = Limits {
        max_container_bytes: 64 * 1024,
        ..Limits::default()
    };
    let creator = bedwars::creator(ContainerConfig::new().with_limits(limits)).unwrap();

    // 16 MiB of zeros squeezes into a few hundred bytes
    let bomb = ZstdCodec::default().compress(&vec![0u8; 16 * 1024 * 1024]).unwrap();
    assert!(bomb.len() < 4096);

    let result = creator.parse_game_log(&bomb, true);
    assert!(matches!(
        result,
        Err(Error::Codec(CodecError::OutputTooLarge { max: 65536, .. }))
    ));
}

#[test]
fn flipped_byte_in_compressed_blob() {
    let creator = bedwars_creator();
    let mut bytes = creator.build_game_log(&mut short_match(), true).unwrap();
    let mid = bytes.len() / 2;
    bytes[mid] ^= 0xFF;

    // Either the frame is rejected or the container inside is; never a panic
    if let Ok(sequence) = creator.parse_game_log(&bytes, true) {
        assert!(sequence.len() <= 4);
    }
}
