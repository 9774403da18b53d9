//! Game logs written to and read back from files.

use crate::common::*;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use tempfile::TempDir;

#[test]
fn compressed_log_survives_file_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("match-1.gamelog");
    let creator = bedwars_creator();
    let mut sequence = short_match();

    let written = {
        let mut writer = BufWriter::new(File::create(&path).unwrap());
        creator.write_to(&mut writer, &mut sequence, true).unwrap()
    };
    assert_eq!(fs::metadata(&path).unwrap().len(), written as u64);

    let mut reader = BufReader::new(File::open(&path).unwrap());
    let decoded = creator.read_from(&mut reader, true).unwrap();
    assert_same_sequence(&sequence, &decoded);
}

#[test]
fn plain_log_bytes_match_file_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("match-2.gamelog");
    let creator = bedwars_creator();

    let expected = creator.build_game_log(&mut short_match(), false).unwrap();
    let mut file = File::create(&path).unwrap();
    creator.write_to(&mut file, &mut short_match(), false).unwrap();
    drop(file);

    assert_eq!(fs::read(&path).unwrap(), expected);
}

#[test]
fn truncated_file_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("match-3.gamelog");
    let creator = bedwars_creator();

    let bytes = creator.build_game_log(&mut short_match(), true).unwrap();
    fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

    let mut reader = File::open(&path).unwrap();
    assert!(creator.read_from(&mut reader, true).is_err());
}

#[test]
fn empty_file_is_not_a_log() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.gamelog");
    fs::write(&path, b"").unwrap();

    let creator = bedwars_creator();
    let mut reader = File::open(&path).unwrap();
    let result = creator.read_from(&mut reader, false);
    assert!(matches!(result, Err(Error::TruncatedInput { .. })));
}
