use layer_peer_types::{Deserializable, Serializable};

// ── Integers ──────────────────────────────────────────────────────────────────

#[test]
fn i32_is_little_endian() {
    assert_eq!(1i32.to_bytes(), vec![1, 0, 0, 0]);
    assert_eq!(i32::from_bytes(&[0xff, 0xff, 0xff, 0xff]).unwrap(), -1);
}

#[test]
fn i64_roundtrips_extremes() {
    for v in [0i64, -1, i64::MAX, i64::MIN, -1_001_234_567_890] {
        assert_eq!(i64::from_bytes(&v.to_bytes()).unwrap(), v);
    }
}

// ── String / bytes ────────────────────────────────────────────────────────────

#[test]
fn short_bytes_are_padded_to_four() {
    let bytes = vec![0xAAu8, 0xBB].to_bytes();
    // 1 length byte + 2 data bytes + 1 padding byte
    assert_eq!(bytes, vec![2, 0xAA, 0xBB, 0]);
}

#[test]
fn empty_bytes_take_one_word() {
    assert_eq!(Vec::<u8>::new().to_bytes(), vec![0, 0, 0, 0]);
}

#[test]
fn long_bytes_use_wide_header() {
    let data = vec![7u8; 300];
    let bytes = data.to_bytes();
    assert_eq!(&bytes[..4], &[0xfe, 0x2c, 0x01, 0x00]);
    assert_eq!(bytes.len() % 4, 0, "must be 4-byte aligned");
    assert_eq!(Vec::<u8>::from_bytes(&bytes).unwrap(), data);
}

#[test]
fn string_roundtrip() {
    let s = "file reference".to_owned();
    assert_eq!(String::from_bytes(&s.to_bytes()).unwrap(), s);
}

#[test]
fn invalid_utf8_is_rejected() {
    use layer_peer_types::deserialize::Error;
    let bytes = vec![0xffu8, 0xfe].to_bytes();
    assert_eq!(String::from_bytes(&bytes), Err(Error::InvalidUtf8));
}

// ── Cursor EOF detection ──────────────────────────────────────────────────────

#[test]
fn deserialize_truncated_returns_eof() {
    use layer_peer_types::deserialize::Error;
    assert_eq!(i32::from_bytes(&[0x01, 0x02]), Err(Error::UnexpectedEof));
    // header promises 5 bytes, only 2 follow
    assert_eq!(Vec::<u8>::from_bytes(&[5, 1, 2]), Err(Error::UnexpectedEof));
}

#[test]
fn cursor_tracks_position() {
    use layer_peer_types::Cursor;
    let bytes = [1u8, 0, 0, 0, 9];
    let mut cur = Cursor::from_slice(&bytes);
    assert_eq!(i32::deserialize(&mut cur).unwrap(), 1);
    assert_eq!(cur.pos(), 4);
    assert_eq!(cur.remaining(), 1);
    assert_eq!(cur.read_byte().unwrap(), 9);
    assert!(cur.read_byte().is_err());
}
