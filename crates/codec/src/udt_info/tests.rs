use super::*;

fn foo_info() -> UdtInfo {
    UdtInfo {
        name: "Foo".to_string(),
        symbol: "FOO".to_string(),
        decimals: 8,
        description: String::new(),
    }
}

fn foo_bytes() -> Vec<u8> {
    [
        39u32.to_le_bytes().to_vec(), // total_size
        20u32.to_le_bytes().to_vec(), // name offset
        27u32.to_le_bytes().to_vec(), // symbol offset
        34u32.to_le_bytes().to_vec(), // decimals offset
        35u32.to_le_bytes().to_vec(), // description offset
        3u32.to_le_bytes().to_vec(),
        b"Foo".to_vec(),
        3u32.to_le_bytes().to_vec(),
        b"FOO".to_vec(),
        vec![8],
        0u32.to_le_bytes().to_vec(),
    ]
    .concat()
}

#[test]
fn encode_table() {
    assert_eq!(foo_info().encode().unwrap(), foo_bytes());
}

#[test]
fn decode_table() {
    assert_eq!(UdtInfo::decode(&foo_bytes()).unwrap(), foo_info());
}

#[test]
fn decode_truncated_at_every_length() {
    let bytes = foo_bytes();
    for len in 0..bytes.len() {
        let err = UdtInfo::decode(&bytes[..len]).unwrap_err();
        assert!(
            matches!(err, DecodeError::TruncatedBuffer { .. }),
            "len {len}: {err:?}"
        );
    }
}

#[test]
fn decode_trailing_bytes() {
    let mut bytes = foo_bytes();
    bytes.push(0);
    assert_eq!(
        UdtInfo::decode(&bytes),
        Err(DecodeError::MalformedMetadata("trailing bytes after table"))
    );
}

#[test]
fn decode_string_length_overrun() {
    let mut bytes = foo_bytes();
    // Claim the name is 100 bytes long.
    bytes[20..24].copy_from_slice(&100u32.to_le_bytes());
    assert_eq!(
        UdtInfo::decode(&bytes),
        Err(DecodeError::TruncatedBuffer {
            required: 104,
            available: 7,
        })
    );
}

#[test]
fn decode_offset_overrun() {
    let mut bytes = foo_bytes();
    bytes[8..12].copy_from_slice(&1000u32.to_le_bytes());
    assert_eq!(
        UdtInfo::decode(&bytes),
        Err(DecodeError::TruncatedBuffer {
            required: 1000,
            available: 39,
        })
    );
}

#[test]
fn decode_descending_offsets() {
    let mut bytes = foo_bytes();
    bytes[12..16].copy_from_slice(&21u32.to_le_bytes());
    assert_eq!(
        UdtInfo::decode(&bytes),
        Err(DecodeError::MalformedMetadata("field offsets not ascending"))
    );
}

#[test]
fn decode_wrong_field_count() {
    let bytes = [
        16u32.to_le_bytes().to_vec(),
        16u32.to_le_bytes().to_vec(),
        16u32.to_le_bytes().to_vec(),
        16u32.to_le_bytes().to_vec(),
    ]
    .concat();
    assert_eq!(
        UdtInfo::decode(&bytes),
        Err(DecodeError::MalformedMetadata("expected 4 fields"))
    );
}

#[test]
fn decode_invalid_utf8() {
    let mut bytes = foo_bytes();
    bytes[31] = 0xff;
    assert_eq!(
        UdtInfo::decode(&bytes),
        Err(DecodeError::InvalidUtf8 { field: "symbol" })
    );
}

#[test]
fn decimals_accepts_any_byte() {
    for decimals in [0, 18, u8::MAX] {
        let info = UdtInfo {
            decimals,
            ..foo_info()
        };
        let bytes = info.encode().unwrap();
        assert_eq!(UdtInfo::decode(&bytes).unwrap().decimals, decimals);
    }
}

#[test]
fn roundtrip_multibyte_strings() {
    let info = UdtInfo {
        name: "Ünïcødé".to_string(),
        symbol: "€".to_string(),
        decimals: 2,
        description: "a longer description of the token".to_string(),
    };
    assert_eq!(UdtInfo::decode(&info.encode().unwrap()).unwrap(), info);
}
