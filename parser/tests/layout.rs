//! Integration tests for declared layouts.

use binary_parser::{
    composite, read_array, write_array, ByteCursor, ByteOrder, ByteOrderMark, Composite,
    CursorCfg, Decode, Encode, Endianness, Error, FixedText, Node, NodeArray, UtfWidth, F32, F64,
    I32, I64, U16, U32, U8,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

composite! {
    #[derive(Debug, Clone, PartialEq)]
    struct Template {
        magic: FixedText = FixedText::with_size(4),
        header: U8,
        age: U8,
        height: F32,
    }
}

composite! {
    #[derive(Debug, Clone, PartialEq)]
    struct Sample {
        id: U32,
        offset: I64,
        value: F64,
        label: FixedText = FixedText::with_size(6),
    }
}

composite! {
    #[derive(Debug, Clone, PartialEq)]
    struct Table {
        magic: FixedText = FixedText::new("TBL", 3),
        count: U16,
    }
}

composite! {
    /// Leading mark that decides the byte order of the fields after it.
    #[derive(Debug, Clone, PartialEq)]
    struct Preamble {
        bom: ByteOrderMark = ByteOrderMark::new(UtfWidth::Utf16),
    }
}

composite! {
    #[derive(Debug, Clone, PartialEq)]
    struct Nested {
        template: Template,
        samples: NodeArray<Sample> = NodeArray::with_len(2, Sample::default),
        trailer: I32 = I32::new(-1),
    }
}

fn template() -> Template {
    Template {
        magic: FixedText::new("TEST", 4),
        header: U8::new(10),
        age: U8::new(20),
        height: F32::new(5.9),
    }
}

fn sample(id: u32) -> Sample {
    Sample {
        id: U32::new(id),
        offset: I64::new(-(id as i64) * 1000),
        value: F64::new(id as f64 / 3.0),
        label: FixedText::new(format!("s{id}"), 6),
    }
}

#[test]
fn test_template_bytes() {
    init_tracing();
    let mut cursor = ByteCursor::default();
    let base = template();
    base.write(&mut cursor).unwrap();
    assert_eq!(
        cursor.as_slice(),
        &[0x54, 0x45, 0x53, 0x54, 0x0A, 0x14, 0xCD, 0xCC, 0xBC, 0x40]
    );

    cursor.set_position(0);
    let mut read = Template::default();
    read.read(&mut cursor).unwrap();
    assert_eq!(read, base);
}

#[test]
fn test_template_field_by_field() {
    // The same bytes as writing each field directly to the cursor
    let mut cursor = ByteCursor::default();
    cursor.write_text("TEST", 4).unwrap();
    cursor.write_fixed(10u8).unwrap();
    cursor.write_fixed(20u8).unwrap();
    cursor.write_fixed(5.9f32).unwrap();
    assert_eq!(cursor.as_slice(), &template().encode().unwrap()[..]);

    cursor.set_position(0);
    assert_eq!(cursor.read_text(4).unwrap(), "TEST");
    assert_eq!(cursor.read_fixed::<u8>().unwrap(), 10);
    assert_eq!(cursor.read_fixed::<u8>().unwrap(), 20);
    assert_eq!(cursor.read_fixed::<f32>().unwrap(), 5.9);
}

#[test]
fn test_size_accounting() {
    init_tracing();
    let mut nested = Nested::default();
    nested.template = template();
    nested.samples = NodeArray::new(vec![sample(1), sample(2)]);

    let size = nested.encode_size();
    assert_eq!(size, 10 + 2 * (4 + 8 + 8 + 6) + 4);
    assert_eq!(
        size,
        nested
            .children()
            .iter()
            .map(|child| child.encode_size())
            .sum::<usize>()
    );

    // Written somewhere other than the start of the buffer
    let mut cursor = ByteCursor::new([0xEE; 3]);
    cursor.set_position(3);
    nested.write(&mut cursor).unwrap();
    assert_eq!(cursor.position() - 3, size);

    cursor.set_position(3);
    let mut decoded = Nested::default();
    decoded.read(&mut cursor).unwrap();
    assert_eq!(cursor.position() - 3, size);
    assert_eq!(decoded, nested);
}

#[test]
fn test_count_then_array() {
    for count in [0usize, 1, 3] {
        let samples: Vec<Sample> = (0..count as u32).map(sample).collect();
        let table = Table {
            count: U16::new(count as u16),
            ..Table::default()
        };

        let mut cursor = ByteCursor::default();
        table.write(&mut cursor).unwrap();
        write_array(&mut cursor, &samples).unwrap();

        cursor.set_position(0);
        let mut header = Table::default();
        header.read(&mut cursor).unwrap();
        assert_eq!(header, table);
        let len = header.count.value as usize;
        let decoded = read_array(&mut cursor, len, Sample::default).unwrap();
        assert_eq!(decoded, samples);
        assert_eq!(cursor.remaining(), 0);
    }
}

#[test]
fn test_bom_selects_byte_order() {
    init_tracing();
    for order in [ByteOrder::Big, ByteOrder::Little] {
        // Producer: mark, then numbers in the same byte order
        let preamble = Preamble {
            bom: ByteOrderMark::with_endianness(UtfWidth::Utf16, Endianness::from(order)),
        };
        let cfg = CursorCfg::default().with_byte_order(order);
        let mut cursor = ByteCursor::with_cfg(b"", cfg);
        preamble.write(&mut cursor).unwrap();
        U32::new(0xDEADBEEF).write(&mut cursor).unwrap();
        let bytes = cursor.into_bytes();

        // Consumer: starts little-endian, switches after reading the mark
        let mut cursor = ByteCursor::new(&bytes);
        let mut decoded = Preamble::default();
        decoded.read(&mut cursor).unwrap();
        assert_eq!(decoded, preamble);
        cursor.set_byte_order(decoded.bom.byte_order().unwrap());
        let mut value = U32::default();
        value.read(&mut cursor).unwrap();
        assert_eq!(value.value, 0xDEADBEEF);
    }
}

#[test]
fn test_unknown_bom_writes_nothing() {
    let preamble = Preamble::default();
    assert_eq!(preamble.bom.endianness(), Endianness::Unknown);
    assert!(preamble.encode().unwrap().is_empty());

    let mut decoded = Preamble::default();
    decoded.read(&mut ByteCursor::new([0x12, 0x34])).unwrap();
    assert_eq!(decoded.bom.endianness(), Endianness::Unknown);
    assert_eq!(decoded.bom.byte_order(), None);
}

#[test]
fn test_bounds_rejection() {
    let encoded = template().encode().unwrap();
    for len in 0..encoded.len() {
        let mut cursor = ByteCursor::new(&encoded[..len]);
        let mut read = template();
        read.height.value = 1.5;
        assert!(matches!(
            read.read(&mut cursor),
            Err(Error::ReadOutOfBounds { .. })
        ));
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.as_slice(), &encoded[..len]);
        assert_eq!(read.height.value, 1.5);
    }
}

#[test]
fn test_failed_read_keeps_record() {
    init_tracing();
    let mut read = template();
    let before = read.clone();

    // The magic and both bytes are valid, the float is cut short
    let encoded = template().encode().unwrap();
    let mut cursor = ByteCursor::new(&encoded[..8]);
    cursor.write_bytes(b"NEW!").unwrap();
    cursor.set_position(0);
    assert!(read.read(&mut cursor).is_err());
    assert_eq!(cursor.position(), 0);
    assert_eq!(read, before);

    // Same for a record nested inside an array
    let mut nested = Nested::default();
    let before = nested.clone();
    let mut short = template().encode().unwrap().to_vec();
    short.extend(sample(1).encode().unwrap());
    let mut cursor = ByteCursor::new(&short);
    assert!(matches!(
        nested.read(&mut cursor),
        Err(Error::ReadOutOfBounds { .. })
    ));
    assert_eq!(cursor.position(), 0);
    assert_eq!(nested, before);
}

#[test]
fn test_decode_rejects_trailing_bytes() {
    let mut encoded = template().encode().unwrap().to_vec();
    encoded.push(0);
    assert_eq!(Template::decode(&encoded), Err(Error::ExtraData(1)));
}

#[test]
fn test_invalid_text_is_reported() {
    let mut encoded = template().encode().unwrap().to_vec();
    encoded[1] = 0xFF;
    assert!(matches!(
        Template::decode(&encoded),
        Err(Error::InvalidUtf8 { offset: 0, .. })
    ));
}

#[test]
fn test_max_len_bounds_encoding() {
    let cfg = CursorCfg::default().with_max_len(9);
    assert_eq!(template().encode_cfg(cfg), Err(Error::LengthExceeded(10, 9)));
    let cfg = CursorCfg::default().with_max_len(10);
    assert_eq!(template().encode_cfg(cfg).unwrap().len(), 10);
}
