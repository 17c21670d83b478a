#![no_main]

use arbitrary::Arbitrary;
use binary_parser::{
    composite, read_array, write_array, ByteCursor, ByteOrder, ByteOrderMark, CursorCfg, Decode,
    Encode, Endianness, FixedText, Node, UtfWidth, F64, I16, I32, I64, I8, U128, U16, U32, U64,
    U8,
};
use libfuzzer_sys::fuzz_target;

const LABEL_SIZE: usize = 12;

composite! {
    #[derive(Debug, Clone, PartialEq)]
    struct Record {
        a: U8,
        b: I8,
        c: U16,
        d: I16,
        e: U32,
        f: I32,
        g: U64,
        h: I64,
        i: U128,
        label: FixedText = FixedText::with_size(LABEL_SIZE),
    }
}

#[derive(Arbitrary, Debug)]
struct RecordInput {
    a: u8,
    b: i8,
    c: u16,
    d: i16,
    e: u32,
    f: i32,
    g: u64,
    h: i64,
    i: u128,
    label: String,
}

impl From<RecordInput> for Record {
    fn from(input: RecordInput) -> Self {
        let mut label = input.label;
        while label.len() > LABEL_SIZE {
            label.pop();
        }
        Record {
            a: U8::new(input.a),
            b: I8::new(input.b),
            c: U16::new(input.c),
            d: I16::new(input.d),
            e: U32::new(input.e),
            f: I32::new(input.f),
            g: U64::new(input.g),
            h: I64::new(input.h),
            i: U128::new(input.i),
            // Trailing NULs are indistinguishable from padding
            label: FixedText::new(label.trim_end_matches('\0'), LABEL_SIZE),
        }
    }
}

#[derive(Arbitrary, Debug)]
enum FuzzInput {
    Record(RecordInput, bool),
    Array(Vec<RecordInput>),
    Float(f64),
    Bom(bool, Option<bool>),
}

fn order(big: bool) -> ByteOrder {
    if big {
        ByteOrder::Big
    } else {
        ByteOrder::Little
    }
}

fn roundtrip_record(record: Record, big: bool) {
    let cfg = CursorCfg::default().with_byte_order(order(big));
    let encoded = record.encode_cfg(cfg).expect("Failed to encode record!");
    assert_eq!(record.encode_size(), encoded.len());
    let decoded = Record::decode_cfg(&encoded, cfg).expect("Failed to decode record!");
    assert_eq!(record, decoded);
}

fn roundtrip_array(records: Vec<Record>) {
    let mut cursor = ByteCursor::default();
    write_array(&mut cursor, &records).expect("Failed to write array!");
    let size: usize = records.iter().map(Node::encode_size).sum();
    assert_eq!(cursor.len(), size);

    cursor.set_position(0);
    let decoded =
        read_array(&mut cursor, records.len(), Record::default).expect("Failed to read array!");
    assert_eq!(records, decoded);
    assert_eq!(cursor.remaining(), 0);
}

// NOTE: Separate float case to handle NaN comparisons
fn roundtrip_float(v: f64) {
    let encoded = F64::new(v).encode().expect("Failed to encode f64!");
    let decoded = F64::decode(&encoded).expect("Failed to decode f64!");
    if v.is_nan() && decoded.value.is_nan() {
        return;
    }
    assert_eq!(v, decoded.value);
}

fn roundtrip_bom(utf32: bool, endianness: Option<bool>) {
    let width = if utf32 { UtfWidth::Utf32 } else { UtfWidth::Utf16 };
    let endianness = match endianness {
        Some(big) => Endianness::from(order(big)),
        None => Endianness::Unknown,
    };
    let bom = ByteOrderMark::with_endianness(width, endianness);
    let encoded = bom.encode().expect("Failed to encode mark!");
    if endianness == Endianness::Unknown {
        assert!(encoded.is_empty());
        return;
    }
    assert_eq!(bom.encode_size(), encoded.len());
    let mut decoded = ByteOrderMark::new(width);
    decoded
        .read(&mut ByteCursor::new(&encoded))
        .expect("Failed to read mark!");
    assert_eq!(bom, decoded);
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::Record(record, big) => roundtrip_record(record.into(), big),
        FuzzInput::Array(records) => {
            roundtrip_array(records.into_iter().map(Into::into).collect())
        }
        FuzzInput::Float(v) => roundtrip_float(v),
        FuzzInput::Bom(utf32, endianness) => roundtrip_bom(utf32, endianness),
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
