#![no_main]

use binary_parser::{
    composite, ByteCursor, ByteOrderMark, FixedText, Node, UtfWidth, F32, U16, U8,
};
use libfuzzer_sys::fuzz_target;

composite! {
    #[derive(Debug, Clone, PartialEq)]
    struct Header {
        bom: ByteOrderMark = ByteOrderMark::new(UtfWidth::Utf16),
        magic: FixedText = FixedText::with_size(4),
        version: U8,
        count: U16,
        scale: F32,
    }
}

fuzz_target!(|data: &[u8]| {
    // Arbitrary input must never panic, and failures must not move the cursor
    let mut cursor = ByteCursor::new(data);
    let mut header = Header::default();
    match header.read(&mut cursor) {
        Ok(()) => assert_eq!(cursor.position(), header.encode_size()),
        Err(_) => assert_eq!(cursor.position(), 0),
    }
});
