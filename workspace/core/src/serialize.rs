//! Canonical byte encoding of deploy fields.
use crate::DeployFields;

/// Serializer producing the bytes a deployer signs.
///
/// Implementations must be deterministic: the same fields always
/// produce the same bytes.
pub trait DeploySerializer {
    /// Encode the signed fields of a deploy.
    fn serialize(&self, fields: &DeployFields) -> Vec<u8>;
}

/// Field numbers from the RNode `DeployDataProto` message.
const TERM: u32 = 2;
const TIMESTAMP: u32 = 3;
const PHLO_PRICE: u32 = 7;
const PHLO_LIMIT: u32 = 8;
const VALID_AFTER_BLOCK_NUMBER: u32 = 10;

const WIRE_VARINT: u32 = 0;
const WIRE_LEN: u32 = 2;

/// Proto3 binary encoding of the signed `DeployDataProto` fields.
///
/// Fields are written in field number order and fields holding
/// their default value are omitted, matching the output of the
/// protobuf runtimes wallets use to sign deploys.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProtobufSerializer;

impl DeploySerializer for ProtobufSerializer {
    fn serialize(&self, fields: &DeployFields) -> Vec<u8> {
        let mut buf = Vec::with_capacity(fields.term.len() + 48);
        write_string(&mut buf, TERM, &fields.term);
        write_int64(&mut buf, TIMESTAMP, fields.timestamp);
        write_int64(&mut buf, PHLO_PRICE, fields.phlo_price);
        write_int64(&mut buf, PHLO_LIMIT, fields.phlo_limit);
        write_int64(
            &mut buf,
            VALID_AFTER_BLOCK_NUMBER,
            fields.valid_after_block_number,
        );
        buf
    }
}

fn write_varint(buf: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        buf.push((value as u8 & 0x7f) | 0x80);
        value >>= 7;
    }
    buf.push(value as u8);
}

fn write_tag(buf: &mut Vec<u8>, field: u32, wire_type: u32) {
    write_varint(buf, u64::from(field << 3 | wire_type));
}

fn write_string(buf: &mut Vec<u8>, field: u32, value: &str) {
    if value.is_empty() {
        return;
    }
    write_tag(buf, field, WIRE_LEN);
    write_varint(buf, value.len() as u64);
    buf.extend_from_slice(value.as_bytes());
}

// Negative values are sign extended to ten bytes.
fn write_int64(buf: &mut Vec<u8>, field: u32, value: i64) {
    if value == 0 {
        return;
    }
    write_tag(buf, field, WIRE_VARINT);
    write_varint(buf, value as u64);
}
