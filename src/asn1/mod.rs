// ASN.1 Module - Main module file
// Exports the DER TLV parser and encoder

pub mod encoder;
pub mod tlv;

pub use encoder::{encode_length, wrap, wrap_with, LengthForm};
pub use tlv::{siblings, Siblings, TlvElement, MIN_ELEMENT_LEN};

/// ASN.1 tag constants.
pub mod tags {
    pub const INTEGER: u8 = 0x02;
    pub const BIT_STRING: u8 = 0x03;
    pub const NULL: u8 = 0x05;
    pub const OID: u8 = 0x06;
    pub const SEQUENCE: u8 = 0x30;
}
