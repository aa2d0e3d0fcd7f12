//! Dictionary encoding and decoding.
//!
//! Dictionary format:
//! - COUNT (1 byte): number of tuples
//! - per tuple:
//!   - KEY (4 bytes, little endian)
//!   - TYPE (1 byte): 0 = byte array, 1 = C string, 2 = unsigned int, 3 = signed int
//!   - LENGTH (2 bytes, little endian): value length
//!   - VALUE (LENGTH bytes)
//!
//! C strings carry their NUL terminator inside LENGTH. Integers are 1, 2 or
//! 4 bytes wide.
//!
//! Decoding skips tuples it cannot read (unknown type, bad integer width,
//! oversized byte array, invalid UTF-8) and keeps the rest. Only framing
//! damage fails the whole dictionary. Over-long C strings are truncated.

use heapless::{String, Vec};

/// Maximum encoded dictionary size (inbox and outbox buffers are both this large)
pub const MAX_DICT_SIZE: usize = 128;

/// Maximum number of tuples in one dictionary
pub const MAX_TUPLES: usize = 8;

/// Maximum length of a single byte-array or string value
pub const MAX_VALUE_LEN: usize = 64;

/// Size of a tuple header (KEY + TYPE + LENGTH)
const TUPLE_HEADER_SIZE: usize = 4 + 1 + 2;

/// Errors that can occur during dictionary parsing or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DictError {
    /// More tuples than [`MAX_TUPLES`]
    TooManyTuples,
    /// A value exceeds [`MAX_VALUE_LEN`]
    ValueTooLarge,
    /// Buffer too small for encoding
    BufferTooSmall,
    /// Input ended in the middle of a tuple
    Truncated,
    /// Integer width is not 1, 2 or 4
    InvalidLength,
    /// C string is not valid UTF-8
    InvalidUtf8,
}

/// Tuple value type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TupleType {
    ByteArray,
    CString,
    Uint,
    Int,
}

const TYPE_BYTE_ARRAY: u8 = 0;
const TYPE_CSTRING: u8 = 1;
const TYPE_UINT: u8 = 2;
const TYPE_INT: u8 = 3;

impl TupleType {
    /// Parse a type tag from its wire byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            TYPE_BYTE_ARRAY => Some(TupleType::ByteArray),
            TYPE_CSTRING => Some(TupleType::CString),
            TYPE_UINT => Some(TupleType::Uint),
            TYPE_INT => Some(TupleType::Int),
            _ => None,
        }
    }

    /// Convert to wire byte
    pub fn to_byte(self) -> u8 {
        match self {
            TupleType::ByteArray => TYPE_BYTE_ARRAY,
            TupleType::CString => TYPE_CSTRING,
            TupleType::Uint => TYPE_UINT,
            TupleType::Int => TYPE_INT,
        }
    }
}

/// A tuple value
///
/// Integers keep their wire width so a value re-encodes to the same bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bytes(Vec<u8, MAX_VALUE_LEN>),
    CString(String<MAX_VALUE_LEN>),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Int8(i8),
    Int16(i16),
    Int32(i32),
}

impl Value {
    /// Build a string value
    pub fn cstring(text: &str) -> Result<Self, DictError> {
        // Leave room for the terminator
        if text.len() + 1 > MAX_VALUE_LEN {
            return Err(DictError::ValueTooLarge);
        }
        let mut s = String::new();
        s.push_str(text).map_err(|_| DictError::ValueTooLarge)?;
        Ok(Value::CString(s))
    }

    /// Build a byte-array value
    pub fn bytes(data: &[u8]) -> Result<Self, DictError> {
        let mut v = Vec::new();
        v.extend_from_slice(data)
            .map_err(|_| DictError::ValueTooLarge)?;
        Ok(Value::Bytes(v))
    }

    /// Type tag of this value
    pub fn tuple_type(&self) -> TupleType {
        match self {
            Value::Bytes(_) => TupleType::ByteArray,
            Value::CString(_) => TupleType::CString,
            Value::Uint8(_) | Value::Uint16(_) | Value::Uint32(_) => TupleType::Uint,
            Value::Int8(_) | Value::Int16(_) | Value::Int32(_) => TupleType::Int,
        }
    }

    /// Encoded value length in bytes
    pub fn encoded_len(&self) -> usize {
        match self {
            Value::Bytes(b) => b.len(),
            Value::CString(s) => s.len() + 1,
            Value::Uint8(_) | Value::Int8(_) => 1,
            Value::Uint16(_) | Value::Int16(_) => 2,
            Value::Uint32(_) | Value::Int32(_) => 4,
        }
    }

    /// Integer value widened to i32
    ///
    /// Returns `None` for non-integer values. Unsigned values above
    /// `i32::MAX` wrap the way a C reader would.
    pub fn as_i32(&self) -> Option<i32> {
        match *self {
            Value::Uint8(v) => Some(v as i32),
            Value::Uint16(v) => Some(v as i32),
            Value::Uint32(v) => Some(v as i32),
            Value::Int8(v) => Some(v as i32),
            Value::Int16(v) => Some(v as i32),
            Value::Int32(v) => Some(v),
            _ => None,
        }
    }

    /// String contents, if this is a C string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::CString(s) => Some(s.as_str()),
            _ => None,
        }
    }

    fn write_to(&self, out: &mut [u8]) {
        match self {
            Value::Bytes(b) => out.copy_from_slice(b),
            Value::CString(s) => {
                out[..s.len()].copy_from_slice(s.as_bytes());
                out[s.len()] = 0;
            }
            Value::Uint8(v) => out[0] = *v,
            Value::Uint16(v) => out.copy_from_slice(&v.to_le_bytes()),
            Value::Uint32(v) => out.copy_from_slice(&v.to_le_bytes()),
            Value::Int8(v) => out[0] = *v as u8,
            Value::Int16(v) => out.copy_from_slice(&v.to_le_bytes()),
            Value::Int32(v) => out.copy_from_slice(&v.to_le_bytes()),
        }
    }

    fn read_from(tuple_type: TupleType, data: &[u8]) -> Result<Self, DictError> {
        match tuple_type {
            TupleType::ByteArray => Value::bytes(data),
            TupleType::CString => {
                // Everything from the first NUL on is padding
                let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
                let text =
                    core::str::from_utf8(&data[..end]).map_err(|_| DictError::InvalidUtf8)?;
                Ok(Value::CString(truncated(text)))
            }
            TupleType::Uint => match *data {
                [a] => Ok(Value::Uint8(a)),
                [a, b] => Ok(Value::Uint16(u16::from_le_bytes([a, b]))),
                [a, b, c, d] => Ok(Value::Uint32(u32::from_le_bytes([a, b, c, d]))),
                _ => Err(DictError::InvalidLength),
            },
            TupleType::Int => match *data {
                [a] => Ok(Value::Int8(a as i8)),
                [a, b] => Ok(Value::Int16(i16::from_le_bytes([a, b]))),
                [a, b, c, d] => Ok(Value::Int32(i32::from_le_bytes([a, b, c, d]))),
                _ => Err(DictError::InvalidLength),
            },
        }
    }
}

/// Copy `text`, cutting it at a char boundary so the terminator still fits
fn truncated(text: &str) -> String<MAX_VALUE_LEN> {
    let mut end = text.len().min(MAX_VALUE_LEN - 1);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let mut s = String::new();
    // Cannot fail, `end` is below capacity
    let _ = s.push_str(&text[..end]);
    s
}

/// One key/value pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuple {
    pub key: u32,
    pub value: Value,
}

/// An ordered set of tuples
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    tuples: Vec<Tuple, MAX_TUPLES>,
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any existing tuple with the same key
    pub fn insert(&mut self, key: u32, value: Value) -> Result<(), DictError> {
        if let Some(tuple) = self.tuples.iter_mut().find(|t| t.key == key) {
            tuple.value = value;
            return Ok(());
        }
        self.tuples
            .push(Tuple { key, value })
            .map_err(|_| DictError::TooManyTuples)
    }

    /// Look up a value by key
    pub fn find(&self, key: u32) -> Option<&Value> {
        self.tuples.iter().find(|t| t.key == key).map(|t| &t.value)
    }

    /// Iterate tuples in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Tuple> {
        self.tuples.iter()
    }

    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Total encoded size in bytes
    pub fn encoded_len(&self) -> usize {
        1 + self
            .tuples
            .iter()
            .map(|t| TUPLE_HEADER_SIZE + t.value.encoded_len())
            .sum::<usize>()
    }

    /// Encode this dictionary into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, DictError> {
        let total = self.encoded_len();
        if buffer.len() < total {
            return Err(DictError::BufferTooSmall);
        }

        buffer[0] = self.tuples.len() as u8;
        let mut pos = 1;
        for tuple in &self.tuples {
            let len = tuple.value.encoded_len();
            buffer[pos..pos + 4].copy_from_slice(&tuple.key.to_le_bytes());
            buffer[pos + 4] = tuple.value.tuple_type().to_byte();
            buffer[pos + 5..pos + 7].copy_from_slice(&(len as u16).to_le_bytes());
            pos += TUPLE_HEADER_SIZE;
            tuple.value.write_to(&mut buffer[pos..pos + len]);
            pos += len;
        }

        Ok(total)
    }

    /// Encode this dictionary into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_DICT_SIZE>, DictError> {
        let mut buffer = [0u8; MAX_DICT_SIZE];
        let len = self.encode(&mut buffer)?;
        let mut vec = Vec::new();
        vec.extend_from_slice(&buffer[..len])
            .map_err(|_| DictError::BufferTooSmall)?;
        Ok(vec)
    }

    /// Decode a complete dictionary
    ///
    /// Unreadable tuples are skipped. Trailing bytes after the last tuple
    /// are ignored.
    pub fn decode(bytes: &[u8]) -> Result<Self, DictError> {
        let (&count, mut rest) = bytes.split_first().ok_or(DictError::Truncated)?;
        if count as usize > MAX_TUPLES {
            return Err(DictError::TooManyTuples);
        }

        let mut dict = Dictionary::new();
        for _ in 0..count {
            if rest.len() < TUPLE_HEADER_SIZE {
                return Err(DictError::Truncated);
            }
            let key = u32::from_le_bytes([rest[0], rest[1], rest[2], rest[3]]);
            let tuple_type = TupleType::from_byte(rest[4]);
            let len = u16::from_le_bytes([rest[5], rest[6]]) as usize;
            rest = &rest[TUPLE_HEADER_SIZE..];

            if rest.len() < len {
                return Err(DictError::Truncated);
            }
            let data = &rest[..len];
            rest = &rest[len..];

            let value = match tuple_type.map(|t| Value::read_from(t, data)) {
                Some(Ok(value)) => value,
                _ => continue,
            };
            dict.insert(key, value)?;
        }

        Ok(dict)
    }
}
