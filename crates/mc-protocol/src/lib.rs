use std::borrow::Cow;
use std::io::{self, Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "derive")]
pub use mc_protocol_derive::{Decode, Encode};

pub use serde;

pub mod nbt;
pub mod palette;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("VarInt or VarLong exceeded its byte budget")]
    Overflow,
    #[error("String too long: {len} > {max}")]
    StringTooLong { len: usize, max: usize },
    #[error("invalid enum variant: {0}")]
    InvalidEnumVariant(i32),
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("malformed data: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Protocol state. Revision 763 (1.19.4) has no Configuration state —
/// Login transitions straight to Play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    Handshaking,
    Status,
    Login,
    Play,
}

/// Packet direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Clientbound,
    Serverbound,
}

/// Trait for all packets - provides ID, name, state, and direction
pub trait Packet {
    /// The packet ID
    const ID: i32;
    /// The packet name (e.g., "MovePlayerPos")
    const NAME: &'static str;
    /// The protocol state this packet belongs to
    const STATE: State;
    /// Whether this packet is clientbound or serverbound
    const DIRECTION: Direction;
}

pub trait Encode {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()>;
}

pub trait Decode<'a>: Sized {
    fn decode<R: Read>(reader: &mut R) -> Result<Self>;
}

// VarInt encoding/decoding
pub fn read_varint<R: Read>(reader: &mut R) -> Result<i32> {
    let mut result = 0i32;
    let mut shift = 0;
    loop {
        let byte = reader.read_u8()?;
        result |= ((byte & 0x7F) as i32) << shift;
        if byte & 0x80 == 0 {
            break;
        }
        shift += 7;
        if shift >= 35 {
            return Err(ProtocolError::Overflow);
        }
    }
    Ok(result)
}

pub fn write_varint<W: Write>(writer: &mut W, mut value: i32) -> Result<()> {
    loop {
        let mut byte = (value & 0x7F) as u8;
        value = ((value as u32) >> 7) as i32;
        if value != 0 {
            byte |= 0x80;
        }
        writer.write_u8(byte)?;
        if value == 0 {
            break;
        }
    }
    Ok(())
}

/// Number of bytes `write_varint` would emit for `value`, without writing anything.
#[must_use]
pub fn varint_len(value: i32) -> usize {
    let mut val = value as u32;
    let mut len = 1;
    while val >= 0x80 {
        val >>= 7;
        len += 1;
    }
    len
}

// VarLong encoding/decoding
pub fn read_varlong<R: Read>(reader: &mut R) -> Result<i64> {
    let mut result = 0i64;
    let mut shift = 0;
    loop {
        let byte = reader.read_u8()?;
        result |= ((byte & 0x7F) as i64) << shift;
        if byte & 0x80 == 0 {
            break;
        }
        shift += 7;
        if shift >= 70 {
            return Err(ProtocolError::Overflow);
        }
    }
    Ok(result)
}

pub fn write_varlong<W: Write>(writer: &mut W, mut value: i64) -> Result<()> {
    loop {
        let mut byte = (value & 0x7F) as u8;
        value = ((value as u64) >> 7) as i64;
        if value != 0 {
            byte |= 0x80;
        }
        writer.write_u8(byte)?;
        if value == 0 {
            break;
        }
    }
    Ok(())
}

// Primitive implementations
impl Encode for bool {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_u8(u8::from(*self))?;
        Ok(())
    }
}

impl Decode<'_> for bool {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(reader.read_u8()? != 0)
    }
}

impl Encode for u8 {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_u8(*self)?;
        Ok(())
    }
}

impl Decode<'_> for u8 {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(reader.read_u8()?)
    }
}

impl Encode for i8 {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_i8(*self)?;
        Ok(())
    }
}

impl Decode<'_> for i8 {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(reader.read_i8()?)
    }
}

impl Encode for i16 {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_i16::<BigEndian>(*self)?;
        Ok(())
    }
}

impl Decode<'_> for i16 {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(reader.read_i16::<BigEndian>()?)
    }
}

impl Encode for u16 {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_u16::<BigEndian>(*self)?;
        Ok(())
    }
}

impl Decode<'_> for u16 {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(reader.read_u16::<BigEndian>()?)
    }
}

impl Encode for i32 {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_i32::<BigEndian>(*self)?;
        Ok(())
    }
}

impl Decode<'_> for i32 {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(reader.read_i32::<BigEndian>()?)
    }
}

impl Encode for u32 {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_u32::<BigEndian>(*self)?;
        Ok(())
    }
}

impl Decode<'_> for u32 {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(reader.read_u32::<BigEndian>()?)
    }
}

impl Encode for i64 {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_i64::<BigEndian>(*self)?;
        Ok(())
    }
}

impl Decode<'_> for i64 {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(reader.read_i64::<BigEndian>()?)
    }
}

impl Encode for u64 {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_u64::<BigEndian>(*self)?;
        Ok(())
    }
}

impl Decode<'_> for u64 {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(reader.read_u64::<BigEndian>()?)
    }
}

impl Encode for f32 {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_f32::<BigEndian>(*self)?;
        Ok(())
    }
}

impl Decode<'_> for f32 {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(reader.read_f32::<BigEndian>()?)
    }
}

impl Encode for f64 {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_f64::<BigEndian>(*self)?;
        Ok(())
    }
}

impl Decode<'_> for f64 {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(reader.read_f64::<BigEndian>()?)
    }
}

// VarInt wrapper type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VarInt(pub i32);

impl Encode for VarInt {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_varint(writer, self.0)
    }
}

impl Decode<'_> for VarInt {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(VarInt(read_varint(reader)?))
    }
}

impl From<i32> for VarInt {
    fn from(v: i32) -> Self {
        VarInt(v)
    }
}

impl From<VarInt> for i32 {
    fn from(v: VarInt) -> Self {
        v.0
    }
}

// VarLong wrapper type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VarLong(pub i64);

impl Encode for VarLong {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_varlong(writer, self.0)
    }
}

impl Decode<'_> for VarLong {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(VarLong(read_varlong(reader)?))
    }
}

// String encoding (length-prefixed with VarInt)
impl Encode for str {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        let bytes = self.as_bytes();
        write_varint(writer, bytes.len() as i32)?;
        writer.write_all(bytes)?;
        Ok(())
    }
}

impl Encode for String {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.as_str().encode(writer)
    }
}

impl Decode<'_> for String {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        let len = read_varint(reader)? as usize;
        if len > 32767 * 4 {
            return Err(ProtocolError::StringTooLong {
                len,
                max: 32767 * 4,
            });
        }
        let mut buf = vec![0u8; len];
        reader.read_exact(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

impl<'a> Encode for Cow<'a, str> {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.as_ref().encode(writer)
    }
}

// Option<T> encoding (bool prefix)
impl<T: Encode> Encode for Option<T> {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        match self {
            Some(v) => {
                true.encode(writer)?;
                v.encode(writer)
            }
            None => false.encode(writer),
        }
    }
}

impl<'a, T: Decode<'a>> Decode<'a> for Option<T> {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        if bool::decode(reader)? {
            Ok(Some(T::decode(reader)?))
        } else {
            Ok(None)
        }
    }
}

// Vec<T> encoding (VarInt length prefix)
impl<T: Encode> Encode for Vec<T> {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_varint(writer, self.len() as i32)?;
        for item in self {
            item.encode(writer)?;
        }
        Ok(())
    }
}

impl<'a, T: Decode<'a>> Decode<'a> for Vec<T> {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        let len = read_varint(reader)? as usize;
        let mut vec = Vec::with_capacity(len.min(4096));
        for _ in 0..len {
            vec.push(T::decode(reader)?);
        }
        Ok(vec)
    }
}

/// A length-prefixed array of raw bytes (not to be confused with a `Vec<u8>`
/// field's own varint-per-element encoding).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteArray(pub Vec<u8>);

impl Encode for ByteArray {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_varint(writer, self.0.len() as i32)?;
        writer.write_all(&self.0)?;
        Ok(())
    }
}

impl Decode<'_> for ByteArray {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        let len = read_varint(reader)? as usize;
        let mut buf = vec![0u8; len];
        reader.read_exact(&mut buf)?;
        Ok(ByteArray(buf))
    }
}

/// A varint-prefixed array of 64-bit longs, packed MSB-unaware (each long is
/// just a plain big-endian word; the packing of *entries within* a long is a
/// paletted-container concern, see [`palette`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitSet(pub Vec<u64>);

impl Encode for BitSet {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.0.encode(writer)
    }
}

impl Decode<'_> for BitSet {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(BitSet(Vec::<u64>::decode(reader)?))
    }
}

/// Rotation in 1/256ths of a full turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Angle(pub u8);

impl Angle {
    #[must_use]
    pub fn to_degrees(self) -> f32 {
        f32::from(self.0) * (360.0 / 256.0)
    }
}

impl Encode for Angle {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.0.encode(writer)
    }
}

impl Decode<'_> for Angle {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Angle(u8::decode(reader)?))
    }
}

// UUID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Uuid(pub u128);

impl Encode for Uuid {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_u64::<BigEndian>((self.0 >> 64) as u64)?;
        writer.write_u64::<BigEndian>(self.0 as u64)?;
        Ok(())
    }
}

impl Decode<'_> for Uuid {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        let high = u128::from(reader.read_u64::<BigEndian>()?);
        let low = u128::from(reader.read_u64::<BigEndian>()?);
        Ok(Uuid((high << 64) | low))
    }
}

/// Packed position: X=high 26 bits, Z=middle 26 bits, Y=low 12 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i16,
    pub z: i32,
}

impl Position {
    #[must_use]
    pub fn new(x: i32, y: i16, z: i32) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn pack(self) -> i64 {
        ((i64::from(self.x) & 0x3FF_FFFF) << 38)
            | ((i64::from(self.z) & 0x3FF_FFFF) << 12)
            | (i64::from(self.y) & 0xFFF)
    }

    #[must_use]
    pub fn unpack(packed: i64) -> Self {
        let x = (packed >> 38) as i32;
        let y = ((packed << 52) >> 52) as i16;
        let z = ((packed << 26) >> 38) as i32;
        Self { x, y, z }
    }
}

impl Encode for Position {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_i64::<BigEndian>(self.pack())?;
        Ok(())
    }
}

impl Decode<'_> for Position {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Position::unpack(reader.read_i64::<BigEndian>()?))
    }
}

/// A block state id (a VarInt on the wire).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockState(pub i32);

impl Encode for BlockState {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_varint(writer, self.0)
    }
}

impl Decode<'_> for BlockState {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(BlockState(read_varint(reader)?))
    }
}

/// A self-delimiting blob of raw NBT bytes. `decode` walks the tag's own
/// structure ([`nbt::read_tag_bytes`]) to know where it ends, so it reads
/// exactly its bytes off the stream and leaves whatever the caller's
/// packet has next untouched; callers that need the parsed tree call
/// [`nbt::parse_named`] on `.0` themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nbt(pub Vec<u8>);

impl Encode for Nbt {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.0)?;
        Ok(())
    }
}

impl Decode<'_> for Nbt {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Nbt(nbt::read_tag_bytes(reader)?))
    }
}

/// A non-empty inventory slot: item id, stack count and its NBT tag.
/// Emptiness is carried by wrapping this in `Option` (the blanket
/// `Option<T>` impl above already writes/reads the wire's presence bool).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item_id: VarInt,
    pub count: i8,
    pub nbt: Nbt,
}

impl Encode for ItemStack {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.item_id.encode(writer)?;
        self.count.encode(writer)?;
        self.nbt.encode(writer)
    }
}

impl Decode<'_> for ItemStack {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(ItemStack {
            item_id: VarInt::decode(reader)?,
            count: i8::decode(reader)?,
            nbt: Nbt::decode(reader)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn varint_known_vectors() {
        let cases: &[(i32, &[u8])] = &[
            (0, &[0x00]),
            (1, &[0x01]),
            (127, &[0x7F]),
            (128, &[0x80, 0x01]),
            (255, &[0xFF, 0x01]),
            (25565, &[0xDD, 0xC7, 0x01]),
            (2_147_483_647, &[0xFF, 0xFF, 0xFF, 0xFF, 0x07]),
            (-1, &[0xFF, 0xFF, 0xFF, 0xFF, 0x0F]),
            (300, &[0xAC, 0x02]),
        ];
        for (value, bytes) in cases {
            let mut buf = Vec::new();
            write_varint(&mut buf, *value).unwrap();
            assert_eq!(&buf, bytes, "encode({value})");
            assert_eq!(varint_len(*value), bytes.len());
            let decoded = read_varint(&mut Cursor::new(bytes)).unwrap();
            assert_eq!(decoded, *value, "decode({bytes:?})");
        }
    }

    #[test]
    fn varint_overflow_is_rejected() {
        let bytes = [0x80, 0x80, 0x80, 0x80, 0x80, 0x01];
        assert!(matches!(
            read_varint(&mut Cursor::new(&bytes)),
            Err(ProtocolError::Overflow)
        ));
    }

    #[test]
    fn position_roundtrip_known_vector() {
        let pos = Position::new(18_357_644, 831, -20_882_616);
        let packed = pos.pack();
        assert_eq!(packed, 0x4607_632c_15b4_833fu64 as i64);
        assert_eq!(Position::unpack(packed), pos);
    }

    #[test]
    fn position_roundtrip_is_exhaustive_over_sampled_range() {
        for x in [-(1 << 25), -1, 0, 1, (1 << 25) - 1] {
            for y in [-(1 << 11), -1, 0, 1, (1 << 11) - 1] {
                for z in [-(1 << 25), -1, 0, 1, (1 << 25) - 1] {
                    let pos = Position::new(x, y as i16, z);
                    assert_eq!(Position::unpack(pos.pack()), pos);
                }
            }
        }
    }

    #[test]
    fn string_roundtrip() {
        let s = "Hello, world!".to_string();
        let mut buf = Vec::new();
        s.encode(&mut buf).unwrap();
        let decoded = String::decode(&mut Cursor::new(&buf)).unwrap();
        assert_eq!(decoded, s);
    }

    #[test]
    fn uuid_roundtrip() {
        let uuid = Uuid(0x0123_4567_89ab_cdef_fedc_ba98_7654_3210);
        let mut buf = Vec::new();
        uuid.encode(&mut buf).unwrap();
        let decoded = Uuid::decode(&mut Cursor::new(&buf)).unwrap();
        assert_eq!(decoded, uuid);
    }

    #[test]
    fn angle_to_degrees() {
        assert_eq!(Angle(0).to_degrees(), 0.0);
        assert_eq!(Angle(128).to_degrees(), 180.0);
    }

    #[test]
    fn item_stack_slot_roundtrip() {
        let slot = Some(ItemStack {
            item_id: VarInt(42),
            count: 5,
            nbt: Nbt(vec![0x00]),
        });
        let mut buf = Vec::new();
        slot.encode(&mut buf).unwrap();
        let decoded = Option::<ItemStack>::decode(&mut Cursor::new(&buf)).unwrap();
        assert_eq!(decoded, slot);

        let empty: Option<ItemStack> = None;
        let mut buf = Vec::new();
        empty.encode(&mut buf).unwrap();
        let decoded = Option::<ItemStack>::decode(&mut Cursor::new(&buf)).unwrap();
        assert_eq!(decoded, None);
    }
}
