use crate::serde::varint;
use crate::serde::{Error, ReadLen, Result, Serializer, WriteLen};
use derive_more::{Display, From, Into};
use num_traits::ToPrimitive;
use std::io::{Read, Write};

/// Data Type Metadata: identifies the type of the value that follows it in a stream.
///
/// Bounded to `u32` on the wire, regardless of the host's word size.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, From, Into, Display, Debug)]
pub struct Dtm(u32);

/// Max encoded length of a [`Dtm`].
pub const DTM_MAX_LEN: usize = varint::max_len(Dtm::BITS);

impl Dtm {
    pub const BITS: u32 = u32::BITS;
    pub const MAX: Dtm = Dtm(u32::MAX);

    pub const fn new(int: u32) -> Self {
        Self(int)
    }

    /// Accepts any primitive, including a C-like enum deriving `num_derive::ToPrimitive`.
    pub fn from_primitive<P: ToPrimitive>(p: P) -> Result<Self> {
        match p.to_u32() {
            Some(int) => Ok(Self(int)),
            None => Err(Error::InvalidDtm {
                value: p.to_i128().unwrap_or(i128::MAX),
            }),
        }
    }
}

macro_rules! impl_try_from_primitive {
    ($($prim:ty),*) => {
        $(
            impl TryFrom<$prim> for Dtm {
                type Error = Error;
                fn try_from(int: $prim) -> Result<Self> {
                    Self::from_primitive(int)
                }
            }
        )*
    };
}
impl_try_from_primitive!(i32, i64, u64, usize);

/// The tag codec. Writes a [`Dtm`] as an unsigned varint of at most [`DTM_MAX_LEN`] bytes.
#[derive(Clone, Copy, Default, Debug)]
pub struct DtmSer;
impl Serializer<Dtm> for DtmSer {
    fn ser<W: Write>(&self, dtm: &Dtm, w: &mut W) -> Result<WriteLen> {
        varint::ser_uvarint(u64::from(dtm.0), w)
    }
    /// Accepts non-canonical padding, e.g. `0x80 0x00` reads as DTM 0 in 2 bytes.
    /// The read length equals `size()` of the result only for canonical streams,
    /// which is all that `ser()` produces.
    fn deser<R: Read>(&self, r: &mut R) -> Result<(ReadLen, Dtm)> {
        let (r_len, int) = varint::deser_uvarint(r, Dtm::BITS)?;
        /* The width check in deser_uvarint() guarantees the int fits. */
        let int = u32::try_from(int).map_err(|_| Error::MalformedVarint {
            len: *r_len,
            max_len: DTM_MAX_LEN,
        })?;
        Ok((r_len, Dtm(int)))
    }
    fn size(&self, dtm: &Dtm) -> usize {
        varint::size_uvarint(u64::from(dtm.0))
    }
    fn skip<R: Read>(&self, r: &mut R) -> Result<ReadLen> {
        varint::skip_uvarint(r, Dtm::BITS)
    }
}
