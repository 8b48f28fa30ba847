use crate::serde::{ReadLen, Result, WriteLen};
use std::io::{Read, Write};

/// The four operations that make a type `T` storable in a stream.
///
/// Implemented by a serializer object rather than by `T`, so that one type may
/// have several encodings and foreign types may be encoded.
///
/// On failure, implementations report the bytes they had already read or written
/// through [`Error::byte_count()`](crate::serde::Error::byte_count).
pub trait Serializer<T> {
    fn ser<W: Write>(&self, t: &T, w: &mut W) -> Result<WriteLen>;
    fn deser<R: Read>(&self, r: &mut R) -> Result<(ReadLen, T)>;
    /// The exact count of bytes `ser()` writes for `t`.
    fn size(&self, t: &T) -> usize;
    /// Advances `r` past one encoded `T`, consuming as many bytes as `deser()` would.
    fn skip<R: Read>(&self, r: &mut R) -> Result<ReadLen>;

    fn ser_solo(&self, t: &T) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.size(t));
        self.ser(t, &mut buf)?;
        Ok(buf)
    }
    fn deser_solo(&self, buf: &[u8]) -> Result<T> {
        let mut r = buf;
        let (_, t) = self.deser(&mut r)?;
        Ok(t)
    }
}

impl<T, S> Serializer<T> for &S
where
    S: Serializer<T> + ?Sized,
{
    fn ser<W: Write>(&self, t: &T, w: &mut W) -> Result<WriteLen> {
        (**self).ser(t, w)
    }
    fn deser<R: Read>(&self, r: &mut R) -> Result<(ReadLen, T)> {
        (**self).deser(r)
    }
    fn size(&self, t: &T) -> usize {
        (**self).size(t)
    }
    fn skip<R: Read>(&self, r: &mut R) -> Result<ReadLen> {
        (**self).skip(r)
    }
}
