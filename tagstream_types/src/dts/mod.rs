//! Data Type Serializer: a [`Dtm`] followed by a payload.
//!
//! A [`Dts`] binds one expected [`Dtm`] to one payload [`Serializer`].
//! It is immutable and holds no stream, so one instance may be shared by any
//! number of threads, each working on its own stream.
//!
//! To carry several payload types in one stream, read the DTM alone with
//! [`DtmSer`], then hand the stream to the matching `Dts`'s
//! [`deser_data()`](Dts::deser_data) or [`skip_data()`](Dts::skip_data).

use crate::serde::{Dtm, DtmSer, Error, ReadLen, Result, Serializer, WriteLen};
use std::io::{Read, Write};
use std::marker::PhantomData;


pub struct Dts<T, S> {
    dtm: Dtm,
    dtm_size: usize,
    ser: S,
    _phant: PhantomData<fn() -> T>,
}

impl<T, S> Dts<T, S>
where
    S: Serializer<T>,
{
    pub fn new(dtm: Dtm, ser: S) -> Self {
        Self {
            dtm,
            dtm_size: DtmSer.size(&dtm),
            ser,
            _phant: PhantomData,
        }
    }

    pub fn dtm(&self) -> Dtm {
        self.dtm
    }

    /// Deserializes only the payload. The caller must have consumed the DTM already.
    pub fn deser_data<R: Read>(&self, r: &mut R) -> Result<(ReadLen, T)> {
        self.ser.deser(r)
    }

    /// Skips only the payload. The caller must have consumed the DTM already.
    pub fn skip_data<R: Read>(&self, r: &mut R) -> Result<ReadLen> {
        self.ser.skip(r)
    }

    /// Reads the DTM. Fails with [`Error::WrongDtm`] without touching the payload
    /// if it differs from ours.
    fn deser_own_dtm<R: Read>(&self, r: &mut R) -> Result<ReadLen> {
        let (r_len, dtm) = DtmSer.deser(r)?;
        if dtm != self.dtm {
            tracing::trace!(expected = %self.dtm, actual = %dtm, "wrong dtm");
            return Err(Error::WrongDtm {
                expected: self.dtm,
                actual: dtm,
                len: *r_len,
            });
        }
        Ok(r_len)
    }
}

impl<T, S> Serializer<T> for Dts<T, S>
where
    S: Serializer<T>,
{
    fn ser<W: Write>(&self, t: &T, w: &mut W) -> Result<WriteLen> {
        let w_len = DtmSer.ser(&self.dtm, w)?;
        let delta_w_len = self.ser.ser(t, w).map_err(|e| e.offset(*w_len))?;
        Ok(w_len + delta_w_len)
    }

    fn deser<R: Read>(&self, r: &mut R) -> Result<(ReadLen, T)> {
        let r_len = self.deser_own_dtm(r)?;
        let (delta_r_len, t) = self.deser_data(r).map_err(|e| e.offset(*r_len))?;
        Ok((r_len + delta_r_len, t))
    }

    fn size(&self, t: &T) -> usize {
        self.dtm_size + self.ser.size(t)
    }

    fn skip<R: Read>(&self, r: &mut R) -> Result<ReadLen> {
        let r_len = self.deser_own_dtm(r)?;
        let delta_r_len = self.skip_data(r).map_err(|e| e.offset(*r_len))?;
        Ok(r_len + delta_r_len)
    }
}

impl<T, S> Clone for Dts<T, S>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            dtm: self.dtm,
            dtm_size: self.dtm_size,
            ser: self.ser.clone(),
            _phant: PhantomData,
        }
    }
}
