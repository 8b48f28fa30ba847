use num_derive::{FromPrimitive, ToPrimitive};
use std::io::{Read, Write};
use tagstream_types::io_utils;
use tagstream_types::serde::varint::{UvarintSer, ZigzagSer};
use tagstream_types::serde::{Dtm, Error, ReadLen, Result, Serializer, WriteLen};

#[repr(u32)]
#[derive(PartialEq, Eq, Clone, Copy, FromPrimitive, ToPrimitive, Debug)]
pub enum AppDtm {
    Foo = 1,
    Bar = 2,
    /// Multi-byte on the wire.
    Baz = 1000,
}
impl AppDtm {
    pub fn dtm(self) -> Dtm {
        Dtm::new(self as u32)
    }
}

/// Length-prefixed UTF-8.
#[derive(Clone, Copy)]
pub struct StrSer;
impl Serializer<String> for StrSer {
    fn ser<W: Write>(&self, s: &String, w: &mut W) -> Result<WriteLen> {
        let mut w_len = UvarintSer.ser(&(s.len() as u64), w)?;
        w.write_all(s.as_bytes())
            .map_err(|e| Error::io(*w_len, e))?;
        w_len += WriteLen::new_manual(s.len());
        Ok(w_len)
    }
    fn deser<R: Read>(&self, r: &mut R) -> Result<(ReadLen, String)> {
        let (mut r_len, body_len) = UvarintSer.deser(r)?;
        let mut buf = vec![];
        let delta_r_len = Read::take(&mut *r, body_len)
            .read_to_end(&mut buf)
            .map_err(|e| Error::io(*r_len, e))?;
        r_len += ReadLen::new_manual(delta_r_len);
        if (delta_r_len as u64) < body_len {
            return Err(Error::io(
                *r_len,
                std::io::ErrorKind::UnexpectedEof.into(),
            ));
        }
        let s = String::from_utf8(buf).map_err(|e| Error::payload(*r_len, e))?;
        Ok((r_len, s))
    }
    fn size(&self, s: &String) -> usize {
        UvarintSer.size(&(s.len() as u64)) + s.len()
    }
    fn skip<R: Read>(&self, r: &mut R) -> Result<ReadLen> {
        let (r_len, body_len) = UvarintSer.deser(r)?;
        let delta_r_len = io_utils::skip_exact(r, body_len as usize).map_err(|e| e.offset(*r_len))?;
        Ok(r_len + ReadLen::new_manual(delta_r_len))
    }
}

#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Foo {
    pub num: i64,
    pub str: String,
}

#[derive(Clone, Copy)]
pub struct FooSer;
impl Serializer<Foo> for FooSer {
    fn ser<W: Write>(&self, foo: &Foo, w: &mut W) -> Result<WriteLen> {
        let w_len = ZigzagSer.ser(&foo.num, w)?;
        let delta_w_len = StrSer.ser(&foo.str, w).map_err(|e| e.offset(*w_len))?;
        Ok(w_len + delta_w_len)
    }
    fn deser<R: Read>(&self, r: &mut R) -> Result<(ReadLen, Foo)> {
        let (r_len, num) = ZigzagSer.deser(r)?;
        let (delta_r_len, str) = StrSer.deser(r).map_err(|e| e.offset(*r_len))?;
        Ok((r_len + delta_r_len, Foo { num, str }))
    }
    fn size(&self, foo: &Foo) -> usize {
        ZigzagSer.size(&foo.num) + StrSer.size(&foo.str)
    }
    fn skip<R: Read>(&self, r: &mut R) -> Result<ReadLen> {
        let r_len = ZigzagSer.skip(r)?;
        let delta_r_len = StrSer.skip(r).map_err(|e| e.offset(*r_len))?;
        Ok(r_len + delta_r_len)
    }
}

/// Count-prefixed list of ids.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Bar {
    pub ids: Vec<u64>,
}

#[derive(Clone, Copy)]
pub struct BarSer;
impl Serializer<Bar> for BarSer {
    fn ser<W: Write>(&self, bar: &Bar, w: &mut W) -> Result<WriteLen> {
        let mut w_len = UvarintSer.ser(&(bar.ids.len() as u64), w)?;
        for id in bar.ids.iter() {
            let delta_w_len = UvarintSer.ser(id, w).map_err(|e| e.offset(*w_len))?;
            w_len += delta_w_len;
        }
        Ok(w_len)
    }
    fn deser<R: Read>(&self, r: &mut R) -> Result<(ReadLen, Bar)> {
        let (mut r_len, ids_ct) = UvarintSer.deser(r)?;
        let mut ids = vec![];
        for _ in 0..ids_ct {
            let (delta_r_len, id) = UvarintSer.deser(r).map_err(|e| e.offset(*r_len))?;
            r_len += delta_r_len;
            ids.push(id);
        }
        Ok((r_len, Bar { ids }))
    }
    fn size(&self, bar: &Bar) -> usize {
        let ids_len: usize = bar.ids.iter().map(|id| UvarintSer.size(id)).sum();
        UvarintSer.size(&(bar.ids.len() as u64)) + ids_len
    }
    fn skip<R: Read>(&self, r: &mut R) -> Result<ReadLen> {
        let (mut r_len, ids_ct) = UvarintSer.deser(r)?;
        for _ in 0..ids_ct {
            let delta_r_len = UvarintSer.skip(r).map_err(|e| e.offset(*r_len))?;
            r_len += delta_r_len;
        }
        Ok(r_len)
    }
}
