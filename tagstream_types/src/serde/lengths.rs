use derive_more::{Add, AddAssign, Deref, From, Into};

#[derive(Deref, From, Into, Add, AddAssign, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct WriteLen(usize);
impl WriteLen {
    pub fn new_manual(i: usize) -> Self {
        Self(i)
    }
}

#[derive(Deref, From, Into, Add, AddAssign, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct ReadLen(usize);
impl ReadLen {
    pub fn new_manual(i: usize) -> Self {
        Self(i)
    }
}
