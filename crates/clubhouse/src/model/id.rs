use clubhouse_core::stmt::Value;

use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

/// Primary key of a row of `M`.
pub struct Id<M> {
    value: i64,
    _p: PhantomData<fn() -> M>,
}

impl<M> Id<M> {
    pub fn from_raw(value: i64) -> Self {
        Self {
            value,
            _p: PhantomData,
        }
    }

    pub fn to_raw(self) -> i64 {
        self.value
    }

    pub(crate) fn load(value: Value) -> crate::Result<Self> {
        Ok(Self::from_raw(value.to_i64()?))
    }
}

impl<M> fmt::Display for Id<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<M> fmt::Debug for Id<M> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(fmt)
    }
}

impl<M> Clone for Id<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Id<M> {}

impl<M> PartialEq for Id<M> {
    fn eq(&self, rhs: &Self) -> bool {
        self.value == rhs.value
    }
}

impl<M> Eq for Id<M> {}

impl<M> Hash for Id<M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<M> From<Id<M>> for Value {
    fn from(value: Id<M>) -> Self {
        Self::I64(value.value)
    }
}

impl<M> From<&Id<M>> for Value {
    fn from(src: &Id<M>) -> Self {
        Self::I64(src.value)
    }
}
