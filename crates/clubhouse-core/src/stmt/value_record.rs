use super::Value;
use crate::{Error, Result};

use std::ops;

/// One row, with values in table column order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValueRecord {
    fields: Vec<Value>,
}

impl ValueRecord {
    pub fn from_vec(fields: Vec<Value>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.fields.iter()
    }

    /// Takes the value at `index`, leaving `Null` behind.
    pub fn take(&mut self, index: usize) -> Result<Value> {
        let len = self.fields.len();
        self.fields
            .get_mut(index)
            .map(std::mem::take)
            .ok_or_else(|| Error::from_args(format_args!("no column at index {index}; width={len}")))
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.fields
    }
}

impl ops::Index<usize> for ValueRecord {
    type Output = Value;

    fn index(&self, index: usize) -> &Self::Output {
        &self.fields[index]
    }
}

impl From<Vec<Value>> for ValueRecord {
    fn from(fields: Vec<Value>) -> Self {
        Self::from_vec(fields)
    }
}

impl FromIterator<Value> for ValueRecord {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
