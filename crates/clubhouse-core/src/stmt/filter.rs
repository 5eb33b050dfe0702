use super::Value;

/// A conjunction of column comparisons. An empty filter matches every row.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filter {
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub column: &'static str,
    pub op: BinaryOp,
    pub value: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Eq,
    Ge,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, column: &'static str, value: impl Into<Value>) -> Self {
        self.push(column, BinaryOp::Eq, value.into());
        self
    }

    pub fn ge(mut self, column: &'static str, value: impl Into<Value>) -> Self {
        self.push(column, BinaryOp::Ge, value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    fn push(&mut self, column: &'static str, op: BinaryOp, value: Value) {
        self.conditions.push(Condition { column, op, value });
    }
}

impl BinaryOp {
    pub fn as_sql(self) -> &'static str {
        match self {
            BinaryOp::Eq => "=",
            BinaryOp::Ge => ">=",
        }
    }
}
