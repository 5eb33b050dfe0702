use std::borrow::Cow;

/// Tracks nesting depth and generates SAVEPOINT/COMMIT/ROLLBACK SQL.
/// Drivers call `begin()` after their dialect-specific outer BEGIN, then
/// delegate `savepoint`, `commit`, and `rollback` here.
#[derive(Debug, Default)]
pub struct NestingTracker {
    depth: u32,
}

impl NestingTracker {
    pub fn new() -> Self {
        Self { depth: 0 }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Increment depth after the outer BEGIN.
    pub fn begin(&mut self) {
        self.depth += 1;
    }

    /// Returns `SAVEPOINT sp_N` and increments depth.
    pub fn savepoint(&mut self) -> Cow<'static, str> {
        let sql = Cow::Owned(format!("SAVEPOINT sp_{}", self.depth));
        self.depth += 1;
        sql
    }

    /// Returns `COMMIT` or `RELEASE SAVEPOINT sp_N` and decrements depth.
    /// `None` when no transaction is open.
    pub fn commit(&mut self) -> Option<Cow<'static, str>> {
        self.depth = self.depth.checked_sub(1)?;
        Some(if self.depth == 0 {
            Cow::Borrowed("COMMIT")
        } else {
            Cow::Owned(format!("RELEASE SAVEPOINT sp_{}", self.depth))
        })
    }

    /// Returns `ROLLBACK` or `ROLLBACK TO SAVEPOINT sp_N` and decrements depth.
    ///
    /// Rolling back to a savepoint leaves it on the stack, so it is also
    /// released to keep the savepoint stack in step with `depth`.
    pub fn rollback(&mut self) -> Option<Cow<'static, str>> {
        self.depth = self.depth.checked_sub(1)?;
        Some(if self.depth == 0 {
            Cow::Borrowed("ROLLBACK")
        } else {
            Cow::Owned(format!(
                "ROLLBACK TO SAVEPOINT sp_{0}; RELEASE SAVEPOINT sp_{0}",
                self.depth
            ))
        })
    }
}
