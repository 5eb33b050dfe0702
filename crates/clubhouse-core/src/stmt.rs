mod filter;
pub use filter::{BinaryOp, Condition, Filter};

mod order_by;
pub use order_by::{Direction, OrderBy};

mod value;
pub use value::Value;

mod value_record;
pub use value_record::ValueRecord;
