pub mod base;
pub mod creator;
pub mod date;
pub mod field;
pub mod kind;

pub use base::Record;
pub use creator::{Creator, CreatorRole};
pub use date::PartialDate;
pub use field::RecordField;
pub use kind::RecordKind;
