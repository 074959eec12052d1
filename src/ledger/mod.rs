//! Budget domain models, persistence-friendly types, and calendar helpers.

pub mod clock;
pub mod envelope;
pub mod id;
pub mod period;
pub mod settings;
pub mod store;
pub mod transaction;

pub use clock::{Clock, FixedClock, SystemClock};
pub use envelope::Envelope;
pub use id::RecordId;
pub use period::{
    is_in_month, month_end, month_start, months_between_inclusive, Period, PeriodParseError,
};
pub use settings::{Rollover, Settings};
pub use store::BudgetStore;
pub use transaction::{Transaction, TransactionKind};
