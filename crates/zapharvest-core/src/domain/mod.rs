pub mod contact;
pub mod ids;
pub mod number;

pub use contact::{Contact, NewContact};
pub use ids::ContactId;
pub use number::{normalize_number, strip_non_digits, NormalizedNumber};
