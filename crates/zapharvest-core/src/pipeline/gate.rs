use crate::domain::NormalizedNumber;
use crate::pipeline::ContactStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Accept,
    Duplicate,
}

pub fn check_number<S>(store: &S, number: &NormalizedNumber) -> Result<GateDecision, S::Error>
where
    S: ContactStore + ?Sized,
{
    if store.exists_by_number(number)? {
        Ok(GateDecision::Duplicate)
    } else {
        Ok(GateDecision::Accept)
    }
}
