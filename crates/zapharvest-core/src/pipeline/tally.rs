use crate::pipeline::save::SaveReport;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionTally {
    total: usize,
}

impl SessionTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, report: &SaveReport) -> usize {
        self.total += report.saved;
        self.total
    }

    pub fn total(&self) -> usize {
        self.total
    }
}
