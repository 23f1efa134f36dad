// Project imports
use crate::utility::ip_fetcher::AddressFamily;

// Current module imports
use super::constants::ERROR_THRESHOLD;
use super::types::{FamilyReport, Snapshot, Status};

impl Default for FamilyReport {
    fn default() -> Self {
        Self {
            address: None,
            status: Status::Warning,
            consecutive_failures: 0,
        }
    }
}

impl FamilyReport {
    /// Records a successful fetch.
    ///
    /// Returns `true` if the address differs from the one previously stored.
    pub fn record_success(&mut self, address: String) -> bool {
        self.status = Status::Ok;
        self.consecutive_failures = 0;

        if self.address.as_deref() == Some(address.as_str()) {
            return false;
        }
        self.address = Some(address);
        true
    }

    /// Records a fetch that found the family down. The stored address is left alone.
    pub fn record_failure(&mut self) -> Status {
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);

        // Reaching the threshold escalates to Error
        self.status = if self.consecutive_failures >= ERROR_THRESHOLD {
            Status::Error
        } else {
            Status::Warning
        };
        self.status
    }
}

impl Snapshot {
    pub fn family(&self, family: AddressFamily) -> &FamilyReport {
        match family {
            AddressFamily::V4 => &self.v4,
            AddressFamily::V6 => &self.v6,
        }
    }

    pub fn family_mut(&mut self, family: AddressFamily) -> &mut FamilyReport {
        match family {
            AddressFamily::V4 => &mut self.v4,
            AddressFamily::V6 => &mut self.v6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unconfirmed() {
        let report = FamilyReport::default();
        assert_eq!(report.address, None);
        assert_eq!(report.status, Status::Warning);
        assert_eq!(report.consecutive_failures, 0);
    }

    #[test]
    fn failures_escalate_at_threshold() {
        let mut report = FamilyReport::default();
        let statuses: Vec<Status> = (0..5).map(|_| report.record_failure()).collect();
        assert_eq!(
            statuses,
            vec![
                Status::Warning,
                Status::Warning,
                Status::Error,
                Status::Error,
                Status::Error
            ]
        );
        assert_eq!(report.consecutive_failures, 5);
    }

    #[test]
    fn success_resets_immediately() {
        let mut report = FamilyReport::default();
        for _ in 0..4 {
            report.record_failure();
        }
        assert!(report.record_success("198.51.100.7".into()));
        assert_eq!(report.status, Status::Ok);
        assert_eq!(report.consecutive_failures, 0);
    }

    #[test]
    fn failures_keep_last_address() {
        let mut report = FamilyReport::default();
        report.record_success("198.51.100.7".into());
        report.record_failure();
        report.record_failure();
        report.record_failure();
        assert_eq!(report.address.as_deref(), Some("198.51.100.7"));
        assert_eq!(report.status, Status::Error);
    }

    #[test]
    fn same_address_is_not_a_change() {
        let mut report = FamilyReport::default();
        assert!(report.record_success("2001:db8::1".into()));
        assert!(!report.record_success("2001:db8::1".into()));
        assert!(report.record_success("2001:db8::2".into()));
        assert_eq!(report.address.as_deref(), Some("2001:db8::2"));
    }
}
