// Standard library
use std::error::Error;
use std::io;

// Current module imports
use super::errors::ResolveFailure;
use super::types::Outage;

/// Decides whether an error means the family is down.
///
/// Walks the `source()` chain from the outermost error and returns the first
/// connectivity condition found, or `None` if the error is unexpected.
pub fn classify(error: &(dyn Error + 'static)) -> Option<Outage> {
    let mut current: Option<&(dyn Error + 'static)> = Some(error);

    while let Some(err) = current {
        if let Some(e) = err.downcast_ref::<reqwest::Error>() {
            if e.is_timeout() {
                return Some(Outage::TimedOut);
            }
        }

        if err.downcast_ref::<ResolveFailure>().is_some() {
            return Some(Outage::NameResolution);
        }

        if let Some(e) = err.downcast_ref::<io::Error>() {
            if let Some(outage) = outage_for_kind(e.kind()) {
                return Some(outage);
            }
        }

        current = err.source();
    }

    None
}

fn outage_for_kind(kind: io::ErrorKind) -> Option<Outage> {
    match kind {
        io::ErrorKind::ConnectionRefused => Some(Outage::ConnectionRefused),
        io::ErrorKind::HostUnreachable => Some(Outage::HostUnreachable),
        io::ErrorKind::NetworkUnreachable => Some(Outage::NetworkUnreachable),
        io::ErrorKind::TimedOut => Some(Outage::TimedOut),
        _ => None,
    }
}
