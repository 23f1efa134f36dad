// Project imports
use crate::checker::{FamilyReport, Snapshot, Status};
use crate::utility::ip_fetcher::AddressFamily;

fn status_text(status: Status) -> &'static str {
    match status {
        Status::Ok => "ok",
        Status::Warning => "warning",
        Status::Error => "error",
    }
}

fn address_row(family: AddressFamily, report: &FamilyReport) -> String {
    // Stored addresses are parsed IPs, so they need no escaping.
    let address: String = report
        .address
        .clone()
        .unwrap_or_else(|| format!("{} Address Not Found", family));
    let status: &str = status_text(report.status);

    format!(
        r#"    <section class="family {status}">
      <h2>{family}</h2>
      <p class="address">{address}</p>
      <p class="status">Status: {status}</p>
    </section>
"#
    )
}

/// Renders the index page for a snapshot.
pub fn render_index(snapshot: &Snapshot, refresh_secs: u64) -> String {
    let families: String = AddressFamily::ALL
        .iter()
        .map(|family| address_row(*family, snapshot.family(*family)))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta http-equiv="refresh" content="{refresh_secs}">
    <title>Public IP Addresses</title>
    <style>
      body {{ font-family: sans-serif; margin: 2rem; }}
      .family {{ margin-bottom: 1.5rem; }}
      .address {{ font-family: monospace; font-size: 1.5rem; }}
      .ok .status {{ color: #2e7d32; }}
      .warning .status {{ color: #f9a825; }}
      .error .status {{ color: #c62828; }}
    </style>
  </head>
  <body>
{families}    <footer>Refreshes every {refresh_secs} seconds.</footer>
  </body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_addresses_show_placeholder() {
        let html = render_index(&Snapshot::default(), 15);
        assert!(html.contains("IPv4 Address Not Found"));
        assert!(html.contains("IPv6 Address Not Found"));
        assert!(html.contains(r#"<meta http-equiv="refresh" content="15">"#));
        assert!(html.contains("Status: warning"));
    }

    #[test]
    fn known_addresses_are_shown_with_status() {
        let mut snapshot = Snapshot::default();
        snapshot.v4.record_success("203.0.113.5".into());
        snapshot.v6.record_success("2001:db8::1".into());
        for _ in 0..3 {
            snapshot.v6.record_failure();
        }

        let html = render_index(&snapshot, 60);
        assert!(html.contains(r#"<p class="address">203.0.113.5</p>"#));
        assert!(html.contains(r#"<p class="address">2001:db8::1</p>"#));
        assert!(html.contains(r#"<section class="family ok">"#));
        assert!(html.contains(r#"<section class="family error">"#));
        assert!(!html.contains("Not Found"));
    }
}
