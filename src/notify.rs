//! Best-effort desktop notifications
//!
//! Completion notifications are delegated to the external `notify-send`
//! utility. The call is fire-and-forget: a missing utility or a failed
//! spawn is logged and otherwise ignored.

use std::process::{Command, Stdio};

/// Send a desktop notification, ignoring any failure
pub fn send(summary: &str, body: &str) {
    let spawned = Command::new("notify-send")
        .arg(summary)
        .arg(body)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match spawned {
        Ok(mut child) => {
            if let Err(e) = child.wait() {
                debug!("notify-send did not complete: {}", e);
            }
        }
        Err(e) => {
            debug!("notify-send unavailable: {}", e);
        }
    }
}
