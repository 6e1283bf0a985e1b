//! Audit trail for webhook access decisions.
//!
//! The guard reports every anomaly (verification disabled in production,
//! missing header, wrong token) as an [`AuditRecord`] through an
//! [`AuditSink`]. Production wiring uses [`TracingAuditSink`]; tests inject
//! [`MemoryAuditSink`] and assert on the recorded values.
//!
//! Recording is infallible from the caller's point of view: a sink must never
//! prevent the guard from issuing its response.

use serde::Serialize;
use std::fmt;
use std::net::IpAddr;
use std::sync::Mutex;
use tracing::warn;

/// What the guard observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEventKind {
    /// No token configured while running in production.
    VerificationDisabled,
    /// Token configured but the request carried no token header.
    MissingAccessToken,
    /// Token header present but not equal to the configured token.
    InvalidAccessToken,
}

impl AuditEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VerificationDisabled => "verification_disabled",
            Self::MissingAccessToken => "missing_access_token",
            Self::InvalidAccessToken => "invalid_access_token",
        }
    }

    /// Fixed log message for this kind.
    pub fn message(&self) -> &'static str {
        match self {
            Self::VerificationDisabled => {
                "Asaas webhook signature verification is disabled. \
                 Set ASAAS_WEBHOOK_TOKEN in production."
            }
            Self::MissingAccessToken => "Webhook received without access token header.",
            Self::InvalidAccessToken => "Webhook signature verification failed",
        }
    }
}

impl fmt::Display for AuditEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request metadata attached to an audit record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditContext {
    pub ip: Option<IpAddr>,
    pub user_agent: Option<String>,
}

impl AuditContext {
    fn ip_or_unknown(&self) -> String {
        self.ip
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// A single warning-level audit entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditRecord {
    pub kind: AuditEventKind,
    pub context: Option<AuditContext>,
}

impl AuditRecord {
    pub fn new(kind: AuditEventKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    pub fn with_context(kind: AuditEventKind, context: AuditContext) -> Self {
        Self {
            kind,
            context: Some(context),
        }
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

/// Destination for audit records.
pub trait AuditSink: Send + Sync {
    /// Record a warning. Must not panic and must not block for long.
    fn warn(&self, record: AuditRecord);
}

/// Emits audit records as `tracing` warnings with structured fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn warn(&self, record: AuditRecord) {
        match &record.context {
            Some(context) => warn!(
                audit = record.kind.as_str(),
                ip = %context.ip_or_unknown(),
                user_agent = context.user_agent.as_deref().unwrap_or(""),
                "{}",
                record.message()
            ),
            None => warn!(audit = record.kind.as_str(), "{}", record.message()),
        }
    }
}

/// Keeps audit records in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    records: Mutex<Vec<AuditRecord>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditSink for MemoryAuditSink {
    fn warn(&self, record: AuditRecord) {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(record);
    }
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
