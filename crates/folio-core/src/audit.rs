//! Creation and modification metadata for persisted entities.
//!
//! Entities embed an [`AuditFields`] value and expose it through [`Auditable`].
//! The data-access layer calls [`AuditInterceptor::on_insert`] /
//! [`AuditInterceptor::on_update`] explicitly at write time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::sync::Arc;

/// Who created / last modified an entity, and when.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFields {
    pub created_by: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
    pub last_modified_by: Option<String>,
    pub last_modified_date: Option<DateTime<Utc>>,
}

impl AuditFields {
    /// True until the entity has been stamped by an insert.
    #[must_use]
    pub const fn is_unsaved(&self) -> bool {
        self.created_date.is_none()
    }
}

/// Entities carrying [`AuditFields`].
pub trait Auditable {
    fn audit(&self) -> &AuditFields;
    fn audit_mut(&mut self) -> &mut AuditFields;
}

/// Supplies the principal recorded in `created_by` / `last_modified_by`.
pub trait AuditorProvider: Send + Sync + Debug {
    fn current_auditor(&self) -> Option<String>;
}

/// Always reports the same auditor.
#[derive(Debug, Clone)]
pub struct FixedAuditor(pub Option<String>);

impl AuditorProvider for FixedAuditor {
    fn current_auditor(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Source of timestamps for audit stamping.
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Stamps [`AuditFields`] on insert and update.
#[derive(Debug, Clone)]
pub struct AuditInterceptor {
    auditor: Arc<dyn AuditorProvider>,
    clock: Arc<dyn Clock>,
}

impl AuditInterceptor {
    /// Creates an interceptor from an auditor and a clock.
    #[must_use]
    pub fn new(auditor: Arc<dyn AuditorProvider>, clock: Arc<dyn Clock>) -> Self {
        Self { auditor, clock }
    }

    /// Interceptor recording `auditor` against the system clock.
    #[must_use]
    pub fn with_auditor(auditor: impl Into<String>) -> Self {
        Self::new(
            Arc::new(FixedAuditor(Some(auditor.into()))),
            Arc::new(SystemClock),
        )
    }

    /// Current instant according to the interceptor's clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Sets creation and modification fields to the same instant.
    pub fn on_insert<E: Auditable + ?Sized>(&self, entity: &mut E) {
        let now = self.clock.now();
        let auditor = self.auditor.current_auditor();
        let audit = entity.audit_mut();
        audit.created_date = Some(now);
        audit.created_by.clone_from(&auditor);
        audit.last_modified_date = Some(now);
        audit.last_modified_by = auditor;
    }

    /// Refreshes the modification fields; creation fields are never touched.
    pub fn on_update<E: Auditable + ?Sized>(&self, entity: &mut E) {
        let now = self.clock.now();
        let audit = entity.audit_mut();
        audit.last_modified_date = Some(now);
        audit.last_modified_by = self.auditor.current_auditor();
    }
}

impl Default for AuditInterceptor {
    fn default() -> Self {
        Self::new(Arc::new(FixedAuditor(None)), Arc::new(SystemClock))
    }
}
