//! Leave ledger mutations: the approval trigger and its rejection
//! counterpart.
//!
//! The ledger is charged strictly on approval. A pending request never
//! reserves balance and a rejected request never touches the ledger.
//! The year is an explicit parameter so the functions stay pure and
//! testable; callers derive it from the request's start date.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveBalance, LeaveRequest, LeaveStatus, LeaveType};

/// Ledger policy knobs.
///
/// The observed system behavior is a soft cap: approval charges the
/// ledger even when `used` ends up past `allocated` (the UI only
/// pre-checks remaining balance at submission time). The hard cap is
/// opt-in until product intent is confirmed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerPolicy {
    /// When set, approval fails instead of driving `used` past
    /// `allocated`.
    #[serde(default)]
    pub enforce_allocation_cap: bool,
}

/// Returned by a successful approval: the ledger position after the
/// charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerReceipt {
    /// Whole days charged by this approval.
    pub days_charged: u32,
    /// `used` after the charge.
    pub new_used: u32,
    /// `allocated - used` after the charge, clamped at zero.
    pub new_remaining: u32,
}

/// Approves a pending leave request and charges the ledger.
///
/// Atomic from the caller's perspective: the status flip and the ledger
/// increment happen together or not at all. Steps:
///
/// 1. Fail with [`EngineError::NotPending`] unless the request is
///    pending — approval and rejection are terminal, there is no
///    re-approval.
/// 2. Compute the charge: whole days inclusive of both endpoints,
///    minimum 1.
/// 3. Locate the balance row for (employee, leave type, `year`),
///    creating it lazily with `allocated` seeded from the leave type's
///    default and `used = 0`.
/// 4. Increment `used`. Under [`LedgerPolicy::enforce_allocation_cap`]
///    the increment fails with [`EngineError::BalanceExhausted`] rather
///    than exceeding `allocated`; otherwise the soft cap applies and
///    `used` may exceed `allocated` (remaining reports 0, never
///    negative).
///
/// The caller must pass the request's actual [`LeaveType`]; resolving
/// it is part of failing closed: an approval whose ledger row cannot
/// be located or created must not happen at all.
pub fn approve(
    request: &mut LeaveRequest,
    balances: &mut Vec<LeaveBalance>,
    leave_type: &LeaveType,
    year: i32,
    comment: &str,
    policy: LedgerPolicy,
) -> EngineResult<LedgerReceipt> {
    if request.status != LeaveStatus::Pending {
        return Err(EngineError::NotPending {
            request_id: request.id,
            status: request.status.to_string(),
        });
    }

    let days = request.requested_days();

    let position = balances.iter().position(|b| {
        b.employee_id == request.employee_id
            && b.leave_type_id == request.leave_type_id
            && b.year == year
    });
    let balance = match position {
        Some(i) => &mut balances[i],
        None => {
            balances.push(LeaveBalance {
                employee_id: request.employee_id.clone(),
                leave_type_id: request.leave_type_id.clone(),
                year,
                allocated: leave_type.default_balance,
                used: 0,
            });
            balances
                .last_mut()
                .expect("balance row was just pushed")
        }
    };

    if policy.enforce_allocation_cap && balance.used + days > balance.allocated {
        return Err(EngineError::BalanceExhausted {
            employee_id: request.employee_id.clone(),
            requested: days,
            remaining: balance.remaining(),
        });
    }

    balance.used += days;
    if balance.used > balance.allocated {
        warn!(
            employee_id = %request.employee_id,
            leave_type_id = %request.leave_type_id,
            year,
            used = balance.used,
            allocated = balance.allocated,
            "approved leave exceeds allocation (soft cap)"
        );
    }

    request.status = LeaveStatus::Approved;
    request.decision_comment = Some(comment.to_string());

    info!(
        request_id = request.id,
        employee_id = %request.employee_id,
        days_charged = days,
        new_used = balance.used,
        "leave request approved"
    );

    Ok(LedgerReceipt {
        days_charged: days,
        new_used: balance.used,
        new_remaining: balance.remaining(),
    })
}

/// Rejects a pending leave request. Stores the reviewer's comment and
/// never touches the ledger.
pub fn reject(request: &mut LeaveRequest, comment: &str) -> EngineResult<()> {
    if request.status != LeaveStatus::Pending {
        return Err(EngineError::NotPending {
            request_id: request.id,
            status: request.status.to_string(),
        });
    }

    request.status = LeaveStatus::Rejected;
    request.decision_comment = Some(comment.to_string());

    info!(request_id = request.id, employee_id = %request.employee_id, "leave request rejected");
    Ok(())
}
