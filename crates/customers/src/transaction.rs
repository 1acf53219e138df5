//! `Transaction` value object: a payment between two parties.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderdesk_core::{EntityId, ValueObject};

/// Immutable record of money moving from one party to another.
///
/// Amounts are in the smallest currency unit (e.g. cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    amount: i64,
    from: EntityId,
    to: EntityId,
    created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(amount: i64, from: EntityId, to: EntityId, created_at: DateTime<Utc>) -> Self {
        Self {
            amount,
            from,
            to,
            created_at,
        }
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn from(&self) -> EntityId {
        self.from
    }

    pub fn to(&self) -> EntityId {
        self.to
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl ValueObject for Transaction {}
