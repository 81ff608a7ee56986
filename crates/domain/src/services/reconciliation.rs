//! Inventory reconciliation over the borrow/return log.
//!
//! The log never stores a running balance. Each row is a signed movement, so
//! the current state is the sum of movements per holder and item:
//! 1. `unreturned` nets movements per (person, student id, item)
//! 2. `outstanding_by_item` regroups the positive balances per item

use std::collections::BTreeMap;

use crate::models::{ItemOutstanding, LogEntry, OutstandingReport, PersonItemBalance};

/// Nets all movements per (person_name, person_id, item_name) and keeps the
/// groups still holding something.
///
/// Group keys compare exactly; names were trimmed at intake and are not
/// case-folded here. Output is ordered by group key. Sums saturate at the
/// `i64` bounds.
pub fn unreturned(entries: &[LogEntry]) -> Vec<PersonItemBalance> {
    let mut balances: BTreeMap<(&str, &str, &str), i64> = BTreeMap::new();

    for entry in entries {
        let balance = balances
            .entry((
                entry.person_name.as_str(),
                entry.person_id.as_str(),
                entry.item_name.as_str(),
            ))
            .or_default();
        *balance = balance.saturating_add(entry.signed_quantity());
    }

    balances
        .into_iter()
        .filter(|(_, balance)| *balance > 0)
        .map(|((person_name, person_id, item_name), balance)| PersonItemBalance {
            person_name: person_name.to_string(),
            person_id: person_id.to_string(),
            item_name: item_name.to_string(),
            balance,
        })
        .collect()
}

/// Sums unreturned balances per item, largest first, ties by item name.
pub fn outstanding_by_item(balances: &[PersonItemBalance]) -> OutstandingReport {
    let mut totals: BTreeMap<&str, i64> = BTreeMap::new();
    for balance in balances.iter().filter(|b| b.balance > 0) {
        let total = totals.entry(balance.item_name.as_str()).or_default();
        *total = total.saturating_add(balance.balance);
    }

    if totals.is_empty() {
        return OutstandingReport::nothing_outstanding();
    }

    let mut items: Vec<ItemOutstanding> = totals
        .into_iter()
        .map(|(item_name, outstanding)| ItemOutstanding {
            item_name: item_name.to_string(),
            outstanding,
        })
        .collect();
    // BTreeMap already yields names ascending; the stable sort keeps that for ties.
    items.sort_by(|a, b| b.outstanding.cmp(&a.outstanding));

    OutstandingReport {
        items,
        nothing_outstanding: false,
    }
}
