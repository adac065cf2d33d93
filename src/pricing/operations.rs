//! Diff computed net amounts against current line prices.

use std::collections::HashMap;

use crate::core::{CartLine, CartOperation};

/// Line id → computed net amount, built once per run.
pub type NetAmountByLine = HashMap<String, String>;

/// Emit an `updateLinePrice` operation for every line whose computed net
/// amount differs from its current amount.
///
/// Lines are visited in cart order. A line is skipped when it has no entry in
/// `net_amount_by_line`, lacks a current amount or currency code, or its
/// current amount already equals the net amount (exact string comparison,
/// no numeric normalization). The currency code is carried over unchanged.
pub fn build_operations(
    lines: &[CartLine],
    net_amount_by_line: &NetAmountByLine,
) -> Vec<CartOperation> {
    let mut operations = Vec::new();

    for line in lines {
        let Some(target) = net_amount_by_line.get(&line.id) else {
            continue;
        };

        let (Some(current), Some(currency_code)) = (line.amount(), line.currency_code()) else {
            tracing::trace!(line_id = %line.id, "line has no current price, skipping");
            continue;
        };

        if current == target {
            tracing::trace!(line_id = %line.id, amount = %current, "line already at net price");
            continue;
        }

        operations.push(CartOperation::update_line_price(
            line.id.clone(),
            target.clone(),
            currency_code,
        ));
    }

    operations
}
