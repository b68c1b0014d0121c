//! Backward pass: recover one optimal plan from completed tables.

use tracing::trace;

use super::tables::{unit_cost, DpTables};
use crate::types::{InvestmentOption, Plan};

/// Walks the choice table down from the top capacity.
///
/// Stops at capacity zero or at the first capacity where no option
/// improved on zero; the value there is zero, so the plan's return
/// equals the top table value.
pub(crate) fn trace_plan(tables: &DpTables, options: &[InvestmentOption]) -> Plan {
    let mut plan = Plan::new();
    let mut capacity = tables.capacity();

    while capacity > 0 {
        let Some(index) = tables.choice_at(capacity) else {
            break;
        };
        let cost = unit_cost(&options[index]);
        // Validation guarantees chosen options cost at least 1.
        debug_assert!(cost > 0 && cost <= capacity);

        plan.increment(index);
        trace!(capacity, index, cost, "traceback step");
        capacity -= cost;
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_option_repeated() {
        let options = vec![InvestmentOption::new("A", 2, 3)];
        let tables = DpTables::build(&options, 6).unwrap();
        let plan = trace_plan(&tables, &options);

        assert_eq!(plan.count(0), 3);
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn test_mixed_plan() {
        let options = vec![
            InvestmentOption::new("A", 3, 4),
            InvestmentOption::new("B", 4, 5),
        ];
        let tables = DpTables::build(&options, 7).unwrap();
        let plan = trace_plan(&tables, &options);

        assert_eq!(plan.count(0), 1);
        assert_eq!(plan.count(1), 1);
    }

    #[test]
    fn test_stops_where_nothing_fits() {
        // Capacity 5: one unit of A (cost 4), then capacity 1 has no choice.
        let options = vec![InvestmentOption::new("A", 4, 2)];
        let tables = DpTables::build(&options, 5).unwrap();
        let plan = trace_plan(&tables, &options);

        assert_eq!(plan.count(0), 1);
        assert_eq!(plan.total_return(&options), tables.value_at(5));
    }

    #[test]
    fn test_empty_when_nothing_fits() {
        let options = vec![InvestmentOption::new("A", 5, 1)];
        let tables = DpTables::build(&options, 4).unwrap();
        assert!(trace_plan(&tables, &options).is_empty());
    }
}
