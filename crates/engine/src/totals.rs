use api_types::salary::SalaryEntry;

/// Fixed monthly allowances and deductions, applied exactly once per
/// aggregation regardless of how many entries the period holds.
///
/// Passed explicitly so policy values can change without touching the
/// calculation code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustments {
    pub petrol: f64,
    pub other: f64,
    pub ptax: f64,
}

impl Default for Adjustments {
    fn default() -> Self {
        Self {
            petrol: 500.0,
            other: 8335.0,
            ptax: 200.0,
        }
    }
}

/// Per-column sums over one period's entries.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColumnTotals {
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub regular_hours_amount: f64,
    pub overtime_hours_amount: f64,
    pub total_amount: f64,
    pub pf: f64,
    pub total_salary: f64,
}

impl ColumnTotals {
    /// Net pay for the period after the fixed adjustments.
    pub fn final_total(&self, adjustments: &Adjustments) -> f64 {
        self.total_salary + adjustments.petrol + adjustments.other - adjustments.ptax
    }
}

/// Folds a period's entries into column totals.
///
/// Commutative sums, so the result is independent of entry order. Numeric
/// fields missing on a stored document have already been defaulted to 0 at
/// the wire boundary.
pub fn aggregate<'a, I>(entries: I) -> ColumnTotals
where
    I: IntoIterator<Item = &'a SalaryEntry>,
{
    let mut totals = ColumnTotals::default();
    for entry in entries {
        totals.regular_hours += entry.regular_hours;
        totals.overtime_hours += entry.overtime_hours;
        totals.regular_hours_amount += entry.regular_hours_amount;
        totals.overtime_hours_amount += entry.overtime_hours_amount;
        totals.total_amount += entry.total_amount;
        totals.pf += entry.pf;
        totals.total_salary += entry.total_salary;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const TOLERANCE: f64 = 1e-9;

    fn entry(total_salary: f64) -> SalaryEntry {
        SalaryEntry {
            id: None,
            date: Utc::now(),
            salary_rate: 20000.0,
            in_time: "09:00".to_string(),
            out_time: "18:00".to_string(),
            regular_hours: 160.0,
            overtime_hours: 10.0,
            regular_hours_amount: 20000.0,
            overtime_hours_amount: 1250.0,
            total_amount: 21250.0,
            pf: 2400.0,
            total_salary,
        }
    }

    #[test]
    fn empty_aggregate_is_all_zero_with_constant_final_total() {
        let entries: Vec<SalaryEntry> = Vec::new();
        let totals = aggregate(&entries);
        assert_eq!(totals, ColumnTotals::default());
        assert!((totals.final_total(&Adjustments::default()) - 8635.0).abs() < TOLERANCE);
    }

    #[test]
    fn sums_every_column() {
        let entries = vec![entry(18850.0), entry(18850.0)];
        let totals = aggregate(&entries);
        assert!((totals.regular_hours - 320.0).abs() < TOLERANCE);
        assert!((totals.overtime_hours - 20.0).abs() < TOLERANCE);
        assert!((totals.regular_hours_amount - 40000.0).abs() < TOLERANCE);
        assert!((totals.overtime_hours_amount - 2500.0).abs() < TOLERANCE);
        assert!((totals.total_amount - 42500.0).abs() < TOLERANCE);
        assert!((totals.pf - 4800.0).abs() < TOLERANCE);
        assert!((totals.total_salary - 37700.0).abs() < TOLERANCE);
    }

    #[test]
    fn aggregation_is_order_independent() {
        let mut entries = vec![entry(18850.0), entry(15000.0), entry(321.75)];
        let forward = aggregate(&entries);
        entries.reverse();
        let backward = aggregate(&entries);
        assert_eq!(forward, backward);
    }

    #[test]
    fn adjustments_apply_once_per_aggregation() {
        let entries = vec![entry(18850.0), entry(15000.0)];
        let adjustments = Adjustments::default();

        let totals = aggregate(&entries);
        assert!((totals.total_salary - 33850.0).abs() < TOLERANCE);
        assert!((totals.final_total(&adjustments) - 42485.0).abs() < TOLERANCE);

        // A second call over one entry still applies the constants once.
        let single = aggregate(&entries[..1]);
        assert!((single.final_total(&adjustments) - (18850.0 + 8635.0)).abs() < TOLERANCE);
    }

    #[test]
    fn custom_adjustments_flow_through() {
        let adjustments = Adjustments {
            petrol: 0.0,
            other: 0.0,
            ptax: 50.0,
        };
        let totals = aggregate(&vec![entry(1000.0)]);
        assert!((totals.final_total(&adjustments) - 950.0).abs() < TOLERANCE);
    }
}
