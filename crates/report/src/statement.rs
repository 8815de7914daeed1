use api_types::salary::SalaryEntry;
use engine::{Adjustments, ColumnTotals, Period};

/// Header of the statement table, one label per column.
pub const COLUMNS: [&str; 11] = [
    "Date",
    "Salary Rate",
    "In Time",
    "Out Time",
    "Regular Hours",
    "Overtime Hours",
    "Regular Amount",
    "Overtime Amount",
    "Total Amount",
    "PF",
    "Total Salary",
];

/// One table row, one cell per column.
pub type Row = [String; 11];

/// The statement table, fully formatted for display or export.
///
/// `footer` holds the totals row, the three fixed adjustment rows and the
/// final-total row, in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub title: String,
    pub rows: Vec<Row>,
    pub footer: Vec<Row>,
}

/// Builds the statement table for one period.
///
/// Monetary cells are rounded to exactly two decimals here and nowhere
/// earlier; rate and hours cells keep the plain form the user typed.
pub fn build(
    period: Period,
    entries: &[SalaryEntry],
    totals: &ColumnTotals,
    adjustments: &Adjustments,
    final_total: f64,
) -> Statement {
    let rows = entries
        .iter()
        .map(|entry| {
            [
                entry.date.format("%-m/%-d/%Y").to_string(),
                format_plain(entry.salary_rate),
                entry.in_time.clone(),
                entry.out_time.clone(),
                format_plain(entry.regular_hours),
                format_plain(entry.overtime_hours),
                format_amount(entry.regular_hours_amount),
                format_amount(entry.overtime_hours_amount),
                format_amount(entry.total_amount),
                format_amount(entry.pf),
                format_amount(entry.total_salary),
            ]
        })
        .collect();

    let footer = vec![
        [
            "Totals".to_string(),
            String::new(),
            String::new(),
            String::new(),
            format_plain(totals.regular_hours),
            format_plain(totals.overtime_hours),
            format_amount(totals.regular_hours_amount),
            format_amount(totals.overtime_hours_amount),
            format_amount(totals.total_amount),
            format_amount(totals.pf),
            format_amount(totals.total_salary),
        ],
        adjustment_row("Additions:", "Petrol", adjustments.petrol),
        adjustment_row("", "Other", adjustments.other),
        adjustment_row("Deductions:", "P.Tax", adjustments.ptax),
        [
            "Final Total".to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            format_amount(final_total),
        ],
    ];

    Statement {
        title: format!("Salary Statement for {period}"),
        rows,
        footer,
    }
}

/// File name for an exported statement, e.g. `Salary_Statement_3-2024.pdf`.
pub fn filename(period: Period, extension: &str) -> String {
    format!("Salary_Statement_{period}.{extension}")
}

/// Two-decimal monetary formatting, e.g. `1250` -> `"1250.00"`.
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

// Rate and hours cells: integral values print without a fraction, others as
// typed (`160` -> "160", `7.5` -> "7.5").
fn format_plain(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

fn adjustment_row(section: &str, label: &str, amount: f64) -> Row {
    [
        section.to_string(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        label.to_string(),
        format_plain(amount),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry() -> SalaryEntry {
        SalaryEntry {
            id: None,
            date: Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap(),
            salary_rate: 20000.0,
            in_time: "09:00".to_string(),
            out_time: "18:00".to_string(),
            regular_hours: 160.0,
            overtime_hours: 10.0,
            regular_hours_amount: 20000.0,
            overtime_hours_amount: 1250.0,
            total_amount: 21250.0,
            pf: 2400.0,
            total_salary: 18850.0,
        }
    }

    fn statement() -> Statement {
        let period = Period {
            year: 2024,
            month: 3,
        };
        let entries = vec![entry()];
        let totals = engine::aggregate(&entries);
        let adjustments = Adjustments::default();
        let final_total = totals.final_total(&adjustments);
        build(period, &entries, &totals, &adjustments, final_total)
    }

    #[test]
    fn title_and_filename_carry_the_period_label() {
        assert_eq!(statement().title, "Salary Statement for 3-2024");
        assert_eq!(
            filename(Period { year: 2024, month: 3 }, "pdf"),
            "Salary_Statement_3-2024.pdf"
        );
    }

    #[test]
    fn entry_rows_format_monetary_cells_with_two_decimals() {
        let statement = statement();
        let row = &statement.rows[0];
        assert_eq!(row[0], "3/5/2024");
        assert_eq!(row[1], "20000");
        assert_eq!(row[2], "09:00");
        assert_eq!(row[4], "160");
        assert_eq!(row[5], "10");
        assert_eq!(row[6], "20000.00");
        assert_eq!(row[7], "1250.00");
        assert_eq!(row[8], "21250.00");
        assert_eq!(row[9], "2400.00");
        assert_eq!(row[10], "18850.00");
    }

    #[test]
    fn footer_reproduces_totals_and_fixed_adjustment_rows() {
        let statement = statement();
        assert_eq!(statement.footer.len(), 5);

        let totals = &statement.footer[0];
        assert_eq!(totals[0], "Totals");
        assert_eq!(totals[4], "160");
        assert_eq!(totals[10], "18850.00");

        assert_eq!(statement.footer[1][0], "Additions:");
        assert_eq!(statement.footer[1][9], "Petrol");
        assert_eq!(statement.footer[1][10], "500");
        assert_eq!(statement.footer[2][9], "Other");
        assert_eq!(statement.footer[2][10], "8335");
        assert_eq!(statement.footer[3][0], "Deductions:");
        assert_eq!(statement.footer[3][9], "P.Tax");
        assert_eq!(statement.footer[3][10], "200");

        let final_row = statement.footer.last().unwrap();
        assert_eq!(final_row[0], "Final Total");
        assert_eq!(final_row[10], "27485.00");
    }

    #[test]
    fn non_integral_hours_keep_their_fraction() {
        let mut entry = entry();
        entry.regular_hours = 152.5;
        let entries = vec![entry];
        let totals = engine::aggregate(&entries);
        let adjustments = Adjustments::default();
        let statement = build(
            Period { year: 2024, month: 3 },
            &entries,
            &totals,
            &adjustments,
            totals.final_total(&adjustments),
        );
        assert_eq!(statement.rows[0][4], "152.5");
    }
}
