use crate::{EngineError, ResultEngine};

/// Pension-fund deduction rate, applied to the base-rate amount only.
pub const PF_RATE: f64 = 0.12;

/// The five form fields as typed by the user, before any parsing.
#[derive(Debug, Clone, Copy)]
pub struct RawInput<'a> {
    pub salary_rate: &'a str,
    pub in_time: &'a str,
    pub out_time: &'a str,
    pub regular_hours: &'a str,
    pub overtime_hours: &'a str,
}

/// Form fields after parsing and required-field validation.
///
/// `in_time`/`out_time` are descriptive only and never enter arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInput {
    pub salary_rate: f64,
    pub in_time: String,
    pub out_time: String,
    pub regular_hours: f64,
    pub overtime_hours: f64,
}

/// Monetary fields derived from one entry's inputs.
///
/// Values are unrounded; rounding to two decimals happens at display and
/// export time only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryBreakdown {
    pub regular_hours_amount: f64,
    pub overtime_hours_amount: f64,
    pub total_amount: f64,
    pub pf: f64,
    pub total_salary: f64,
}

impl RawInput<'_> {
    /// Parses the raw form fields.
    ///
    /// `salary_rate` and `regular_hours` are required and must parse to a
    /// number; an empty `overtime_hours` defaults to 0. Errors name the
    /// offending field so the form can surface them verbatim.
    pub fn parse(&self) -> ResultEngine<ParsedInput> {
        Ok(ParsedInput {
            salary_rate: required_number("Salary Rate", self.salary_rate)?,
            in_time: required_text("In Time", self.in_time)?,
            out_time: required_text("Out Time", self.out_time)?,
            regular_hours: required_number("Regular Hours", self.regular_hours)?,
            overtime_hours: match self.overtime_hours.trim() {
                "" => 0.0,
                raw => parse_number("Overtime Hours", raw)?,
            },
        })
    }
}

impl ParsedInput {
    /// Derives the monetary fields for this input. See [`compute`].
    pub fn breakdown(&self) -> ResultEngine<SalaryBreakdown> {
        compute(self.salary_rate, self.regular_hours, self.overtime_hours)
    }
}

/// Derives the monetary fields from one entry's numeric inputs.
///
/// - `regular_hours_amount` is the base rate itself.
/// - `overtime_hours_amount` is the implied hourly rate times overtime hours.
/// - `pf` is [`PF_RATE`] of the base rate, not of the total.
///
/// Zero (or negative) regular hours would make the hourly-rate division
/// undefined, so the entry is rejected instead of producing a non-finite
/// amount. Negative or non-finite rates and overtime are rejected too.
pub fn compute(
    salary_rate: f64,
    regular_hours: f64,
    overtime_hours: f64,
) -> ResultEngine<SalaryBreakdown> {
    if !salary_rate.is_finite() || salary_rate < 0.0 {
        return Err(EngineError::InvalidRate(
            "salary rate must not be negative".to_string(),
        ));
    }
    if !regular_hours.is_finite() || regular_hours <= 0.0 {
        return Err(EngineError::InvalidHours(
            "regular hours must be greater than zero".to_string(),
        ));
    }
    if !overtime_hours.is_finite() || overtime_hours < 0.0 {
        return Err(EngineError::InvalidHours(
            "overtime hours must not be negative".to_string(),
        ));
    }

    let regular_hours_amount = salary_rate;
    let overtime_hours_amount = (salary_rate / regular_hours) * overtime_hours;
    let total_amount = regular_hours_amount + overtime_hours_amount;
    let pf = salary_rate * PF_RATE;
    let total_salary = total_amount - pf;

    Ok(SalaryBreakdown {
        regular_hours_amount,
        overtime_hours_amount,
        total_amount,
        pf,
        total_salary,
    })
}

fn required_text(field: &'static str, raw: &str) -> ResultEngine<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EngineError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn required_number(field: &'static str, raw: &str) -> ResultEngine<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EngineError::MissingField(field));
    }
    parse_number(field, trimmed)
}

fn parse_number(field: &'static str, raw: &str) -> ResultEngine<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(EngineError::InvalidNumber(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn derives_worked_example() {
        let breakdown = compute(20000.0, 160.0, 10.0).unwrap();
        assert!((breakdown.overtime_hours_amount - 1250.0).abs() < TOLERANCE);
        assert!((breakdown.total_amount - 21250.0).abs() < TOLERANCE);
        assert!((breakdown.pf - 2400.0).abs() < TOLERANCE);
        assert!((breakdown.total_salary - 18850.0).abs() < TOLERANCE);
    }

    #[test]
    fn pf_is_twelve_percent_of_base_rate_only() {
        for rate in [0.0, 123.45, 20000.0, 99999.99] {
            let breakdown = compute(rate, 160.0, 40.0).unwrap();
            assert!((breakdown.pf - rate * 0.12).abs() < TOLERANCE);
        }
    }

    #[test]
    fn total_salary_is_total_amount_minus_pf() {
        let breakdown = compute(18000.5, 152.0, 7.25).unwrap();
        assert!((breakdown.total_amount - breakdown.pf - breakdown.total_salary).abs() < TOLERANCE);
    }

    #[test]
    fn rejects_zero_regular_hours() {
        assert_eq!(
            compute(20000.0, 0.0, 10.0),
            Err(EngineError::InvalidHours(
                "regular hours must be greater than zero".to_string()
            ))
        );
    }

    #[test]
    fn rejects_negative_inputs() {
        assert!(compute(-1.0, 160.0, 0.0).is_err());
        assert!(compute(20000.0, -160.0, 0.0).is_err());
        assert!(compute(20000.0, 160.0, -1.0).is_err());
    }

    #[test]
    fn parse_defaults_missing_overtime_to_zero() {
        let input = RawInput {
            salary_rate: "20000",
            in_time: "09:00",
            out_time: "18:00",
            regular_hours: "160",
            overtime_hours: "",
        };
        let parsed = input.parse().unwrap();
        assert_eq!(parsed.overtime_hours, 0.0);
        let breakdown = parsed.breakdown().unwrap();
        assert!((breakdown.overtime_hours_amount - 0.0).abs() < TOLERANCE);
    }

    #[test]
    fn parse_rejects_missing_required_fields() {
        let input = RawInput {
            salary_rate: "  ",
            in_time: "09:00",
            out_time: "18:00",
            regular_hours: "160",
            overtime_hours: "",
        };
        assert_eq!(input.parse(), Err(EngineError::MissingField("Salary Rate")));

        let input = RawInput {
            salary_rate: "20000",
            in_time: "09:00",
            out_time: "18:00",
            regular_hours: "eight",
            overtime_hours: "",
        };
        assert_eq!(
            input.parse(),
            Err(EngineError::InvalidNumber("Regular Hours"))
        );
    }
}
