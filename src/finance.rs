//! Closed-form projections shared by the calculators. Nothing in here knows
//! about widgets.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub final_amount: f64,
    pub total_contributed: f64,
    pub earned: f64,
}

impl Projection {
    /// Future value of `principal` plus a contribution made every period,
    /// compounded at `periodic_rate` for `periods` periods.
    ///
    /// A zero rate takes the limit of the annuity term, `contribution * periods`.
    /// Growth is taken through `ln_1p`/`exp_m1` so tiny rates keep their
    /// contributions instead of cancelling to nothing.
    pub fn annuity(
        principal: f64,
        periodic_rate: f64,
        periodic_contribution: f64,
        periods: f64,
    ) -> Self {
        let (principal_value, contributions_value) = if periodic_rate == 0.0 {
            (principal, periodic_contribution * periods)
        } else {
            let exponent = periods * periodic_rate.ln_1p();
            (
                principal * exponent.exp(),
                periodic_contribution * (exponent.exp_m1() / periodic_rate),
            )
        };

        let final_amount = principal_value + contributions_value;
        let total_contributed = principal + periodic_contribution * periods;

        Projection {
            final_amount,
            total_contributed,
            earned: final_amount - total_contributed,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.final_amount.is_finite() && self.total_contributed.is_finite() && self.earned.is_finite()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FundTargets {
    pub monthly_expenses: f64,
    pub remaining: f64,
    pub minimum: f64,
    pub medium: (f64, f64),
    pub maximum: f64,
}

impl FundTargets {
    pub fn from_expenses(income: f64, expenses: &[f64]) -> Self {
        let monthly_expenses: f64 = expenses.iter().sum();
        FundTargets {
            monthly_expenses,
            remaining: income - monthly_expenses,
            minimum: monthly_expenses,
            medium: (monthly_expenses * 3.0, monthly_expenses * 6.0),
            maximum: monthly_expenses * 12.0,
        }
    }
}

/// `$1,234.50`, with the sign ahead of the dollar sign when negative.
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let nonzero = fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    let sign = if value < 0.0 && nonzero { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

pub fn annuity_formula(principal: f64, periodic_rate: f64, contribution: f64, periods: f64) -> String {
    if periodic_rate == 0.0 {
        format!(
            "Formula: ${p:.2} + ${c:.2} × {n}",
            p = principal,
            c = contribution,
            n = periods
        )
    } else {
        format!(
            "Formula: ${p:.2} × (1 + {r:.4})^{n} + ${c:.2} × [((1 + {r:.4})^{n} - 1) ÷ {r:.4}]",
            p = principal,
            r = periodic_rate,
            n = periods,
            c = contribution
        )
    }
}

#[cfg(test)]
pub(crate) fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}
