//! Plain-text payslip rendering.
//!
//! JSON output is the machine-facing contract; the table is for a human
//! reading a terminal. It follows the shape of a printed payslip: gross at
//! the top, each deduction with its breakdown indented underneath, net and
//! employer cost at the bottom.

use std::fmt::Write;

use paie_core::simulation::SimulationReport;

const LABEL_WIDTH: usize = 34;
const AMOUNT_WIDTH: usize = 14;

/// Renders a full report as an aligned payslip, ending with a newline.
pub fn render_table(report: &SimulationReport) -> String {
    let result = &report.result;
    let mut out = String::new();

    line(&mut out, "Country", result.country.as_str());
    line(&mut out, "Gross salary", &result.total_gross.to_string());

    line(
        &mut out,
        "Employee contributions",
        &format!("-{}", result.employee_contributions),
    );
    for entry in &result.employee_breakdown {
        line(
            &mut out,
            &format!("  {} ({}%)", entry.label, percent(&entry.rate)),
            &entry.amount.to_string(),
        );
    }

    line(
        &mut out,
        "Professional expenses",
        &result.professional_expenses.to_string(),
    );
    line(&mut out, "Taxable base", &result.taxable_base.to_string());

    line(
        &mut out,
        "Income tax",
        &format!("-{}", result.income_tax),
    );
    for entry in &result.tax_breakdown {
        line(
            &mut out,
            &format!("  {} ({}%)", entry.label, percent(&entry.rate)),
            &entry.amount.to_string(),
        );
    }

    line(&mut out, "Net salary", &result.net_salary.to_string());
    line(
        &mut out,
        "Employer contributions",
        &result.employer_contributions.to_string(),
    );
    for entry in &result.employer_breakdown {
        line(
            &mut out,
            &format!("  {} ({}%)", entry.label, percent(&entry.rate)),
            &entry.amount.to_string(),
        );
    }
    line(
        &mut out,
        "Total employer cost",
        &result.total_employer_cost.to_string(),
    );

    if let Some(solver) = &report.solver {
        let status = if solver.converged {
            "converged"
        } else {
            "did not converge"
        };
        line(
            &mut out,
            "Solver",
            &format!("{status} in {} iterations", solver.iterations),
        );
    }

    out
}

fn line(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "{label:<LABEL_WIDTH$}{value:>AMOUNT_WIDTH$}");
}

/// Formats a fractional rate as a percentage without trailing zeros.
fn percent(rate: &rust_decimal::Decimal) -> String {
    (rate * rust_decimal::Decimal::ONE_HUNDRED)
        .normalize()
        .to_string()
}
