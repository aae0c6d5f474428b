//! Derived-metrics engine.
//!
//! Pure functions computing schedule delay, budget variance, and the
//! portfolio-wide summary from raw project fields. Nothing here is ever
//! persisted; callers enrich responses at read time.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::project::EfficiencyRating;

/// Schedule delay in whole calendar months.
///
/// `(year(current) - year(original)) * 12 + (month(current) - month(original))`.
/// Day-of-month is ignored, so Jan 31 -> Feb 1 counts as one month. The
/// dashboard timeline and every historical figure were produced with this
/// arithmetic, so it is kept exactly.
pub fn schedule_delay_months(original: NaiveDate, current: NaiveDate) -> i32 {
    (current.year() - original.year()) * 12 + (current.month() as i32 - original.month() as i32)
}

/// Absolute budget delta for a single project. Positive means overrun.
pub fn budget_change(original: f64, current: f64) -> f64 {
    current - original
}

/// The metric-relevant slice of one project, decoupled from the storage row.
#[derive(Debug, Clone)]
pub struct ProjectFigures {
    pub performance_metric: f64,
    pub original_budget: f64,
    pub current_budget: f64,
    pub original_completion_date: NaiveDate,
    pub current_completion_date: NaiveDate,
    pub efficiency: EfficiencyRating,
}

/// Portfolio-level rollup across all projects.
///
/// Note the unit asymmetry with the per-project figures: `budget_change`
/// here is a ratio of the summed budgets, while [`budget_change`] is an
/// absolute delta. Both shapes are what the existing clients consume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    /// Mean `performance_metric` across all projects.
    pub performance: f64,
    /// Sum of original budgets.
    pub original_budget: f64,
    /// Sum of current budgets.
    pub current_budget: f64,
    /// `(sum(current) - sum(original)) / sum(original)`; 0.0 when the
    /// original total is zero.
    pub budget_change: f64,
    /// Mean per-project schedule delay in months.
    pub delays: f64,
    /// Most frequent efficiency rating; ties broken alphabetically by label.
    pub efficiency: EfficiencyRating,
}

/// Compute the portfolio summary, or `None` for an empty portfolio.
pub fn portfolio_summary(projects: &[ProjectFigures]) -> Option<PortfolioSummary> {
    if projects.is_empty() {
        return None;
    }

    let count = projects.len() as f64;
    let mut performance = 0.0;
    let mut original_budget = 0.0;
    let mut current_budget = 0.0;
    let mut delay_months = 0i64;

    for p in projects {
        performance += p.performance_metric;
        original_budget += p.original_budget;
        current_budget += p.current_budget;
        delay_months += i64::from(schedule_delay_months(
            p.original_completion_date,
            p.current_completion_date,
        ));
    }

    let budget_change = if original_budget == 0.0 {
        0.0
    } else {
        (current_budget - original_budget) / original_budget
    };

    Some(PortfolioSummary {
        performance: performance / count,
        original_budget,
        current_budget,
        budget_change,
        delays: delay_months as f64 / count,
        efficiency: modal_efficiency(projects),
    })
}

/// The most frequent efficiency rating. Ties break alphabetically by label
/// so the result is stable regardless of input or store ordering.
fn modal_efficiency(projects: &[ProjectFigures]) -> EfficiencyRating {
    let candidates = [
        EfficiencyRating::Declining,
        EfficiencyRating::Improving,
        EfficiencyRating::Moderate,
    ];
    let mut best = candidates[0];
    let mut best_count = 0usize;
    for rating in candidates {
        let count = projects.iter().filter(|p| p.efficiency == rating).count();
        if count > best_count {
            best = rating;
            best_count = count;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn figures(
        performance: f64,
        original_budget: f64,
        current_budget: f64,
        original: NaiveDate,
        current: NaiveDate,
        efficiency: EfficiencyRating,
    ) -> ProjectFigures {
        ProjectFigures {
            performance_metric: performance,
            original_budget,
            current_budget,
            original_completion_date: original,
            current_completion_date: current,
            efficiency,
        }
    }

    #[test]
    fn delay_is_whole_month_difference() {
        assert_eq!(
            schedule_delay_months(date(2024, 1, 15), date(2024, 4, 1)),
            3
        );
    }

    #[test]
    fn delay_ignores_day_of_month() {
        // One day late, but a month boundary was crossed.
        assert_eq!(
            schedule_delay_months(date(2024, 1, 31), date(2024, 2, 1)),
            1
        );
        // 29 days late, but no boundary crossed.
        assert_eq!(
            schedule_delay_months(date(2024, 1, 1), date(2024, 1, 30)),
            0
        );
    }

    #[test]
    fn delay_spans_years_and_can_be_negative() {
        assert_eq!(
            schedule_delay_months(date(2022, 11, 1), date(2024, 2, 1)),
            15
        );
        assert_eq!(
            schedule_delay_months(date(2024, 6, 1), date(2024, 3, 1)),
            -3
        );
    }

    #[test]
    fn budget_change_is_absolute_delta() {
        assert_eq!(budget_change(100_000.0, 120_000.0), 20_000.0);
        assert_eq!(budget_change(120_000.0, 100_000.0), -20_000.0);
    }

    #[test]
    fn summary_of_empty_portfolio_is_none() {
        assert_eq!(portfolio_summary(&[]), None);
    }

    #[test]
    fn summary_aggregates_per_spec_figures() {
        let projects = [
            figures(
                60.0,
                100.0,
                110.0,
                date(2024, 1, 1),
                date(2024, 3, 1),
                EfficiencyRating::Improving,
            ),
            figures(
                80.0,
                200.0,
                180.0,
                date(2024, 1, 1),
                date(2024, 1, 1),
                EfficiencyRating::Improving,
            ),
        ];
        let summary = portfolio_summary(&projects).unwrap();
        assert_eq!(summary.performance, 70.0);
        assert_eq!(summary.original_budget, 300.0);
        assert_eq!(summary.current_budget, 290.0);
        assert!((summary.budget_change - (-10.0 / 300.0)).abs() < 1e-12);
        assert_eq!(summary.delays, 1.0);
        assert_eq!(summary.efficiency, EfficiencyRating::Improving);
    }

    #[test]
    fn zero_original_budget_yields_zero_ratio() {
        let projects = [figures(
            50.0,
            0.0,
            10.0,
            date(2024, 1, 1),
            date(2024, 1, 1),
            EfficiencyRating::Moderate,
        )];
        let summary = portfolio_summary(&projects).unwrap();
        assert_eq!(summary.budget_change, 0.0);
    }

    #[test]
    fn modal_efficiency_picks_most_frequent() {
        let projects = [
            figures(
                0.0,
                0.0,
                0.0,
                date(2024, 1, 1),
                date(2024, 1, 1),
                EfficiencyRating::Declining,
            ),
            figures(
                0.0,
                0.0,
                0.0,
                date(2024, 1, 1),
                date(2024, 1, 1),
                EfficiencyRating::Moderate,
            ),
            figures(
                0.0,
                0.0,
                0.0,
                date(2024, 1, 1),
                date(2024, 1, 1),
                EfficiencyRating::Moderate,
            ),
        ];
        assert_eq!(
            portfolio_summary(&projects).unwrap().efficiency,
            EfficiencyRating::Moderate
        );
    }

    #[test]
    fn modal_efficiency_tie_breaks_alphabetically() {
        let projects = [
            figures(
                0.0,
                0.0,
                0.0,
                date(2024, 1, 1),
                date(2024, 1, 1),
                EfficiencyRating::Moderate,
            ),
            figures(
                0.0,
                0.0,
                0.0,
                date(2024, 1, 1),
                date(2024, 1, 1),
                EfficiencyRating::Declining,
            ),
        ];
        // "Declining" sorts before "Moderate".
        assert_eq!(
            portfolio_summary(&projects).unwrap().efficiency,
            EfficiencyRating::Declining
        );
    }
}
