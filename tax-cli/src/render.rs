//! Plain-text rendering of a [`ComprehensiveSummary`].

use rust_decimal::{Decimal, RoundingStrategy};
use tax_core::{ComprehensiveSummary, calculations::CpfCalculator};
use unicode_width::UnicodeWidthStr;

use crate::i18n::{Key, Language, assumption_text, label};

/// A theme after `System` has been resolved against the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ResolvedTheme {
    fn palette(&self) -> Palette {
        match self {
            Self::Light => Palette {
                heading: "1;34",
                positive: "32",
                negative: "31",
                muted: "2",
            },
            Self::Dark => Palette {
                heading: "1;94",
                positive: "92",
                negative: "91",
                muted: "37",
            },
        }
    }
}

struct Palette {
    heading: &'static str,
    positive: &'static str,
    negative: &'static str,
    muted: &'static str,
}

/// Everything a render call needs besides the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub language: Language,
    pub theme: ResolvedTheme,
    pub color: bool,
}

impl RenderContext {
    fn paint(
        &self,
        code: &str,
        text: &str,
    ) -> String {
        if self.color {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    fn heading(
        &self,
        key: Key,
    ) -> String {
        self.paint(self.theme.palette().heading, label(self.language, key))
    }
}

/// Formats an amount as Singapore dollars in whole units, e.g. `S$1,234`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-S${grouped}")
    } else {
        format!("S${grouped}")
    }
}

/// Formats a percentage with one decimal place, e.g. `76.1%`.
pub fn format_rate(rate: Decimal) -> String {
    let rounded = rate.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.1}%")
}

/// Display columns reserved for row labels.
const LABEL_COLUMNS: usize = 28;

/// Renders the full summary as aligned text lines.
pub fn render_summary(
    ctx: &RenderContext,
    summary: &ComprehensiveSummary,
) -> String {
    let palette = ctx.theme.palette();
    let lang = ctx.language;
    let mut out = String::new();

    line(&mut out, &ctx.heading(Key::Title));
    line(&mut out, &ctx.paint(palette.muted, label(lang, Key::Subtitle)));
    line(&mut out, "");
    row(&mut out, lang, Key::AnnualIncome, format_currency(summary.annual_income));

    let tax = &summary.tax;
    line(&mut out, "");
    line(&mut out, &ctx.heading(Key::IncomeTax));
    row(&mut out, lang, Key::GrossTax, format_currency(tax.gross_tax));
    row(&mut out, lang, Key::Rebate, format!("-{}", format_currency(tax.rebate)));
    row(
        &mut out,
        lang,
        Key::NetTax,
        ctx.paint(palette.negative, &format_currency(tax.net_tax)),
    );
    row(&mut out, lang, Key::AfterTaxIncome, format_currency(tax.after_tax_income));
    row(&mut out, lang, Key::AverageTaxRate, format_rate(tax.average_tax_rate));
    row(&mut out, lang, Key::MarginalTaxRate, format_rate(tax.marginal_tax_rate));

    line(&mut out, "");
    line(&mut out, &ctx.heading(Key::Cpf));
    if summary.is_resident_eligible {
        render_cpf(&mut out, ctx, summary);
    } else {
        line(
            &mut out,
            &format!("  {}", ctx.paint(palette.muted, label(lang, Key::NotEligible))),
        );
    }

    line(&mut out, "");
    line(&mut out, &ctx.heading(Key::TakeHome));
    row(&mut out, lang, Key::TotalDeductions, format_currency(summary.total_deductions));
    row(
        &mut out,
        lang,
        Key::FinalTakeHome,
        ctx.paint(palette.positive, &format_currency(summary.final_take_home)),
    );
    row(
        &mut out,
        lang,
        Key::EffectiveTakeHomeRate,
        format_rate(summary.effective_take_home_rate),
    );

    out
}

fn render_cpf(
    out: &mut String,
    ctx: &RenderContext,
    summary: &ComprehensiveSummary,
) {
    let lang = ctx.language;
    let palette = ctx.theme.palette();
    let cpf = &summary.cpf;
    let per_month = label(lang, Key::PerMonth);

    let with_monthly = |annual: Decimal, monthly: Decimal| {
        format!("{} ({} {per_month})", format_currency(annual), format_currency(monthly))
    };

    row(
        out,
        lang,
        Key::EmployeeContribution,
        with_monthly(cpf.result.employee_contribution, cpf.monthly.employee_contribution),
    );
    row(
        out,
        lang,
        Key::EmployerContribution,
        with_monthly(cpf.result.employer_contribution, cpf.monthly.employer_contribution),
    );
    row(
        out,
        lang,
        Key::TotalContribution,
        with_monthly(cpf.result.total_contribution, cpf.monthly.total_contribution),
    );
    row(out, lang, Key::CpfSubjectIncome, format_currency(cpf.result.cpf_subject_income));
    if cpf.result.exempt_income > Decimal::ZERO {
        row(out, lang, Key::ExemptIncome, format_currency(cpf.result.exempt_income));
    }

    if !cpf.result.assumptions.is_empty() {
        line(out, &format!("  {}:", label(lang, Key::Assumptions)));
        for assumption in &cpf.result.assumptions {
            let text = format!("- {}", assumption_text(lang, assumption));
            line(out, &format!("    {}", ctx.paint(palette.muted, &text)));
        }
    }

    if CpfCalculator::ya2025().should_use_advanced_calculation(summary.annual_income) {
        line(out, &format!("  {}", ctx.paint(palette.muted, label(lang, Key::AdvancedHint))));
    }
}

fn line(
    out: &mut String,
    text: &str,
) {
    out.push_str(text);
    out.push('\n');
}

/// Label padded to [`LABEL_COLUMNS`] terminal columns, then the value.
fn row(
    out: &mut String,
    language: Language,
    key: Key,
    value: String,
) {
    let name = label(language, key);
    let padding = LABEL_COLUMNS.saturating_sub(name.width());
    line(out, &format!("  {name}{} {value}", " ".repeat(padding)));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tax_core::compose_summary;

    use super::*;

    fn plain(language: Language) -> RenderContext {
        RenderContext {
            language,
            theme: ResolvedTheme::Light,
            color: false,
        }
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(dec!(0)), "S$0");
        assert_eq!(format_currency(dec!(999)), "S$999");
        assert_eq!(format_currency(dec!(1000)), "S$1,000");
        assert_eq!(format_currency(dec!(60850)), "S$60,850");
        assert_eq!(format_currency(dec!(1234567)), "S$1,234,567");
    }

    #[test]
    fn currency_rounds_to_whole_dollars() {
        assert_eq!(format_currency(dec!(1999.5)), "S$2,000");
        assert_eq!(format_currency(dec!(10.49)), "S$10");
    }

    #[test]
    fn currency_keeps_sign_of_negative_amounts() {
        assert_eq!(format_currency(dec!(-5000)), "-S$5,000");
        assert_eq!(format_currency(dec!(-0.2)), "S$0");
    }

    #[test]
    fn rate_has_one_decimal() {
        assert_eq!(format_rate(dec!(76.1)), "76.1%");
        assert_eq!(format_rate(dec!(0)), "0.0%");
        assert_eq!(format_rate(dec!(3.9375)), "3.9%");
        assert_eq!(format_rate(dec!(7)), "7.0%");
    }

    // =========================================================================
    // Summary
    // =========================================================================

    #[test]
    fn summary_shows_take_home_figures() {
        let text = render_summary(&plain(Language::En), &compose_summary(dec!(80000), true));

        assert!(text.contains("S$80,000"));
        assert!(text.contains("S$3,150"));
        assert!(text.contains("S$16,000 (S$1,333 per month)"));
        assert!(text.contains("S$60,850"));
        assert!(text.contains("76.1%"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn summary_for_non_resident_skips_cpf_rows() {
        let text = render_summary(&plain(Language::En), &compose_summary(dec!(80000), false));

        assert!(text.contains("Not eligible for CPF"));
        assert!(!text.contains("Employee (20%)"));
        assert!(text.contains("S$76,850"));
    }

    #[test]
    fn summary_lists_ceiling_assumption_and_hint_for_high_income() {
        let text = render_summary(&plain(Language::En), &compose_summary(dec!(150000), true));

        assert!(text.contains("Monthly salary above the S$7,400 ceiling"));
        assert!(text.contains("Income above ceilings"));
        assert!(text.contains(label(Language::En, Key::AdvancedHint)));
    }

    #[test]
    fn summary_uses_selected_language() {
        let text = render_summary(&plain(Language::ZhCn), &compose_summary(dec!(80000), true));

        assert!(text.contains("年收入"));
        assert!(text.contains("最终实得"));
    }

    #[test]
    fn values_line_up_for_wide_labels() {
        let text = render_summary(&plain(Language::ZhCn), &compose_summary(dec!(80000), true));
        let value_columns: Vec<usize> = text
            .lines()
            .filter(|line| line.contains("S$") && !line.contains('('))
            .map(|line| {
                let (head, _) = line.split_at(line.find("S$").unwrap());
                let head = head.trim_end_matches('-');
                head.width()
            })
            .collect();

        assert!(value_columns.len() > 3);
        assert!(value_columns.iter().all(|&column| column == 2 + LABEL_COLUMNS + 1));
    }

    #[test]
    fn color_wraps_highlights_in_escape_codes() {
        let ctx = RenderContext {
            color: true,
            ..plain(Language::En)
        };
        let text = render_summary(&ctx, &compose_summary(dec!(80000), true));

        assert!(text.contains("\x1b[32mS$60,850\x1b[0m"));
    }
}
