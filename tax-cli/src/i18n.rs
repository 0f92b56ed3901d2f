//! Display languages and translated labels.
//!
//! English is complete; other languages fall back to English for any label
//! they do not translate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tax_core::CpfAssumption;
use thiserror::Error;

use crate::render::format_currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "ms")]
    Ms,
    #[serde(rename = "ta")]
    Ta,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown language '{0}' (expected one of: en, zh-CN, ms, ta)")]
pub struct UnknownLanguage(String);

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::ZhCn, Language::Ms, Language::Ta];

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::ZhCn => "zh-CN",
            Self::Ms => "ms",
            Self::Ta => "ta",
        }
    }

    /// Name of the language in the language itself.
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::ZhCn => "简体中文",
            Self::Ms => "Bahasa Melayu",
            Self::Ta => "தமிழ்",
        }
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "zh" | "zh-cn" => Ok(Self::ZhCn),
            "ms" => Ok(Self::Ms),
            "ta" => Ok(Self::Ta),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Every translatable label used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Title,
    Subtitle,
    AnnualIncome,
    IncomeTax,
    GrossTax,
    Rebate,
    NetTax,
    AfterTaxIncome,
    AverageTaxRate,
    MarginalTaxRate,
    Cpf,
    NotEligible,
    EmployeeContribution,
    EmployerContribution,
    TotalContribution,
    CpfSubjectIncome,
    ExemptIncome,
    PerMonth,
    Assumptions,
    AdvancedHint,
    TakeHome,
    TotalDeductions,
    FinalTakeHome,
    EffectiveTakeHomeRate,
    ShareLink,
    FullYearEmployment,
    AverageMonthlyDistribution,
    EightyTwentyWageSplit,
    UnderFiftyFiveRates,
    MonthlyCeilingExceeded,
}

/// Label for `key` in `language`, falling back to English.
pub fn label(
    language: Language,
    key: Key,
) -> &'static str {
    let translated = match language {
        Language::En => None,
        Language::ZhCn => zh_cn(key),
        Language::Ms => malay(key),
        Language::Ta => tamil(key),
    };
    translated.unwrap_or_else(|| english(key))
}

/// Human-readable text for a CPF assumption.
pub fn assumption_text(
    language: Language,
    assumption: &CpfAssumption,
) -> String {
    match assumption {
        CpfAssumption::FullYearEmployment => label(language, Key::FullYearEmployment).to_string(),
        CpfAssumption::AverageMonthlyDistribution => {
            label(language, Key::AverageMonthlyDistribution).to_string()
        }
        CpfAssumption::EightyTwentyWageSplit => {
            label(language, Key::EightyTwentyWageSplit).to_string()
        }
        CpfAssumption::UnderFiftyFiveRates => label(language, Key::UnderFiftyFiveRates).to_string(),
        CpfAssumption::MonthlyCeilingExceeded { ceiling } => label(
            language,
            Key::MonthlyCeilingExceeded,
        )
        .replace("{ceiling}", &format_currency(*ceiling)),
    }
}

fn english(key: Key) -> &'static str {
    match key {
        Key::Title => "Income Tax Calculator",
        Key::Subtitle => "Estimate your income tax and take-home pay",
        Key::AnnualIncome => "Annual Income",
        Key::IncomeTax => "Income Tax",
        Key::GrossTax => "Gross tax",
        Key::Rebate => "Tax rebate",
        Key::NetTax => "Estimated income tax",
        Key::AfterTaxIncome => "After-tax income",
        Key::AverageTaxRate => "Average tax rate",
        Key::MarginalTaxRate => "Marginal tax rate",
        Key::Cpf => "CPF Contributions",
        Key::NotEligible => "Not eligible for CPF",
        Key::EmployeeContribution => "Employee (20%)",
        Key::EmployerContribution => "Employer (17%)",
        Key::TotalContribution => "Total (37%)",
        Key::CpfSubjectIncome => "CPF-subject income",
        Key::ExemptIncome => "Income above ceilings",
        Key::PerMonth => "per month",
        Key::Assumptions => "Assumptions",
        Key::AdvancedHint => {
            "Your monthly wage is near the CPF ceiling; a month-by-month calculation may differ."
        }
        Key::TakeHome => "Take-home Pay",
        Key::TotalDeductions => "Total deductions",
        Key::FinalTakeHome => "Final take-home",
        Key::EffectiveTakeHomeRate => "Take-home rate",
        Key::ShareLink => "Share",
        Key::FullYearEmployment => "Employed for the full year",
        Key::AverageMonthlyDistribution => "Income spread evenly across months",
        Key::EightyTwentyWageSplit => "80% fixed monthly salary, 20% year-end bonus",
        Key::UnderFiftyFiveRates => "Rates for employees aged 55 and below",
        Key::MonthlyCeilingExceeded => "Monthly salary above the {ceiling} ceiling",
    }
}

fn zh_cn(key: Key) -> Option<&'static str> {
    let text = match key {
        Key::Title => "个人所得税计算器",
        Key::Subtitle => "估算您的所得税和实得收入",
        Key::AnnualIncome => "年收入",
        Key::IncomeTax => "所得税",
        Key::GrossTax => "应缴税额",
        Key::Rebate => "税务回扣",
        Key::NetTax => "预估所得税",
        Key::AfterTaxIncome => "税后收入",
        Key::AverageTaxRate => "平均税率",
        Key::MarginalTaxRate => "边际税率",
        Key::Cpf => "公积金缴纳",
        Key::NotEligible => "不适用公积金",
        Key::EmployeeContribution => "雇员 (20%)",
        Key::EmployerContribution => "雇主 (17%)",
        Key::TotalContribution => "合计 (37%)",
        Key::CpfSubjectIncome => "需缴公积金的收入",
        Key::ExemptIncome => "超出上限的收入",
        Key::PerMonth => "每月",
        Key::Assumptions => "假设",
        Key::AdvancedHint => "您的月薪接近公积金上限，按月精确计算结果可能不同。",
        Key::TakeHome => "实得收入",
        Key::TotalDeductions => "总扣除额",
        Key::FinalTakeHome => "最终实得",
        Key::EffectiveTakeHomeRate => "实得比例",
        Key::ShareLink => "分享",
        Key::FullYearEmployment => "假设全年在职",
        Key::AverageMonthlyDistribution => "基于平均月薪分布计算",
        Key::EightyTwentyWageSplit => "假设80%固定月薪，20%年终奖金",
        Key::UnderFiftyFiveRates => "适用于55岁以下员工",
        Key::MonthlyCeilingExceeded => "月薪超过上限 {ceiling}",
    };
    Some(text)
}

fn malay(key: Key) -> Option<&'static str> {
    let text = match key {
        Key::Title => "Kalkulator Cukai Pendapatan",
        Key::Subtitle => "Anggarkan cukai pendapatan dan gaji bawa pulang anda",
        Key::AnnualIncome => "Pendapatan Tahunan",
        Key::IncomeTax => "Cukai Pendapatan",
        Key::GrossTax => "Cukai kasar",
        Key::Rebate => "Rebat cukai",
        Key::NetTax => "Anggaran cukai pendapatan",
        Key::AfterTaxIncome => "Pendapatan selepas cukai",
        Key::AverageTaxRate => "Kadar cukai purata",
        Key::MarginalTaxRate => "Kadar cukai marginal",
        Key::Cpf => "Caruman CPF",
        Key::NotEligible => "Tidak layak untuk CPF",
        Key::EmployeeContribution => "Pekerja (20%)",
        Key::EmployerContribution => "Majikan (17%)",
        Key::TotalContribution => "Jumlah (37%)",
        Key::CpfSubjectIncome => "Pendapatan tertakluk CPF",
        Key::ExemptIncome => "Pendapatan melebihi had",
        Key::PerMonth => "sebulan",
        Key::Assumptions => "Andaian",
        Key::TakeHome => "Gaji Bawa Pulang",
        Key::TotalDeductions => "Jumlah potongan",
        Key::FinalTakeHome => "Bawa pulang akhir",
        Key::EffectiveTakeHomeRate => "Kadar bawa pulang",
        Key::ShareLink => "Kongsi",
        _ => return None,
    };
    Some(text)
}

fn tamil(key: Key) -> Option<&'static str> {
    let text = match key {
        Key::Title => "வருமான வரி கணிப்பான்",
        Key::AnnualIncome => "ஆண்டு வருமானம்",
        Key::IncomeTax => "வருமான வரி",
        Key::NetTax => "மதிப்பிடப்பட்ட வருமான வரி",
        Key::AfterTaxIncome => "வரிக்குப் பிந்தைய வருமானம்",
        Key::Cpf => "CPF பங்களிப்புகள்",
        Key::TakeHome => "கையில் கிடைக்கும் ஊதியம்",
        Key::ShareLink => "பகிர்",
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_accepts_codes_case_insensitively() {
        assert_eq!("en".parse(), Ok(Language::En));
        assert_eq!("zh-CN".parse(), Ok(Language::ZhCn));
        assert_eq!("ZH".parse(), Ok(Language::ZhCn));
        assert_eq!(" ms ".parse(), Ok(Language::Ms));
        assert_eq!("ta".parse(), Ok(Language::Ta));
    }

    #[test]
    fn parse_rejects_unknown_code() {
        assert_eq!(
            "fr".parse::<Language>(),
            Err(UnknownLanguage("fr".to_string()))
        );
    }

    #[test]
    fn code_round_trips_through_parse() {
        for language in Language::ALL {
            assert_eq!(language.code().parse(), Ok(language));
        }
    }

    #[test]
    fn label_uses_translation_when_present() {
        assert_eq!(label(Language::ZhCn, Key::AnnualIncome), "年收入");
    }

    #[test]
    fn label_falls_back_to_english() {
        assert_eq!(
            label(Language::Ta, Key::MarginalTaxRate),
            label(Language::En, Key::MarginalTaxRate)
        );
    }

    #[test]
    fn assumption_text_fills_in_ceiling() {
        let text = assumption_text(
            Language::En,
            &CpfAssumption::MonthlyCeilingExceeded {
                ceiling: dec!(7400),
            },
        );

        assert_eq!(text, "Monthly salary above the S$7,400 ceiling");
    }
}
