//! Wire types exchanged with the prediction service.
//!
//! The service keys the request body by human-readable column names
//! ("Monthly Charge", "Tenure in Months", ...). Those names only appear in the
//! serde attributes below; the rest of the client works with typed fields.

use serde::{Deserialize, Serialize};

use crate::coerce::{coerce_float, coerce_int};
use crate::error::FormError;

/// A categorical attribute with a closed set of allowed values.
pub trait Choice: Copy + Sized + 'static {
    /// Allowed values, in the order the form lists them.
    const ALL: &'static [Self];

    /// Value as sent on the wire and shown in the form.
    fn as_str(&self) -> &'static str;

    /// Case-insensitive lookup, so "Month-to-month" still maps to
    /// [`Contract::MonthToMonth`].
    fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|choice| choice.as_str().eq_ignore_ascii_case(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Contract {
    #[serde(rename = "Month-to-Month")]
    MonthToMonth,
    #[serde(rename = "One Year")]
    OneYear,
    #[serde(rename = "Two Year")]
    TwoYear,
}

impl Choice for Contract {
    const ALL: &'static [Self] = &[Self::MonthToMonth, Self::OneYear, Self::TwoYear];

    fn as_str(&self) -> &'static str {
        match self {
            Self::MonthToMonth => "Month-to-Month",
            Self::OneYear => "One Year",
            Self::TwoYear => "Two Year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    #[serde(rename = "Electronic Check")]
    ElectronicCheck,
    #[serde(rename = "Mailed Check")]
    MailedCheck,
}

impl Choice for PaymentMethod {
    const ALL: &'static [Self] = &[
        Self::CreditCard,
        Self::BankTransfer,
        Self::ElectronicCheck,
        Self::MailedCheck,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::BankTransfer => "Bank Transfer",
            Self::ElectronicCheck => "Electronic Check",
            Self::MailedCheck => "Mailed Check",
        }
    }
}

/// Answer for the yes/no service add-ons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl Choice for YesNo {
    const ALL: &'static [Self] = &[Self::Yes, Self::No];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

/// One input of the prediction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    MonthlyCharge,
    AvgMonthlyGbDownload,
    TenureInMonths,
    NumberOfReferrals,
    Contract,
    PaymentMethod,
    OnlineSecurity,
    PremiumTechSupport,
}

impl FormField {
    /// Free-text inputs, coerced to numbers on submit.
    pub const NUMERIC: [FormField; 4] = [
        FormField::MonthlyCharge,
        FormField::AvgMonthlyGbDownload,
        FormField::TenureInMonths,
        FormField::NumberOfReferrals,
    ];

    /// Drop-down inputs.
    pub const CATEGORICAL: [FormField; 4] = [
        FormField::Contract,
        FormField::PaymentMethod,
        FormField::OnlineSecurity,
        FormField::PremiumTechSupport,
    ];

    /// Label shown next to the control; also the key used on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::MonthlyCharge => "Monthly Charge",
            FormField::AvgMonthlyGbDownload => "Avg Monthly GB Download",
            FormField::TenureInMonths => "Tenure in Months",
            FormField::NumberOfReferrals => "Number of Referrals",
            FormField::Contract => "Contract",
            FormField::PaymentMethod => "Payment Method",
            FormField::OnlineSecurity => "Online Security",
            FormField::PremiumTechSupport => "Premium Tech Support",
        }
    }

    /// DOM id / name attribute of the control.
    pub fn input_id(&self) -> &'static str {
        match self {
            FormField::MonthlyCharge => "monthly-charge",
            FormField::AvgMonthlyGbDownload => "avg-monthly-gb-download",
            FormField::TenureInMonths => "tenure-in-months",
            FormField::NumberOfReferrals => "number-of-referrals",
            FormField::Contract => "contract",
            FormField::PaymentMethod => "payment-method",
            FormField::OnlineSecurity => "online-security",
            FormField::PremiumTechSupport => "premium-tech-support",
        }
    }

    /// Allowed values of a drop-down; empty for numeric inputs.
    pub fn options(&self) -> Vec<&'static str> {
        fn names<C: Choice>() -> Vec<&'static str> {
            C::ALL.iter().map(C::as_str).collect()
        }

        match self {
            FormField::Contract => names::<Contract>(),
            FormField::PaymentMethod => names::<PaymentMethod>(),
            FormField::OnlineSecurity | FormField::PremiumTechSupport => names::<YesNo>(),
            _ => Vec::new(),
        }
    }
}

/// Raw values of the prediction form, exactly as typed or selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerForm {
    pub monthly_charge: String,
    pub avg_monthly_gb_download: String,
    pub tenure_in_months: String,
    pub number_of_referrals: String,
    pub contract: String,
    pub payment_method: String,
    pub online_security: String,
    pub premium_tech_support: String,
}

impl CustomerForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::MonthlyCharge => &self.monthly_charge,
            FormField::AvgMonthlyGbDownload => &self.avg_monthly_gb_download,
            FormField::TenureInMonths => &self.tenure_in_months,
            FormField::NumberOfReferrals => &self.number_of_referrals,
            FormField::Contract => &self.contract,
            FormField::PaymentMethod => &self.payment_method,
            FormField::OnlineSecurity => &self.online_security,
            FormField::PremiumTechSupport => &self.premium_tech_support,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::MonthlyCharge => &mut self.monthly_charge,
            FormField::AvgMonthlyGbDownload => &mut self.avg_monthly_gb_download,
            FormField::TenureInMonths => &mut self.tenure_in_months,
            FormField::NumberOfReferrals => &mut self.number_of_referrals,
            FormField::Contract => &mut self.contract,
            FormField::PaymentMethod => &mut self.payment_method,
            FormField::OnlineSecurity => &mut self.online_security,
            FormField::PremiumTechSupport => &mut self.premium_tech_support,
        };
        *slot = value;
    }
}

/// Body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(rename = "Monthly Charge")]
    pub monthly_charge: f64,
    #[serde(rename = "Avg Monthly GB Download")]
    pub avg_monthly_gb_download: f64,
    #[serde(rename = "Tenure in Months")]
    pub tenure_in_months: i64,
    #[serde(rename = "Number of Referrals")]
    pub number_of_referrals: i64,
    #[serde(rename = "Contract")]
    pub contract: Contract,
    #[serde(rename = "Payment Method")]
    pub payment_method: PaymentMethod,
    #[serde(rename = "Online Security")]
    pub online_security: YesNo,
    #[serde(rename = "Premium Tech Support")]
    pub premium_tech_support: YesNo,
}

impl PredictionRequest {
    /// Coerces the numeric inputs (anything unparsable becomes 0) and parses
    /// the drop-down selections.
    pub fn from_form(form: &CustomerForm) -> Result<Self, FormError> {
        Ok(Self {
            monthly_charge: coerce_float(&form.monthly_charge),
            avg_monthly_gb_download: coerce_float(&form.avg_monthly_gb_download),
            tenure_in_months: coerce_int(&form.tenure_in_months),
            number_of_referrals: coerce_int(&form.number_of_referrals),
            contract: choice(form, FormField::Contract)?,
            payment_method: choice(form, FormField::PaymentMethod)?,
            online_security: choice(form, FormField::OnlineSecurity)?,
            premium_tech_support: choice(form, FormField::PremiumTechSupport)?,
        })
    }
}

fn choice<C: Choice>(form: &CustomerForm, field: FormField) -> Result<C, FormError> {
    C::parse(form.get(field)).ok_or(FormError::MissingChoice(field))
}

/// Answer of the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// 1 when the customer is predicted to churn, 0 otherwise
    pub churn_prediction: u8,
    /// Probability of churn in percent (0-100)
    pub churn_probability: Option<f64>,
}

impl PredictionResult {
    pub fn is_churn(&self) -> bool {
        self.churn_prediction == 1
    }

    pub fn label(&self) -> &'static str {
        if self.is_churn() { "Churn" } else { "No Churn" }
    }

    pub fn probability_text(&self) -> String {
        match self.churn_probability {
            Some(probability) => format!("{}%", probability),
            None => "N/A".to_string(),
        }
    }
}
