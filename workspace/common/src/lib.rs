//! Browser-independent core of the churn prediction client.
//!
//! Everything here is plain Rust so it can be unit tested on the host: the
//! wire types exchanged with the prediction service, numeric coercion of form
//! input, classification of HTTP responses, the page state machine and the
//! chart series shown on the dashboard.

pub mod charts;
pub mod coerce;
pub mod error;
pub mod prediction;
pub mod response;
pub mod state;

pub use charts::{ChartId, ChartKind, ChartSeries, DataSource};
pub use error::{ApiError, FormError};
pub use prediction::{
    Choice, Contract, CustomerForm, FormField, PaymentMethod, PredictionRequest, PredictionResult,
    YesNo,
};
pub use response::{PredictionOutcome, classify_response};
pub use state::{PredictionAction, PredictionState, SettleMessages};
