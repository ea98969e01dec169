mod result;
mod view;

pub use result::ResultSummary;
pub use view::PredictionForm;
