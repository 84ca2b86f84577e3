use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Forecasting
// ---------------------------------------------------------------------------

#[napi]
pub fn forecast_cash_flow(input_json: String) -> NapiResult<String> {
    let input: cashcast_core::forecast::ForecastInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        cashcast_core::forecast::forecast_with_metadata(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn forecast_summary(input_json: String) -> NapiResult<String> {
    let input: cashcast_core::forecast::ForecastInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        cashcast_core::forecast::forecast_cash_flow(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output.summary).map_err(to_napi_error)
}
