use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

#[napi]
pub fn calculate_metrics(input_json: String) -> NapiResult<String> {
    crate::calculate_metrics(&input_json).map_err(to_napi_error)
}

#[napi]
pub fn calculate_signals(input_json: String) -> NapiResult<String> {
    crate::calculate_signals(&input_json).map_err(to_napi_error)
}

#[napi]
pub fn calculate_dupont(input_json: String) -> NapiResult<String> {
    crate::calculate_dupont(&input_json).map_err(to_napi_error)
}

#[napi]
pub fn build_ratio_board(input_json: String) -> NapiResult<String> {
    crate::build_ratio_board(&input_json).map_err(to_napi_error)
}

#[napi]
pub fn analyze_flags(reports_json: String) -> NapiResult<String> {
    crate::analyze_flags(&reports_json).map_err(to_napi_error)
}

#[napi]
pub fn map_chart(kind: String, reports_json: String) -> NapiResult<String> {
    crate::map_chart(&kind, &reports_json).map_err(to_napi_error)
}

#[napi]
pub fn sort_reports(input_json: String) -> NapiResult<String> {
    crate::sort_reports(&input_json).map_err(to_napi_error)
}

#[napi]
pub fn extract_analysis_context(input_json: String) -> NapiResult<String> {
    crate::extract_analysis_context(&input_json).map_err(to_napi_error)
}
