use napi::Result as NapiResult;
use napi_derive::napi;

use prop_invest_core::rental;
use prop_invest_core::rental::ProjectionRequest;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Run the full investment projection for a `{ "loan": …, "property": … }`
/// parameter document and return the output envelope as JSON.
#[napi]
pub fn project_investment(input_json: String) -> NapiResult<String> {
    let request: ProjectionRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        rental::project_investment(&request.loan, &request.property).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Calculate the post-grace periodic installment for a loan document.
#[napi]
pub fn periodic_payment(input_json: String) -> NapiResult<String> {
    let loan: rental::LoanParameters = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = serde_json::json!({
        "periodic_payment": rental::periodic_installment(&loan),
        "amortising_months": loan.amortising_months(),
    });
    serde_json::to_string(&output).map_err(to_napi_error)
}
