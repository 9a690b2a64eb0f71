use actix_web::{
    get,
    web::{self, ServiceConfig},
    HttpResponse,
};
use tracing::debug;

use crate::{
    errors::ConversionError,
    models::{ConversionQuery, ConversionResult},
    utils::{
        convert_amount, exchange_rate::ExchangeRateApi, round_to_decimals, validate_amount,
        validate_currency_code,
    },
};

const RESULT_DECIMALS: u32 = 2;

fn validate_query(query: &ConversionQuery) -> Result<(), ConversionError> {
    validate_currency_code("from", &query.from_currency).map_err(ConversionError::Validation)?;
    validate_currency_code("to", &query.to_currency).map_err(ConversionError::Validation)?;
    validate_amount(query.value).map_err(ConversionError::Validation)
}

#[get("/api/v1/rates")]
pub async fn convert_currency(
    api: web::Data<ExchangeRateApi>,
    query: web::Query<ConversionQuery>,
) -> Result<HttpResponse, ConversionError> {
    let query = query.into_inner();
    validate_query(&query)?;

    let rates = api.fetch_rates(&query.from_currency).await?;
    let rate = rates
        .rate_for(&query.to_currency)
        .ok_or_else(|| ConversionError::RateNotFound {
            from: query.from_currency.clone(),
            to: query.to_currency.clone(),
        })?;

    let result = round_to_decimals(convert_amount(query.value, rate), RESULT_DECIMALS)
        .map_err(ConversionError::Unexpected)?;
    debug!(
        from = %query.from_currency,
        to = %query.to_currency,
        value = query.value,
        rate,
        result,
        "Converted currency"
    );

    Ok(HttpResponse::Ok().json(ConversionResult { result }))
}

pub fn init(config: &mut ServiceConfig) {
    config
        .app_data(web::QueryConfig::default().error_handler(|err, _req| {
            ConversionError::Validation(err.to_string()).into()
        }))
        .service(convert_currency);
}
