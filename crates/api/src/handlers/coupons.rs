//! Coupon add/edit forms (plain JSON, no images).

use std::sync::LazyLock;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bloomcart_core::error::CoreError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::error::AppResult;
use crate::handlers::listing;
use crate::middleware::auth::AdminSession;
use crate::resources::{Coupons, Resource};
use crate::response::DataResponse;
use crate::state::AppState;

/// Percent discounts are capped well below 100 so a typo can't zero out
/// an order.
const MAX_PERCENT_DISCOUNT: f64 = 90.0;

static COUPON_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{4,20}$").expect("static regex"));

/// Discount interpretation for a coupon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// `discount` is a percentage of the order total.
    Percent,
    /// `discount` is a flat currency amount.
    Flat,
}

/// Request body for coupon create/update.
#[derive(Debug, Deserialize, Validate)]
pub struct CouponPayload {
    #[validate(regex(
        path = *COUPON_CODE,
        message = "Code must be 4-20 uppercase letters or digits"
    ))]
    pub code: String,
    #[serde(rename = "type")]
    pub discount_type: DiscountType,
    pub discount: f64,
    /// Expiry date, `YYYY-MM-DD`.
    pub expiry: String,
    #[serde(default)]
    pub active: bool,
}

impl CouponPayload {
    /// Field checks validator can't express: discount bounds depend on the
    /// type, and the expiry must be a real calendar date.
    fn check(&self) -> AppResult<()> {
        self.validate()?;

        match self.discount_type {
            DiscountType::Percent => {
                if self.discount <= 0.0 || self.discount > MAX_PERCENT_DISCOUNT {
                    return Err(CoreError::Validation(format!(
                        "Percent discount must be between 0 and {MAX_PERCENT_DISCOUNT}"
                    ))
                    .into());
                }
            }
            DiscountType::Flat => {
                if self.discount <= 0.0 {
                    return Err(
                        CoreError::Validation("Flat discount must be positive".into()).into(),
                    );
                }
            }
        }

        if chrono::NaiveDate::parse_from_str(&self.expiry, "%Y-%m-%d").is_err() {
            return Err(
                CoreError::Validation("Expiry must be a date in YYYY-MM-DD form".into()).into(),
            );
        }

        Ok(())
    }

    fn to_upstream(&self) -> Value {
        serde_json::json!({
            "code": self.code,
            "type": self.discount_type,
            "discount": self.discount,
            "expiry": self.expiry,
            "active": self.active,
        })
    }
}

/// POST /api/v1/coupons
pub async fn create(
    session: AdminSession,
    State(state): State<AppState>,
    Json(payload): Json<CouponPayload>,
) -> AppResult<(StatusCode, Json<DataResponse<Value>>)> {
    payload.check()?;

    let body = state
        .upstream
        .create(&Coupons::PATHS.add(), &payload.to_upstream(), &session.token)
        .await?;

    let record = listing::refetch_after_mutation::<Coupons>(&state, body).await?;
    tracing::info!(code = %payload.code, "Coupon created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// PUT /api/v1/coupons/{id}
pub async fn update(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CouponPayload>,
) -> AppResult<Json<DataResponse<Value>>> {
    payload.check()?;

    let body = state
        .upstream
        .update(
            &Coupons::PATHS.update(&id),
            &payload.to_upstream(),
            &session.token,
        )
        .await?;

    let record = listing::refetch_after_mutation::<Coupons>(&state, body).await?;
    tracing::info!(id = %id, code = %payload.code, "Coupon updated");

    Ok(Json(DataResponse { data: record }))
}
