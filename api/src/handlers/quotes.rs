//! Quote handlers
//!
//! Endpoints for creating, listing, sampling and deleting quotes.

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Quote, QuoteId, QuoteValidationError};
use crate::error::AppError;
use crate::AppState;

/// Request body for creating a quote
///
/// Missing fields decode as empty strings so they fail domain validation
/// with the matching message instead of a generic decode error.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateQuoteRequest {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub quote: String,
}

/// Query parameters for listing quotes
///
/// Decoded from raw pairs so a repeated `author` keeps its first value
/// instead of failing the whole request.
#[derive(Debug)]
pub struct ListQuotesQuery {
    pub author: Option<String>,
}

impl From<Vec<(String, String)>> for ListQuotesQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self {
            author: pairs
                .into_iter()
                .find(|(key, _)| key == "author")
                .map(|(_, value)| value),
        }
    }
}

/// Wire representation of a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub id: i64,
    pub author: String,
    pub quote: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Quote> for QuoteResponse {
    fn from(quote: &Quote) -> Self {
        Self {
            id: quote.id().0,
            author: quote.author().to_string(),
            quote: quote.text().to_string(),
            created_at: quote.created_at(),
        }
    }
}

impl TryFrom<QuoteResponse> for Quote {
    type Error = QuoteValidationError;

    fn try_from(response: QuoteResponse) -> Result<Self, Self::Error> {
        Quote::restore(
            QuoteId(response.id),
            response.author,
            response.quote,
            response.created_at,
        )
    }
}

/// POST /quotes
///
/// Create a quote. Responds 201 with the stored quote.
///
/// The body is decoded as JSON whatever `Content-Type` the client sent.
pub async fn create_quote(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<QuoteResponse>), AppError> {
    let body = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let request: CreateQuoteRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))?;

    let quote = state
        .quote_service
        .create_quote(&request.author, &request.quote)?;

    Ok((StatusCode::CREATED, Json(QuoteResponse::from(&*quote))))
}

/// GET /quotes
///
/// List all quotes, or only those by `?author=` when it is non-empty.
pub async fn list_quotes(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<QuoteResponse>>, AppError> {
    let Query(pairs) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let query = ListQuotesQuery::from(pairs);

    let quotes = match query.author.as_deref() {
        Some(author) if !author.is_empty() => {
            state.quote_service.get_quotes_by_author(author)?
        }
        _ => state.quote_service.get_all_quotes()?,
    };

    Ok(Json(
        quotes.iter().map(|q| QuoteResponse::from(&**q)).collect(),
    ))
}

/// GET /quotes/random
pub async fn random_quote(
    State(state): State<AppState>,
) -> Result<Json<QuoteResponse>, AppError> {
    let quote = state.quote_service.get_random_quote()?;
    Ok(Json(QuoteResponse::from(&*quote)))
}

/// DELETE /quotes/:id
///
/// Responds 204 with no body.
pub async fn delete_quote(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id.map_err(|_| AppError::BadRequest("Invalid quote ID".to_string()))?;

    state.quote_service.delete_quote(QuoteId(id))?;
    Ok(StatusCode::NO_CONTENT)
}
