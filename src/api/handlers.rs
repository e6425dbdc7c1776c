use axum::{extract::Path, Json};
use rand::rngs::OsRng;
use tracing::{debug, info, instrument};

use super::{types::*, ApiJson};
use crate::{
    abbreviations::AbbreviationTable,
    calculator::{self, Operation},
    credentials::{self, PasswordOptions, UsernameOptions},
    error::ServiceError,
};

fn find_table(slug: &str) -> Result<AbbreviationTable, ServiceError> {
    AbbreviationTable::from_slug(slug).ok_or_else(|| ServiceError::NotFound {
        message: format!("Abbreviation table \"{slug}\" not found."),
        available: AbbreviationTable::ALL
            .iter()
            .map(|table| table.slug().to_string())
            .collect(),
    })
}

fn calculate(
    op: Operation,
    request: CalculatorRequest,
) -> Result<Json<CalculatorResponse>, ServiceError> {
    let result = calculator::evaluate(op, request.num1.as_ref(), request.num2.as_ref())?;
    debug!(?op, result, "Calculated");
    Ok(Json(CalculatorResponse {
        success: true,
        result,
        operation: op.name(),
    }))
}

#[instrument(skip_all)]
pub async fn add(
    ApiJson(request): ApiJson<CalculatorRequest>,
) -> Result<Json<CalculatorResponse>, ServiceError> {
    calculate(Operation::Add, request)
}

#[instrument(skip_all)]
pub async fn subtract(
    ApiJson(request): ApiJson<CalculatorRequest>,
) -> Result<Json<CalculatorResponse>, ServiceError> {
    calculate(Operation::Subtract, request)
}

#[instrument(skip_all)]
pub async fn expand_abbreviation(
    Path(table): Path<String>,
    ApiJson(request): ApiJson<AbbreviationRequest>,
) -> Result<Json<ExpansionResponse>, ServiceError> {
    let table = find_table(&table)?;
    let abbreviation = request.abbreviation.unwrap_or_default();
    debug!(table = table.slug(), %abbreviation, "Looking up abbreviation");
    let entry = table.lookup(&abbreviation)?;
    info!(abbreviation = entry.abbreviation, "Expanded abbreviation");
    Ok(Json(ExpansionResponse {
        success: true,
        entry,
    }))
}

#[instrument(skip_all)]
pub async fn list_abbreviations(
    Path(table): Path<String>,
) -> Result<Json<TableResponse>, ServiceError> {
    let table = find_table(&table)?;
    Ok(Json(TableResponse {
        success: true,
        table: table.slug(),
        entries: table.entries().collect(),
    }))
}

#[instrument(skip_all)]
pub async fn generate_username(
    ApiJson(request): ApiJson<UsernameRequest>,
) -> Result<Json<UsernameResponse>, ServiceError> {
    let options = UsernameOptions::try_from(request)?;
    let username = credentials::generate_username(&options, &mut rand::thread_rng())?;
    info!(%username, "Generated username");
    Ok(Json(UsernameResponse {
        success: true,
        length: username.chars().count(),
        username,
    }))
}

// Passwords are secrets: always drawn from the OS and never logged
#[instrument(skip_all)]
pub async fn generate_password(
    ApiJson(request): ApiJson<PasswordRequest>,
) -> Result<Json<PasswordResponse>, ServiceError> {
    let options = PasswordOptions::try_from(request)?;
    let password = credentials::generate_password(&options, &mut OsRng)?;
    info!(length = password.len(), "Generated password");
    Ok(Json(PasswordResponse {
        success: true,
        length: password.len(),
        password,
    }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "backend",
    })
}
