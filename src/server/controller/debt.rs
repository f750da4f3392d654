use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        debt::{
            AmountSumDto, CreateDebtDto, DebtDto, DebtStateDto, DeletedDto, UpdateDebtDto,
        },
    },
    server::{
        controller::util::current_user_id,
        error::Error,
        model::app::AppState,
        service::debt::{DebtService, DebtUpdate, NewDebt},
    },
};

pub static DEBT_TAG: &str = "debt";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListDebtsParams {
    /// Restrict the list to a single state
    pub state_id: Option<i32>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteDebtParams {
    /// State the debt was in, used to target the filtered-list cache entry
    pub state_id: Option<i32>,
}

/// Get all debts owned by the logged in user
#[utoipa::path(
    get,
    path = "/api/debts",
    tag = DEBT_TAG,
    params(ListDebtsParams),
    responses(
        (status = 200, description = "The user's debts in insertion order", body = Vec<DebtDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_debts(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListDebtsParams>,
) -> Result<impl IntoResponse, Error> {
    let user_id = current_user_id(&session).await?;

    let debts = DebtService::new(&state.db, &state.cache)
        .list_debts(Some(user_id), params.state_id)
        .await?;

    Ok((StatusCode::OK, axum::Json(debts)))
}

/// Get the reference debt states
#[utoipa::path(
    get,
    path = "/api/debts/states",
    tag = DEBT_TAG,
    responses(
        (status = 200, description = "All debt states", body = Vec<DebtStateDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_debt_states(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let states = DebtService::new(&state.db, &state.cache)
        .get_debt_states()
        .await?;

    Ok((StatusCode::OK, axum::Json(states)))
}

/// Get the logged in user's debt amounts summed per state
///
/// States without any debt are omitted.
#[utoipa::path(
    get,
    path = "/api/debts/summary",
    tag = DEBT_TAG,
    responses(
        (status = 200, description = "Per-state amount totals", body = Vec<AmountSumDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_amount_sums(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = current_user_id(&session).await?;

    let sums = DebtService::new(&state.db, &state.cache)
        .amount_sums_by_state(user_id)
        .await?;

    Ok((StatusCode::OK, axum::Json(sums)))
}

/// Download the logged in user's debts as a JSON attachment
#[utoipa::path(
    get,
    path = "/api/debts/export",
    tag = DEBT_TAG,
    responses(
        (status = 200, description = "All debts as a JSON file", body = Vec<DebtDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_debts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = current_user_id(&session).await?;

    let debts = DebtService::new(&state.db, &state.cache)
        .list_debts(Some(user_id), None)
        .await?;

    Ok((
        StatusCode::OK,
        [(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"debts.json\"",
        )],
        axum::Json(debts),
    ))
}

/// Get a single debt owned by the logged in user
///
/// A debt owned by another user reads as not found.
#[utoipa::path(
    get,
    path = "/api/debts/{debt_id}",
    tag = DEBT_TAG,
    params(("debt_id" = i32, Path, description = "Debt ID")),
    responses(
        (status = 200, description = "The debt", body = DebtDto),
        (status = 404, description = "Debt not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_debt(
    State(state): State<AppState>,
    session: Session,
    Path(debt_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = current_user_id(&session).await?;

    let Some(debt) = DebtService::new(&state.db, &state.cache)
        .get_debt(debt_id, user_id)
        .await?
    else {
        return Err(Error::NotFoundOrForbidden);
    };

    Ok((StatusCode::OK, axum::Json(debt)))
}

/// Create a debt for the logged in user
#[utoipa::path(
    post,
    path = "/api/debts",
    tag = DEBT_TAG,
    request_body = CreateDebtDto,
    responses(
        (status = 201, description = "Debt created", body = DebtDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_debt(
    State(state): State<AppState>,
    session: Session,
    axum::Json(body): axum::Json<CreateDebtDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = current_user_id(&session).await?;

    let debt = DebtService::new(&state.db, &state.cache)
        .create_debt(NewDebt {
            user_id: Some(user_id),
            amount: body.amount,
            creation_date: body.creation_date,
            state_id: body.state_id,
        })
        .await?;

    Ok((StatusCode::CREATED, axum::Json(debt)))
}

/// Update a debt's amount and state
///
/// A debt that is missing, owned by another user, or already Paid is not
/// updated and reads as not found.
#[utoipa::path(
    put,
    path = "/api/debts/{debt_id}",
    tag = DEBT_TAG,
    params(("debt_id" = i32, Path, description = "Debt ID")),
    request_body = UpdateDebtDto,
    responses(
        (status = 200, description = "The updated debt", body = DebtDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 404, description = "Debt not found or not updatable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_debt(
    State(state): State<AppState>,
    session: Session,
    Path(debt_id): Path<i32>,
    axum::Json(body): axum::Json<UpdateDebtDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = current_user_id(&session).await?;

    let Some(debt) = DebtService::new(&state.db, &state.cache)
        .update_debt(DebtUpdate {
            id: Some(debt_id),
            user_id: Some(user_id),
            amount: body.amount,
            state_id: body.state_id,
        })
        .await?
    else {
        return Err(Error::NotFoundOrForbidden);
    };

    Ok((StatusCode::OK, axum::Json(debt)))
}

/// Delete a debt owned by the logged in user
#[utoipa::path(
    delete,
    path = "/api/debts/{debt_id}",
    tag = DEBT_TAG,
    params(
        ("debt_id" = i32, Path, description = "Debt ID"),
        DeleteDebtParams
    ),
    responses(
        (status = 200, description = "Debt deleted", body = DeletedDto),
        (status = 404, description = "Debt not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_debt(
    State(state): State<AppState>,
    session: Session,
    Path(debt_id): Path<i32>,
    Query(params): Query<DeleteDebtParams>,
) -> Result<impl IntoResponse, Error> {
    let user_id = current_user_id(&session).await?;

    let deleted = DebtService::new(&state.db, &state.cache)
        .delete_debt(debt_id, user_id, params.state_id)
        .await?;

    if deleted == 0 {
        return Err(Error::NotFoundOrForbidden);
    }

    Ok((StatusCode::OK, axum::Json(DeletedDto { deleted })))
}
