//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive documentation at
//! `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and
/// Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/register` - Create an account
/// - `POST /api/auth/login` - Authenticate and start a session
/// - `GET /api/auth/logout` - End the session
/// - `GET /api/auth/user` - Current user information
/// - `GET /api/debts` - List debts, optionally filtered by state
/// - `GET /api/debts/states` - Reference debt states
/// - `GET /api/debts/summary` - Per-state amount totals
/// - `GET /api/debts/export` - Debts as a JSON attachment
/// - `GET /api/debts/{debt_id}` - Single debt
/// - `POST /api/debts` - Create a debt
/// - `PUT /api/debts/{debt_id}` - Update amount/state
/// - `DELETE /api/debts/{debt_id}` - Delete a debt
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Debita", description = "Debita API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::debt::DEBT_TAG, description = "Debt API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(
            controller::debt::list_debts,
            controller::debt::create_debt
        ))
        .routes(routes!(controller::debt::get_debt_states))
        .routes(routes!(controller::debt::get_amount_sums))
        .routes(routes!(controller::debt::export_debts))
        .routes(routes!(
            controller::debt::get_debt,
            controller::debt::update_debt,
            controller::debt::delete_debt
        ))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
