//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};

use crate::network::CompanyStats;
use crate::planner::{Guidance, Objective, Planner};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ports", get(list_ports))
        .route("/companies", get(list_companies))
        .route("/companies/stats", get(company_stats))
        .route("/route", get(find_route))
        .route("/journey/plan", post(plan_journey))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Every port with its charge, position and number of departures.
async fn list_ports(State(state): State<AppState>) -> Json<PortsResponse> {
    Json(PortsResponse::from_graph(&state.graph))
}

/// Operating companies in order of first appearance.
async fn list_companies(State(state): State<AppState>) -> Json<CompaniesResponse> {
    let companies = state
        .graph
        .companies()
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(CompaniesResponse { companies })
}

/// Cost and duration figures for one company, or for all of them.
async fn company_stats(
    State(state): State<AppState>,
    Query(req): Query<CompanyStatsRequest>,
) -> Json<CompanyStats> {
    let company = req.company.as_deref().filter(|c| !c.is_empty());
    Json(state.graph.company_stats(company))
}

fn parse_objective(value: Option<&str>) -> Result<Objective, AppError> {
    match value {
        None | Some("cost") => Ok(Objective::Cost),
        Some("time") => Ok(Objective::Time),
        Some(other) => Err(AppError::BadRequest {
            message: format!("Invalid objective: {other} (expected cost or time)"),
        }),
    }
}

fn check_day(state: &AppState, day: u32) -> Result<u32, AppError> {
    let last = state.config.sweep_days;
    if (1..=last).contains(&day) {
        Ok(day)
    } else {
        Err(AppError::BadRequest {
            message: format!("Invalid day: {day} (expected 1-{last})"),
        })
    }
}

/// Best single-leg route between two ports.
async fn find_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let objective = parse_objective(req.objective.as_deref())?;
    let day = check_day(&state, req.day.unwrap_or(1))?;
    let guidance = if req.guided {
        Guidance::Guided
    } else {
        Guidance::Plain
    };

    for name in [&req.origin, &req.destination] {
        if state.graph.port_id(name).is_none() {
            return Err(AppError::NotFound {
                message: format!("Unknown port: {name}"),
            });
        }
    }

    let response = tokio::task::spawn_blocking(move || {
        let planner = Planner::new(&state.graph, &state.config);
        let path = planner.find_path(&req.origin, &req.destination, objective, guidance, day);
        RouteResponse::from_path(&state.graph, &path, objective)
    })
    .await
    .map_err(AppError::from)?;

    Ok(Json(response))
}

/// Plan a journey through an ordered list of waypoints.
async fn plan_journey(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PlanJourneyResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: PlanJourneyRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "rejecting journey request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;
    let objective = parse_objective(req.objective.as_deref())?;
    let day = req.day.map(|d| check_day(&state, d)).transpose()?;

    let response = tokio::task::spawn_blocking(move || {
        let planner = Planner::new(&state.graph, &state.config);
        let result = match day {
            Some(day) => planner.plan_journey(&req.waypoints, objective, day),
            None => planner.plan_journey_best_day(&req.waypoints),
        };
        info!(
            waypoints = req.waypoints.len(),
            valid = result.is_valid(),
            day = result.start_day,
            "journey planned"
        );
        PlanJourneyResponse::from_result(&state.graph, &result)
    })
    .await
    .map_err(AppError::from)?;

    Ok(Json(response))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<tokio::task::JoinError> for AppError {
    fn from(e: tokio::task::JoinError) -> Self {
        AppError::Internal {
            message: format!("search task failed: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::build_graph;
    use crate::planner::SearchConfig;

    const PORTS: &str = "\
Oslo 0 0 0
Hamburg 50 10 0
Lisbon 0 20 0
";

    const ROUTES: &str = "\
Oslo Hamburg 1/12/2024 22:00 06:00 300 Hurtigruten
Hamburg Lisbon 2/12/2024 20:00 23:30 500 Hapag
Hamburg Lisbon 5/12/2024 07:00 09:00 100 Hapag
";

    fn state() -> AppState {
        let (graph, _) = build_graph(PORTS, ROUTES);
        AppState::new(graph, SearchConfig::default())
    }

    fn route_request(objective: Option<&str>, day: Option<u32>) -> RouteRequest {
        RouteRequest {
            origin: "Oslo".into(),
            destination: "Lisbon".into(),
            objective: objective.map(String::from),
            guided: false,
            day,
        }
    }

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn lists_ports_and_companies() {
        let Json(ports) = list_ports(State(state())).await;
        assert_eq!(ports.ports.len(), 3);

        let Json(companies) = list_companies(State(state())).await;
        assert_eq!(companies.companies, vec!["Hurtigruten", "Hapag"]);
    }

    #[tokio::test]
    async fn stats_for_one_company_or_all() {
        let Json(all) = company_stats(
            State(state()),
            Query(CompanyStatsRequest { company: None }),
        )
        .await;
        assert_eq!(all.routes, 3);

        let Json(hapag) = company_stats(
            State(state()),
            Query(CompanyStatsRequest {
                company: Some("Hapag".into()),
            }),
        )
        .await;
        assert_eq!(hapag.routes, 2);
        assert_eq!(hapag.min_cost, 100);
    }

    #[tokio::test]
    async fn route_by_cost_and_time() {
        // Four started days at Hamburg still undercut the dearer sailing
        let Json(cheap) = find_route(State(state()), Query(route_request(Some("cost"), None)))
            .await
            .unwrap();
        assert!(cheap.found);
        assert_eq!(cheap.ports, vec!["Oslo", "Hamburg", "Lisbon"]);
        assert_eq!(cheap.sailings[1].date, "5/12/2024");
        assert_eq!(cheap.metric, 300 + 100 + 4 * 50);

        let Json(quick) = find_route(State(state()), Query(route_request(Some("time"), Some(1))))
            .await
            .unwrap();
        assert_eq!(quick.sailings[1].date, "2/12/2024");
        assert_eq!(quick.metric, 480 + 840 + 210);
    }

    #[tokio::test]
    async fn route_without_departure_that_day() {
        let Json(response) = find_route(State(state()), Query(route_request(None, Some(2))))
            .await
            .unwrap();
        assert!(!response.found);
        assert!(response.sailings.is_empty());
    }

    #[tokio::test]
    async fn route_rejects_bad_input() {
        let err = find_route(State(state()), Query(route_request(Some("fastest"), None)))
            .await
            .unwrap_err();
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);

        let err = find_route(State(state()), Query(route_request(None, Some(0))))
            .await
            .unwrap_err();
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);

        let mut req = route_request(None, None);
        req.destination = "Atlantis".into();
        let err = find_route(State(state()), Query(req)).await.unwrap_err();
        assert_eq!(status_of(err), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn plan_on_a_given_day() {
        let body = Bytes::from(
            r#"{"waypoints": ["Oslo", "Hamburg", "Lisbon"], "objective": "time", "day": 1}"#,
        );
        let Json(plan) = plan_journey(State(state()), body).await.unwrap();
        assert!(plan.valid);
        assert_eq!(plan.start_day, 1);
        assert_eq!(plan.legs.len(), 2);
        assert_eq!(plan.total_mins, 480 + 840 + 210);
    }

    #[tokio::test]
    async fn plan_sweeps_days_when_none_given() {
        let body = Bytes::from(r#"{"waypoints": ["Oslo", "Lisbon"]}"#);
        let Json(plan) = plan_journey(State(state()), body).await.unwrap();
        assert!(plan.valid);
        assert_eq!(plan.start_day, 1);
    }

    #[tokio::test]
    async fn invalid_plan_is_not_an_http_error() {
        let body = Bytes::from(r#"{"waypoints": ["Lisbon", "Oslo"], "day": 3}"#);
        let Json(plan) = plan_journey(State(state()), body).await.unwrap();
        assert!(!plan.valid);
        assert!(plan.failure.is_some());

        let body = Bytes::from(r#"{"waypoints": ["Oslo"]}"#);
        let Json(plan) = plan_journey(State(state()), body).await.unwrap();
        assert!(!plan.valid);
    }

    #[tokio::test]
    async fn plan_rejects_malformed_requests() {
        let err = plan_journey(State(state()), Bytes::from("not json"))
            .await
            .unwrap_err();
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);

        let body = Bytes::from(r#"{"waypoints": ["Oslo", "Lisbon"], "day": 0}"#);
        let err = plan_journey(State(state()), body).await.unwrap_err();
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);

        let body = Bytes::from(r#"{"waypoints": ["Oslo", "Lisbon"], "objective": "scenic"}"#);
        let err = plan_journey(State(state()), body).await.unwrap_err();
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_errors_are_500() {
        let err = AppError::Internal {
            message: "boom".into(),
        };
        assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
