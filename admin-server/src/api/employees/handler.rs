//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{EmployeeCreate, EmployeeResponse, EmployeeUpdate};
use crate::services::EmployeeService;
use shared::AppResult;

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let service = EmployeeService::new(state.db.clone());
    let employees = service.list().await?;
    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<EmployeeResponse>> {
    let service = EmployeeService::new(state.db.clone());
    let employee = service.get_by_id(&id).await?;
    Ok(Json(employee.into()))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<EmployeeResponse>)> {
    let service = EmployeeService::new(state.db.clone());
    let employee = service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(employee.into())))
}

/// Update an employee
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<EmployeeResponse>> {
    let service = EmployeeService::new(state.db.clone());
    let employee = service.update(&id, payload).await?;
    Ok(Json(employee.into()))
}

/// Soft delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let service = EmployeeService::new(state.db.clone());
    service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
