//! Department API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{
    DepartmentCreate, DepartmentResponse, DepartmentUpdate, EmployeeResponse,
};
use crate::services::{DepartmentService, EmployeeService};
use shared::AppResult;

/// List all departments
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DepartmentResponse>>> {
    let service = DepartmentService::new(state.db.clone());
    let departments = service.list().await?;
    Ok(Json(departments.into_iter().map(Into::into).collect()))
}

/// Get department by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DepartmentResponse>> {
    let service = DepartmentService::new(state.db.clone());
    let department = service.get_by_id(&id).await?;
    Ok(Json(department.into()))
}

/// Create a new department
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DepartmentCreate>,
) -> AppResult<(StatusCode, Json<DepartmentResponse>)> {
    let service = DepartmentService::new(state.db.clone());
    let department = service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(department.into())))
}

/// Update a department
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DepartmentUpdate>,
) -> AppResult<Json<DepartmentResponse>> {
    let service = DepartmentService::new(state.db.clone());
    let department = service.update(&id, payload).await?;
    Ok(Json(department.into()))
}

/// Soft delete a department
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let service = DepartmentService::new(state.db.clone());
    service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List the employees of a department
pub async fn list_employees(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let service = EmployeeService::new(state.db.clone());
    let employees = service.list_by_department(&id).await?;
    Ok(Json(employees.into_iter().map(Into::into).collect()))
}
