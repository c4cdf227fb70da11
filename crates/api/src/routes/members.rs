//! Member CRUD endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use domain::{CreateMember, MemberService, Response, SuccessMessage};
use member_store::{Member, MemberId, MemberRepository, MemberUpdate};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<R: MemberRepository> {
    pub member_service: MemberService<R>,
}

type Reply<T> = Result<(StatusCode, Json<T>), ApiError>;

fn reply<T>(response: Response<T>) -> (StatusCode, Json<T>) {
    (response.status, Json(response.body))
}

// -- Handlers --

/// POST /member — create a member with a server-assigned ID.
#[tracing::instrument(skip(state, payload))]
pub async fn create<R: MemberRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    payload: Result<Json<CreateMember>, JsonRejection>,
) -> Reply<Member> {
    let Json(cmd) = payload.map_err(|e| {
        tracing::debug!(error = %e, "rejected create payload");
        ApiError::InvalidRequest
    })?;
    if !cmd.has_required_fields() {
        return Err(ApiError::InvalidRequest);
    }

    let response = state.member_service.create_member(cmd).await?;
    Ok(reply(response))
}

/// GET /member/:id — load a member by ID.
#[tracing::instrument(skip(state, path), fields(member_id = tracing::field::Empty))]
pub async fn get<R: MemberRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    path: Result<Path<String>, PathRejection>,
) -> Reply<Member> {
    let id = member_id(path)?;
    let response = state.member_service.get_member(id).await?;
    Ok(reply(response))
}

/// GET /members — list every member.
#[tracing::instrument(skip(state))]
pub async fn list<R: MemberRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> Reply<Vec<Member>> {
    let response = state.member_service.list_members().await?;
    Ok(reply(response))
}

/// PUT /member/:id — apply a partial update and return the merged member.
#[tracing::instrument(skip(state, path, payload), fields(member_id = tracing::field::Empty))]
pub async fn update<R: MemberRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<MemberUpdate>, JsonRejection>,
) -> Reply<Member> {
    let id = member_id(path)?;
    let Json(update) = payload.map_err(|e| {
        tracing::debug!(error = %e, "rejected update payload");
        ApiError::InvalidRequest
    })?;

    let response = state.member_service.update_member(id, update).await?;
    Ok(reply(response))
}

/// DELETE /member/:id — delete a member.
#[tracing::instrument(skip(state, path), fields(member_id = tracing::field::Empty))]
pub async fn delete<R: MemberRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    path: Result<Path<String>, PathRejection>,
) -> Reply<SuccessMessage> {
    let id = member_id(path)?;
    let response = state.member_service.delete_member(id).await?;
    Ok(reply(response))
}

/// Extracts the `:id` segment; undecodable segments count as invalid IDs.
fn member_id(path: Result<Path<String>, PathRejection>) -> Result<MemberId, ApiError> {
    let Path(id) = path.map_err(|e| {
        tracing::debug!(error = %e, "rejected member id segment");
        ApiError::InvalidMemberId
    })?;
    tracing::Span::current().record("member_id", id.as_str());
    parse_member_id(&id)
}

fn parse_member_id(id: &str) -> Result<MemberId, ApiError> {
    id.parse().map_err(|_| ApiError::InvalidMemberId)
}
