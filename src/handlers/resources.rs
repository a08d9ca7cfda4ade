use axum::{Json, extract::State, http::StatusCode};
use tracing::{info, instrument};

use crate::{
    controllayer::resources::{self as control, Deleted},
    datalayer::CRUD::{
        Resource,
        types::{MedicalRecord, MedicalRecords, Pet, Pets},
    },
    errors::ServiceResult,
    handlers::extractors::{ResourceId, ValidatedJson},
    state::AppState,
};

// ===== GENERIC HANDLERS =====
//
// Mounted once per resource by `routes::resource_routes::<R>()`.

/// GET /{resource}
#[instrument(skip(state), fields(resource = R::NAMES.plural))]
pub async fn list<R: Resource>(State(state): State<AppState>) -> ServiceResult<Json<Vec<R>>> {
    let rows = control::list::<R>(state.db.pool()).await?;
    Ok(Json(rows))
}

/// GET /{resource}/:id
#[instrument(skip(state), fields(resource = R::NAMES.plural))]
pub async fn show<R: Resource>(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> ServiceResult<Json<R>> {
    let row = control::get::<R>(state.db.pool(), id).await?;
    Ok(Json(row))
}

/// POST /{resource}
#[instrument(skip(state, fields), fields(resource = R::NAMES.plural))]
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    ValidatedJson(fields): ValidatedJson<R::Fields>,
) -> ServiceResult<(StatusCode, Json<R>)> {
    info!("Creating {}", R::NAMES.singular);
    let row = control::create::<R>(state.db.pool(), fields).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /{resource}/:id
#[instrument(skip(state, fields), fields(resource = R::NAMES.plural))]
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    ValidatedJson(fields): ValidatedJson<R::Fields>,
) -> ServiceResult<Json<R>> {
    info!(id, "Replacing {}", R::NAMES.singular);
    let row = control::update::<R>(state.db.pool(), id, fields).await?;
    Ok(Json(row))
}

/// DELETE /{resource}/:id
#[instrument(skip(state), fields(resource = R::NAMES.plural))]
pub async fn destroy<R: Resource>(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> ServiceResult<Json<Deleted<R>>> {
    info!(id, "Deleting {}", R::NAMES.singular);
    let deleted = control::delete::<R>(state.db.pool(), id).await?;
    Ok(Json(deleted))
}

// ===== NESTED LISTS =====

/// GET /clients/:id/pets
#[instrument(skip(state))]
pub async fn pets_of_client(
    State(state): State<AppState>,
    ResourceId(client_id): ResourceId,
) -> ServiceResult<Json<Vec<Pet>>> {
    let pets = control::list_children::<Pet>(state.db.pool(), Pets::ClientId, client_id).await?;
    Ok(Json(pets))
}

/// GET /pets/:id/medical-records
#[instrument(skip(state))]
pub async fn medical_records_of_pet(
    State(state): State<AppState>,
    ResourceId(pet_id): ResourceId,
) -> ServiceResult<Json<Vec<MedicalRecord>>> {
    let records =
        control::list_children::<MedicalRecord>(state.db.pool(), MedicalRecords::PetId, pet_id)
            .await?;
    Ok(Json(records))
}
