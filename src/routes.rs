use axum::{Router, middleware, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    datalayer::CRUD::{
        Resource,
        types::{Appointment, Client, MedicalRecord, Pet, Veterinarian},
    },
    handlers::{health, resources},
    middleware::{error::error_handling_middleware, request_id::request_id_middleware},
    state::AppState,
};

/// list/create on `path`, get/update/delete on `path/:id`
pub fn resource_routes<R: Resource>(path: &str) -> Router<AppState> {
    Router::new()
        .route(path, get(resources::list::<R>).post(resources::create::<R>))
        .route(
            &format!("{}/:id", path),
            get(resources::show::<R>)
                .put(resources::update::<R>)
                .delete(resources::destroy::<R>),
        )
}

/// Create the main application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Service routes
    let service_routes = Router::new()
        .route("/", get(health::root))
        .route("/test-db", get(health::test_db))
        .route("/health", get(health::health_check));

    // Nested lists share the `:id` parameter name with the by-id routes
    let nested_routes = Router::new()
        .route("/clients/:id/pets", get(resources::pets_of_client))
        .route(
            "/pets/:id/medical-records",
            get(resources::medical_records_of_pet),
        );

    Router::new()
        .merge(service_routes)
        .merge(resource_routes::<Client>("/clients"))
        .merge(resource_routes::<Veterinarian>("/veterinarians"))
        .merge(resource_routes::<Pet>("/pets"))
        .merge(resource_routes::<Appointment>("/appointments"))
        .merge(resource_routes::<MedicalRecord>("/medical-records"))
        .merge(nested_routes)
        .layer(middleware::from_fn(error_handling_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
