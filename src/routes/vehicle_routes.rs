use axum::{
    extract::Path,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use crate::controllers::vehicle_controller::VehicleController;
use crate::database::DbConnection;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::ValidatedJson;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/vehicle", get(list_vehicles).post(create_vehicle))
        .route(
            "/vehicle/:vin",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
}

async fn create_vehicle(
    mut db: DbConnection,
    ValidatedJson(request): ValidatedJson<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<VehicleResponse>), AppError> {
    let response = VehicleController::new(&mut db).create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_vehicles(mut db: DbConnection) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let response = VehicleController::new(&mut db).list().await?;
    Ok(Json(response))
}

async fn get_vehicle(
    mut db: DbConnection,
    Path(vin): Path<String>,
) -> Result<Json<VehicleResponse>, AppError> {
    let response = VehicleController::new(&mut db).get_by_vin(&vin).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    mut db: DbConnection,
    Path(vin): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateVehicleRequest>,
) -> Result<Json<VehicleResponse>, AppError> {
    let response = VehicleController::new(&mut db).update(&vin, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    mut db: DbConnection,
    Path(vin): Path<String>,
) -> Result<StatusCode, AppError> {
    VehicleController::new(&mut db).delete(&vin).await?;
    Ok(StatusCode::NO_CONTENT)
}
