use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};
use sqlx::SqliteConnection;
use tracing::{info, warn};

pub struct VehicleController<'c> {
    repository: VehicleRepository<'c>,
}

impl<'c> VehicleController<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self {
            repository: VehicleRepository::new(conn),
        }
    }

    pub async fn create(
        &mut self,
        request: CreateVehicleRequest,
    ) -> Result<VehicleResponse, AppError> {
        let vin = VehicleRepository::normalize_vin(&request.vin);

        let Some(vehicle) = self.repository.create(&request).await? else {
            warn!("⚠️ Vehículo {} ya registrado", vin);
            return Err(conflict_error("Vehicle", "VIN", &vin));
        };

        info!("✅ Vehículo {} creado", vehicle.vin);
        Ok(vehicle.into())
    }

    pub async fn get_by_vin(&mut self, vin: &str) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .get(vin)
            .await?
            .ok_or_else(|| not_found_error("Vehicle"))?;

        Ok(vehicle.into())
    }

    pub async fn list(&mut self) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.list().await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &mut self,
        vin: &str,
        request: UpdateVehicleRequest,
    ) -> Result<VehicleResponse, AppError> {
        let Some(vehicle) = self.repository.update(vin, &request).await? else {
            warn!("🔍 Vehículo {} no encontrado para actualizar", vin);
            return Err(not_found_error("Vehicle"));
        };

        info!("✏️ Vehículo {} actualizado", vehicle.vin);
        Ok(vehicle.into())
    }

    pub async fn delete(&mut self, vin: &str) -> Result<(), AppError> {
        if !self.repository.delete(vin).await? {
            warn!("🔍 Vehículo {} no encontrado para eliminar", vin);
            return Err(not_found_error("Vehicle"));
        }

        info!("🗑️ Vehículo {} eliminado", VehicleRepository::normalize_vin(vin));
        Ok(())
    }
}
