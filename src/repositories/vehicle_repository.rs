use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;
use sqlx::SqliteConnection;

/// Acceso a la tabla `vehicles` sobre una conexión prestada.
///
/// Todas las búsquedas normalizan el VIN antes de tocar la base de datos.
pub struct VehicleRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> VehicleRepository<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Normalizar el VIN para búsquedas consistentes
    pub fn normalize_vin(vin: &str) -> String {
        vin.trim().to_uppercase()
    }

    pub async fn get(&mut self, vin: &str) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE vin = ?")
            .bind(Self::normalize_vin(vin))
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(vehicle)
    }

    pub async fn list(&mut self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles")
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(vehicles)
    }

    /// Insertar un vehículo nuevo. `None` si el VIN ya existe.
    pub async fn create(
        &mut self,
        request: &CreateVehicleRequest,
    ) -> Result<Option<Vehicle>, AppError> {
        if self.get(&request.vin).await?.is_some() {
            return Ok(None);
        }

        self.insert(request).await
    }

    /// INSERT sin comprobación previa; la primary key decide los duplicados
    async fn insert(
        &mut self,
        request: &CreateVehicleRequest,
    ) -> Result<Option<Vehicle>, AppError> {
        let result = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (vin, manufacturer_name, description, horse_power, model_name, model_year, purchase_price, fuel_type)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(Self::normalize_vin(&request.vin))
        .bind(&request.manufacturer_name)
        .bind(&request.description)
        .bind(request.horse_power)
        .bind(&request.model_name)
        .bind(request.model_year)
        .bind(request.purchase_price)
        .bind(&request.fuel_type)
        .fetch_one(&mut *self.conn)
        .await;

        match result {
            Ok(vehicle) => Ok(Some(vehicle)),
            // Otro request insertó el mismo VIN entre el get y el insert
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Reemplazar todos los campos salvo el VIN. `None` si no existe.
    pub async fn update(
        &mut self,
        vin: &str,
        request: &UpdateVehicleRequest,
    ) -> Result<Option<Vehicle>, AppError> {
        let Some(current) = self.get(vin).await? else {
            return Ok(None);
        };

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET manufacturer_name = ?, description = ?, horse_power = ?, model_name = ?, model_year = ?, purchase_price = ?, fuel_type = ?
            WHERE vin = ?
            RETURNING *
            "#,
        )
        .bind(&request.manufacturer_name)
        .bind(&request.description)
        .bind(request.horse_power)
        .bind(&request.model_name)
        .bind(request.model_year)
        .bind(request.purchase_price)
        .bind(&request.fuel_type)
        .bind(&current.vin)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(vehicle)
    }

    /// Borrar un vehículo. `false` si no existía.
    pub async fn delete(&mut self, vin: &str) -> Result<bool, AppError> {
        let Some(current) = self.get(vin).await? else {
            return Ok(false);
        };

        let result = sqlx::query("DELETE FROM vehicles WHERE vin = ?")
            .bind(&current.vin)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
