pub mod vehicle_dto;
