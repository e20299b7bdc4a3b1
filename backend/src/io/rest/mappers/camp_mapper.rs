use chrono::NaiveDate;
use shared::{CampRecord, CreateCampRequest, UpdateCampRequest};

use crate::domain::commands::camps::{CreateCampCommand, UpdateCampCommand};
use crate::domain::models::camp::Camp;
use crate::io::rest::error::ApiError;

/// Mapper between shared camp DTOs and domain camps/commands.
pub struct CampMapper;

impl CampMapper {
    pub fn to_dto(domain: Camp) -> CampRecord {
        CampRecord {
            id: domain.id,
            name: domain.name,
            description: domain.description,
            location: domain.location,
            age_range: domain.age_range,
            category: domain.category,
            activities: domain.activities,
            price: domain.price,
            images: domain.images,
            owner_id: domain.owner_id,
            capacity: domain.capacity,
            registered: domain.registered,
            is_deleted: domain.is_deleted,
            deleted_at: domain.deleted_at.map(|at| at.to_rfc3339()),
            deleted_by: domain.deleted_by,
            status: domain.status,
            start_date: domain.start_date.map(format_date),
            end_date: domain.end_date.map(format_date),
            created_at: domain.created_at.to_rfc3339(),
            updated_at: domain.updated_at.to_rfc3339(),
        }
    }

    pub fn to_dto_list(camps: Vec<Camp>) -> Vec<CampRecord> {
        camps.into_iter().map(Self::to_dto).collect()
    }

    pub fn to_create_command(request: CreateCampRequest) -> Result<CreateCampCommand, ApiError> {
        Ok(CreateCampCommand {
            name: request.name,
            description: request.description,
            location: request.location,
            age_range: request.age_range,
            category: request.category,
            activities: request.activities,
            price: request.price,
            images: request.images,
            capacity: request.capacity,
            start_date: parse_date("startDate", request.start_date.as_deref())?,
            end_date: parse_date("endDate", request.end_date.as_deref())?,
        })
    }

    pub fn to_update_command(request: UpdateCampRequest) -> Result<UpdateCampCommand, ApiError> {
        Ok(UpdateCampCommand {
            name: request.name,
            description: request.description,
            location: request.location,
            age_range: request.age_range,
            category: request.category,
            activities: request.activities,
            price: request.price,
            images: request.images,
            capacity: request.capacity,
            registered: request.registered,
            status: request.status,
            start_date: parse_date("startDate", request.start_date.as_deref())?,
            end_date: parse_date("endDate", request.end_date.as_deref())?,
        })
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Camp writes are strict: a date that is present must parse
fn parse_date(field: &str, raw: Option<&str>) -> Result<Option<NaiveDate>, ApiError> {
    match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ApiError::BadRequest(format!("Invalid {}: {}", field, raw))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::sample_camp;
    use chrono::{TimeZone, Utc};
    use shared::{AgeRange, CampCategory};

    fn create_request(start_date: Option<&str>) -> CreateCampRequest {
        CreateCampRequest {
            name: "Robotics Week".to_string(),
            description: String::new(),
            location: "Denver, CO".to_string(),
            age_range: AgeRange { min: 10, max: 15 },
            category: CampCategory::Technology,
            activities: Vec::new(),
            price: 410.0,
            images: Vec::new(),
            capacity: 24,
            start_date: start_date.map(str::to_string),
            end_date: None,
        }
    }

    #[test]
    fn test_to_dto_formats_dates() {
        let mut camp = sample_camp("camp::1", "Lake Camp", CampCategory::Outdoor, 250.0);
        camp.start_date = NaiveDate::from_ymd_opt(2026, 7, 6);
        camp.deleted_at = Some(Utc.with_ymd_and_hms(2026, 2, 1, 8, 30, 0).unwrap());

        let dto = CampMapper::to_dto(camp);

        assert_eq!(dto.start_date.as_deref(), Some("2026-07-06"));
        assert_eq!(dto.end_date, None);
        assert_eq!(dto.deleted_at.as_deref(), Some("2026-02-01T08:30:00+00:00"));
        assert_eq!(dto.created_at, "2026-01-15T12:00:00+00:00");
    }

    #[test]
    fn test_create_command_parses_dates() {
        let command = CampMapper::to_create_command(create_request(Some("2026-08-03"))).unwrap();
        assert_eq!(command.start_date, NaiveDate::from_ymd_opt(2026, 8, 3));

        let command = CampMapper::to_create_command(create_request(Some(" "))).unwrap();
        assert_eq!(command.start_date, None);
    }

    #[test]
    fn test_create_command_rejects_bad_date() {
        let result = CampMapper::to_create_command(create_request(Some("August 3rd")));
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }
}
