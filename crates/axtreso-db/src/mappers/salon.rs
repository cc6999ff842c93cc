//! Salon entity <-> model mapper

use axtreso_core::entities::Salon;
use axtreso_core::error::DomainError;

use crate::models::SalonModel;

use super::corrupt_column;

impl TryFrom<SalonModel> for Salon {
    type Error = DomainError;

    fn try_from(model: SalonModel) -> Result<Self, Self::Error> {
        Ok(Salon {
            id: model.id,
            manager_id: model.manager_id,
            name: model.name,
            city: model
                .city
                .parse()
                .map_err(|e| corrupt_column("salons", "city", e))?,
            email: model.email,
            phone: model.phone,
            status: model
                .status
                .parse()
                .map_err(|e| corrupt_column("salons", "status", e))?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
