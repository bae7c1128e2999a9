use std::sync::Arc;

use async_trait::async_trait;

use crate::hotel_catalog::{
    domain::{
        model::{
            commands::{
                create_hotel_command::CreateHotelCommand, delete_hotel_command::DeleteHotelCommand,
                update_hotel_command::UpdateHotelCommand,
            },
            entities::hotel::Hotel,
            enums::hotel_domain_error::HotelDomainError,
        },
        services::hotel_command_service::HotelCommandService,
    },
    infrastructure::persistence::repositories::hotel_repository::HotelRepository,
};

pub struct HotelCommandServiceImpl {
    hotel_repository: Arc<dyn HotelRepository>,
}

impl HotelCommandServiceImpl {
    pub fn new(hotel_repository: Arc<dyn HotelRepository>) -> Self {
        Self { hotel_repository }
    }
}

#[async_trait]
impl HotelCommandService for HotelCommandServiceImpl {
    async fn handle_create(&self, command: CreateHotelCommand) -> Result<Hotel, HotelDomainError> {
        if command.reject_duplicate_name() {
            self.hotel_repository
                .has_repeat_data(command.tenant_id(), &command.draft().name)
                .await?;
        }

        let (tenant_id, draft, thumbnails) = command.into_parts();
        self.hotel_repository
            .create(&tenant_id, draft, thumbnails)
            .await
    }

    async fn handle_update(&self, command: UpdateHotelCommand) -> Result<Hotel, HotelDomainError> {
        self.hotel_repository
            .update(command.tenant_id(), command.hotel_id(), command.patch())
            .await?
            .ok_or(HotelDomainError::HotelNotFound)
    }

    async fn handle_delete(&self, command: DeleteHotelCommand) -> Result<(), HotelDomainError> {
        let deleted = self
            .hotel_repository
            .delete(command.tenant_id(), command.hotel_id())
            .await?;

        if !deleted {
            return Err(HotelDomainError::HotelNotFound);
        }
        Ok(())
    }
}
