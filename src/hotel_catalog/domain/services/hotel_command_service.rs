use async_trait::async_trait;

use crate::hotel_catalog::domain::model::{
    commands::{
        create_hotel_command::CreateHotelCommand, delete_hotel_command::DeleteHotelCommand,
        update_hotel_command::UpdateHotelCommand,
    },
    entities::hotel::Hotel,
    enums::hotel_domain_error::HotelDomainError,
};

#[async_trait]
pub trait HotelCommandService: Send + Sync {
    async fn handle_create(&self, command: CreateHotelCommand) -> Result<Hotel, HotelDomainError>;

    async fn handle_update(&self, command: UpdateHotelCommand) -> Result<Hotel, HotelDomainError>;

    async fn handle_delete(&self, command: DeleteHotelCommand) -> Result<(), HotelDomainError>;
}
