use std::sync::Arc;

use crate::{
    hotel_catalog::infrastructure::persistence::repositories::{
        hotel_row_repository::HotelRowRepository, thumbnail_row_repository::ThumbnailRowRepository,
    },
    tenancy::domain::model::value_objects::tenant_id::TenantId,
};

/// Row repositories bound to one tenant's partition.
#[derive(Clone)]
pub struct HotelCatalogConnection {
    pub tenant_id: TenantId,
    pub hotels: Arc<dyn HotelRowRepository>,
    pub thumbnails: Arc<dyn ThumbnailRowRepository>,
}
