use std::{
    collections::{BTreeMap, HashMap, HashSet},
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use chrono::Utc;
use hotel_reservation_api::{
    hotel_catalog::{
        domain::model::{
            entities::{
                hotel::{Hotel, HotelDraft, HotelPatch},
                thumbnail::{NewThumbnail, Thumbnail},
            },
            enums::hotel_domain_error::HotelDomainError,
            value_objects::{hotel_id::HotelId, hotel_name::HotelName},
        },
        infrastructure::persistence::repositories::{
            hotel_catalog_connection::HotelCatalogConnection,
            hotel_row_repository::HotelRowRepository,
            thumbnail_row_repository::ThumbnailRowRepository,
        },
    },
    shared::infrastructure::{
        persistence::pagination::{PaginatedResult, PaginationFilter},
        storage::file_transferer::{
            FileTransferError, FileTransferer, UploadFile, UploadResult, generate_object_key,
        },
    },
    tenancy::{
        domain::model::{
            enums::tenancy_domain_error::TenancyDomainError, value_objects::tenant_id::TenantId,
        },
        infrastructure::persistence::repositories::tenant_connection_resolver::TenantConnectionResolver,
    },
};

#[derive(Default)]
struct FakeHotelRowRepositoryState {
    hotels: BTreeMap<i64, Hotel>,
    next_id: i64,
    fail_inserts: bool,
}

pub struct FakeHotelRowRepository {
    state: Mutex<FakeHotelRowRepositoryState>,
}

impl FakeHotelRowRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeHotelRowRepositoryState::default()),
        }
    }

    pub fn fail_inserts(&self) {
        self.state.lock().expect("mutex poisoned").fail_inserts = true;
    }

    pub fn stored_names(&self) -> Vec<String> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .hotels
            .values()
            .map(|hotel| hotel.name().value().to_string())
            .collect()
    }
}

#[async_trait]
impl HotelRowRepository for FakeHotelRowRepository {
    async fn insert(&self, draft: &HotelDraft) -> Result<Hotel, HotelDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        if state.fail_inserts {
            return Err(HotelDomainError::InfrastructureError(
                "insert rejected".to_string(),
            ));
        }

        state.next_id += 1;
        let id = state.next_id;
        let now = Utc::now();
        let hotel = Hotel::restore(HotelId::new(id)?, draft.clone(), now, now);
        state.hotels.insert(id, hotel.clone());
        Ok(hotel)
    }

    async fn update(
        &self,
        hotel_id: HotelId,
        patch: &HotelPatch,
    ) -> Result<Option<Hotel>, HotelDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        let Some(current) = state.hotels.get(&hotel_id.value()) else {
            return Ok(None);
        };

        let draft = HotelDraft {
            name: patch.name.clone().unwrap_or_else(|| current.name().clone()),
            description: match &patch.description {
                Some(description) => description.clone(),
                None => current.description().map(str::to_string),
            },
            address: match &patch.address {
                Some(address) => address.clone(),
                None => current.address().map(str::to_string),
            },
        };
        let updated = Hotel::restore(hotel_id, draft, current.created_at(), Utc::now());
        state.hotels.insert(hotel_id.value(), updated.clone());
        Ok(Some(updated))
    }

    async fn find_by_id(&self, hotel_id: HotelId) -> Result<Option<Hotel>, HotelDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state.hotels.get(&hotel_id.value()).cloned())
    }

    async fn delete(&self, hotel_id: HotelId) -> Result<bool, HotelDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        Ok(state.hotels.remove(&hotel_id.value()).is_some())
    }

    async fn paginate(
        &self,
        filter: &PaginationFilter,
    ) -> Result<PaginatedResult<Hotel>, HotelDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        let mut hotels: Vec<Hotel> = state.hotels.values().cloned().collect();
        if filter.order_desc() {
            hotels.reverse();
        }

        let total_count = hotels.len() as i64;
        let items = hotels
            .into_iter()
            .skip(filter.offset() as usize)
            .take(filter.per_page() as usize)
            .collect();

        Ok(PaginatedResult::new(items, filter, total_count))
    }

    async fn count_by_name(&self, name: &HotelName) -> Result<i64, HotelDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state
            .hotels
            .values()
            .filter(|hotel| hotel.name() == name)
            .count() as i64)
    }
}

#[derive(Default)]
struct FakeThumbnailRowRepositoryState {
    rows: Vec<Thumbnail>,
    next_id: i64,
    fail_inserts: bool,
}

pub struct FakeThumbnailRowRepository {
    state: Mutex<FakeThumbnailRowRepositoryState>,
}

impl FakeThumbnailRowRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeThumbnailRowRepositoryState::default()),
        }
    }

    pub fn fail_inserts(&self) {
        self.state.lock().expect("mutex poisoned").fail_inserts = true;
    }

    pub fn rows(&self) -> Vec<Thumbnail> {
        self.state.lock().expect("mutex poisoned").rows.clone()
    }
}

#[async_trait]
impl ThumbnailRowRepository for FakeThumbnailRowRepository {
    async fn insert(&self, thumbnail: &NewThumbnail) -> Result<Thumbnail, HotelDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        if state.fail_inserts {
            return Err(HotelDomainError::InfrastructureError(
                "thumbnail insert rejected".to_string(),
            ));
        }

        state.next_id += 1;
        let row = Thumbnail::restore(state.next_id, thumbnail.clone(), Utc::now());
        state.rows.push(row.clone());
        Ok(row)
    }

    async fn list_by_hotel(&self, hotel_id: HotelId) -> Result<Vec<Thumbnail>, HotelDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state
            .rows
            .iter()
            .filter(|row| row.hotel_id() == hotel_id)
            .cloned()
            .collect())
    }
}

/// One isolated in-memory partition per tenant.
pub struct FakeTenantPartition {
    pub hotels: Arc<FakeHotelRowRepository>,
    pub thumbnails: Arc<FakeThumbnailRowRepository>,
}

pub struct FakeTenantConnectionResolver {
    partitions: HashMap<u64, FakeTenantPartition>,
    resolutions: AtomicUsize,
}

impl FakeTenantConnectionResolver {
    pub fn with_tenants(tenant_ids: &[u64]) -> Self {
        let partitions = tenant_ids
            .iter()
            .map(|tenant_id| {
                (
                    *tenant_id,
                    FakeTenantPartition {
                        hotels: Arc::new(FakeHotelRowRepository::new()),
                        thumbnails: Arc::new(FakeThumbnailRowRepository::new()),
                    },
                )
            })
            .collect();

        Self {
            partitions,
            resolutions: AtomicUsize::new(0),
        }
    }

    pub fn partition(&self, tenant_id: u64) -> &FakeTenantPartition {
        self.partitions
            .get(&tenant_id)
            .expect("tenant partition configured")
    }

    pub fn resolutions(&self) -> usize {
        self.resolutions.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TenantConnectionResolver<HotelCatalogConnection> for FakeTenantConnectionResolver {
    async fn get_db(
        &self,
        tenant_id: &TenantId,
    ) -> Result<HotelCatalogConnection, TenancyDomainError> {
        self.resolutions.fetch_add(1, Ordering::SeqCst);

        let partition = self
            .partitions
            .get(&tenant_id.value())
            .ok_or(TenancyDomainError::TenantNotFound)?;

        Ok(HotelCatalogConnection {
            tenant_id: *tenant_id,
            hotels: partition.hotels.clone(),
            thumbnails: partition.thumbnails.clone(),
        })
    }
}

#[derive(Default)]
struct FakeFileTransfererState {
    attempted: Vec<String>,
    failing_file_names: HashSet<String>,
}

pub struct FakeFileTransferer {
    state: Mutex<FakeFileTransfererState>,
}

impl FakeFileTransferer {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeFileTransfererState::default()),
        }
    }

    pub fn fail_for(&self, file_name: &str) {
        self.state
            .lock()
            .expect("mutex poisoned")
            .failing_file_names
            .insert(file_name.to_string());
    }

    /// Original file names of every upload attempt, sorted.
    pub fn attempted(&self) -> Vec<String> {
        let mut attempted = self.state.lock().expect("mutex poisoned").attempted.clone();
        attempted.sort();
        attempted
    }
}

#[async_trait]
impl FileTransferer for FakeFileTransferer {
    async fn upload(
        &self,
        bucket_name: &str,
        path: &str,
        file: UploadFile,
    ) -> Result<UploadResult, FileTransferError> {
        let version = {
            let mut state = self.state.lock().expect("mutex poisoned");
            state.attempted.push(file.file_name().to_string());

            if state.failing_file_names.contains(file.file_name()) {
                return Err(FileTransferError::UploadRejected {
                    bucket: bucket_name.to_string(),
                    message: format!("{} refused", file.file_name()),
                });
            }
            state.attempted.len()
        };

        // Lets sibling uploads interleave.
        tokio::task::yield_now().await;

        Ok(UploadResult {
            version_id: format!("v{version}"),
            bucket_name: bucket_name.to_string(),
            file_name: generate_object_key(path, &file),
            file_size: file.size(),
        })
    }
}
