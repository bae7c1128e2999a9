use hotel_reservation_api::{
    hotel_catalog::{
        domain::{
            model::{
                enums::hotel_domain_error::HotelDomainError,
                queries::{get_hotel_query::GetHotelQuery, list_hotels_query::ListHotelsQuery},
                value_objects::{hotel_id::HotelId, hotel_name::HotelName},
            },
            services::{
                hotel_command_service::HotelCommandService, hotel_query_service::HotelQueryService,
            },
        },
        infrastructure::persistence::repositories::hotel_repository::HotelRepository,
    },
    shared::infrastructure::persistence::pagination::PaginationFilter,
    tenancy::domain::model::{
        enums::tenancy_domain_error::TenancyDomainError, value_objects::tenant_id::TenantId,
    },
};

use crate::support::{TENANT_A, TENANT_B, UNKNOWN_TENANT, create_command, create_harness, thumbnail};

#[tokio::test]
async fn handle_get_returns_none_for_missing_hotel() {
    let harness = create_harness(&[TENANT_A]);
    let query = GetHotelQuery::new(TENANT_A.to_string(), 12345).expect("valid query");

    let result = harness
        .query_service
        .handle_get(query)
        .await
        .expect("missing hotel is not an error");

    assert!(result.is_none());
}

#[tokio::test]
async fn handle_get_returns_hotel_with_its_thumbnails() {
    let harness = create_harness(&[TENANT_A]);
    let created = harness
        .command_service
        .handle_create(create_command(
            TENANT_A,
            "Overlook",
            vec![Some(thumbnail("lobby.png"))],
            false,
        ))
        .await
        .expect("hotel created");

    let query = GetHotelQuery::new(TENANT_A.to_string(), created.id().value()).expect("valid query");
    let found = harness
        .query_service
        .handle_get(query)
        .await
        .expect("lookup succeeds")
        .expect("hotel exists");

    assert_eq!(found.name().value(), "Overlook");
    assert_eq!(found.thumbnails().len(), 1);
}

#[tokio::test]
async fn handle_get_for_unknown_tenant_is_an_error() {
    let harness = create_harness(&[TENANT_A]);
    let query = GetHotelQuery::new(UNKNOWN_TENANT.to_string(), 1).expect("valid query");

    let result = harness.query_service.handle_get(query).await;

    assert!(matches!(
        result,
        Err(HotelDomainError::Tenancy(TenancyDomainError::TenantNotFound))
    ));
}

#[tokio::test]
async fn handle_list_pages_through_the_tenant_hotels() {
    let harness = create_harness(&[TENANT_A, TENANT_B]);
    for name in ["Alpha", "Bravo", "Charlie", "Delta", "Echo"] {
        harness
            .command_service
            .handle_create(create_command(TENANT_A, name, vec![], false))
            .await
            .expect("hotel created");
    }
    harness
        .command_service
        .handle_create(create_command(TENANT_B, "Foxtrot", vec![], false))
        .await
        .expect("hotel created");

    let filter = PaginationFilter::new(Some(2), Some(2), None, false);
    let query = ListHotelsQuery::new(TENANT_A.to_string(), filter).expect("valid query");
    let page = harness
        .query_service
        .handle_list(query)
        .await
        .expect("list succeeds");

    let names: Vec<&str> = page.items.iter().map(|hotel| hotel.name().value()).collect();
    assert_eq!(names, vec!["Charlie", "Delta"]);
    assert_eq!(page.total_count, 5);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.page, 2);
}

#[tokio::test]
async fn has_repeat_data_flags_names_per_tenant() {
    let harness = create_harness(&[TENANT_A, TENANT_B]);
    let tenant_a = TenantId::from_u64(TENANT_A).expect("valid tenant");
    let tenant_b = TenantId::from_u64(TENANT_B).expect("valid tenant");
    let name = HotelName::new("Overlook".to_string()).expect("valid name");

    harness
        .repository
        .has_repeat_data(&tenant_a, &name)
        .await
        .expect("no conflict before the first hotel");

    harness
        .command_service
        .handle_create(create_command(TENANT_A, "Overlook", vec![], false))
        .await
        .expect("hotel created");

    assert!(matches!(
        harness.repository.has_repeat_data(&tenant_a, &name).await,
        Err(HotelDomainError::HotelNameAlreadyExists)
    ));
    assert!(harness.repository.has_repeat_data(&tenant_b, &name).await.is_ok());
}

#[tokio::test]
async fn every_repository_call_resolves_the_tenant_connection() {
    let harness = create_harness(&[TENANT_A]);
    let tenant_a = TenantId::from_u64(TENANT_A).expect("valid tenant");

    let filter = PaginationFilter::default();
    harness
        .repository
        .find_all(&tenant_a, &filter)
        .await
        .expect("list succeeds");
    harness
        .repository
        .delete(&tenant_a, hotel_id(7))
        .await
        .expect("delete succeeds");

    assert_eq!(harness.connection_resolver.resolutions(), 2);
}

fn hotel_id(value: i64) -> HotelId {
    HotelId::new(value).expect("valid hotel id")
}
