use problem_details_api::{
    shared::domain::model::{
        enums::api_error::ApiError, value_objects::pagination_params::PaginationParams,
    },
    users::domain::{
        model::{
            queries::{get_user_by_id_query::GetUserByIdQuery, list_users_query::ListUsersQuery},
            value_objects::user_id::UserId,
        },
        services::user_query_service::UserQueryService,
    },
};

use crate::support::{create_users_harness, seeded_user};

fn list_query(page: u64, limit: u64, sort_by: &str, sort_order: &str) -> ListUsersQuery {
    ListUsersQuery::new(PaginationParams::normalized(
        Some(page),
        Some(limit),
        Some(sort_by.to_string()),
        Some(sort_order),
    ))
    .expect("valid list query")
}

#[tokio::test]
async fn handle_get_returns_existing_user() {
    let harness = create_users_harness();
    let user = seeded_user(&harness.repository);

    let found = harness
        .query_service
        .handle_get(GetUserByIdQuery::new(user.id()))
        .await;

    assert_eq!(found, Ok(user));
}

#[tokio::test]
async fn handle_get_of_missing_user_is_not_found() {
    let harness = create_users_harness();

    let error = harness
        .query_service
        .handle_get(GetUserByIdQuery::new(UserId::new(42).expect("positive id")))
        .await
        .expect_err("user does not exist");

    assert_eq!(error.to_string(), "User with identifier '42' not found");
    assert_eq!(error.status().as_u16(), 404);
    assert!(matches!(error, ApiError::NotFound { .. }));
}

#[tokio::test]
async fn handle_list_pages_and_sorts() {
    let harness = create_users_harness();
    for (email, name) in [
        ("c@example.com", "Charlie"),
        ("a@example.com", "Alice"),
        ("b@example.com", "Bob"),
    ] {
        harness.repository.insert(email, name);
    }

    let page = harness
        .query_service
        .handle_list(list_query(1, 2, "name", "desc"))
        .await
        .expect("listing should succeed");

    assert_eq!(page.total, 3);
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 2);
    let names: Vec<&str> = page.items.iter().map(|user| user.name().value()).collect();
    assert_eq!(names, vec!["Charlie", "Bob"]);

    let second = harness
        .query_service
        .handle_list(list_query(2, 2, "name", "desc"))
        .await
        .expect("listing should succeed");
    assert_eq!(second.items.len(), 1);
    assert_eq!(second.items[0].name().value(), "Alice");
}

#[test]
fn unknown_sort_field_is_a_validation_error() {
    let result = ListUsersQuery::new(PaginationParams::normalized(
        None,
        None,
        Some("password".to_string()),
        None,
    ));

    assert!(matches!(result, Err(ApiError::Validation { .. })));
}
