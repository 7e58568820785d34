use crate::shared::domain::model::{
    enums::api_error::ApiError,
    value_objects::pagination_params::{PaginationParams, SortOrder},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UserSortField {
    Id,
    Email,
    Name,
    CreatedAt,
    UpdatedAt,
}

impl UserSortField {
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        match raw {
            "id" => Ok(UserSortField::Id),
            "email" => Ok(UserSortField::Email),
            "name" => Ok(UserSortField::Name),
            "createdAt" | "created_at" => Ok(UserSortField::CreatedAt),
            "updatedAt" | "updated_at" => Ok(UserSortField::UpdatedAt),
            other => Err(ApiError::validation(format!(
                "Cannot sort users by '{other}'; use id, email, name, createdAt or updatedAt"
            ))
            .with_extension("field", "sortBy")),
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            UserSortField::Id => "id",
            UserSortField::Email => "email",
            UserSortField::Name => "name",
            UserSortField::CreatedAt => "created_at",
            UserSortField::UpdatedAt => "updated_at",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ListUsersQuery {
    pagination: PaginationParams,
    sort_field: UserSortField,
}

impl ListUsersQuery {
    pub fn new(pagination: PaginationParams) -> Result<Self, ApiError> {
        let sort_field = UserSortField::parse(pagination.sort_by())?;
        Ok(Self {
            pagination,
            sort_field,
        })
    }

    pub fn pagination(&self) -> &PaginationParams {
        &self.pagination
    }

    pub fn sort_field(&self) -> UserSortField {
        self.sort_field
    }

    pub fn sort_order(&self) -> SortOrder {
        self.pagination.sort_order()
    }
}

impl Default for ListUsersQuery {
    fn default() -> Self {
        Self {
            pagination: PaginationParams::default(),
            sort_field: UserSortField::Id,
        }
    }
}
