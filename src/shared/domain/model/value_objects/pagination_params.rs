pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Anything other than `desc` (case-insensitive) sorts ascending.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.eq_ignore_ascii_case("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Clamped paging window: `page >= 1` and `1 <= limit <= 100`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaginationParams {
    page: u64,
    limit: u64,
    sort_by: String,
    sort_order: SortOrder,
}

impl PaginationParams {
    pub fn normalized(
        page: Option<u64>,
        limit: Option<u64>,
        sort_by: Option<String>,
        sort_order: Option<&str>,
    ) -> Self {
        let page = page.filter(|page| *page > 0).unwrap_or(DEFAULT_PAGE);
        let limit = limit
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        let sort_by = sort_by
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "id".to_string());

        Self {
            page,
            limit,
            sort_by,
            sort_order: SortOrder::parse(sort_order),
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn sort_by(&self) -> &str {
        &self.sort_by
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Rows to skip. Saturates for pages past the addressable range, which
    /// then resolve to an empty window.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self::normalized(None, None, None, None)
    }
}
