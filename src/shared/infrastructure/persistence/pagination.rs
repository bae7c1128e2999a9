use serde::Serialize;
use sqlx::{PgPool, Postgres, QueryBuilder, postgres::PgRow};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaginationFilter {
    page: u32,
    per_page: u32,
    order_by: Option<String>,
    order_desc: bool,
}

impl PaginationFilter {
    pub const DEFAULT_PER_PAGE: u32 = 20;
    pub const MAX_PER_PAGE: u32 = 100;

    /// Pages are 1-based; out-of-range values are clamped rather than rejected.
    pub fn new(
        page: Option<u32>,
        per_page: Option<u32>,
        order_by: Option<String>,
        order_desc: bool,
    ) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            per_page: per_page
                .unwrap_or(Self::DEFAULT_PER_PAGE)
                .clamp(1, Self::MAX_PER_PAGE),
            order_by: order_by
                .map(|column| column.trim().to_lowercase())
                .filter(|column| !column.is_empty()),
            order_desc,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn order_by(&self) -> Option<&str> {
        self.order_by.as_deref()
    }

    pub fn order_desc(&self) -> bool {
        self.order_desc
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.per_page)
    }
}

impl Default for PaginationFilter {
    fn default() -> Self {
        Self::new(None, None, None, false)
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total_count: i64,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, filter: &PaginationFilter, total_count: i64) -> Self {
        let per_page = i64::from(filter.per_page());
        let total_pages = (total_count.max(0) + per_page - 1) / per_page;

        Self {
            items,
            page: filter.page(),
            per_page: filter.per_page(),
            total_count,
            total_pages: u32::try_from(total_pages).unwrap_or(u32::MAX),
        }
    }

    pub fn map<U>(self, mapper: impl FnMut(T) -> U) -> PaginatedResult<U> {
        PaginatedResult {
            items: self.items.into_iter().map(mapper).collect(),
            page: self.page,
            per_page: self.per_page,
            total_count: self.total_count,
            total_pages: self.total_pages,
        }
    }

    pub fn try_map<U, E>(
        self,
        mapper: impl FnMut(T) -> Result<U, E>,
    ) -> Result<PaginatedResult<U>, E> {
        Ok(PaginatedResult {
            items: self
                .items
                .into_iter()
                .map(mapper)
                .collect::<Result<Vec<_>, _>>()?,
            page: self.page,
            per_page: self.per_page,
            total_count: self.total_count,
            total_pages: self.total_pages,
        })
    }
}

/// Static description of the table a paginated listing reads from.
pub struct PaginatedSource<'a> {
    pub table: &'a str,
    pub columns: &'a str,
    pub sortable_columns: &'a [&'a str],
    pub default_order_by: &'a str,
}

impl PaginatedSource<'_> {
    fn order_column<'f>(&'f self, filter: &'f PaginationFilter) -> &'f str {
        filter
            .order_by()
            .filter(|column| self.sortable_columns.contains(column))
            .unwrap_or(self.default_order_by)
    }
}

/// Counts the table and fetches one page of raw rows; mapping is left to the caller.
pub async fn paginated_list(
    pool: &PgPool,
    source: &PaginatedSource<'_>,
    filter: &PaginationFilter,
) -> Result<PaginatedResult<PgRow>, sqlx::Error> {
    let mut count_query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM ");
    count_query.push(source.table);
    let total_count: i64 = count_query
        .build_query_scalar()
        .fetch_one(pool)
        .await?;

    let mut select_query = QueryBuilder::<Postgres>::new("SELECT ");
    select_query
        .push(source.columns)
        .push(" FROM ")
        .push(source.table)
        .push(" ORDER BY ")
        .push(source.order_column(filter))
        .push(if filter.order_desc() { " DESC" } else { " ASC" })
        .push(" LIMIT ")
        .push_bind(i64::from(filter.per_page()))
        .push(" OFFSET ")
        .push_bind(filter.offset());

    let rows = select_query.build().fetch_all(pool).await?;

    Ok(PaginatedResult::new(rows, filter, total_count))
}
