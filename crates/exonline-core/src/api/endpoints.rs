//! The read-only endpoints of the Ex-Online API.
//!
//! An `Endpoint` knows its path (relative to the configured base URL) and
//! the query parameters it sends. Building the query is pure, so parameter
//! rules can be checked without a server.

use chrono::NaiveDate;

/// Date format the API expects for `date_from` / `date_to`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive inspection date filter. A `None` bound is left out of the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Lower bound used when the caller does not pick one.
    pub fn default_from() -> NaiveDate {
        NaiveDate::from_ymd_opt(2010, 1, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// No date filter at all.
    pub fn unbounded() -> Self {
        Self { from: None, to: None }
    }

    fn push_query(&self, query: &mut Vec<(&'static str, String)>) {
        if let Some(from) = self.from {
            query.push(("date_from", from.format(DATE_FORMAT).to_string()));
        }
        if let Some(to) = self.to {
            query.push(("date_to", to.format(DATE_FORMAT).to_string()));
        }
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self {
            from: Some(Self::default_from()),
            to: None,
        }
    }
}

/// Page number and page size passed through to list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: u32,
    pub size: u32,
}

impl Page {
    pub const DEFAULT_PROJECT_PAGE_SIZE: u32 = 100;
    pub const DEFAULT_EQUIPMENT_PAGE_SIZE: u32 = 1000;

    pub fn new(number: u32, size: u32) -> Self {
        Self { number, size }
    }

    /// First page with the project listing's default size.
    pub fn projects() -> Self {
        Self::new(1, Self::DEFAULT_PROJECT_PAGE_SIZE)
    }

    /// First page with the equipment listing's default size.
    pub fn equipment() -> Self {
        Self::new(1, Self::DEFAULT_EQUIPMENT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Documents and associated equipment for dossiers in a project
    ListEqAttc {
        project_id: i64,
        dossier_ids: Vec<i64>,
        dates: DateRange,
    },
    /// Projects visible to an account
    ListProjects { account_id: i64, page: Page },
    /// Detailed equipment properties for dossiers in a project
    ListEq {
        project_id: i64,
        dossier_ids: Vec<i64>,
        dates: DateRange,
        page: Page,
    },
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Self::ListEqAttc { .. } => "ListEqAttc",
            Self::ListProjects { .. } => "ListProjects",
            Self::ListEq { .. } => "ListEq",
        }
    }

    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        match self {
            Self::ListEqAttc {
                project_id,
                dossier_ids,
                dates,
            } => {
                query.push(("project", project_id.to_string()));
                query.push(("eq", join_ids(dossier_ids)));
                dates.push_query(&mut query);
            }
            Self::ListProjects { account_id, page } => {
                query.push(("account_id", account_id.to_string()));
                query.push(("pg", page.number.to_string()));
                query.push(("pgSize", page.size.to_string()));
            }
            Self::ListEq {
                project_id,
                dossier_ids,
                dates,
                page,
            } => {
                query.push(("project", project_id.to_string()));
                query.push(("eq", join_ids(dossier_ids)));
                query.push(("pg", page.number.to_string()));
                query.push(("pgSize", page.size.to_string()));
                dates.push_query(&mut query);
            }
        }
        query
    }
}

/// `[1, 2, 3]` -> `"1,2,3"`
fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
