//! Limit/offset pagination shared by the filtered list endpoints.

use serde::{Deserialize, Serialize};

/// Page size used when the caller does not pick one.
pub const DEFAULT_LIMIT: u32 = 50;

/// Largest page size the API accepts.
pub const MAX_LIMIT: u32 = 1000;

// ─── PageRequest ─────────────────────────────────────────────────────────────

/// Window to request from a paginated endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub limit: u32,
    pub offset: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl PageRequest {
    /// `limit` is clamped to `1..=MAX_LIMIT`.
    pub fn new(limit: u32, offset: u64) -> Self {
        Self {
            limit: limit.clamp(1, MAX_LIMIT),
            offset,
        }
    }

    /// The request for the page after `info`, if there is one.
    pub fn next_after(info: &PaginationInfo) -> Option<Self> {
        info.next_offset.map(|offset| Self {
            limit: info.limit,
            offset,
        })
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("limit", self.limit.clamp(1, MAX_LIMIT).to_string()),
            ("offset", self.offset.to_string()),
        ]
    }
}

// ─── PaginationInfo ──────────────────────────────────────────────────────────

/// Raw pagination block as the backend sends it. Derived fields may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationWire {
    pub limit: u32,
    pub offset: u64,
    pub total: u64,
    #[serde(default)]
    pub current_page: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u64>,
    #[serde(default)]
    pub has_next: Option<bool>,
    #[serde(default)]
    pub has_previous: Option<bool>,
    #[serde(default)]
    pub next_offset: Option<u64>,
}

/// A window over a result set, with its derived navigation fields.
///
/// Invariants: `limit >= 1`; `has_next == (offset + limit < total)`;
/// `next_offset == Some(offset + limit)` exactly when `has_next`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub limit: u32,
    pub offset: u64,
    pub total: u64,
    /// 1-based.
    pub current_page: u64,
    /// `0` when the result set is empty.
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
    pub next_offset: Option<u64>,
}

impl PaginationInfo {
    /// Compute the derived fields. Returns `None` for a zero limit.
    pub fn new(limit: u32, offset: u64, total: u64) -> Option<Self> {
        if limit == 0 {
            return None;
        }
        let limit_u64 = u64::from(limit);
        let total_pages = if total == 0 {
            0
        } else {
            total.div_ceil(limit_u64).max(1)
        };
        let current_page = offset / limit_u64 + 1;
        let end = offset.saturating_add(limit_u64);
        let has_next = end < total;

        Some(Self {
            limit,
            offset,
            total,
            current_page,
            total_pages,
            has_next,
            has_previous: current_page > 1,
            next_offset: has_next.then_some(end),
        })
    }

    /// Validate a wire block against the number of rows it came with.
    ///
    /// Derived fields sent by the server are ignored and recomputed; the
    /// server derives `has_next` from page numbers, which disagrees with the
    /// row window when `offset` is not a multiple of `limit`.
    pub fn from_wire(wire: &PaginationWire, rows: usize) -> Result<Self, String> {
        let info = PaginationInfo::new(wire.limit, wire.offset, wire.total)
            .ok_or_else(|| "pagination limit must be at least 1".to_string())?;

        let end = info.offset.saturating_add(rows as u64);
        if rows > 0 && end > info.total {
            return Err(format!(
                "pagination window exceeds total: offset {} + {} rows > total {}",
                info.offset, rows, info.total
            ));
        }
        if rows > info.limit as usize {
            return Err(format!(
                "page holds {} rows but limit is {}",
                rows, info.limit
            ));
        }
        Ok(info)
    }
}

// ─── Page ────────────────────────────────────────────────────────────────────

/// Raw `{ data, pagination }` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageWire<T> {
    pub data: Vec<T>,
    pub pagination: PaginationWire,
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: PaginationInfo,
}

impl<T> Page<T> {
    /// Convert each row with `convert`, then validate the pagination block.
    pub fn try_from_wire<W, E, F>(wire: PageWire<W>, convert: F) -> Result<Self, String>
    where
        F: FnMut(W) -> Result<T, E>,
        E: std::fmt::Display,
    {
        let pagination = PaginationInfo::from_wire(&wire.pagination, wire.data.len())?;
        let data = wire
            .data
            .into_iter()
            .map(convert)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| e.to_string())?;
        Ok(Self { data, pagination })
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}
