//! Query construction for the spacecraft listing endpoint.
//!
//! [`SpacecraftListQuery::from_params`] turns the raw query-string map into
//! a structured request: filter predicates, an optional sort, and an
//! optional pagination window. Parsing never fails. Keys outside the
//! recognised set are ignored, and malformed values degrade the way the
//! public API has always treated them:
//!
//! | Parameter   | Meaning                                                      |
//! |-------------|--------------------------------------------------------------|
//! | `name`      | LIKE pattern, used verbatim                                  |
//! | `maxSpeed`  | exact match; no numeric prefix means "matches nothing"       |
//! | `mass`      | exact match; no numeric prefix means "matches nothing"       |
//! | `sortField` | column to sort by, not checked here                          |
//! | `sortOrder` | `-1` for descending, anything else ascending                 |
//! | `limit`     | page size, default [`DEFAULT_LIMIT`]                         |
//! | `page`      | zero-based page index; windowing only applies when present   |

use std::collections::HashMap;

/* --------------------------------------------------------------------------
Named constants
-------------------------------------------------------------------------- */

pub const PARAM_NAME: &str = "name";
pub const PARAM_MAX_SPEED: &str = "maxSpeed";
pub const PARAM_MASS: &str = "mass";
pub const PARAM_SORT_FIELD: &str = "sortField";
pub const PARAM_SORT_ORDER: &str = "sortOrder";
pub const PARAM_LIMIT: &str = "limit";
pub const PARAM_PAGE: &str = "page";

/// `sortOrder` value that selects descending order.
pub const SORT_DESCENDING: &str = "-1";

/// Page size used when `limit` is absent or unusable.
pub const DEFAULT_LIMIT: i64 = 5;

/* --------------------------------------------------------------------------
Query types
-------------------------------------------------------------------------- */

/// Exact-match predicate on a numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberFilter {
    Equals(f64),
    /// The raw value had no numeric prefix. The filter is still in force and
    /// matches no record.
    Unparseable,
}

impl NumberFilter {
    pub fn parse(raw: &str) -> Self {
        match parse_float_prefix(raw) {
            Some(value) => NumberFilter::Equals(value),
            None => NumberFilter::Unparseable,
        }
    }
}

/// Recognised filter predicates, combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpacecraftFilter {
    /// LIKE pattern. No wildcards are added.
    pub name: Option<String>,
    pub max_speed: Option<NumberFilter>,
    pub mass: Option<NumberFilter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Only the literal `-1` means descending.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some(SORT_DESCENDING) => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Requested ordering. `field` is the client-facing attribute name exactly
/// as supplied; resolving it to a column is the store's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: i64,
    pub offset: i64,
}

/// Structured form of a `GET /spacecrafts` request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpacecraftListQuery {
    pub filter: SpacecraftFilter,
    pub sort: Option<SortSpec>,
    pub window: Option<PageWindow>,
}

impl SpacecraftListQuery {
    /// Build the query from raw query-string parameters.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let get = |key: &str| params.get(key).map(String::as_str);

        let filter = SpacecraftFilter {
            name: get(PARAM_NAME).map(str::to_owned),
            max_speed: get(PARAM_MAX_SPEED).map(NumberFilter::parse),
            mass: get(PARAM_MASS).map(NumberFilter::parse),
        };

        let sort = get(PARAM_SORT_FIELD)
            .filter(|field| !field.is_empty())
            .map(|field| SortSpec {
                field: field.to_owned(),
                direction: SortDirection::from_param(get(PARAM_SORT_ORDER)),
            });

        let limit = get(PARAM_LIMIT)
            .and_then(parse_int_prefix)
            .filter(|limit| *limit >= 0)
            .unwrap_or(DEFAULT_LIMIT);

        let window = get(PARAM_PAGE)
            .and_then(parse_int_prefix)
            .map(|page| PageWindow {
                limit,
                offset: limit.saturating_mul(page).max(0),
            });

        Self {
            filter,
            sort,
            window,
        }
    }
}

/* --------------------------------------------------------------------------
Lenient number parsing
-------------------------------------------------------------------------- */

/// Parse the longest decimal prefix of `raw`, after leading whitespace.
///
/// `"1500abc"` yields 1500, `"  -2.5e3x"` yields -2500, `"Infinity"` yields
/// positive infinity. Returns `None` when no digits lead the string.
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - (end + 1);
        if digits + frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }

    if digits == 0 {
        return None;
    }

    // An exponent only counts when at least one digit follows it.
    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// Parse the leading integer of `raw`, after leading whitespace.
///
/// `"12px"` yields 12, `"1.9"` yields 1, `"0x1f"` yields 31. Returns `None`
/// when no digits lead the string or the value does not fit in an `i64`.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, body) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let digits_end = body
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(body.len());
    if digits_end == 0 {
        return None;
    }

    let magnitude = i64::from_str_radix(&body[..digits_end], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
