//! Listing parameters: sort, projection and paging
//!
//! Query values arrive as text. Paging values go through a lenient integer
//! parse; text that yields no number is kept so validation can report it as
//! invalid instead of dropping it.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use vigil_validator::{ErrorSink, validate};

use crate::codes;
use crate::config::ParamsConfig;
use crate::request::RawRequest;

// ============================================================================
// PAGING
// ============================================================================

/// A paging value read from the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryInt {
    /// Leading digits were found and fit in an `i64`.
    Parsed(i64),
    /// No leading digits, or too many; the original text is kept.
    Malformed(String),
}

impl QueryInt {
    /// Parses leading whitespace, an optional sign and leading digits.
    /// Anything after the digits is ignored.
    ///
    /// ```
    /// use vigil_params::QueryInt;
    ///
    /// assert_eq!(QueryInt::parse(" 10px"), QueryInt::Parsed(10));
    /// assert_eq!(QueryInt::parse("-3"), QueryInt::Parsed(-3));
    /// assert_eq!(QueryInt::parse("a"), QueryInt::Malformed("a".into()));
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim_start();
        let sign_len = usize::from(trimmed.starts_with(['-', '+']));

        let end = trimmed[sign_len..]
            .find(|c: char| !c.is_ascii_digit())
            .map_or(trimmed.len(), |i| sign_len + i);

        match trimmed[..end].parse::<i64>() {
            Ok(n) => Self::Parsed(n),
            Err(_) => Self::Malformed(text.to_owned()),
        }
    }

    /// The parsed number, if any.
    #[must_use]
    pub fn value(&self) -> Option<i64> {
        match self {
            Self::Parsed(n) => Some(*n),
            Self::Malformed(_) => None,
        }
    }

    fn to_json(&self) -> Value {
        match self {
            Self::Parsed(n) => Value::from(*n),
            Self::Malformed(text) => Value::String(text.clone()),
        }
    }
}

// ============================================================================
// PROJECTION
// ============================================================================

/// Field names requested with a comma-separated list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldSelection {
    names: Vec<String>,
    projection: Map<String, Value>,
}

impl FieldSelection {
    /// Splits `text` on commas. Empty segments are kept.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let names: Vec<String> = text.split(',').map(str::to_owned).collect();
        let projection = names
            .iter()
            .map(|name| (name.clone(), Value::from(1)))
            .collect();
        Self { names, projection }
    }

    /// Names in request order, duplicates included.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Projection document mapping each name to `1`.
    #[must_use]
    pub fn projection(&self) -> &Map<String, Value> {
        &self.projection
    }
}

// ============================================================================
// SORT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// `1` for ascending, `-1` for descending.
    #[must_use]
    pub const fn as_i8(self) -> i8 {
        match self {
            Self::Ascending => 1,
            Self::Descending => -1,
        }
    }
}

/// One sort key. Serializes as `{field: 1}` or `{field: -1}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

impl Sort {
    fn from_query(asc: Option<&str>, desc: Option<&str>) -> Option<Self> {
        let named = |field: Option<&str>, direction| {
            field.filter(|f| !f.is_empty()).map(|f| Self {
                field: f.to_owned(),
                direction,
            })
        };
        named(asc, SortDirection::Ascending).or_else(|| named(desc, SortDirection::Descending))
    }
}

impl Serialize for Sort {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.field, &self.direction.as_i8())?;
        map.end()
    }
}

// ============================================================================
// FILTER PARAMETERS
// ============================================================================

/// Sort, projection and paging parameters of a listing request.
///
/// # Examples
///
/// ```
/// use vigil_params::{FilterParameters, RawRequest};
///
/// let request = RawRequest::new().with_query("desc", "_id").with_query("limit", "a");
/// let mut params = FilterParameters::new(&request);
///
/// assert_eq!(serde_json::to_string(&params.sort()).unwrap(), r#"{"_id":-1}"#);
/// assert_eq!(params.validate(&["name"], &["_id"]).codes(), ["LIMIT_IS_INVALID"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParameters {
    asc: Option<String>,
    desc: Option<String>,
    offset: Option<QueryInt>,
    limit: Option<QueryInt>,
    fields: Option<FieldSelection>,
    sort: Option<Sort>,
    errors: ErrorSink,
}

impl FilterParameters {
    /// Reads the query using the default key names.
    #[must_use]
    pub fn new(request: &RawRequest) -> Self {
        Self::with_config(request, &ParamsConfig::default())
    }

    /// Reads the query keys named by `config`.
    #[must_use]
    pub fn with_config(request: &RawRequest, config: &ParamsConfig) -> Self {
        let keys = &config.query;
        let asc = request.query(&keys.asc).map(str::to_owned);
        let desc = request.query(&keys.desc).map(str::to_owned);
        let sort = Sort::from_query(asc.as_deref(), desc.as_deref());

        Self {
            offset: request.query(&keys.offset).map(QueryInt::parse),
            limit: request.query(&keys.limit).map(QueryInt::parse),
            fields: request.query(&keys.fields).map(FieldSelection::parse),
            asc,
            desc,
            sort,
            errors: ErrorSink::new(),
        }
    }

    #[must_use]
    pub fn asc(&self) -> Option<&str> {
        self.asc.as_deref()
    }

    #[must_use]
    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    #[must_use]
    pub fn offset(&self) -> Option<&QueryInt> {
        self.offset.as_ref()
    }

    #[must_use]
    pub fn limit(&self) -> Option<&QueryInt> {
        self.limit.as_ref()
    }

    #[must_use]
    pub fn fields(&self) -> Option<&FieldSelection> {
        self.fields.as_ref()
    }

    /// The effective sort. Ascending wins when both directions are given.
    #[must_use]
    pub fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    /// Validates every parameter and returns the accumulated errors.
    ///
    /// All parameters are optional. Codes are appended in order: asc, desc,
    /// fields, offset, limit.
    pub fn validate<F, S>(&mut self, fields_valid: &[F], sort_valid: &[S]) -> &ErrorSink
    where
        F: AsRef<str>,
        S: AsRef<str>,
    {
        let asc = self.asc.clone().map(Value::String);
        let desc = self.desc.clone().map(Value::String);
        let names = self.fields.as_ref().map(|f| Value::from(f.names.clone()));
        let offset = self.offset.as_ref().map(QueryInt::to_json);
        let limit = self.limit.as_ref().map(QueryInt::to_json);
        let allowed_fields: Vec<&str> = fields_valid.iter().map(AsRef::as_ref).collect();

        let errors = &mut self.errors;
        validate(asc.as_ref(), &codes::ASC, errors)
            .is_optional()
            .is_string_enum(sort_valid);
        validate(desc.as_ref(), &codes::DESC, errors)
            .is_optional()
            .is_string_enum(sort_valid);
        validate(names.as_ref(), &codes::FIELDS, errors)
            .is_optional()
            .is_array_match(&allowed_fields);
        validate(offset.as_ref(), &codes::OFFSET, errors)
            .is_optional()
            .is_number();
        validate(limit.as_ref(), &codes::LIMIT, errors)
            .is_optional()
            .is_number();

        tracing::debug!(errors = self.errors.len(), "filter parameters validated");
        &self.errors
    }

    /// Errors recorded so far.
    #[must_use]
    pub fn errors(&self) -> &ErrorSink {
        &self.errors
    }

    /// Consumes the parameters, returning the recorded errors.
    #[must_use]
    pub fn into_errors(self) -> ErrorSink {
        self.errors
    }
}
