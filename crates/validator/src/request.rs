//! Request-level validation
//!
//! An incoming API request carries up to five named sections: `params`,
//! `headers`, `query`, `body` and `cookies`. [`verify_params`] matches each
//! section against its own allow-schema, in that order, with a per-section
//! extra-key policy:
//!
//! - `params`, `query`, `body`: extras only when the section schema allows them
//! - `headers`, `cookies`: extras always allowed, since clients and proxies
//!   add keys the application does not control
//!
//! A section missing from the request validates as an empty object; a
//! section missing from the schema validates against an empty schema.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::foundation::ValidationError;
use crate::matcher::{Matcher, match_level};
use crate::schema::Schema;

// ============================================================================
// SECTIONS
// ============================================================================

/// One named section of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Path parameters.
    Params,
    /// Request headers.
    Headers,
    /// Query string.
    Query,
    /// Parsed body.
    Body,
    /// Cookies.
    Cookies,
}

impl Section {
    /// Every section, in validation order.
    pub const ALL: [Section; 5] = [
        Section::Params,
        Section::Headers,
        Section::Query,
        Section::Body,
        Section::Cookies,
    ];

    /// Section name, used as the first segment of failure paths.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Params => "params",
            Self::Headers => "headers",
            Self::Query => "query",
            Self::Body => "body",
            Self::Cookies => "cookies",
        }
    }
}

// ============================================================================
// POLICY
// ============================================================================

/// Which sections tolerate keys their schema does not list, regardless of
/// the schema's own flag.
///
/// Loadable from configuration; missing fields take the defaults.
///
/// ```
/// use reqshape_validator::request::SectionPolicy;
///
/// let policy: SectionPolicy = serde_json::from_str(r#"{ "query": true }"#).unwrap();
/// assert!(policy.query);
/// assert!(policy.headers);
/// assert!(!policy.body);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct SectionPolicy {
    /// Extras in `params`.
    pub params: bool,
    /// Extras in `headers`.
    pub headers: bool,
    /// Extras in `query`.
    pub query: bool,
    /// Extras in `body`.
    pub body: bool,
    /// Extras in `cookies`.
    pub cookies: bool,
}

impl Default for SectionPolicy {
    fn default() -> Self {
        Self {
            params: false,
            headers: true,
            query: false,
            body: false,
            cookies: true,
        }
    }
}

impl SectionPolicy {
    /// Whether `section` always tolerates extras.
    pub const fn allows_extra(&self, section: Section) -> bool {
        match section {
            Section::Params => self.params,
            Section::Headers => self.headers,
            Section::Query => self.query,
            Section::Body => self.body,
            Section::Cookies => self.cookies,
        }
    }
}

// ============================================================================
// REQUEST
// ============================================================================

type Object = Map<String, Value>;

/// The data of an incoming request, split into sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Request {
    /// Path parameters.
    pub params: Option<Object>,
    /// Request headers.
    pub headers: Option<Object>,
    /// Query string.
    pub query: Option<Object>,
    /// Parsed body.
    pub body: Option<Object>,
    /// Cookies.
    pub cookies: Option<Object>,
}

impl Request {
    /// An empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a section.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, section: Section, data: Object) -> Self {
        *self.slot_mut(section) = Some(data);
        self
    }

    /// Sets the body.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_body(self, body: Object) -> Self {
        self.with(Section::Body, body)
    }

    /// Returns a section, if present.
    pub fn section(&self, section: Section) -> Option<&Object> {
        match section {
            Section::Params => self.params.as_ref(),
            Section::Headers => self.headers.as_ref(),
            Section::Query => self.query.as_ref(),
            Section::Body => self.body.as_ref(),
            Section::Cookies => self.cookies.as_ref(),
        }
    }

    fn slot_mut(&mut self, section: Section) -> &mut Option<Object> {
        match section {
            Section::Params => &mut self.params,
            Section::Headers => &mut self.headers,
            Section::Query => &mut self.query,
            Section::Body => &mut self.body,
            Section::Cookies => &mut self.cookies,
        }
    }
}

// ============================================================================
// REQUEST SCHEMA
// ============================================================================

/// Allow-schemas for the sections of a request.
#[derive(Debug, Clone, Default)]
pub struct RequestSchema {
    params: Option<Schema>,
    headers: Option<Schema>,
    query: Option<Schema>,
    body: Option<Schema>,
    cookies: Option<Schema>,
}

impl RequestSchema {
    /// A request schema with no section schemas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the schema of a section.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, section: Section, schema: impl Into<Schema>) -> Self {
        let slot = match section {
            Section::Params => &mut self.params,
            Section::Headers => &mut self.headers,
            Section::Query => &mut self.query,
            Section::Body => &mut self.body,
            Section::Cookies => &mut self.cookies,
        };
        *slot = Some(schema.into());
        self
    }

    /// Sets the `params` schema.
    #[must_use = "builder methods must be chained or built"]
    pub fn params(self, schema: impl Into<Schema>) -> Self {
        self.with(Section::Params, schema)
    }

    /// Sets the `headers` schema.
    #[must_use = "builder methods must be chained or built"]
    pub fn headers(self, schema: impl Into<Schema>) -> Self {
        self.with(Section::Headers, schema)
    }

    /// Sets the `query` schema.
    #[must_use = "builder methods must be chained or built"]
    pub fn query(self, schema: impl Into<Schema>) -> Self {
        self.with(Section::Query, schema)
    }

    /// Sets the `body` schema.
    #[must_use = "builder methods must be chained or built"]
    pub fn body(self, schema: impl Into<Schema>) -> Self {
        self.with(Section::Body, schema)
    }

    /// Sets the `cookies` schema.
    #[must_use = "builder methods must be chained or built"]
    pub fn cookies(self, schema: impl Into<Schema>) -> Self {
        self.with(Section::Cookies, schema)
    }

    /// Returns the schema of a section, if set.
    pub fn section(&self, section: Section) -> Option<&Schema> {
        match section {
            Section::Params => self.params.as_ref(),
            Section::Headers => self.headers.as_ref(),
            Section::Query => self.query.as_ref(),
            Section::Body => self.body.as_ref(),
            Section::Cookies => self.cookies.as_ref(),
        }
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

impl<E> Matcher<E> {
    /// Validates every section of `request` against `schema`.
    ///
    /// Failure paths start with the section name, e.g. `body.data.weight`.
    pub fn verify_request(&self, request: &Request, schema: &RequestSchema) -> Result<(), E> {
        let _span = tracing::debug_span!("verify_request").entered();
        let empty_data = Object::new();
        let empty_schema = Schema::empty();

        for section in Section::ALL {
            let data = request.section(section).unwrap_or(&empty_data);
            let section_schema = schema.section(section).unwrap_or(&empty_schema);
            let allow_extra = self.section_policy().allows_extra(section);

            tracing::trace!(section = section.as_str(), keys = data.len(), "verifying section");
            match_level(data, section_schema, allow_extra, section.as_str())
                .map_err(|err| self.fail(err))?;
        }
        Ok(())
    }
}

/// Validates every section of `request` with the default policy and an
/// identity formatter.
///
/// ```
/// use reqshape_validator::prelude::*;
/// use serde_json::json;
///
/// let request: Request = serde_json::from_value(json!({
///     "headers": { "user-agent": "curl/8.0" },
///     "body": { "userName": "foobar", "age": 20 },
/// }))
/// .unwrap();
///
/// let schema = RequestSchema::new().body(
///     Schema::builder()
///         .field("userName", is_string())
///         .field("age", is_number()),
/// );
///
/// assert!(verify_params(&request, &schema).is_ok());
/// ```
pub fn verify_params(request: &Request, schema: &RequestSchema) -> Result<(), ValidationError> {
    Matcher::new().verify_request(request, schema)
}
