use actix_web::{FromRequest, HttpRequest, dev::Payload, error::UrlencodedError, web};
use futures_util::future::LocalBoxFuture;

use crate::errors::ParamError;

// upper bound on the number of values a split parameter may carry
pub const MAX_PARAM_SPLIT_LENGTH: usize = 100;

pub const DEFAULT_SPLIT_SEP: &str = ",";

// one origin of request parameters (query string, form body, ...)
#[derive(Debug, Clone)]
pub struct ParamSource {
    pairs: Vec<(String, String)>,
}

impl ParamSource {
    #[must_use]
    pub const fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    // a repeated key resolves to its first occurrence
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Request parameters looked up across ordered sources.
///
/// The first source that contains a key wins, even if the value it holds is
/// empty. As an extractor the order is query string, then urlencoded form body.
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    sources: Vec<ParamSource>,
}

#[allow(clippy::missing_errors_doc)]
impl RequestParams {
    #[must_use]
    pub const fn from_sources(sources: Vec<ParamSource>) -> Self {
        Self { sources }
    }

    // query first, form second
    #[must_use]
    pub fn new(query: Vec<(String, String)>, form: Vec<(String, String)>) -> Self {
        Self::from_sources(vec![ParamSource::new(query), ParamSource::new(form)])
    }

    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.sources.iter().any(|source| source.has(key))
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.sources.iter().find_map(|source| source.get(key))
    }

    // presence still reflects the source, "  " is present and resolves to ""
    #[must_use]
    pub fn get_trimmed(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim)
    }

    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    #[must_use]
    pub fn trimmed_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_trimmed(key).unwrap_or(default)
    }

    pub fn int_or(&self, key: &str, default: i32) -> Result<i32, ParamError> {
        match self.get(key) {
            Some(raw) => raw.parse().map_err(|e| ParamError::malformed(key, e)),
            None => Ok(default),
        }
    }

    pub fn i64_or(&self, key: &str, default: i64) -> Result<i64, ParamError> {
        match self.get(key) {
            Some(raw) => raw.parse().map_err(|e| ParamError::malformed(key, e)),
            None => Ok(default),
        }
    }

    pub fn i64(&self, key: &str) -> Result<i64, ParamError> {
        self.get(key)
            .ok_or_else(|| ParamError::MissingParameter(key.to_string()))?
            .parse()
            .map_err(|e| ParamError::malformed(key, e))
    }

    /// Split a parameter on `separator` (`,` when `None`) and parse every piece.
    ///
    /// # Errors
    /// `MissingParameter` when no source has `key`, `MalformedParameter` when a
    /// piece doesn't parse or the list is empty or longer than
    /// [`MAX_PARAM_SPLIT_LENGTH`].
    ///
    /// # Panics
    /// An empty separator is a bug in the caller.
    pub fn i64_list(&self, key: &str, separator: Option<&str>) -> Result<Vec<i64>, ParamError> {
        let separator = separator.unwrap_or(DEFAULT_SPLIT_SEP);
        assert!(!separator.is_empty(), "invalid separator for parameter `{key}`");

        let raw = self
            .get(key)
            .ok_or_else(|| ParamError::MissingParameter(key.to_string()))?;

        let values = split_to_i64(raw, separator).map_err(|e| ParamError::malformed(key, e))?;
        if values.is_empty() || values.len() > MAX_PARAM_SPLIT_LENGTH {
            return Err(ParamError::malformed(
                key,
                anyhow::anyhow!(
                    "expected 1 to {MAX_PARAM_SPLIT_LENGTH} values, got {}",
                    values.len()
                ),
            ));
        }
        Ok(values)
    }
}

fn split_to_i64(raw: &str, separator: &str) -> Result<Vec<i64>, std::num::ParseIntError> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    raw.split(separator).map(str::parse).collect()
}

impl FromRequest for RequestParams {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let query = web::Query::<Vec<(String, String)>>::from_query(req.query_string());
        let form = web::Form::<Vec<(String, String)>>::from_request(req, payload);

        Box::pin(async move {
            let query = query?.into_inner();
            // only a request without an urlencoded body has an empty form source,
            // a body we can't read must not make its keys look absent
            let form = match form.await {
                Ok(form) => form.into_inner(),
                Err(e)
                    if matches!(
                        e.as_error::<UrlencodedError>(),
                        Some(UrlencodedError::ContentType)
                    ) =>
                {
                    tracing::debug!("No form parameters: {e}");
                    Vec::new()
                }
                Err(e) => {
                    tracing::warn!("Rejecting unreadable form body: {e}");
                    let error = ParamError::MalformedForm(anyhow::anyhow!("{e}"));
                    return Err(actix_web::Error::from(error));
                }
            };
            Ok(Self::new(query, form))
        })
    }
}
