use crate::operations::domain::PayloadShape;
use crate::shared::security::validate_url_component;
use crate::shared::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// HTTP methods used by read endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HttpMethod {
    Get,
}

/// Describes one remote resource call: a path template with `{name}`
/// placeholders, the method, and path/query parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointDescriptor {
    path_template: String,
    method: HttpMethod,
    path_params: BTreeMap<String, String>,
    query: Vec<(String, String)>,
}

impl EndpointDescriptor {
    pub fn get(path_template: impl Into<String>) -> Self {
        Self::new(path_template, HttpMethod::Get)
    }

    pub fn new(path_template: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            path_template: path_template.into(),
            method,
            path_params: BTreeMap::new(),
            query: Vec::new(),
        }
    }

    /// Binds a `{name}` placeholder.
    ///
    /// # Errors
    /// Returns an error if the value could address another path
    /// (separators, `..`, `?`, `#`, `@`) or is empty.
    pub fn with_path_param(mut self, name: &str, value: &str) -> Result<Self> {
        validate_url_component(value, &format!("Path parameter '{}'", name))?;
        self.path_params.insert(name.to_string(), value.to_string());
        Ok(self)
    }

    /// Whether the path template contains a `{name}` placeholder
    pub fn has_placeholder(&self, name: &str) -> bool {
        self.path_template.contains(&format!("{{{}}}", name))
    }

    /// Adds a query parameter; blank values are skipped
    pub fn with_query(mut self, name: &str, value: &str) -> Self {
        if !value.trim().is_empty() {
            self.query.push((name.to_string(), value.trim().to_string()));
        }
        self
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn path_template(&self) -> &str {
        &self.path_template
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Renders the path with percent-encoded parameters.
    ///
    /// # Errors
    /// Returns an error if a placeholder has no bound value.
    pub fn render_path(&self) -> Result<String> {
        let mut rendered = String::with_capacity(self.path_template.len());
        let mut rest = self.path_template.as_str();

        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                anyhow::bail!("Unterminated placeholder in '{}'", self.path_template);
            };
            let name = &rest[start + 1..start + len];
            let value = self.path_params.get(name).ok_or_else(|| {
                anyhow::anyhow!(
                    "No value bound for placeholder '{{{}}}' in '{}'",
                    name,
                    self.path_template
                )
            })?;
            rendered.push_str(&rest[..start]);
            rendered.push_str(&urlencoding::encode(value));
            rest = &rest[start + len + 1..];
        }
        rendered.push_str(rest);

        Ok(rendered)
    }
}

/// One named resource fetched during an aggregation cycle
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceRequest {
    id: String,
    descriptor: EndpointDescriptor,
    requires_auth: bool,
    shape: PayloadShape,
}

impl ResourceRequest {
    pub fn new(
        id: impl Into<String>,
        descriptor: EndpointDescriptor,
        requires_auth: bool,
        shape: PayloadShape,
    ) -> Self {
        Self {
            id: id.into(),
            descriptor,
            requires_auth,
            shape,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn descriptor(&self) -> &EndpointDescriptor {
        &self.descriptor
    }

    pub fn requires_auth(&self) -> bool {
        self.requires_auth
    }

    pub fn shape(&self) -> &PayloadShape {
        &self.shape
    }
}
