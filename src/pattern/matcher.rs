//! Compiled URL shapes.
//!
//! # Responsibilities
//! - Hold one compiled template per URL component
//! - Test a parsed URL structurally and return the raw capture map
//!
//! # Design Decisions
//! - Structural only: no registry-specific checks happen here
//! - No-match is `None`, never an error
//! - Port is ignored; query and fragment only take part when declared

use std::collections::BTreeMap;
use std::fmt;

use url::Url;

use crate::pattern::template::{Component, Template, TemplateError};

/// Per-component templates for one URL shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentTemplates {
    pub scheme: String,
    pub host: String,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl ComponentTemplates {
    pub fn new(
        scheme: impl Into<String>,
        host: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            path: path.into(),
            query: None,
            fragment: None,
        }
    }

    /// Capture the query string when it matches `template`.
    pub fn query(mut self, template: impl Into<String>) -> Self {
        self.query = Some(template.into());
        self
    }

    /// Capture the fragment when it matches `template`.
    pub fn fragment(mut self, template: impl Into<String>) -> Self {
        self.fragment = Some(template.into());
        self
    }
}

/// Declarative definition of one URL shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatcherSpec {
    /// `scheme://host/path` shorthand. Query and fragment are ignored.
    Url(String),
    /// Separate templates per component.
    Components(ComponentTemplates),
}

impl From<ComponentTemplates> for MatcherSpec {
    fn from(templates: ComponentTemplates) -> Self {
        MatcherSpec::Components(templates)
    }
}

impl MatcherSpec {
    /// Split the shorthand form into component templates.
    pub fn to_components(&self) -> Result<ComponentTemplates, TemplateError> {
        match self {
            MatcherSpec::Components(templates) => Ok(templates.clone()),
            MatcherSpec::Url(template) => {
                let (scheme, rest) = template
                    .split_once("://")
                    .ok_or_else(|| TemplateError::NotAUrlTemplate(template.clone()))?;
                if scheme.is_empty() || rest.is_empty() {
                    return Err(TemplateError::NotAUrlTemplate(template.clone()));
                }
                let (host, path) = match rest.find('/') {
                    Some(idx) => rest.split_at(idx),
                    None => (rest, "/"),
                };
                Ok(ComponentTemplates::new(scheme, host, path))
            }
        }
    }

    pub fn compile(&self) -> Result<Matcher, TemplateError> {
        let templates = self.to_components()?;
        let host = Template::compile(Component::Host, &templates.host)?;
        let path = Template::compile(Component::Path, &templates.path)?;

        // Host and path captures share one map.
        if let Some(name) = host.capture_names().find(|n| path.capture_names().any(|p| p == *n)) {
            return Err(TemplateError::DuplicateCapture(name.to_string()));
        }

        Ok(Matcher {
            scheme: Template::compile(Component::Scheme, &templates.scheme)?,
            host,
            path,
            query: templates
                .query
                .as_deref()
                .map(|t| Template::compile(Component::Query, t))
                .transpose()?,
            fragment: templates
                .fragment
                .as_deref()
                .map(|t| Template::compile(Component::Fragment, t))
                .transpose()?,
        })
    }
}

/// Output of a successful structural match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMatch {
    /// Named host and path captures that participated in the match.
    pub captures: BTreeMap<String, String>,
    /// Query string, only when the matcher declares a query template.
    pub query: Option<String>,
    /// Fragment, only when the matcher declares a fragment template.
    pub fragment: Option<String>,
}

impl RawMatch {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.captures.get(name).map(String::as_str)
    }
}

/// A compiled URL shape.
#[derive(Debug, Clone)]
pub struct Matcher {
    scheme: Template,
    host: Template,
    path: Template,
    query: Option<Template>,
    fragment: Option<Template>,
}

impl Matcher {
    /// Structurally match `url`.
    pub fn match_url(&self, url: &Url) -> Option<RawMatch> {
        if !self.scheme.is_match(url.scheme()) {
            return None;
        }
        let host_captures = self.host.captures(url.host_str()?)?;
        let path_captures = self.path.captures(url.path())?;

        let query = match &self.query {
            Some(template) => {
                if !template.is_match(url.query().unwrap_or_default()) {
                    return None;
                }
                url.query().filter(|q| !q.is_empty()).map(str::to_owned)
            }
            None => None,
        };
        let fragment = match &self.fragment {
            Some(template) => {
                if !template.is_match(url.fragment().unwrap_or_default()) {
                    return None;
                }
                url.fragment().filter(|f| !f.is_empty()).map(str::to_owned)
            }
            None => None,
        };

        let captures = host_captures
            .into_iter()
            .chain(path_captures)
            .map(|(name, value)| (name.to_owned(), value.to_owned()))
            .collect();

        Some(RawMatch { captures, query, fragment })
    }

    /// Names of all host and path captures.
    pub fn capture_names(&self) -> impl Iterator<Item = &str> {
        self.host.capture_names().chain(self.path.capture_names())
    }

    pub fn declares_capture(&self, name: &str) -> bool {
        self.capture_names().any(|n| n == name)
    }

    pub fn path(&self) -> &Template {
        &self.path
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.host, self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}
