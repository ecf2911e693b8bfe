//! Theme engine
//!
//! This module provides template rendering using Tera.
//! Features:
//! - Templates embedded in the binary, optionally overridden from disk
//! - Storefront `price` filter
//! - Standard template variables for the header and footer
//! - An inline error page for when no template renders

use chrono::Datelike;
use rust_embed::RustEmbed;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::error::Error as StdError;
use std::fs;
use std::path::Path;
use tera::{Context as TeraContext, Tera, Value};

use crate::components::format::{format_price, initial};
use crate::components::{CategoryLink, MobileMenu, MobileMenuView};
use crate::models::{Category, SiteParameters};
use crate::services::markdown::html_escape;

mod error;

pub use error::ThemeError;

/// Number of categories linked from the desktop header
pub const HEADER_CATEGORY_LINKS: usize = 4;

/// Logo size in the header and footer
pub const LOGO_IMAGE: (u32, u32) = (40, 40);

/// Templates shipped with the binary
#[derive(RustEmbed)]
#[folder = "templates/"]
#[include = "*.html"]
struct EmbeddedTemplates;

/// Theme engine for rendering templates
pub struct ThemeEngine {
    /// Tera template engine instance
    tera: Tera,
}

impl ThemeEngine {
    /// Create a theme engine from the embedded templates
    pub fn embedded() -> Result<Self, ThemeError> {
        Self::new(None)
    }

    /// Create a new theme engine
    ///
    /// # Arguments
    /// * `override_path` - Optional directory of `*.html` templates replacing
    ///   embedded templates of the same name
    pub fn new(override_path: Option<&Path>) -> Result<Self, ThemeError> {
        Ok(Self {
            tera: Self::load_templates(override_path)?,
        })
    }

    fn load_templates(override_path: Option<&Path>) -> Result<Tera, ThemeError> {
        let mut templates: BTreeMap<String, String> = BTreeMap::new();

        for name in EmbeddedTemplates::iter() {
            let Some(file) = EmbeddedTemplates::get(&name) else {
                continue;
            };
            let content = String::from_utf8(file.data.into_owned()).map_err(|e| {
                ThemeError::InvalidTemplate {
                    name: name.to_string(),
                    reason: e.to_string(),
                }
            })?;
            templates.insert(name.to_string(), content);
        }

        if let Some(dir) = override_path {
            let mut overridden = Vec::new();
            collect_templates_from_dir(dir, dir, &mut overridden)?;
            for (name, content) in overridden {
                tracing::info!("Template '{}' overridden from {:?}", name, dir);
                templates.insert(name, content);
            }
        }

        let mut tera = Tera::default();
        tera.add_raw_templates(templates).map_err(|e| {
            ThemeError::TemplateError(format!("Failed to load templates: {}", error_chain(&e)))
        })?;
        // Leaves `/` alone so URLs stay readable in attributes
        tera.set_escape_fn(html_escape);
        tera.register_filter("price", price_filter);

        Ok(tera)
    }

    /// Whether a template with this name is loaded
    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Render a template with context
    ///
    /// # Arguments
    /// * `template` - Template name (e.g., "index.html", "product.html")
    /// * `context` - Tera context with template variables
    pub fn render(&self, template: &str, context: &TeraContext) -> Result<String, ThemeError> {
        if !self.has_template(template) {
            return Err(ThemeError::NotFound(template.to_string()));
        }
        self.tera.render(template, context).map_err(|e| {
            ThemeError::TemplateError(format!("Failed to render '{}': {}", template, error_chain(&e)))
        })
    }

    /// Render a page view model with standard variables added
    pub fn render_page<T: Serialize>(
        &self,
        template: &str,
        page: &T,
        standard_vars: &StandardTemplateVars,
    ) -> Result<String, ThemeError> {
        let context = TeraContext::from_serialize(page).map_err(|e| {
            ThemeError::TemplateError(format!("Invalid context for '{}': {}", template, error_chain(&e)))
        })?;
        self.render_with_standard_vars(template, &context, standard_vars)
    }

    /// Render a template with standard variables automatically added
    pub fn render_with_standard_vars(
        &self,
        template: &str,
        context: &TeraContext,
        standard_vars: &StandardTemplateVars,
    ) -> Result<String, ThemeError> {
        let mut full_context = context.clone();
        full_context.insert("site", standard_vars);
        full_context.insert("request_path", &standard_vars.request_path);
        full_context.insert("year", &standard_vars.year);

        self.render(template, &full_context)
    }

    /// Generate a simple HTML error page
    ///
    /// Last resort when no template can be rendered.
    pub fn simple_error_page(title: &str, message: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            max-width: 600px;
            margin: 50px auto;
            padding: 20px;
            background: #f5f5f5;
        }}
        .error-box {{
            background: white;
            border-left: 4px solid #e74c3c;
            padding: 20px;
            border-radius: 4px;
        }}
        h1 {{ color: #e74c3c; margin-top: 0; }}
    </style>
</head>
<body>
    <div class="error-box">
        <h1>{title}</h1>
        <p>{message}</p>
        <p><a href="/">Retour à l'accueil</a></p>
    </div>
</body>
</html>"#,
            title = html_escape(title),
            message = html_escape(message),
        )
    }
}

/// Collect `*.html` templates below `current_path`, named relative to `base_path`
fn collect_templates_from_dir(
    base_path: &Path,
    current_path: &Path,
    templates: &mut Vec<(String, String)>,
) -> Result<(), ThemeError> {
    if !current_path.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(current_path)? {
        let path = entry?.path();

        if path.is_dir() {
            collect_templates_from_dir(base_path, &path, templates)?;
        } else if path.extension().is_some_and(|ext| ext == "html") {
            let relative_path = path.strip_prefix(base_path).map_err(|_| {
                ThemeError::TemplateError("Failed to get relative path".to_string())
            })?;
            let template_name = relative_path.to_string_lossy().replace('\\', "/");
            let content = fs::read_to_string(&path)?;
            templates.push((template_name, content));
        }
    }

    Ok(())
}

fn error_chain(e: &dyn StdError) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(s) = source {
        message.push_str(&format!("\n  Caused by: {}", s));
        source = s.source();
    }
    message
}

/// `{{ product.price | price }}` - French euro formatting; null renders empty
fn price_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    if value.is_null() {
        return Ok(Value::String(String::new()));
    }
    value
        .as_f64()
        .map(|n| Value::String(format_price(n)))
        .ok_or_else(|| tera::Error::msg(format!("Filter `price` expects a number, got {}", value)))
}

/// Standard template variables for the site chrome (header, footer, menu)
#[derive(Debug, Clone, Serialize)]
pub struct StandardTemplateVars {
    /// Shop name
    pub name: String,
    /// Shop description
    pub description: String,
    /// Placeholder letter when there is no logo
    pub initial: String,
    /// Logo URL sized for the header
    pub logo: Option<String>,
    pub contact_email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Categories linked from the desktop header
    pub header_categories: Vec<CategoryLink>,
    /// All categories (footer, mobile menu)
    pub categories: Vec<CategoryLink>,
    pub menu: MobileMenuView,
    /// Current request path
    pub request_path: String,
    /// Current year (for copyright)
    pub year: i32,
}

impl StandardTemplateVars {
    /// Create new standard template variables
    pub fn new(
        site_name: impl Into<String>,
        site_description: impl Into<String>,
        request_path: impl Into<String>,
    ) -> Self {
        let name = site_name.into();
        let request_path = request_path.into();
        Self {
            initial: initial(&name),
            name,
            description: site_description.into(),
            logo: None,
            contact_email: None,
            phone: None,
            address: None,
            header_categories: Vec::new(),
            categories: Vec::new(),
            menu: MobileMenu::default().view(&request_path),
            request_path,
            year: chrono::Utc::now().year(),
        }
    }

    /// Apply the store's site parameters over the configured defaults
    pub fn with_site_parameters(mut self, params: &SiteParameters) -> Self {
        let meta = &params.metadata;
        let non_empty = |s: &Option<String>| s.clone().filter(|s| !s.trim().is_empty());

        if let Some(name) = non_empty(&meta.site_name) {
            self.initial = initial(&name);
            self.name = name;
        }
        if let Some(description) = non_empty(&meta.description) {
            self.description = description;
        }
        let (width, height) = LOGO_IMAGE;
        self.logo = meta.logo.as_ref().map(|l| l.sized(width, height));
        self.contact_email = non_empty(&meta.contact_email);
        self.phone = non_empty(&meta.phone);
        self.address = non_empty(&meta.address);
        self
    }

    /// Set the navigation categories
    pub fn with_categories(mut self, categories: &[Category]) -> Self {
        self.categories = categories.iter().map(CategoryLink::from_category).collect();
        self.header_categories = self
            .categories
            .iter()
            .take(HEADER_CATEGORY_LINKS)
            .cloned()
            .collect();
        self
    }

    /// Set the mobile menu state
    pub fn with_menu(mut self, menu: MobileMenu) -> Self {
        self.menu = menu.view(&self.request_path);
        self
    }
}

#[cfg(test)]
mod tests;
