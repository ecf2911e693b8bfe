//! Application state and error responses

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::pages::{ErrorPage, Page, PageError, PageRequest, PageView, Storefront};
use crate::theme::{StandardTemplateVars, ThemeEngine};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub storefront: Arc<Storefront>,
    pub theme_engine: Arc<ThemeEngine>,
}

impl AppState {
    pub fn new(storefront: Storefront, theme_engine: ThemeEngine) -> Self {
        Self {
            storefront: Arc::new(storefront),
            theme_engine: Arc::new(theme_engine),
        }
    }

    /// Render a composed page, or the matching error page
    pub async fn respond<T: PageView>(
        &self,
        request: &PageRequest,
        result: Result<Page<T>, PageError>,
    ) -> Response {
        let page = match result {
            Ok(page) => page,
            Err(e) => return self.error_response(request, e).await,
        };

        match self
            .theme_engine
            .render_page(T::TEMPLATE, &page.body, &page.layout)
        {
            Ok(html) => Html(html).into_response(),
            Err(e) => self.error_response(request, e.into()).await,
        }
    }

    /// Render the 404 or 500 page for an error
    pub async fn error_response(&self, request: &PageRequest, error: PageError) -> Response {
        if error.is_not_found() {
            tracing::debug!(path = %request.path, "{}", error);
        } else {
            tracing::error!(path = %request.path, "Page failed: {}", error);
        }

        let body = ErrorPage::from_error(&error);
        let status = error.status_code();
        let layout: StandardTemplateVars = match self.storefront.layout(request).await {
            Ok(layout) => layout,
            Err(e) => {
                tracing::warn!("Error page rendered without store data: {}", e);
                self.storefront.default_layout(request)
            }
        };

        match self.theme_engine.render_page(body.template(), &body, &layout) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                tracing::warn!("Failed to render error page: {}", e);
                error.into_response()
            }
        }
    }
}

impl PageError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PageError::NotFound(_) => StatusCode::NOT_FOUND,
            PageError::Query(_) | PageError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let page = ErrorPage::from_error(&self);
        let html = ThemeEngine::simple_error_page(&page.title, &page.error_message);
        (self.status_code(), Html(html)).into_response()
    }
}
