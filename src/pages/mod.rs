//! Page composers
//!
//! Each composer issues its independent reads concurrently, together with
//! the site parameters and categories needed by the header and footer, then
//! builds the page view model. Reads that depend on another result (products
//! of a category, related products) run once that result is in.

use serde::Serialize;
use std::sync::Arc;

use crate::components::{
    ArticleCard, ArticleView, CategoryHeader, CategoryTile, HeroBanner, MobileMenu, ProductCard,
    ProductDetail,
};
use crate::config::SiteConfig;
use crate::cosmic::ContentStore;
use crate::models::{Category, SiteParameters};
use crate::services::product::RELATED_PRODUCTS_LIMIT;
use crate::services::{
    ArticleService, BannerService, CategoryService, MarkdownRenderer, ProductService, QueryError,
    SiteService,
};
use crate::theme::{StandardTemplateVars, ThemeError};

/// Error type for page composition and rendering
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The requested resource does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// A content query failed
    #[error(transparent)]
    Query(#[from] QueryError),

    /// The page could not be rendered
    #[error(transparent)]
    Render(#[from] ThemeError),
}

impl PageError {
    pub fn not_found(what: &str, slug: &str) -> Self {
        PageError::NotFound(format!("{} '{}'", what, slug))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PageError::NotFound(_))
    }
}

/// Request-scoped inputs shared by every page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// Request path, used for self links
    pub path: String,
    pub menu: MobileMenu,
    /// Requested hero slide (`?slide=N`)
    pub slide: Option<i64>,
    /// Requested gallery image (`?image=N`)
    pub image: Option<i64>,
}

impl PageRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }
}

/// A page view model and the template rendering it
pub trait PageView: Serialize {
    const TEMPLATE: &'static str;
}

/// A composed page: site chrome plus page body
#[derive(Debug)]
pub struct Page<T> {
    pub layout: StandardTemplateVars,
    pub body: T,
}

/// Home page: hero, category grid, popular products
#[derive(Debug, Serialize)]
pub struct HomePage {
    pub hero: Option<HeroBanner>,
    pub categories: Vec<CategoryTile>,
    pub popular: Vec<ProductCard>,
}

impl PageView for HomePage {
    const TEMPLATE: &'static str = "index.html";
}

/// Category page
#[derive(Debug, Serialize)]
pub struct CategoryPage {
    pub category: CategoryHeader,
    pub products: Vec<ProductCard>,
}

impl PageView for CategoryPage {
    const TEMPLATE: &'static str = "category.html";
}

/// Product page
#[derive(Debug, Serialize)]
pub struct ProductPage {
    pub product: ProductDetail,
    pub related: Vec<ProductCard>,
}

impl PageView for ProductPage {
    const TEMPLATE: &'static str = "product.html";
}

/// Blog article list
#[derive(Debug, Serialize)]
pub struct BlogPage {
    pub articles: Vec<ArticleCard>,
}

impl PageView for BlogPage {
    const TEMPLATE: &'static str = "blog.html";
}

/// Single article
#[derive(Debug, Serialize)]
pub struct ArticlePage {
    pub article: ArticleView,
}

impl PageView for ArticlePage {
    const TEMPLATE: &'static str = "article.html";
}

/// Error page body
#[derive(Debug, Serialize)]
pub struct ErrorPage {
    pub status: u16,
    pub title: String,
    pub error_message: String,
}

impl ErrorPage {
    pub fn template(&self) -> &'static str {
        if self.status == 404 {
            "not_found.html"
        } else {
            "error.html"
        }
    }

    pub fn from_error(error: &PageError) -> Self {
        if error.is_not_found() {
            ErrorPage {
                status: 404,
                title: "Page introuvable".to_string(),
                error_message: "La page que vous recherchez n'existe pas ou a été déplacée."
                    .to_string(),
            }
        } else {
            ErrorPage {
                status: 500,
                title: "Une erreur est survenue".to_string(),
                error_message: "Impossible de charger cette page pour le moment.".to_string(),
            }
        }
    }
}

/// The storefront's query services and page composers
pub struct Storefront {
    pub products: ProductService,
    pub categories: CategoryService,
    pub banners: BannerService,
    pub articles: ArticleService,
    pub site: SiteService,
    markdown: MarkdownRenderer,
    defaults: SiteConfig,
}

impl Storefront {
    /// Create the storefront over a content store
    pub fn new(store: Arc<dyn ContentStore>, defaults: SiteConfig) -> Self {
        Self {
            products: ProductService::new(store.clone()),
            categories: CategoryService::new(store.clone()),
            banners: BannerService::new(store.clone()),
            articles: ArticleService::new(store.clone()),
            site: SiteService::new(store),
            markdown: MarkdownRenderer::new(),
            defaults,
        }
    }

    /// Site chrome from configuration alone
    pub fn default_layout(&self, request: &PageRequest) -> StandardTemplateVars {
        StandardTemplateVars::new(
            &self.defaults.name,
            &self.defaults.description,
            &request.path,
        )
        .with_menu(request.menu)
    }

    fn layout_from(
        &self,
        request: &PageRequest,
        params: Option<SiteParameters>,
        categories: &[Category],
    ) -> StandardTemplateVars {
        let layout = self.default_layout(request).with_categories(categories);
        match params {
            Some(params) => layout.with_site_parameters(&params),
            None => layout,
        }
    }

    /// Site chrome from the store
    pub async fn layout(&self, request: &PageRequest) -> Result<StandardTemplateVars, QueryError> {
        let (params, categories) = tokio::join!(self.site.parameters(), self.categories.list());
        Ok(self.layout_from(request, params?, &categories?))
    }

    /// Home page
    pub async fn home(&self, request: &PageRequest) -> Result<Page<HomePage>, PageError> {
        let (params, categories, banners, popular) = tokio::join!(
            self.site.parameters(),
            self.categories.list(),
            self.banners.active(),
            self.products.popular(),
        );
        let categories = categories?;

        Ok(Page {
            layout: self.layout_from(request, params?, &categories),
            body: HomePage {
                hero: HeroBanner::new(&banners?, request.slide),
                categories: categories.iter().map(CategoryTile::from_category).collect(),
                popular: ProductCard::list(&popular),
            },
        })
    }

    /// Category page
    pub async fn category(
        &self,
        request: &PageRequest,
        slug: &str,
    ) -> Result<Page<CategoryPage>, PageError> {
        let (params, categories, category) = tokio::join!(
            self.site.parameters(),
            self.categories.list(),
            self.categories.get_by_slug(slug),
        );
        let category = category?.ok_or_else(|| PageError::not_found("Category", slug))?;
        let products = self.products.by_category(&category.id).await?;

        Ok(Page {
            layout: self.layout_from(request, params?, &categories?),
            body: CategoryPage {
                category: CategoryHeader::from_category(&category),
                products: ProductCard::list(&products),
            },
        })
    }

    /// Product page
    pub async fn product(
        &self,
        request: &PageRequest,
        slug: &str,
    ) -> Result<Page<ProductPage>, PageError> {
        let (params, categories, product) = tokio::join!(
            self.site.parameters(),
            self.categories.list(),
            self.products.get_by_slug(slug),
        );
        let product = product?.ok_or_else(|| PageError::not_found("Product", slug))?;
        let related = self.products.related(&product, RELATED_PRODUCTS_LIMIT).await;

        Ok(Page {
            layout: self.layout_from(request, params?, &categories?),
            body: ProductPage {
                product: ProductDetail::new(&product, request.image),
                related: ProductCard::list(&related),
            },
        })
    }

    /// Blog article list
    pub async fn blog(&self, request: &PageRequest) -> Result<Page<BlogPage>, PageError> {
        let (params, categories, articles) = tokio::join!(
            self.site.parameters(),
            self.categories.list(),
            self.articles.list(),
        );

        Ok(Page {
            layout: self.layout_from(request, params?, &categories?),
            body: BlogPage {
                articles: articles?
                    .iter()
                    .map(|a| ArticleCard::from_article(a, &self.markdown))
                    .collect(),
            },
        })
    }

    /// Single article
    pub async fn article(
        &self,
        request: &PageRequest,
        slug: &str,
    ) -> Result<Page<ArticlePage>, PageError> {
        let (params, categories, article) = tokio::join!(
            self.site.parameters(),
            self.categories.list(),
            self.articles.get_by_slug(slug),
        );
        let article = article?.ok_or_else(|| PageError::not_found("Article", slug))?;

        Ok(Page {
            layout: self.layout_from(request, params?, &categories?),
            body: ArticlePage {
                article: ArticleView::new(&article, &self.markdown),
            },
        })
    }
}
