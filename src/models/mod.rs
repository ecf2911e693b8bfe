//! Data models
//!
//! Typed views of the objects held in the content store. Every content type
//! shares the [`ContentObject`] envelope and differs only in its metadata.

mod article;
mod banner;
mod category;
mod content;
mod product;
mod site;

pub use article::{Article, ArticleMetadata, ARTICLE_TYPE};
pub use banner::{Banner, BannerMetadata, BANNER_TYPE};
pub use category::{Category, CategoryMetadata, CATEGORY_TYPE};
pub use content::{parse_store_date, ContentObject, ImageRef};
pub use product::{CategoryRef, Product, ProductMetadata, PRODUCT_TYPE};
pub use site::{SiteParameters, SiteParametersMetadata, SITE_PARAMETERS_TYPE};
