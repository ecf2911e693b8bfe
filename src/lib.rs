//! TechStore - a server-rendered storefront
//!
//! This library reads catalog content (products, categories, banners,
//! articles, site parameters) from a Cosmic bucket and renders it as HTML.

pub mod api;
pub mod components;
pub mod config;
pub mod cosmic;
pub mod models;
pub mod pages;
pub mod services;
pub mod theme;
