//! Tests for the theme engine

use super::*;
use crate::components::{CategoryTile, ProductCard};
use crate::models::Product;
use crate::pages::{ErrorPage, HomePage};
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use tera::Context as TeraContext;

const PAGE_TEMPLATES: [&str; 9] = [
    "base.html",
    "macros.html",
    "index.html",
    "category.html",
    "product.html",
    "blog.html",
    "article.html",
    "error.html",
    "not_found.html",
];

fn category(id: &str, name: &str) -> Category {
    serde_json::from_value(json!({
        "id": id, "slug": id, "title": name, "metadata": { "nom": name }
    }))
    .unwrap()
}

fn site_parameters(metadata: serde_json::Value) -> SiteParameters {
    serde_json::from_value(json!({
        "id": "site", "slug": "parametres", "title": "Paramètres", "metadata": metadata
    }))
    .unwrap()
}

fn render_str(engine: &ThemeEngine, source: &str, context: &TeraContext) -> String {
    let mut tera = engine.tera.clone();
    tera.render_str(source, context).unwrap()
}

#[test]
fn test_embedded_templates_are_loaded() {
    let engine = ThemeEngine::embedded().unwrap();

    for name in PAGE_TEMPLATES {
        assert!(engine.has_template(name), "missing {}", name);
    }
    assert!(!engine.has_template("post.html"));
}

#[test]
fn test_render_missing_template() {
    let engine = ThemeEngine::embedded().unwrap();

    let result = engine.render("panier.html", &TeraContext::new());

    assert!(matches!(result, Err(ThemeError::NotFound(name)) if name == "panier.html"));
}

#[test]
fn test_price_filter() {
    let engine = ThemeEngine::embedded().unwrap();
    let mut context = TeraContext::new();
    context.insert("amount", &1299.5);
    context.insert("missing", &serde_json::Value::Null);

    assert_eq!(
        render_str(&engine, "{{ amount | price }}|{{ missing | price }}", &context),
        "1\u{202F}299,5\u{A0}€|"
    );
}

#[test]
fn test_price_filter_rejects_text() {
    let engine = ThemeEngine::embedded().unwrap();
    let mut tera = engine.tera.clone();

    assert!(tera.render_str("{{ 'gratuit' | price }}", &TeraContext::new()).is_err());
}

#[test]
fn test_escaping_keeps_slashes() {
    let engine = ThemeEngine::embedded().unwrap();
    let mut context = TeraContext::new();
    context.insert("href", "/produits/casque");
    context.insert("name", "<b>Casque</b>");

    let mut tera = engine.tera.clone();
    tera.add_raw_template("link.html", r#"<a href="{{ href }}">{{ name }}</a>"#)
        .unwrap();

    assert_eq!(
        tera.render("link.html", &context).unwrap(),
        r#"<a href="/produits/casque">&lt;b&gt;Casque&lt;/b&gt;</a>"#
    );
}

#[test]
fn test_render_page_with_standard_vars() {
    let engine = ThemeEngine::embedded().unwrap();
    let vars = StandardTemplateVars::new("TechStore", "Boutique", "/")
        .with_categories(&[category("c1", "Audio")]);
    let product: Product = serde_json::from_value(json!({
        "id": "p1", "slug": "casque", "title": "Casque",
        "metadata": { "prix": 49.9, "stock": 0 }
    }))
    .unwrap();
    let page = HomePage {
        hero: None,
        categories: vec![CategoryTile::from_category(&category("c1", "Audio"))],
        popular: ProductCard::list(&[product]),
    };

    let html = engine.render_page("index.html", &page, &vars).unwrap();

    assert!(html.contains("<title>TechStore</title>"));
    assert!(html.contains("Nos Catégories"));
    assert!(html.contains("Produits Populaires"));
    assert!(html.contains("49,9\u{A0}€"));
    assert!(html.contains("Rupture de stock"));
    assert!(html.contains("href=\"/categories/c1\""));
    assert!(html.contains(&format!("© {} TechStore", vars.year)));
    assert!(!html.contains("data-carousel"));
}

#[test]
fn test_simple_error_page_escapes() {
    let html = ThemeEngine::simple_error_page("<Oups>", "\"a\" & 'b'");

    assert!(html.contains("<title>&lt;Oups&gt;</title>"));
    assert!(html.contains("&quot;a&quot; &amp; &#x27;b&#x27;"));
    assert!(html.contains("lang=\"fr\""));
}

#[test]
fn test_error_pages_render_in_layout() {
    let engine = ThemeEngine::embedded().unwrap();
    let vars = StandardTemplateVars::new("TechStore", "", "/inconnu");
    let missing = ErrorPage {
        status: 404,
        title: "Page introuvable".to_string(),
        error_message: "Cette page n'existe pas.".to_string(),
    };
    let failure = ErrorPage {
        status: 500,
        title: "Erreur".to_string(),
        error_message: "<b>boom</b>".to_string(),
    };

    let not_found = engine.render_page(missing.template(), &missing, &vars).unwrap();
    let error = engine.render_page(failure.template(), &failure, &vars).unwrap();

    assert!(not_found.contains("<title>Page introuvable | TechStore</title>"));
    assert!(not_found.contains("Cette page n&#x27;existe pas."));
    assert!(error.contains("<p class=\"status-code\">500</p>"));
    assert!(error.contains("&lt;b&gt;boom&lt;/b&gt;"));
    assert!(error.contains(&format!("© {} TechStore", vars.year)));
}

#[test]
fn test_override_directory_replaces_embedded_template() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("extra")).unwrap();
    fs::write(
        temp_dir.path().join("not_found.html"),
        "<p>Perdu : {{ title }}</p>",
    )
    .unwrap();
    fs::write(temp_dir.path().join("extra/promo.html"), "<p>Promo</p>").unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();

    let engine = ThemeEngine::new(Some(temp_dir.path())).unwrap();
    let mut context = TeraContext::new();
    context.insert("title", "Page introuvable");

    assert_eq!(
        engine.render("not_found.html", &context).unwrap(),
        "<p>Perdu : Page introuvable</p>"
    );
    assert!(engine.has_template("extra/promo.html"));
    assert!(engine.has_template("index.html"));
    assert!(!engine.has_template("notes.txt"));
}

#[test]
fn test_missing_override_directory_is_ignored() {
    let temp_dir = TempDir::new().unwrap();

    let engine = ThemeEngine::new(Some(&temp_dir.path().join("absent"))).unwrap();

    assert!(engine.has_template("index.html"));
}

#[test]
fn test_invalid_override_template_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("index.html"), "{% if %}").unwrap();

    let result = ThemeEngine::new(Some(temp_dir.path()));

    assert!(matches!(result, Err(ThemeError::TemplateError(_))));
}

#[test]
fn test_standard_template_vars_defaults() {
    let vars = StandardTemplateVars::new("techStore", "Boutique", "/blog");

    assert_eq!(vars.initial, "T");
    assert_eq!(vars.logo, None);
    assert_eq!(vars.menu.toggle_href, "/blog?menu=open");
    assert!(vars.year >= 2024);
}

#[test]
fn test_standard_template_vars_with_site_parameters() {
    let params = site_parameters(json!({
        "nom_site": "Élan",
        "description": "  ",
        "email_contact": "contact@elan.test",
        "telephone": "",
        "logo_principal": { "url": "https://cdn.test/logo.png", "imgix_url": "" }
    }));

    let vars = StandardTemplateVars::new("TechStore", "Défaut", "/").with_site_parameters(&params);

    assert_eq!(vars.name, "Élan");
    assert_eq!(vars.initial, "É");
    assert_eq!(vars.description, "Défaut");
    assert_eq!(vars.contact_email.as_deref(), Some("contact@elan.test"));
    assert_eq!(vars.phone, None);
    assert_eq!(
        vars.logo.as_deref(),
        Some("https://cdn.test/logo.png?w=40&h=40&fit=crop&auto=format,compress")
    );
}

#[test]
fn test_header_links_first_categories() {
    let categories: Vec<Category> = (1..=6)
        .map(|i| category(&format!("c{}", i), &format!("Catégorie {}", i)))
        .collect();

    let vars = StandardTemplateVars::new("TechStore", "", "/").with_categories(&categories);

    assert_eq!(vars.categories.len(), 6);
    assert_eq!(vars.header_categories.len(), HEADER_CATEGORY_LINKS);
    assert_eq!(vars.header_categories[0].href, "/categories/c1");
}

#[test]
fn test_mobile_menu_renders_all_categories_when_open() {
    let engine = ThemeEngine::embedded().unwrap();
    let categories: Vec<Category> = (1..=6)
        .map(|i| category(&format!("c{}", i), &format!("Catégorie {}", i)))
        .collect();
    let vars = StandardTemplateVars::new("TechStore", "", "/blog")
        .with_categories(&categories)
        .with_menu(MobileMenu::from_query(Some("open")));
    let page = crate::pages::BlogPage { articles: vec![] };

    let html = engine.render_page("blog.html", &page, &vars).unwrap();

    let panel = &html[html.find("mobile-menu-panel").unwrap()..];
    assert!(panel.contains("Catégorie 6"));
    assert!(panel.contains("Mon compte"));
    assert!(html.contains("Aucun article publié"));
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn simple_error_page_never_leaks_markup(title in ".{0,40}", message in ".{0,80}") {
            let html = ThemeEngine::simple_error_page(&title, &message);
            let body = &html[html.find("<body>").unwrap()..];

            prop_assert_eq!(body.matches('<').count(), "<body><div></div><h1></h1><p></p><p><a></a></p></body></html>".matches('<').count());
        }

        #[test]
        fn header_never_exceeds_link_limit(count in 0usize..12) {
            let categories: Vec<Category> = (0..count)
                .map(|i| category(&format!("c{}", i), "Cat"))
                .collect();

            let vars = StandardTemplateVars::new("TechStore", "", "/").with_categories(&categories);

            prop_assert_eq!(vars.categories.len(), count);
            prop_assert_eq!(vars.header_categories.len(), count.min(HEADER_CATEGORY_LINKS));
        }
    }
}
