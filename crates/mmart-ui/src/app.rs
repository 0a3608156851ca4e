//! Application shell and pages.

use crate::cart::provide_cart_context;
use crate::components::{
    AddToCartButton, CarouselSlide, CartBadge, CartPage, CategoryRail, ProductCard,
    ProductGallery, ProductRail, TouchCarousel,
};
use crate::config::StorefrontConfig;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;
use mmart_commerce::prelude::*;
use serde::{Deserialize, Serialize};

/// One slide of the home page hero carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub image_ref: String,
    pub alt: String,
    /// Where tapping the banner goes, if anywhere.
    #[serde(default)]
    pub href: Option<String>,
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App(
    config: StorefrontConfig,
    catalog: Catalog,
    #[prop(optional)] banners: Vec<Banner>,
) -> impl IntoView {
    provide_meta_context();
    provide_cart_context(&config);
    provide_context(config);
    provide_context(catalog);
    provide_context(banners);

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Meta name="description" content="MMart - groceries and household essentials delivered"/>
        <Title text="MMart"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/category/:slug") view=CategoryPage/>
                    <Route path=path!("/product/:id") view=ProductPage/>
                    <Route path=path!("/cart") view=CartPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    view! {
        <header>
            <a href="/" class="logo">"MMart"</a>
            <nav>
                <a href="/">"Home"</a>
                <CartBadge/>
            </nav>
        </header>
    }
}

// ============================================================================
// Pages
// ============================================================================

/// Home page: hero banner, category rail and featured products.
#[component]
fn HomePage() -> impl IntoView {
    let config = expect_context::<StorefrontConfig>();
    let catalog = expect_context::<Catalog>();
    let banners = use_context::<Vec<Banner>>().unwrap_or_default();

    let categories: Vec<Category> = catalog.roots().cloned().collect();
    let featured: Vec<Product> = catalog
        .products()
        .iter()
        .filter(|p| p.in_stock())
        .cloned()
        .collect();

    view! {
        {(!banners.is_empty()).then(|| {
            let count = banners.len();
            view! {
                <TouchCarousel config=config.carousels.hero slide_count=count label="Promotions">
                    {banners.into_iter().map(|banner| view! {
                        <CarouselSlide><BannerSlide banner=banner/></CarouselSlide>
                    }).collect_view()}
                </TouchCarousel>
            }
        })}
        <CategoryRail categories=categories/>
        <ProductRail title="Featured Products" products=featured/>
    }
}

#[component]
fn BannerSlide(banner: Banner) -> impl IntoView {
    let image = view! { <img class="banner-image" src=banner.image_ref alt=banner.alt/> };
    match banner.href {
        Some(href) => view! { <a href=href>{image}</a> }.into_any(),
        None => image.into_any(),
    }
}

/// Products in a category; a root category includes its subcategories.
#[component]
fn CategoryPage() -> impl IntoView {
    let params = use_params_map();
    let catalog = StoredValue::new(expect_context::<Catalog>());
    let slug = move || params.get().get("slug").unwrap_or_default();

    move || {
        let slug = slug();
        catalog.with_value(|catalog| {
            let Ok(category) = catalog.require_category(&slug) else {
                return view! { <NotFound/> }.into_any();
            };

            let name = category.name.clone();
            let parent = catalog
                .parent_of(&slug)
                .map(|p| (p.name.clone(), format!("/category/{}", p.slug)));
            let products: Vec<Product> = catalog
                .products_in_category(&slug)
                .into_iter()
                .cloned()
                .collect();

            let listing = if products.is_empty() {
                view! { <p>"No products in this category yet."</p> }.into_any()
            } else {
                view! {
                    <div class="products">
                        {products
                            .into_iter()
                            .map(|product| view! { <ProductCard product=product/> })
                            .collect_view()}
                    </div>
                }
                .into_any()
            };

            view! {
                <nav class="breadcrumbs">
                    <a href="/">"Home"</a>
                    {parent
                        .map(|(parent_name, href)| view! { " / " <a href=href>{parent_name}</a> })}
                    " / "
                    <span>{name.clone()}</span>
                </nav>
                <h2>{name}</h2>
                {listing}
            }
            .into_any()
        })
    }
}

/// Product detail with image gallery and similar products.
#[component]
fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let catalog = StoredValue::new(expect_context::<Catalog>());
    let product_id = move || {
        params
            .get()
            .get("id")
            .and_then(|id| id.parse::<u64>().ok())
            .map(ProductId::new)
    };

    move || {
        let Some(id) = product_id() else {
            return view! { <NotFound/> }.into_any();
        };
        catalog.with_value(|catalog| {
            let Some(product) = catalog.product(id).cloned() else {
                return view! { <NotFound/> }.into_any();
            };

            let similar: Vec<Product> = catalog
                .products()
                .iter()
                .filter(|p| p.category_id == product.category_id && p.id != product.id)
                .cloned()
                .collect();
            let price = product.unit_price.display();

            view! {
                <div class="product-detail">
                    <ProductGallery
                        name=product.name.clone()
                        images=vec![product.image_ref.clone()]
                    />
                    <div>
                        <h1>{product.name.clone()}</h1>
                        <p class="price">{price}</p>
                        <p class="description">{product.description.clone()}</p>
                        <AddToCartButton product=product/>
                    </div>
                </div>
                {(!similar.is_empty())
                    .then(|| view! { <ProductRail title="Similar Products" products=similar/> })}
            }
            .into_any()
        })
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div style="text-align: center; padding: 4rem;">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to Home"</a>
        </div>
    }
}
