//! Product cards, rails and the product image gallery.

use crate::components::{AddToCartButton, CarouselSlide, TouchCarousel};
use crate::config::StorefrontConfig;
use leptos::prelude::*;
use mmart_commerce::prelude::*;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = format!("/product/{}", product.id);
    let price = product.unit_price.display();
    let stock = if product.in_stock() {
        format!("{} in stock", product.stock)
    } else {
        "Out of stock".to_string()
    };

    view! {
        <div class="product-card">
            <a href=href.clone()>
                <img src=product.image_ref.clone() alt=product.name.clone() loading="lazy"/>
            </a>
            <div class="product-info">
                <a href=href>
                    <h3>{product.name.clone()}</h3>
                </a>
                <p class="price">{price}</p>
                <p class="stock">{stock}</p>
                <AddToCartButton product=product/>
            </div>
        </div>
    }
}

/// A swipeable rail of product cards.
#[component]
pub fn ProductRail(
    #[prop(into)] title: String,
    products: Vec<Product>,
) -> impl IntoView {
    let config = expect_context::<StorefrontConfig>().carousels.products;
    let count = products.len();

    view! {
        <section class="product-rail">
            <h2>{title.clone()}</h2>
            <TouchCarousel config=config slide_count=count label=title>
                {products
                    .into_iter()
                    .map(|product| {
                        view! {
                            <CarouselSlide>
                                <ProductCard product=product/>
                            </CarouselSlide>
                        }
                    })
                    .collect_view()}
            </TouchCarousel>
        </section>
    }
}

/// A swipeable rail of category links.
#[component]
pub fn CategoryRail(categories: Vec<Category>) -> impl IntoView {
    let config = expect_context::<StorefrontConfig>().carousels.categories;
    let count = categories.len();

    view! {
        <section class="category-rail">
            <h2>"Shop by Category"</h2>
            <TouchCarousel config=config slide_count=count label="Categories">
                {categories
                    .into_iter()
                    .map(|category| {
                        let href = format!("/category/{}", category.slug);
                        view! {
                            <CarouselSlide>
                                <a class="category-tile" href=href>
                                    <img
                                        src=category.image_ref
                                        alt=category.name.clone()
                                        loading="lazy"
                                    />
                                    <span>{category.name}</span>
                                </a>
                            </CarouselSlide>
                        }
                    })
                    .collect_view()}
            </TouchCarousel>
        </section>
    }
}

/// Swipeable product images with a position counter.
#[component]
pub fn ProductGallery(name: String, images: Vec<String>) -> impl IntoView {
    let config = expect_context::<StorefrontConfig>().carousels.gallery;
    let count = images.len();
    let current = RwSignal::new(0_usize);

    view! {
        <TouchCarousel
            config=config
            slide_count=count
            label=format!("{name} images")
            on_slide_change=Callback::new(move |index: usize| current.set(index))
        >
            {images
                .into_iter()
                .enumerate()
                .map(|(index, src)| {
                    let alt = format!("{} image {}", name, index + 1);
                    view! {
                        <CarouselSlide>
                            <img class="gallery-image" src=src alt=alt/>
                        </CarouselSlide>
                    }
                })
                .collect_view()}
        </TouchCarousel>
        <Show when=move || (count > 1)>
            <p class="gallery-counter">{move || format!("{} / {}", current.get() + 1, count)}</p>
        </Show>
    }
}
