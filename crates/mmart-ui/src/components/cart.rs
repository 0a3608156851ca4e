//! Cart badge, cart page and add-to-cart controls.

use crate::cart::use_cart;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use mmart_commerce::prelude::*;

/// Show a rejected cart change next to the control that made it.
///
/// A success clears the previous message. The failure itself is already
/// logged by the cart.
fn report<T>(error: RwSignal<Option<String>>, result: Result<T, CommerceError>) {
    error.set(result.err().map(|e| e.to_string()));
}

#[component]
fn CartError(error: RwSignal<Option<String>>) -> impl IntoView {
    move || error.get().map(|message| view! { <p class="cart-error" role="alert">{message}</p> })
}

/// Header link to the cart with the unit count.
#[component]
pub fn CartBadge() -> impl IntoView {
    let cart = use_cart();
    let count = move || cart.count();

    view! {
        <a href=CART_PATH class="cart-badge" aria-label="Cart">
            "Cart"
            <Show when=move || (count() > 0)>
                <span class="cart-badge-count">{move || count().to_string()}</span>
            </Show>
        </a>
    }
}

/// "Add to cart" and "Buy now" for a catalog product.
#[component]
pub fn AddToCartButton(product: Product) -> impl IntoView {
    let cart = use_cart();
    let navigate = use_navigate();
    let in_stock = product.in_stock();
    let product = StoredValue::new(product);
    let error = RwSignal::new(None);

    let add = move |_| report(error, product.with_value(|p| cart.add_product(p, 1)));
    let buy = move |_| {
        let go = |path: &str| navigate(path, NavigateOptions::default());
        let result = product
            .with_value(|p| p.to_cart_line(1))
            .and_then(|line| cart.buy_now(line, &go));
        report(error, result);
    };

    view! {
        <div class="add-to-cart">
            <button class="btn" disabled={!in_stock} on:click=add>
                {if in_stock { "Add to Cart" } else { "Out of Stock" }}
            </button>
            <button class="btn btn-primary" disabled={!in_stock} on:click=buy>
                "Buy Now"
            </button>
            <CartError error=error/>
        </div>
    }
}

/// The cart page: lines, delivery choice and totals.
#[component]
pub fn CartPage() -> impl IntoView {
    let cart = use_cart();

    let notice = "Your saved cart could not be read and has been reset.";

    view! {
        <h2>"Shopping Cart"</h2>
        {cart
            .recovered_from_corruption()
            .then(|| view! { <p class="cart-notice">{notice}</p> })}
        <Show
            when=move || !cart.is_empty()
            fallback=|| {
                view! {
                    <p>"Your cart is empty."</p>
                    <a href="/">"Continue shopping"</a>
                }
            }
        >
            <div class="cart">
                <div class="cart-lines">
                    <For
                        each=move || cart.lines()
                        key=|line| (line.product_id, line.quantity)
                        children=move |line: CartLine| view! { <CartLineRow line=line/> }
                    />
                </div>
                <CartSummaryPanel/>
                <div class="cart-actions">
                    <a href="/">"Continue Shopping"</a>
                    <ClearCartButton/>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn CartLineRow(line: CartLine) -> impl IntoView {
    let cart = use_cart();
    let error = RwSignal::new(None);
    let id = line.product_id;
    let quantity = line.quantity;
    let unit_price = line.unit_price.display();
    let line_total = line.line_total().map(|m| m.display()).unwrap_or_default();
    let specifications = line
        .specifications
        .iter()
        .map(|s| format!("{}: {}", s.name, s.value))
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <div class="cart-line">
            <img src=line.image_ref alt=line.name.clone() width="64" height="64"/>
            <div class="cart-line-info">
                <strong>{line.name}</strong>
                {line
                    .color
                    .map(|color| view! { <p class="cart-line-variant">"Color: " {color}</p> })}
                {(!specifications.is_empty())
                    .then(|| view! { <p class="cart-line-variant">{specifications}</p> })}
                <p class="cart-line-price">{unit_price}</p>
            </div>
            <div class="cart-line-quantity">
                <button
                    aria-label="Decrease quantity"
                    disabled={quantity <= 1}
                    on:click=move |_| report(error, cart.update_quantity(id, quantity - 1))
                >
                    "-"
                </button>
                <span>{quantity.to_string()}</span>
                <button
                    aria-label="Increase quantity"
                    disabled={quantity >= MAX_QUANTITY_PER_LINE}
                    on:click=move |_| report(error, cart.update_quantity(id, quantity + 1))
                >
                    "+"
                </button>
            </div>
            <strong class="cart-line-total">{line_total}</strong>
            <button
                class="cart-line-remove"
                on:click=move |_| report(error, cart.remove_from_cart(id))
            >
                "Remove"
            </button>
            <CartError error=error/>
        </div>
    }
}

/// Delivery choice with subtotal, delivery fee and grand total.
#[component]
pub fn CartSummaryPanel() -> impl IntoView {
    let cart = use_cart();
    let delivery = RwSignal::new(DeliveryOption::default());
    let summary = move || cart.summary(delivery.get()).ok();

    view! {
        <div class="cart-summary">
            <fieldset class="delivery-options">
                <legend>"Delivery"</legend>
                <label>
                    <input
                        type="radio"
                        name="delivery"
                        prop:checked={move || delivery.get() == DeliveryOption::HomeDelivery}
                        on:change=move |_| delivery.set(DeliveryOption::HomeDelivery)
                    />
                    "Home delivery"
                </label>
                <label>
                    <input
                        type="radio"
                        name="delivery"
                        prop:checked={move || delivery.get() == DeliveryOption::Pickup}
                        on:change=move |_| delivery.set(DeliveryOption::Pickup)
                    />
                    "Pick up in store"
                </label>
            </fieldset>
            {move || {
                summary()
                    .map(|s| {
                        let shipping = if s.shipping.is_zero() {
                            "Free".to_string()
                        } else {
                            s.shipping.display()
                        };
                        view! {
                            <dl>
                                <dt>"Subtotal (" {s.item_count.to_string()} " items)"</dt>
                                <dd>{s.subtotal.display()}</dd>
                                <dt>"Delivery"</dt>
                                <dd>{shipping}</dd>
                                <dt>"Total"</dt>
                                <dd class="cart-total">{s.total.display()}</dd>
                            </dl>
                            {s
                                .free_shipping_remaining
                                .map(|remaining| {
                                    view! {
                                        <p class="free-shipping-hint">
                                            "Add " {remaining.display()} " more for free delivery"
                                        </p>
                                    }
                                })}
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn ClearCartButton() -> impl IntoView {
    let cart = use_cart();
    let error = RwSignal::new(None);

    view! {
        <button class="btn btn-danger" on:click=move |_| report(error, cart.clear_cart())>
            "Clear Cart"
        </button>
        <CartError error=error/>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_shows_and_clears_rejection() {
        let owner = Owner::new();
        owner.with(|| {
            let error = RwSignal::new(None);

            report::<()>(error, Err(CommerceError::InvalidQuantity(0)));
            assert_eq!(
                error.get_untracked().as_deref(),
                Some("Invalid quantity: 0")
            );

            report(error, Ok(true));
            assert_eq!(error.get_untracked(), None);
        });
    }
}
