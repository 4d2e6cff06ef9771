use shared::ServiceCatalog;
use yew::prelude::*;

use crate::services::format::{format_currency, format_duration};
use crate::services::logging::Logger;

#[function_component(ServiceCatalogView)]
pub fn service_catalog_view() -> Html {
    let catalog = use_memo((), |_| {
        let catalog = ServiceCatalog::builtin();
        if let Err(e) = &catalog {
            Logger::error_with_component("service-catalog", &format!("Failed to load catalog: {}", e));
        }
        catalog
    });

    let catalog = match catalog.as_ref() {
        Ok(catalog) => catalog,
        Err(_) => {
            return html! {
                <section class="catalog-section">
                    <h2>{"Services & Pricing"}</h2>
                    <div class="error-message">{"Service catalog unavailable"}</div>
                </section>
            };
        }
    };

    html! {
        <section class="catalog-section">
            <h2>{"Services & Pricing"}</h2>
            {if let Some((low, high)) = catalog.price_range() {
                html! {
                    <p class="catalog-range">
                        {format!("From {} to {}", format_currency(low), format_currency(high))}
                    </p>
                }
            } else {
                html! {}
            }}

            {for catalog.categories().into_iter().map(|category| html! {
                <div class="catalog-category" key={category.label()}>
                    <h3>{category.label()}</h3>
                    <ul class="catalog-services">
                        {for catalog.by_category(category).into_iter().map(|service| html! {
                            <li class="catalog-service" key={service.id.clone()}>
                                <div class="service-heading">
                                    <span class="service-name">{&service.name}</span>
                                    <span class="service-price">{format_currency(service.price)}</span>
                                </div>
                                <div class="service-meta">{format_duration(service.duration_minutes)}</div>
                                <p class="service-description">{&service.description}</p>
                            </li>
                        })}
                    </ul>
                </div>
            })}
        </section>
    }
}
