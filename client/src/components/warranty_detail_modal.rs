//! Modal overlay showing one warranty record.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened by the warranty list with a record it owns. The modal never
//! fetches or mutates anything; it only manages keyboard focus: the header
//! close button takes focus on open, Tab is kept inside the panel, and the
//! previously focused element gets focus back on close.

#[cfg(test)]
#[path = "warranty_detail_modal_test.rs"]
mod warranty_detail_modal_test;

use leptos::html;
use leptos::prelude::*;

use crate::net::types::WarrantyRecord;
use crate::util::date_format::display_date;
use crate::util::focus_trap::{FocusRing, is_tab_key};

/// One labelled value in the modal body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailItem {
    pub label: &'static str,
    pub value: String,
}

/// Date rows for `record`. Missing or blank dates produce no row.
pub fn detail_items(record: &WarrantyRecord) -> Vec<DetailItem> {
    let mut items = Vec::with_capacity(2);
    push_date(&mut items, "Expiration Date", Some(&record.expiration_date));
    push_date(&mut items, "Purchase Date", record.purchase_date.as_deref());
    items
}

fn push_date(items: &mut Vec<DetailItem>, label: &'static str, raw: Option<&str>) {
    if let Some(raw) = raw.filter(|r| !r.trim().is_empty()) {
        items.push(DetailItem { label, value: display_date(raw) });
    }
}

/// Record to render: none while closed or when nothing was selected.
pub fn visible_record(open: bool, record: Option<WarrantyRecord>) -> Option<WarrantyRecord> {
    record.filter(|_| open)
}

/// Focusable controls inside the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalControl {
    HeaderClose,
    FooterClose,
}

/// Tab order of the panel's controls; the first one is the dismissal
/// control focused on open.
pub fn focus_ring() -> FocusRing<ModalControl> {
    FocusRing::new(vec![ModalControl::HeaderClose, ModalControl::FooterClose])
}

/// The slot (node ref, in practice) bound to `control`.
pub fn control_slot<T>(control: ModalControl, header: T, footer: T) -> T {
    match control {
        ModalControl::HeaderClose => header,
        ModalControl::FooterClose => footer,
    }
}

/// Warranty details dialog.
#[component]
pub fn WarrantyDetailModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] warranty: Signal<Option<WarrantyRecord>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let header_close = NodeRef::<html::Button>::new();
    let footer_close = NodeRef::<html::Button>::new();

    #[cfg(feature = "hydrate")]
    {
        let previous = std::rc::Rc::new(std::cell::RefCell::new(None::<web_sys::HtmlElement>));
        Effect::new(move || {
            let visible = open.get() && warranty.with(Option::is_some);
            if visible {
                if previous.borrow().is_none() {
                    *previous.borrow_mut() = active_html_element();
                }
                let initial = focus_ring().initial().map(|&c| control_slot(c, header_close, footer_close));
                if let Some(button) = initial.and_then(|node| node.get()) {
                    let _ = button.focus();
                }
            } else if let Some(element) = previous.borrow_mut().take() {
                let _ = element.focus();
            }
        });
    }

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if !is_tab_key(&ev.key()) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let active = focused_control(header_close, footer_close);
            if let Some(target) = focus_ring().wrap_target(active.as_ref(), ev.shift_key()) {
                ev.prevent_default();
                if let Some(button) = control_slot(*target, header_close, footer_close).get_untracked() {
                    let _ = button.focus();
                }
            }
        }
    };

    move || {
        visible_record(open.get(), warranty.get()).map(|record| {
            let items = detail_items(&record);
            view! {
                <div
                    class="modal-backdrop"
                    role="dialog"
                    aria-modal="true"
                    on:click=move |_| on_close.run(())
                >
                    <div class="modal-center">
                        <div
                            class="modal"
                            on:click=move |ev| ev.stop_propagation()
                            on:keydown=on_keydown
                        >
                            <div class="modal__header">
                                <h2 class="modal__title">"Warranty Details"</h2>
                                <button
                                    class="modal__close"
                                    title="Close"
                                    node_ref=header_close
                                    on:click=move |_| on_close.run(())
                                >
                                    "✕"
                                </button>
                            </div>
                            <div class="modal__body">
                                <div class="modal__summary">
                                    <h3 class="modal__product">{record.product_name.clone()}</h3>
                                    <p class="modal__category">{record.category.clone()}</p>
                                </div>
                                <div class="modal__details">
                                    {items
                                        .into_iter()
                                        .map(|item| {
                                            view! {
                                                <div class="detail-item">
                                                    <p class="detail-item__label">{item.label}</p>
                                                    <p class="detail-item__value">{item.value}</p>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                            <div class="modal__footer">
                                <button
                                    type="button"
                                    class="btn"
                                    node_ref=footer_close
                                    on:click=move |_| on_close.run(())
                                >
                                    "Close"
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
    }
}

#[cfg(feature = "hydrate")]
fn active_html_element() -> Option<web_sys::HtmlElement> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .active_element()?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

#[cfg(feature = "hydrate")]
fn focused_control(header: NodeRef<html::Button>, footer: NodeRef<html::Button>) -> Option<ModalControl> {
    let active = web_sys::window()?.document()?.active_element()?;
    let is_active = |node: NodeRef<html::Button>| {
        node.get_untracked().is_some_and(|button| {
            let element: &web_sys::Element = button.as_ref();
            *element == active
        })
    };
    if is_active(header) {
        Some(ModalControl::HeaderClose)
    } else if is_active(footer) {
        Some(ModalControl::FooterClose)
    } else {
        None
    }
}
