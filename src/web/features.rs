//! Per-feature wiring.
//!
//! Each function looks up its elements, attaches listeners or observers, and
//! reports an [`Activation`]. A missing element is a normal outcome, not an
//! error; `Err` is reserved for DOM calls that throw.

use super::element::{query_all, query_one, query_within};
use super::timers::TimeoutScheduler;
use super::{Page, WebError, observer};
use crate::controller::{Activation, ActivationReport, Feature, require_any};
use crate::diagnostics;
use crate::dom::fragment_id;
use crate::forms::{self, ContactSubmission, SearchQuery};
use crate::menu::{ClickTarget, MobileMenu};
use crate::nav_highlight::{NavHighlighter, SectionBounds};
use crate::parallax::{ParallaxStyle, ParallaxTile, TileRect};
use crate::schedule::Scheduler;
use crate::scroll::ScrollEffects;
use crate::viewport::counter::{self, StatsWatcher};
use crate::viewport::fade::FadeIn;
use crate::viewport::{ObserverOptions, Observation, lazy};
use std::rc::Rc;
use tracing::{debug, trace, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Element, Event, EventTarget, FormData, HtmlElement, HtmlFormElement, HtmlSelectElement,
    MouseEvent, Node, ScrollBehavior, ScrollToOptions, Window,
};

type Wire = fn(&Page) -> Result<Activation, WebError>;

const FEATURES: [(Feature, Wire); 12] = [
    (Feature::MobileMenu, mobile_menu),
    (Feature::SmoothAnchors, smooth_anchors),
    (Feature::HeaderScroll, header_scroll),
    (Feature::ScrollToTop, scroll_to_top),
    (Feature::ContactForm, contact_form),
    (Feature::SearchForm, search_form),
    (Feature::FadeIn, fade_in),
    (Feature::GalleryParallax, gallery_parallax),
    (Feature::StatCounters, stat_counters),
    (Feature::LazyImages, lazy_images),
    (Feature::NavHighlight, nav_highlight),
    (Feature::PageLoadTiming, page_load_timing),
];

/// Wire every feature. One feature failing never stops the rest.
pub fn wire_all(page: &Page) -> ActivationReport {
    let mut report = ActivationReport::new();
    for (feature, wire) in FEATURES {
        let activation = wire(page).unwrap_or_else(|err| {
            warn!(%feature, %err, "feature setup failed");
            Activation::Failed {
                reason: err.to_string(),
            }
        });
        report.record(feature, activation);
    }
    report
}

/// Attach a listener for the lifetime of the page.
fn on<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), WebError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn missing(selector: &str) -> Result<Activation, WebError> {
    Ok(Activation::Missing {
        selector: selector.to_string(),
    })
}

fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn mobile_menu(page: &Page) -> Result<Activation, WebError> {
    let selectors = &page.config.selectors;
    let Some(button) = query_one(&page.document, &selectors.menu_button)? else {
        return missing(&selectors.menu_button);
    };
    let Some(panel) = query_one(&page.document, &selectors.menu_panel)? else {
        return missing(&selectors.menu_panel);
    };
    let body: Element = page.body.clone().into();
    let menu = Rc::new(MobileMenu::new(button.clone(), panel, body));

    {
        let menu = Rc::clone(&menu);
        on(&button, "click", move |_| {
            let open = menu.toggle();
            debug!(open, "menu toggled");
        })?;
    }

    let links = query_all(&page.document, &selectors.menu_links)?;
    for link in &links {
        let menu = Rc::clone(&menu);
        on(link, "click", move |_| menu.close())?;
    }

    on(&page.document, "click", move |event| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let click = ClickTarget {
            in_panel: menu.panel().contains(target.as_ref()),
            in_button: menu.button().contains(target.as_ref()),
        };
        if menu.handle_document_click(click) {
            trace!("menu closed by outside click");
        }
    })?;

    Ok(Activation::Active {
        targets: 2 + links.len(),
    })
}

fn smooth_anchors(page: &Page) -> Result<Activation, WebError> {
    let selector = &page.config.selectors.anchors;
    let anchors = query_all(&page.document, selector)?;
    let effects = ScrollEffects::new(&page.config.scroll);

    for anchor in &anchors {
        let window = page.window.clone();
        let document = page.document.clone();
        let effects = effects.clone();
        let link = anchor.clone();
        on(anchor, "click", move |event| {
            event.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let top = fragment_id(&href)
                .and_then(|id| document.get_element_by_id(id))
                .map(|target| target.get_bounding_client_rect().top());
            match effects.anchor_destination(top, scroll_offset(&window)) {
                Some(destination) => smooth_scroll_to(&window, destination),
                None => trace!(href, "anchor target not on page"),
            }
        })?;
    }
    Ok(require_any(selector, anchors.len()))
}

fn header_scroll(page: &Page) -> Result<Activation, WebError> {
    let selector = &page.config.selectors.header;
    let Some(header) = query_one(&page.document, selector)? else {
        return missing(selector);
    };
    let effects = ScrollEffects::new(&page.config.scroll);
    effects.apply(scroll_offset(&page.window), Some(&header), None);

    let window = page.window.clone();
    on(&page.window, "scroll", move |_| {
        effects.apply(scroll_offset(&window), Some(&header), None);
    })?;
    Ok(Activation::Active { targets: 1 })
}

fn scroll_to_top(page: &Page) -> Result<Activation, WebError> {
    let selector = &page.config.selectors.scroll_top;
    let Some(button) = query_one(&page.document, selector)? else {
        return missing(selector);
    };
    let effects = ScrollEffects::new(&page.config.scroll);
    effects.apply(scroll_offset(&page.window), None, Some(&button));

    {
        let window = page.window.clone();
        let button = button.clone();
        on(&page.window, "scroll", move |_| {
            effects.apply(scroll_offset(&window), None, Some(&button));
        })?;
    }

    let window = page.window.clone();
    on(&button, "click", move |_| smooth_scroll_to(&window, 0.0))?;
    Ok(Activation::Active { targets: 1 })
}

/// `(name, value)` for every string entry; file inputs are skipped.
fn form_entries(form: &HtmlFormElement) -> Vec<(String, String)> {
    let Ok(data) = FormData::new_with_form(form) else {
        return Vec::new();
    };
    let Ok(Some(entries)) = js_sys::try_iter(&data) else {
        return Vec::new();
    };
    entries
        .filter_map(Result::ok)
        .filter_map(|pair| {
            let pair = js_sys::Array::from(&pair);
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}

fn contact_form(page: &Page) -> Result<Activation, WebError> {
    let selector = &page.config.selectors.contact_form;
    let Some(form) = query_one(&page.document, selector)? else {
        return missing(selector);
    };
    let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
        return Ok(Activation::Failed {
            reason: format!("'{selector}' is not a <form>"),
        });
    };

    let config = Rc::clone(&page.config);
    let notifier = Rc::clone(&page.notifier);
    let target = form.clone();
    on(&form, "submit", move |event| {
        event.prevent_default();
        let submission = ContactSubmission::from_entries(form_entries(&target));
        let response = forms::contact_submitted(&submission, &config.notifications);
        notifier.notify(&response.message, response.severity);
        if response.reset {
            target.reset();
        }
    })?;
    Ok(Activation::Active { targets: 1 })
}

fn select_value(form: &Element, name: &str) -> Option<String> {
    form.query_selector(&format!(r#"select[name="{name}"]"#))
        .ok()
        .flatten()?
        .dyn_into::<HtmlSelectElement>()
        .ok()
        .map(|select| select.value())
}

/// `location=..&type=..` as the listing search would have requested it.
fn search_query_string(query: &SearchQuery) -> String {
    format!(
        "location={}&type={}",
        String::from(js_sys::encode_uri_component(&query.location)),
        String::from(js_sys::encode_uri_component(&query.property_type)),
    )
}

fn search_form(page: &Page) -> Result<Activation, WebError> {
    let selector = &page.config.selectors.search_form;
    let Some(form) = query_one(&page.document, selector)? else {
        return missing(selector);
    };

    let config = Rc::clone(&page.config);
    let notifier = Rc::clone(&page.notifier);
    let target = form.clone();
    on(&form, "submit", move |event| {
        event.prevent_default();
        let query = SearchQuery::new(
            select_value(&target, "location"),
            select_value(&target, "type"),
        );
        debug!(query = %search_query_string(&query), "search would request");
        let response = forms::search_submitted(&query, &config.notifications);
        notifier.notify(&response.message, response.severity);
        if response.reset {
            if let Some(form) = target.dyn_ref::<HtmlFormElement>() {
                form.reset();
            }
        }
    })?;
    Ok(Activation::Active { targets: 1 })
}

/// `true` unless the visitor asked for reduced motion. A browser without
/// `matchMedia` gets full motion.
fn motion_allowed(window: &Window) -> bool {
    match window.match_media("(prefers-reduced-motion: no-preference)") {
        Ok(Some(query)) => query.matches(),
        _ => true,
    }
}

fn fade_in(page: &Page) -> Result<Activation, WebError> {
    let selector = &page.config.selectors.fade_in;
    let targets = query_all(&page.document, selector)?;
    if targets.is_empty() {
        return missing(selector);
    }

    let fade = FadeIn::new(!motion_allowed(&page.window));
    let observed: Vec<Element> = targets
        .iter()
        .filter(|el| fade.prepare(*el))
        .cloned()
        .collect();

    if !observed.is_empty() {
        if observer::supported(&page.window) {
            let options = ObserverOptions::fade_in(&page.config.fade_in);
            observer::observe_all(&options, &observed, move |el, hit| {
                fade.on_intersection(el, hit)
            })?;
        } else {
            debug!("no IntersectionObserver; revealing fade-in targets now");
            for el in &observed {
                fade.on_intersection(el, true);
            }
        }
    }
    Ok(Activation::Active {
        targets: targets.len(),
    })
}

fn tile_rect(element: &Element) -> TileRect {
    let rect = element.get_bounding_client_rect();
    TileRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

fn gallery_parallax(page: &Page) -> Result<Activation, WebError> {
    let selector = &page.config.selectors.gallery_items;
    let items = query_all(&page.document, selector)?;
    let style = ParallaxStyle::new(&page.config.parallax);

    for (index, item) in items.iter().enumerate() {
        let tile = Rc::new(ParallaxTile::new(item.clone(), index, style.clone()));

        // One function per tile, added on enter and removed on leave.
        let on_move = {
            let tile = Rc::clone(&tile);
            Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                tile.pointer_move(
                    tile_rect(tile.element()),
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                );
            })
        };
        let handler: js_sys::Function = on_move.as_ref().unchecked_ref::<js_sys::Function>().clone();
        on_move.forget();

        {
            let tile = Rc::clone(&tile);
            let handler = handler.clone();
            on(item, "mouseenter", move |_| {
                tile.enter();
                if let Err(err) = tile
                    .element()
                    .add_event_listener_with_callback("mousemove", &handler)
                {
                    trace!(?err, "could not track pointer");
                }
            })?;
        }
        on(item, "mouseleave", move |_| {
            if let Err(err) = tile
                .element()
                .remove_event_listener_with_callback("mousemove", &handler)
            {
                trace!(?err, "could not stop tracking pointer");
            }
            tile.leave();
        })?;
    }
    Ok(require_any(selector, items.len()))
}

/// Starts the count-up the first time the stats container comes into view.
struct StatsTrigger {
    watcher: StatsWatcher,
    scheduler: TimeoutScheduler,
    tick_ms: u32,
    numbers_selector: String,
}

impl StatsTrigger {
    fn new(page: &Page) -> Self {
        Self {
            watcher: StatsWatcher::new(&page.config.counter),
            scheduler: page.scheduler.clone(),
            tick_ms: page.config.counter.tick_ms,
            numbers_selector: page.config.selectors.stat_numbers.clone(),
        }
    }

    fn on_entry(&self, container: &Element, hit: bool) -> Observation {
        let numbers = if hit && !self.watcher.has_fired() {
            query_within(container, &self.numbers_selector).unwrap_or_else(|err| {
                warn!(%err, "could not read stat numbers");
                Vec::new()
            })
        } else {
            Vec::new()
        };
        let (counters, observation) = self.watcher.on_intersection(hit, &numbers);
        if !counters.is_empty() {
            debug!(count = counters.len(), "stat counters started");
        }
        for running in counters {
            counter::animate(&self.scheduler, self.tick_ms, running);
        }
        observation
    }
}

fn stat_counters(page: &Page) -> Result<Activation, WebError> {
    let selectors = &page.config.selectors;
    let Some(container) = query_one(&page.document, &selectors.stats_container)? else {
        return missing(&selectors.stats_container);
    };
    if !observer::supported(&page.window) {
        return Ok(Activation::Unsupported {
            capability: observer::CAPABILITY,
        });
    }

    let trigger = StatsTrigger::new(page);
    let options = ObserverOptions::counter(&page.config.counter);
    observer::observe_all(&options, &[container], move |target, hit| {
        trigger.on_entry(target, hit)
    })?;
    Ok(Activation::Active { targets: 1 })
}

fn lazy_images(page: &Page) -> Result<Activation, WebError> {
    let selector = &page.config.selectors.lazy_images;
    let images = query_all(&page.document, selector)?;
    if images.is_empty() {
        return missing(selector);
    }
    if !observer::supported(&page.window) {
        return Ok(Activation::Unsupported {
            capability: observer::CAPABILITY,
        });
    }
    let count = observer::observe_all(&ObserverOptions::lazy_images(), &images, |img, hit| {
        lazy::on_intersection(img, hit)
    })?;
    Ok(Activation::Active { targets: count })
}

fn section_bounds(section: &Element) -> Option<SectionBounds> {
    let html = section.dyn_ref::<HtmlElement>()?;
    Some(SectionBounds {
        id: section.id(),
        top: f64::from(html.offset_top()),
        height: f64::from(html.offset_height()),
    })
}

fn nav_highlight(page: &Page) -> Result<Activation, WebError> {
    let selectors = &page.config.selectors;
    let sections = query_all(&page.document, &selectors.sections)?;
    if sections.is_empty() {
        return missing(&selectors.sections);
    }
    let links = query_all(&page.document, &selectors.nav_links)?;
    if links.is_empty() {
        return missing(&selectors.nav_links);
    }
    let count = links.len();
    let highlighter = NavHighlighter::new(links, page.config.scroll.section_lookahead);

    let window = page.window.clone();
    on(&page.window, "scroll", move |_| {
        // Layout can shift after load, so spans are re-read on every scroll.
        let bounds: Vec<SectionBounds> = sections.iter().filter_map(section_bounds).collect();
        highlighter.update(&bounds, scroll_offset(&window));
    })?;
    Ok(Activation::Active { targets: count })
}

fn page_load_timing(page: &Page) -> Result<Activation, WebError> {
    let Some(performance) = page.window.performance() else {
        return Ok(Activation::Unsupported {
            capability: "performance",
        });
    };

    // loadEventEnd is only filled in after every load handler returned, so
    // the read is pushed to the next task.
    let scheduler = page.scheduler.clone();
    let report = move || {
        scheduler.after(
            0,
            Box::new({
                let performance = performance.clone();
                move || {
                    let timing = performance.timing();
                    match diagnostics::page_load_message(
                        timing.navigation_start(),
                        timing.load_event_end(),
                    ) {
                        Some(message) => web_sys::console::log_1(&message.into()),
                        None => debug!("load timing not available"),
                    }
                }
            }),
        );
    };

    if page.document.ready_state() == "complete" {
        report();
    } else {
        let mut report = Some(report);
        on(&page.window, "load", move |_| {
            if let Some(report) = report.take() {
                report();
            }
        })?;
    }
    Ok(Activation::Active { targets: 1 })
}
