//! Web runtime for Glide.
//!
//! Wires an inertial scroll handler to the page: `mousemove` on the target
//! element drives the handler, `requestAnimationFrame` drives the decay loop,
//! and every notification rewrites the container's inline styles.

use crate::launcher::AppSettings;
use crate::style::ScrollStyle;
use glide_core::{FrameClock, FrameScheduler};
use glide_foundation::ScrollHandler;
use glide_platform_web::{RafScheduler, WebPlatform};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

/// A scroll handler attached to the page.
///
/// Keep it alive for as long as the effect should run: dropping it without
/// [`dispose`](Self::dispose) frees the listener while the page still
/// references it. [`forget`](Self::forget) pins it for the page lifetime.
#[wasm_bindgen]
pub struct MountedScroll {
    target: HtmlElement,
    listener: Closure<dyn FnMut(MouseEvent)>,
    handler: Rc<ScrollHandler>,
}

impl MountedScroll {
    /// The underlying handler. Stays readable after [`dispose`](Self::dispose).
    pub fn handler(&self) -> Rc<ScrollHandler> {
        Rc::clone(&self.handler)
    }

    /// Keep the listener installed for the lifetime of the page.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

#[wasm_bindgen]
impl MountedScroll {
    /// Removes the `mousemove` listener and stops any running decay loop.
    pub fn dispose(self) -> Result<(), JsValue> {
        self.target.remove_event_listener_with_callback(
            "mousemove",
            self.listener.as_ref().unchecked_ref(),
        )?;
        self.handler.dispose();
        log::debug!("inertial scroll unmounted");
        Ok(())
    }

    /// Current horizontal offset in CSS pixels.
    #[wasm_bindgen(js_name = offsetX)]
    pub fn offset_x(&self) -> f64 {
        self.handler.abs().x
    }

    /// Current vertical offset in CSS pixels.
    #[wasm_bindgen(js_name = offsetY)]
    pub fn offset_y(&self) -> f64 {
        self.handler.abs().y
    }

    /// Whether a decay frame is pending.
    #[wasm_bindgen(js_name = isAnimating)]
    pub fn is_animating(&self) -> bool {
        self.handler.is_animating()
    }
}

/// JavaScript entry point: mount with default settings and the given ids and inertia.
#[wasm_bindgen(js_name = mountInertialScroll)]
pub fn mount_inertial_scroll(
    target_id: &str,
    container_id: &str,
    inertia: f64,
) -> Result<MountedScroll, JsValue> {
    mount(AppSettings {
        target_id: target_id.to_string(),
        container_id: container_id.to_string(),
        inertia,
        ..AppSettings::default()
    })
}

/// Mounts an inertial scroll described by `settings`.
///
/// Called by [`AppLauncher::mount`](crate::AppLauncher::mount).
pub fn mount(settings: AppSettings) -> Result<MountedScroll, JsValue> {
    console_error_panic_hook::set_once();
    settings
        .validate()
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let window = web_sys::window().ok_or("no global window exists")?;
    let document = window.document().ok_or("should have a document on window")?;
    let target = document
        .get_element_by_id(&settings.target_id)
        .ok_or_else(|| format!("target with id '{}' not found", settings.target_id))?
        .dyn_into::<HtmlElement>()?;
    let container = document
        .get_element_by_id(&settings.container_id)
        .ok_or_else(|| format!("container with id '{}' not found", settings.container_id))?
        .dyn_into::<HtmlElement>()?;

    let scheduler: Rc<dyn FrameScheduler> = Rc::new(RafScheduler::new()?);
    let clock = FrameClock::new(scheduler);

    let handler = Rc::new(settings.attach(clock, move |style: &ScrollStyle| {
        if let Err(err) = apply_scroll_style(&container, style) {
            log::error!("failed to apply scroll style: {:?}", err);
        }
    }));

    let listener = {
        let handler = Rc::clone(&handler);
        let platform = WebPlatform::new();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            let pointer = platform.mouse_event(&event);
            handler.on_pointer_move(&pointer);
            if pointer.is_consumed() {
                // Keeps the drag from turning into a text selection.
                event.prevent_default();
            }
        }) as Box<dyn FnMut(_)>)
    };
    target.add_event_listener_with_callback("mousemove", listener.as_ref().unchecked_ref())?;

    log::debug!(
        "inertial scroll mounted on #{} panning #{} (inertia {})",
        settings.target_id,
        settings.container_id,
        settings.inertia
    );

    Ok(MountedScroll {
        target,
        listener,
        handler,
    })
}

fn apply_scroll_style(container: &HtmlElement, style: &ScrollStyle) -> Result<(), JsValue> {
    container.style().set_property("left", &style.left)?;

    let children = container.children();
    for index in 0..children.length() {
        let Some(child) = children.item(index) else {
            continue;
        };
        if let Some(child) = child.dyn_ref::<HtmlElement>() {
            child.style().set_property("transform", &style.child_transform)?;
        }
    }
    Ok(())
}
