use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ResizeObserver, Window};
use yew::prelude::*;

use super::plan::{MotionPlan, MotionSpec};
use super::scene::{MotionScene, RevealId, ScrubId};
use super::style::{VisualStyle, ANIMATED_PROPERTIES};
use super::trigger::{TriggerBounds, Viewport};
use super::{MotionError, TargetId};

// A gap longer than this between frames (hidden tab, debugger pause) is
// replayed as a single normal frame so timelines don't jump to the end.
const LAG_THRESHOLD_MS: f64 = 500.0;
const LAG_FRAME_MS: f64 = 1000.0 / 60.0;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

struct ScopeState {
    scene: MotionScene,
    elements: Vec<Element>,
    reveal_triggers: Vec<(RevealId, Element)>,
    scrub_triggers: Vec<(ScrubId, Element)>,
    frame_handle: Option<i32>,
    last_timestamp: Option<f64>,
    needs_refresh: bool,
}

impl ScopeState {
    fn new(viewport: Viewport) -> Self {
        Self {
            scene: MotionScene::new(viewport),
            elements: Vec::new(),
            reveal_triggers: Vec::new(),
            scrub_triggers: Vec::new(),
            frame_handle: None,
            last_timestamp: None,
            needs_refresh: true,
        }
    }

    // One target per element, so bindings on the same element compose.
    fn target_for(&mut self, element: Element) -> TargetId {
        if let Some(index) = self.elements.iter().position(|known| *known == element) {
            return TargetId::from_index(index);
        }
        self.elements.push(element);
        self.scene.add_target()
    }

    fn register(&mut self, root: &Element, spec: &MotionSpec, scroll_y: f64) -> Result<(), MotionError> {
        match spec {
            MotionSpec::RevealEach { selector, profile } => {
                for element in select_all(root, selector)? {
                    let bounds = measure(&element, scroll_y).unwrap_or_default();
                    let target = self.target_for(element.clone());
                    let id = self.scene.add_reveal(bounds, vec![target], profile.clone());
                    self.reveal_triggers.push((id, element));
                }
            }
            MotionSpec::RevealGroup {
                trigger,
                selector,
                profile,
            } => {
                let Some(trigger_element) = select_one(root, trigger)? else {
                    debug!("reveal trigger `{}` not rendered, skipping", trigger);
                    return Ok(());
                };
                let members: Vec<TargetId> = select_all(root, selector)?
                    .into_iter()
                    .map(|element| self.target_for(element))
                    .collect();
                if members.is_empty() {
                    return Ok(());
                }
                let bounds = measure(&trigger_element, scroll_y).unwrap_or_default();
                let id = self.scene.add_reveal(bounds, members, profile.clone());
                self.reveal_triggers.push((id, trigger_element));
            }
            MotionSpec::Scrub { target, trigger, spec } => {
                let (Some(target_element), Some(trigger_element)) =
                    (select_one(root, target)?, select_one(root, trigger)?)
                else {
                    debug!("scrub `{}` on `{}` not rendered, skipping", target, trigger);
                    return Ok(());
                };
                let bounds = measure(&trigger_element, scroll_y).unwrap_or_default();
                let target = self.target_for(target_element);
                let id = self.scene.add_scrub(target, bounds, spec.clone());
                self.scrub_triggers.push((id, trigger_element));
            }
            MotionSpec::Entrance { selector, spec } => {
                for (index, element) in select_all(root, selector)?.into_iter().enumerate() {
                    let target = self.target_for(element);
                    self.scene.add_entrance(target, spec, index);
                }
            }
        }
        Ok(())
    }

    /// Re-measure every trigger and re-evaluate at the current offset.
    fn refresh(&mut self, window: &Window) {
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        self.scene.resize(read_viewport(window));
        let reveals: Vec<_> = self
            .reveal_triggers
            .iter()
            .filter_map(|(id, element)| Some((*id, self.measure_trigger(element, scroll_y)?)))
            .collect();
        for (id, bounds) in reveals {
            self.scene.set_reveal_bounds(id, bounds);
        }
        let scrubs: Vec<_> = self
            .scrub_triggers
            .iter()
            .filter_map(|(id, element)| Some((*id, self.measure_trigger(element, scroll_y)?)))
            .collect();
        for (id, bounds) in scrubs {
            self.scene.set_scrub_bounds(id, bounds);
        }
        for (id, toggle) in self.scene.scroll_to(scroll_y) {
            debug!("{:?} -> {:?}", id, toggle);
        }
        self.needs_refresh = false;
    }

    // Triggers that are animated themselves carry their inline transform;
    // measure where layout put them instead.
    fn measure_trigger(&self, element: &Element, scroll_y: f64) -> Option<TriggerBounds> {
        let measured = measure(element, scroll_y)?;
        Some(match self.elements.iter().position(|known| known == element) {
            Some(index) => self.scene.layout_bounds(TargetId::from_index(index), measured),
            None => measured,
        })
    }

    fn on_scroll(&mut self, scroll_y: f64) {
        for (id, toggle) in self.scene.scroll_to(scroll_y) {
            debug!("{:?} -> {:?}", id, toggle);
        }
        self.flush();
    }

    /// Returns whether another frame is needed.
    fn on_frame(&mut self, window: &Window, timestamp: f64) -> bool {
        self.frame_handle = None;
        if self.needs_refresh {
            self.refresh(window);
        }
        let dt = match self.last_timestamp {
            Some(previous) if timestamp - previous > LAG_THRESHOLD_MS => LAG_FRAME_MS,
            Some(previous) => (timestamp - previous).max(0.0),
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp);
        self.scene.advance(dt);
        self.flush();

        let animating = self.scene.is_animating();
        if !animating {
            self.last_timestamp = None;
        }
        animating
    }

    fn flush(&mut self) {
        for (target, style) in self.scene.drain_dirty() {
            let Some(element) = self.elements.get(target.index()) else {
                continue;
            };
            if !element.is_connected() {
                debug!("{:?} left the document, retiring", target);
                self.scene.retire(target);
                continue;
            }
            write_style(element, &style);
        }
    }
}

/// Live animation bindings of one mounted page.
///
/// Owns the scroll, resize and load listeners, a size observer on the page
/// root and the frame loop. Dropping the scope removes the listeners, cancels
/// any pending frame and puts the elements' inline styles back the way they
/// were.
pub struct MotionScope {
    window: Window,
    root: Element,
    state: Rc<RefCell<ScopeState>>,
    frame: FrameSlot,
    on_scroll: Closure<dyn FnMut()>,
    on_layout: Closure<dyn FnMut()>,
    // content growing inside the page (an accordion opening) moves triggers
    root_observer: Option<ResizeObserver>,
}

impl MotionScope {
    pub fn mount(root: Element, plan: &MotionPlan) -> Result<Self, MotionError> {
        let window = web_sys::window().ok_or(MotionError::NoWindow)?;
        let scroll_y = window.scroll_y().unwrap_or(0.0);

        let mut state = ScopeState::new(read_viewport(&window));
        for spec in &plan.specs {
            state.register(&root, spec, scroll_y)?;
        }
        // hidden states go out now; thresholds are evaluated on the first frame
        state.flush();
        debug!(
            "motion scope: {} targets, {} bindings",
            state.scene.target_count(),
            state.scene.binding_count()
        );

        let state = Rc::new(RefCell::new(state));
        let frame: FrameSlot = Rc::new(RefCell::new(None));

        *frame.borrow_mut() = Some(Closure::wrap(Box::new({
            let window = window.clone();
            let state = state.clone();
            let frame = frame.clone();
            move |timestamp: f64| {
                let keep_going = state.borrow_mut().on_frame(&window, timestamp);
                if keep_going {
                    schedule_frame(&window, &state, &frame);
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let on_scroll = Closure::wrap(Box::new({
            let window = window.clone();
            let state = state.clone();
            let frame = frame.clone();
            move || {
                let scroll_y = window.scroll_y().unwrap_or(0.0);
                let animating = {
                    let mut st = state.borrow_mut();
                    if st.needs_refresh {
                        true
                    } else {
                        st.on_scroll(scroll_y);
                        st.scene.is_animating()
                    }
                };
                if animating {
                    schedule_frame(&window, &state, &frame);
                }
            }
        }) as Box<dyn FnMut()>);

        let on_layout = Closure::wrap(Box::new({
            let window = window.clone();
            let state = state.clone();
            let frame = frame.clone();
            move || {
                state.borrow_mut().needs_refresh = true;
                schedule_frame(&window, &state, &frame);
            }
        }) as Box<dyn FnMut()>);

        let root_observer = match ResizeObserver::new(on_layout.as_ref().unchecked_ref()) {
            Ok(observer) => Some(observer),
            Err(_) => {
                warn!("ResizeObserver unavailable, page growth won't re-measure");
                None
            }
        };

        let scope = Self {
            window,
            root,
            state,
            frame,
            on_scroll,
            on_layout,
            root_observer,
        };
        scope.listen()?;
        schedule_frame(&scope.window, &scope.state, &scope.frame);
        Ok(scope)
    }

    fn listen(&self) -> Result<(), MotionError> {
        self.window
            .add_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref())
            .map_err(|_| MotionError::Listener("scroll"))?;
        self.window
            .add_event_listener_with_callback("resize", self.on_layout.as_ref().unchecked_ref())
            .map_err(|_| MotionError::Listener("resize"))?;
        // `load` does not bubble, so catch image loads in the capture phase
        self.root
            .add_event_listener_with_callback_and_bool("load", self.on_layout.as_ref().unchecked_ref(), true)
            .map_err(|_| MotionError::Listener("load"))?;
        if let Some(observer) = &self.root_observer {
            observer.observe(&self.root);
        }
        Ok(())
    }
}

impl Drop for MotionScope {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_layout.as_ref().unchecked_ref());
        let _ = self.root.remove_event_listener_with_callback_and_bool(
            "load",
            self.on_layout.as_ref().unchecked_ref(),
            true,
        );
        if let Some(observer) = &self.root_observer {
            observer.disconnect();
        }

        {
            let mut st = self.state.borrow_mut();
            if let Some(handle) = st.frame_handle.take() {
                let _ = self.window.cancel_animation_frame(handle);
            }
            let ScopeState { scene, elements, .. } = &mut *st;
            for target in scene.teardown() {
                if let Some(element) = elements.get(target.index()) {
                    revert_style(element);
                }
            }
            st.elements.clear();
            st.reveal_triggers.clear();
            st.scrub_triggers.clear();
        }
        // the frame closure holds a clone of its own slot
        self.frame.borrow_mut().take();
        debug!("motion scope released");
    }
}

fn schedule_frame(window: &Window, state: &Rc<RefCell<ScopeState>>, frame: &FrameSlot) {
    let mut st = state.borrow_mut();
    if st.frame_handle.is_some() {
        return;
    }
    if let Some(callback) = frame.borrow().as_ref() {
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(handle) => st.frame_handle = Some(handle),
            Err(_) => warn!("requestAnimationFrame failed"),
        }
    }
}

fn read_viewport(window: &Window) -> Viewport {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width, height)
}

fn measure(element: &Element, scroll_y: f64) -> Option<TriggerBounds> {
    if !element.is_connected() {
        return None;
    }
    let rect = element.get_bounding_client_rect();
    Some(TriggerBounds::new(rect.top() + scroll_y, rect.height()))
}

fn select_all(root: &Element, selector: &str) -> Result<Vec<Element>, MotionError> {
    let list = root
        .query_selector_all(selector)
        .map_err(|_| MotionError::InvalidSelector(selector.to_string()))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn select_one(root: &Element, selector: &str) -> Result<Option<Element>, MotionError> {
    root.query_selector(selector)
        .map_err(|_| MotionError::InvalidSelector(selector.to_string()))
}

fn write_style(element: &Element, style: &VisualStyle) {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let css = element.style();
    for (name, value) in style.declarations() {
        let _ = css.set_property(name, &value);
    }
}

fn revert_style(element: &Element) {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let css = element.style();
    for name in ANIMATED_PROPERTIES {
        let _ = css.remove_property(name);
    }
}

/// Mounts `plan` against the element behind `root` once it is rendered and
/// tears it down with the component.
#[hook]
pub fn use_motion(root: NodeRef, plan: fn() -> MotionPlan) {
    use_effect_with_deps(
        move |root: &NodeRef| {
            let scope = match root.cast::<Element>() {
                Some(element) => match MotionScope::mount(element, &plan()) {
                    Ok(scope) => Some(scope),
                    Err(err) => {
                        warn!("animations disabled: {}", err);
                        None
                    }
                },
                None => {
                    warn!("motion root was not rendered");
                    None
                }
            };
            move || drop(scope)
        },
        root,
    );
}
