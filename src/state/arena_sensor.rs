// Arena size sensor: measures on attach, on window resize and on ResizeObserver callbacks.
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, ResizeObserver, Window};
use yew::Callback;

use crate::model::ArenaMetrics;
use crate::util::clog;

pub struct ArenaSensor {
    window: Window,
    observer: Option<ResizeObserver>,
    on_resize: Closure<dyn FnMut()>,
    _on_observe: Closure<dyn FnMut()>,
}

impl ArenaSensor {
    pub fn attach(element: Element, on_metrics: Callback<ArenaMetrics>) -> Option<Self> {
        let window = web_sys::window()?;
        let measure: Rc<dyn Fn()> = {
            let element = element.clone();
            Rc::new(move || {
                let rect = element.get_bounding_client_rect();
                on_metrics.emit(ArenaMetrics {
                    width_px: rect.width(),
                    height_px: rect.height(),
                });
            })
        };
        measure();

        let on_resize = {
            let measure = measure.clone();
            Closure::wrap(Box::new(move || measure()) as Box<dyn FnMut()>)
        };
        if let Err(err) =
            window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        {
            clog(&format!("resize listener not installed: {:?}", err));
        }

        // Observer callback receives (entries, observer); a fresh rect read is all we need.
        let on_observe = Closure::wrap(Box::new(move || measure()) as Box<dyn FnMut()>);
        let observer = match ResizeObserver::new(on_observe.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&element);
                Some(observer)
            }
            Err(err) => {
                clog(&format!("ResizeObserver unavailable, window resize only: {:?}", err));
                None
            }
        };

        Some(Self {
            window,
            observer,
            on_resize,
            _on_observe: on_observe,
        })
    }
}

impl Drop for ArenaSensor {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mounted_arena(width: u32, height: u32) -> Element {
        let document = web_sys::window().and_then(|w| w.document()).unwrap();
        let el = document.create_element("div").unwrap();
        el.set_attribute("style", &format!("width:{}px; height:{}px;", width, height))
            .unwrap();
        document.body().unwrap().append_child(&el).unwrap();
        el
    }

    fn fire_window_resize() {
        let window = web_sys::window().unwrap();
        window.dispatch_event(&Event::new("resize").unwrap()).unwrap();
    }

    #[wasm_bindgen_test]
    fn measures_on_attach_and_on_window_resize() {
        let seen = Rc::new(RefCell::new(Vec::<ArenaMetrics>::new()));
        let on_metrics = {
            let seen = seen.clone();
            Callback::from(move |m: ArenaMetrics| seen.borrow_mut().push(m))
        };
        let el = mounted_arena(320, 480);
        let sensor = ArenaSensor::attach(el.clone(), on_metrics);
        assert!(sensor.is_some());
        assert_eq!(
            seen.borrow().first(),
            Some(&ArenaMetrics { width_px: 320.0, height_px: 480.0 })
        );

        fire_window_resize();
        assert_eq!(seen.borrow().len(), 2);
        drop(sensor);
        el.remove();
    }

    #[wasm_bindgen_test]
    fn dropped_sensor_emits_nothing() {
        let seen = Rc::new(RefCell::new(0u32));
        let on_metrics = {
            let seen = seen.clone();
            Callback::from(move |_: ArenaMetrics| *seen.borrow_mut() += 1)
        };
        let el = mounted_arena(200, 200);
        let sensor = ArenaSensor::attach(el.clone(), on_metrics);
        assert_eq!(*seen.borrow(), 1);

        drop(sensor);
        fire_window_resize();
        el.set_attribute("style", "width:640px; height:480px;").unwrap();
        fire_window_resize();
        assert_eq!(*seen.borrow(), 1);
        el.remove();
    }
}
