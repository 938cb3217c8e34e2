// Owning guard around window.setInterval; the interval lives exactly as long as the guard.
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::util::clog;

pub struct Ticker {
    window: Window,
    handle: i32,
    _tick: Closure<dyn FnMut()>,
}

impl Ticker {
    /// Calls `tick` every `period_ms` until the returned guard is dropped.
    pub fn every(period_ms: u32, tick: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let tick = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            period_ms.min(i32::MAX as u32) as i32,
        ) {
            Ok(handle) => Some(Self {
                window,
                handle,
                _tick: tick,
            }),
            Err(err) => {
                clog(&format!("setInterval({}ms) failed: {:?}", period_ms, err));
                None
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.handle);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn sleep(ms: i32) {
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
            }
        });
        let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
    }

    #[wasm_bindgen_test]
    async fn dropped_ticker_stops_firing() {
        let count = Rc::new(Cell::new(0u32));
        let ticker = {
            let count = count.clone();
            Ticker::every(10, move || count.set(count.get() + 1))
        };
        assert!(ticker.is_some());
        sleep(80).await;
        assert!(count.get() > 0, "interval never fired");

        drop(ticker);
        let at_drop = count.get();
        sleep(80).await;
        assert_eq!(count.get(), at_drop);
    }
}
