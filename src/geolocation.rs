//! Location Providers
//!
//! Source of the device's current position, used once to center the map.

use async_trait::async_trait;
use point_form::Coordinates;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// The device position could not be determined
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationUnavailable {
    pub reason: String,
}

impl LocationUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl std::fmt::Display for LocationUnavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Location unavailable: {}", self.reason)
    }
}

impl std::error::Error for LocationUnavailable {}

/// Anything that can report a current position
#[async_trait(?Send)]
pub trait LocationProvider: Send + Sync {
    async fn current(&self) -> Result<Coordinates, LocationUnavailable>;
}

/// `navigator.geolocation` of the browser
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

#[async_trait(?Send)]
impl LocationProvider for BrowserLocation {
    async fn current(&self) -> Result<Coordinates, LocationUnavailable> {
        let window = web_sys::window().ok_or_else(|| LocationUnavailable::new("no window"))?;
        let geolocation = window
            .navigator()
            .geolocation()
            .map_err(|e| LocationUnavailable::new(describe(&e)))?;

        let promise = js_sys::Promise::new(&mut |resolve, reject| {
            if let Err(e) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject)) {
                let _ = reject.call1(&JsValue::NULL, &e);
            }
        });

        let value = JsFuture::from(promise)
            .await
            .map_err(|e| LocationUnavailable::new(describe(&e)))?;
        let position: web_sys::Position = value.unchecked_into();
        let coords = position.coords();
        Ok(Coordinates::new(coords.latitude(), coords.longitude()))
    }
}

fn describe(error: &JsValue) -> String {
    match error.dyn_ref::<web_sys::PositionError>() {
        Some(err) => err.message(),
        None => format!("{:?}", error),
    }
}

/// Fixed answer, for tests and for builds without geolocation
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocation(pub Option<Coordinates>);

#[async_trait(?Send)]
impl LocationProvider for FixedLocation {
    async fn current(&self) -> Result<Coordinates, LocationUnavailable> {
        self.0.ok_or_else(|| LocationUnavailable::new("no fixed position"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    fn poll_ready<F: Future>(future: F) -> F::Output {
        let mut future = pin!(future);
        let mut cx = Context::from_waker(Waker::noop());
        match future.as_mut().poll(&mut cx) {
            Poll::Ready(output) => output,
            Poll::Pending => panic!("future was not ready"),
        }
    }

    #[test]
    fn test_fixed_location() {
        let provider = FixedLocation(Some(Coordinates::new(43.6425662, -79.3892455)));
        let position = poll_ready(provider.current()).unwrap();
        assert_eq!(position.latitude, 43.6425662);

        let err = poll_ready(FixedLocation(None).current()).unwrap_err();
        assert_eq!(err.to_string(), "Location unavailable: no fixed position");
    }
}
