//! EmailJS delivery over `fetch`.

use folio_core::{ContactError, EmailRequest, EmailTransport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response, Window};

pub struct FetchTransport {
    window: Window,
}

impl FetchTransport {
    pub fn new(window: &Window) -> Self {
        Self {
            window: window.clone(),
        }
    }
}

fn delivery(context: &str, err: JsValue) -> ContactError {
    ContactError::delivery(format!("{context}: {err:?}"))
}

impl EmailTransport for FetchTransport {
    async fn send(&self, request: &EmailRequest) -> Result<(), ContactError> {
        let body = request
            .to_json()
            .map_err(|e| ContactError::delivery(format!("encode: {e}")))?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_mode(RequestMode::Cors);
        init.set_body(&JsValue::from_str(&body));

        let req = Request::new_with_str_and_init(&request.endpoint, &init)
            .map_err(|e| delivery("request", e))?;
        req.headers()
            .set("Content-Type", "application/json")
            .map_err(|e| delivery("headers", e))?;

        let value = JsFuture::from(self.window.fetch_with_request(&req))
            .await
            .map_err(|e| delivery("fetch", e))?;
        let resp: Response = value.dyn_into().map_err(|e| delivery("response", e))?;
        if !resp.ok() {
            return Err(ContactError::delivery(format!(
                "{} responded {}",
                request.endpoint,
                resp.status()
            )));
        }
        log::info!("message delivered via {}", request.service_id);
        Ok(())
    }
}
