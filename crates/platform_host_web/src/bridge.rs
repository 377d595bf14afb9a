//! Embedded-browser bridge transport for `platform_host_web` adapters.
//!
//! This module contains the WASM/JS interop over the host's `window.cefQuery` primitive and a
//! non-WASM fallback shim that reports the host as unavailable.

use platform_host::HostBridgeError;

#[cfg(target_arch = "wasm32")]
mod imp {
    use super::*;
    use js_sys::Promise;
    use serde::Deserialize;
    use serde_wasm_bindgen::from_value;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;

    /// Code reported when the host rejects with a value that is not `{ code, message }`.
    const UNSTRUCTURED_FAILURE_CODE: i32 = -1;

    #[wasm_bindgen(inline_js = r#"
function hostWindow() {
  return typeof window === 'undefined' ? undefined : window;
}

export function jsCefQueryAvailable() {
  const w = hostWindow();
  return !!w && typeof w.cefQuery === 'function';
}

export function jsCefQuery(request) {
  return new Promise((resolve, reject) => {
    hostWindow().cefQuery({
      request,
      persistent: false,
      onSuccess: (response) => resolve(response),
      onFailure: (errorCode, errorMessage) => reject({ code: errorCode, message: errorMessage }),
    });
  });
}
"#)]
    extern "C" {
        #[wasm_bindgen(js_name = jsCefQueryAvailable)]
        fn js_cef_query_available() -> bool;
        #[wasm_bindgen(js_name = jsCefQuery)]
        fn js_cef_query(request: &str) -> Promise;
    }

    #[derive(Deserialize)]
    struct CefQueryFailure {
        code: i32,
        message: String,
    }

    fn js_error_to_string(err: &JsValue) -> String {
        if let Some(text) = err.as_string() {
            return text;
        }
        if let Ok(message) = js_sys::Reflect::get(err, &JsValue::from_str("message")) {
            if let Some(text) = message.as_string() {
                return text;
            }
        }
        format!("{err:?}")
    }

    fn host_failure(err: JsValue) -> HostBridgeError {
        match from_value::<CefQueryFailure>(err.clone()) {
            Ok(failure) => HostBridgeError::Failed {
                code: failure.code,
                message: failure.message,
            },
            Err(_) => HostBridgeError::Failed {
                code: UNSTRUCTURED_FAILURE_CODE,
                message: js_error_to_string(&err),
            },
        }
    }

    pub async fn cef_query(request: &str) -> Result<String, HostBridgeError> {
        if !js_cef_query_available() {
            return Err(HostBridgeError::Unavailable);
        }
        let value = JsFuture::from(js_cef_query(request))
            .await
            .map_err(host_failure)?;
        value.as_string().ok_or_else(|| HostBridgeError::Failed {
            code: UNSTRUCTURED_FAILURE_CODE,
            message: "host returned a non-string response".to_string(),
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use super::*;

    pub async fn cef_query(_request: &str) -> Result<String, HostBridgeError> {
        Err(HostBridgeError::Unavailable)
    }
}

/// Sends one request through the embedding host's query primitive.
pub async fn cef_query(request: &str) -> Result<String, HostBridgeError> {
    imp::cef_query(request).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_cef_query_reports_unavailable_host() {
        assert_eq!(
            block_on(cef_query("get_window_controls_info")),
            Err(HostBridgeError::Unavailable)
        );
        assert_eq!(
            block_on(cef_query("close_window")),
            Err(HostBridgeError::Unavailable)
        );
    }
}
