//! Build-time configuration with an optional runtime override. The runtime
//! config is read from `window.OTP_WIDGET_CONFIG` (if present) so a static
//! deployment can point the widget at a different API host, or change the
//! code length, without rebuilding. Configuration values are public; do not
//! store secrets here.

/// Number of input cells when nothing overrides it. Matches the length of
/// the codes issued by the local OTP server.
const DEFAULT_CODE_LENGTH: usize = 6;

/// Widget configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub code_length: usize,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies
    /// runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("OTP_API_BASE_URL").unwrap_or("http://localhost:3000");
        let code_length = option_env!("OTP_CODE_LENGTH")
            .and_then(parse_code_length)
            .unwrap_or(DEFAULT_CODE_LENGTH);

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
            code_length,
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

/// Raw override values as found on the window object; normalized and parsed
/// only when applied.
#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    code_length: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime
        .api_base_url
        .as_deref()
        .and_then(normalize_runtime_value)
    {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.code_length.as_deref().and_then(parse_code_length) {
        config.code_length = value;
    }
}

/// Accepts a positive cell count; rejects zero and anything non-numeric.
fn parse_code_length(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok().filter(|count| *count > 0)
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("OTP_WIDGET_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_string(&object, "api_base_url"),
        code_length: read_runtime_string(&object, "code_length"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_string(object: &js_sys::Object, key: &str) -> Option<String> {
    js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value,
        parse_code_length,
    };

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  http://localhost:3000 "),
            Some("http://localhost:3000".to_string())
        );
    }

    #[test]
    fn parse_code_length_rejects_zero_and_garbage() {
        assert_eq!(parse_code_length("6"), Some(6));
        assert_eq!(parse_code_length(" 4 "), Some(4));
        assert_eq!(parse_code_length("0"), None);
        assert_eq!(parse_code_length("-1"), None);
        assert_eq!(parse_code_length("six"), None);
    }

    #[test]
    fn apply_runtime_overrides_ignores_blank_and_invalid_values() {
        let mut config = AppConfig {
            api_base_url: "http://localhost:3000".to_string(),
            code_length: 6,
        };
        let runtime = RuntimeConfig {
            api_base_url: Some("   ".to_string()),
            code_length: Some("zero".to_string()),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.code_length, 6);
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig {
            api_base_url: "http://localhost:3000".to_string(),
            code_length: 6,
        };
        let runtime = RuntimeConfig {
            api_base_url: Some(" https://otp.example ".to_string()),
            code_length: Some("4".to_string()),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://otp.example");
        assert_eq!(config.code_length, 4);
    }

    #[test]
    fn load_falls_back_to_defaults() {
        let config = AppConfig::load();
        assert!(!config.api_base_url.is_empty());
        assert!(config.code_length > 0);
    }
}
