//! ESP gateway adapter — pin toggling and device listing on `commesp`.
//!
//! Requests carry an action tag plus the pin/power fields the remote
//! action log expects. The reply shape is shared by every `commesp`
//! method: `{result, message?, data?}` with `result == "ok"` signalling
//! success.

use log::{debug, info};

use crate::bus::connection::BusConnection;
use crate::bus::invoke::invoke;
use crate::config::BusConfig;
use crate::error::Result;
use crate::msg::attr::{Attr, TableBuilder};
use crate::msg::decode::decode;
use crate::msg::schema::{Field, FieldKind};

/// Reply schema shared by the `commesp` methods.
pub const ESP_RESPONSE_SCHEMA: &[Field] = &[
    Field::new("result", FieldKind::String),
    Field::new("message", FieldKind::String),
    Field::new("data", FieldKind::String),
];

/// Action tag embedded in outbound `commesp` requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EspAction {
    /// Switch one remote pin on or off.
    TogglePin,
    /// Enumerate the devices the gateway knows about.
    ListDevices,
}

impl EspAction {
    /// Wire tag for this action.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::TogglePin => "toggle_pin",
            Self::ListDevices => "list_devices",
        }
    }
}

/// Pin toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EspRequest {
    /// Remote pin identifier.
    pub pin: u32,
    /// Desired power state; also selects the `on`/`off` method.
    pub power: bool,
}

/// Decoded `commesp` reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EspResponse {
    /// True iff the remote reported `result == "ok"` (exact match).
    pub success: bool,
    /// Human-readable detail, when the remote sent one.
    pub message: Option<String>,
    /// Method-specific payload, when the remote sent one.
    pub data: Option<String>,
    /// Set only when the mandatory `result` field was present.
    pub parsed_successfully: bool,
}

/// Build the toggle request tree. Pure function of the request.
pub fn encode_toggle(request: &EspRequest) -> Attr {
    TableBuilder::new()
        .string("action", EspAction::TogglePin.tag())
        .int32("pin", request.pin as i32)
        .int32("power", i32::from(request.power))
        .build()
}

/// Build the device-list request tree.
pub fn encode_list_devices() -> Attr {
    TableBuilder::new()
        .string("action", EspAction::ListDevices.tag())
        .build()
}

/// Decode a `commesp` reply tree.
///
/// A missing `result` field flags the record as unparsed and leaves
/// every other field at its default. Any `result` other than `"ok"` is
/// a parsed failure — there is no distinct unknown-status state.
pub fn decode_esp_response(tree: &Attr) -> EspResponse {
    let fields = decode(ESP_RESPONSE_SCHEMA, tree);
    let Some(result) = fields.get("result").and_then(Attr::as_str) else {
        return EspResponse::default();
    };

    EspResponse {
        success: result == "ok",
        message: fields
            .get("message")
            .and_then(Attr::as_str)
            .map(str::to_owned),
        data: fields.get("data").and_then(Attr::as_str).map(str::to_owned),
        parsed_successfully: true,
    }
}

/// Toggle a remote pin via the ESP gateway service.
///
/// The method name follows the requested power state (`on`/`off`).
pub fn toggle_pin<C>(conn: &C, request: &EspRequest, config: &BusConfig) -> Result<EspResponse>
where
    C: BusConnection + ?Sized,
{
    let method = if request.power { "on" } else { "off" };
    let response = invoke(
        conn,
        &config.esp_service,
        method,
        Some(encode_toggle(request)),
        decode_esp_response,
        config.call_timeout(),
    )?;

    if response.parsed_successfully {
        info!(
            "BUS: pin {} -> {} ({})",
            request.pin,
            method,
            if response.success { "ok" } else { "rejected" }
        );
    } else {
        debug!("BUS: toggle reply carried no result field");
    }
    Ok(response)
}

/// List the devices registered with the ESP gateway service.
pub fn list_devices<C>(conn: &C, config: &BusConfig) -> Result<EspResponse>
where
    C: BusConnection + ?Sized,
{
    let response = invoke(
        conn,
        &config.esp_service,
        "list",
        Some(encode_list_devices()),
        decode_esp_response,
        config.call_timeout(),
    )?;
    if !response.parsed_successfully {
        debug!("BUS: device list reply carried no result field");
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_ok_means_success() {
        let tree = TableBuilder::new().string("result", "ok").build();
        let response = decode_esp_response(&tree);
        assert!(response.success);
        assert!(response.parsed_successfully);
        assert!(response.message.is_none());
        assert!(response.data.is_none());
    }

    #[test]
    fn any_other_result_is_parsed_failure() {
        let tree = TableBuilder::new()
            .string("result", "error")
            .string("message", "pin busy")
            .build();
        let response = decode_esp_response(&tree);
        assert!(!response.success);
        assert!(response.parsed_successfully);
        assert_eq!(response.message.as_deref(), Some("pin busy"));
    }

    #[test]
    fn result_match_is_case_sensitive() {
        let tree = TableBuilder::new().string("result", "OK").build();
        assert!(!decode_esp_response(&tree).success);
    }

    #[test]
    fn missing_result_flags_unparsed() {
        let tree = TableBuilder::new().string("message", "hello").build();
        let response = decode_esp_response(&tree);
        assert!(!response.parsed_successfully);
        assert!(!response.success);
    }

    #[test]
    fn optional_fields_copied_verbatim() {
        let tree = TableBuilder::new()
            .string("result", "ok")
            .string("data", "{\"devices\":[]}")
            .build();
        let response = decode_esp_response(&tree);
        assert_eq!(response.data.as_deref(), Some("{\"devices\":[]}"));
    }

    #[test]
    fn toggle_encoding_is_pure() {
        let request = EspRequest { pin: 4, power: true };
        assert_eq!(encode_toggle(&request), encode_toggle(&request));

        let tree = encode_toggle(&request);
        assert_eq!(
            tree.get("action").and_then(Attr::as_str),
            Some("toggle_pin")
        );
        assert_eq!(tree.get("pin").and_then(Attr::as_i32), Some(4));
        assert_eq!(tree.get("power").and_then(Attr::as_i32), Some(1));
    }
}
