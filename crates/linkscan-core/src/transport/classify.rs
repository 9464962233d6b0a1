//! Map curl errors onto the transport error taxonomy.

use crate::transport::TransportErrorKind;

/// Classify a curl error into a transport error kind.
///
/// DNS failures are split out from generic connection failures because the
/// report distinguishes "name does not resolve" (usually a typo or a retired
/// hostname) from "host resolves but refuses/drops connections".
pub fn classify_curl_error(e: &curl::Error) -> TransportErrorKind {
    if e.is_couldnt_resolve_host() || e.is_couldnt_resolve_proxy() {
        return TransportErrorKind::NameResolution;
    }
    if e.is_operation_timedout() {
        return TransportErrorKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return TransportErrorKind::Connection;
    }
    TransportErrorKind::Other
}
