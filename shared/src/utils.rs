use lambda_http::http::StatusCode;
use lambda_http::{Error, Response};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

pub fn json_response(
    status: &StatusCode,
    body: &impl Serialize,
) -> Result<Response<String>, Error> {
    text_json_response(status, serde_json::to_string(body)?)
}

/// Same as `json_response` but pretty-printed with a 4-space indent.
pub fn pretty_json_response(
    status: &StatusCode,
    body: &impl Serialize,
) -> Result<Response<String>, Error> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    body.serialize(&mut serializer)?;

    text_json_response(status, String::from_utf8(buffer)?)
}

fn text_json_response(status: &StatusCode, body: String) -> Result<Response<String>, Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(body)
        .map_err(Box::new)?;

    Ok(response)
}
