//! Minimal HTTP/1.1 request reader.

use super::HttpError;
use std::io::{BufRead, Read};

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 100 * 1024;

/// Largest accepted header section.
const MAX_HEADER_BYTES: usize = 16 * 1024;

/// A parsed request. Only what the routes need is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Upper-case method token.
    pub method: String,
    /// Path without the query string.
    pub path: String,
    /// Header names are lower-cased.
    pub headers: Vec<(String, String)>,
    /// Raw body.
    pub body: Vec<u8>,
}

impl Request {
    /// Build a request directly, without going through the wire format.
    pub fn new(method: &str, path: &str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            method: method.to_ascii_uppercase(),
            path: path.to_string(),
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Value of header `name` (case-insensitive), if present.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Read one request from `reader`.
    pub fn read_from<R: BufRead>(reader: &mut R) -> Result<Self, HttpError> {
        let mut consumed = 0usize;
        let request_line = read_line(reader, &mut consumed)?;
        if request_line.is_empty() {
            return Err(HttpError::Malformed("empty request".into()));
        }

        let mut parts = request_line.split_whitespace();
        let (Some(method), Some(target), Some(version)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(HttpError::Malformed(format!("bad request line {request_line:?}")));
        };
        if !version.starts_with("HTTP/1.") {
            return Err(HttpError::Malformed(format!("unsupported version {version}")));
        }
        let path = target.split(['?', '#']).next().unwrap_or("/").to_string();

        let mut headers = Vec::new();
        loop {
            let line = read_line(reader, &mut consumed)?;
            if line.is_empty() {
                break;
            }
            let Some((name, value)) = line.split_once(':') else {
                return Err(HttpError::Malformed(format!("bad header {line:?}")));
            };
            headers.push((name.trim().to_ascii_lowercase(), value.trim().to_string()));
        }

        let mut request = Request {
            method: method.to_ascii_uppercase(),
            path,
            headers,
            body: Vec::new(),
        };
        if request.header("transfer-encoding").is_some() {
            return Err(HttpError::Unsupported("Transfer-Encoding"));
        }

        let length = match request.header("content-length") {
            None => 0,
            Some(v) => v
                .parse::<usize>()
                .map_err(|_| HttpError::Malformed(format!("bad Content-Length {v:?}")))?,
        };
        if length > MAX_BODY_BYTES {
            return Err(HttpError::BodyTooLarge(length));
        }
        request.body = vec![0; length];
        reader.read_exact(&mut request.body)?;
        Ok(request)
    }
}

fn read_line<R: BufRead>(reader: &mut R, consumed: &mut usize) -> Result<String, HttpError> {
    let mut line = String::new();
    let n = reader
        .by_ref()
        .take((MAX_HEADER_BYTES - *consumed) as u64)
        .read_line(&mut line)?;
    *consumed += n;
    if !line.ends_with('\n') {
        return Err(if *consumed >= MAX_HEADER_BYTES {
            HttpError::HeadersTooLarge
        } else {
            HttpError::Malformed("connection closed mid-request".into())
        });
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(raw: &str) -> Result<Request, HttpError> {
        Request::read_from(&mut Cursor::new(raw.as_bytes().to_vec()))
    }

    #[test]
    fn reads_body_by_content_length() {
        let req = parse(
            "POST /calcular?x=1 HTTP/1.1\r\nHost: a\r\nContent-Type: application/json\r\n\
             Content-Length: 2\r\n\r\n{}trailing",
        )
        .unwrap();
        assert_eq!(req.method, "POST");
        assert_eq!(req.path, "/calcular");
        assert_eq!(req.header("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(req.body, b"{}");
    }

    #[test]
    fn no_content_length_means_empty_body() {
        let req = parse("GET /health HTTP/1.0\n\n").unwrap();
        assert!(req.body.is_empty());
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(parse(""), Err(HttpError::Malformed(_))));
        assert!(matches!(parse("GET\r\n\r\n"), Err(HttpError::Malformed(_))));
        assert!(matches!(parse("GET / SPDY/3\r\n\r\n"), Err(HttpError::Malformed(_))));
        assert!(matches!(parse("GET / HTTP/1.1\r\nnocolon\r\n\r\n"), Err(HttpError::Malformed(_))));
        assert!(matches!(
            parse("POST / HTTP/1.1\r\nContent-Length: many\r\n\r\n"),
            Err(HttpError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_oversized_and_chunked_bodies() {
        let raw = format!("POST / HTTP/1.1\r\nContent-Length: {}\r\n\r\n", MAX_BODY_BYTES + 1);
        assert!(matches!(parse(&raw), Err(HttpError::BodyTooLarge(_))));
        assert!(matches!(
            parse("POST / HTTP/1.1\r\nTransfer-Encoding: chunked\r\n\r\n"),
            Err(HttpError::Unsupported(_))
        ));
    }

    #[test]
    fn short_body_is_an_io_error() {
        assert!(matches!(
            parse("POST / HTTP/1.1\r\nContent-Length: 10\r\n\r\n{}"),
            Err(HttpError::Io(_))
        ));
    }

    #[test]
    fn header_section_is_bounded() {
        let raw = format!("GET / HTTP/1.1\r\nX-Big: {}\r\n\r\n", "a".repeat(MAX_HEADER_BYTES));
        assert!(matches!(parse(&raw), Err(HttpError::HeadersTooLarge)));
    }
}
