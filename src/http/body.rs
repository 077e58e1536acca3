//! Response body module
//!
//! [`ResponseBody`] is the body carried by every response the helper builds.
//! All variants are cheap to clone: files are referenced by path and only
//! opened once hyper starts polling the body.

use std::io;
use std::path::{Path, PathBuf};

use futures_util::{stream, TryStreamExt};
use http_body_util::combinators::UnsyncBoxBody;
use http_body_util::{BodyExt, Empty, Full, StreamBody};
use hyper::body::{Bytes, Frame};
use hyper::Response;
use tokio::fs::File;
use tokio_util::io::ReaderStream;

use super::response::HttpResponse;

/// Body type handed to hyper
pub type BoxedBody = UnsyncBoxBody<Bytes, io::Error>;

/// Body of a response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResponseBody {
    /// No body
    #[default]
    Empty,
    /// UTF-8 text (plain, HTML or serialized JSON)
    Text(String),
    /// Raw bytes
    Binary(Bytes),
    /// File streamed from disk in chunks
    File(PathBuf),
}

impl ResponseBody {
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// In-memory bytes of this body, `None` for empty and file bodies
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Text(text) => Some(text.as_bytes()),
            Self::Binary(bytes) => Some(bytes),
            Self::Empty | Self::File(_) => None,
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            _ => None,
        }
    }

    /// Convert into a body hyper can transmit
    pub fn into_boxed(self) -> BoxedBody {
        match self {
            Self::Empty => Empty::<Bytes>::new().map_err(|never| match never {}).boxed_unsync(),
            Self::Text(text) => full(Bytes::from(text)),
            Self::Binary(bytes) => full(bytes),
            Self::File(path) => file_stream(path),
        }
    }
}

impl From<String> for ResponseBody {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Bytes> for ResponseBody {
    fn from(bytes: Bytes) -> Self {
        Self::Binary(bytes)
    }
}

/// Convert a helper response into a hyper response
pub fn into_hyper(response: HttpResponse) -> Response<BoxedBody> {
    response.map(ResponseBody::into_boxed)
}

fn full(bytes: Bytes) -> BoxedBody {
    Full::new(bytes).map_err(|never| match never {}).boxed_unsync()
}

/// Open errors surface as the first frame error
fn file_stream(path: PathBuf) -> BoxedBody {
    let frames = stream::once(File::open(path))
        .map_ok(ReaderStream::new)
        .try_flatten()
        .map_ok(Frame::data);
    StreamBody::new(frames).boxed_unsync()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn collect(body: ResponseBody) -> io::Result<Bytes> {
        Ok(body.into_boxed().collect().await?.to_bytes())
    }

    #[test]
    fn test_accessors() {
        let text = ResponseBody::Text("hello".to_string());
        assert_eq!(text.as_text(), Some("hello"));
        assert_eq!(text.as_bytes(), Some(&b"hello"[..]));
        assert!(!text.is_empty());

        let binary = ResponseBody::Binary(Bytes::from_static(&[1, 2, 3]));
        assert_eq!(binary.as_text(), None);
        assert_eq!(binary.as_bytes(), Some(&[1u8, 2, 3][..]));

        let file = ResponseBody::File(PathBuf::from("a.png"));
        assert_eq!(file.as_bytes(), None);
        assert_eq!(file.file_path(), Some(Path::new("a.png")));

        assert!(ResponseBody::default().is_empty());
    }

    #[tokio::test]
    async fn test_collect_in_memory_bodies() {
        assert!(collect(ResponseBody::Empty).await.unwrap().is_empty());
        assert_eq!(
            collect(ResponseBody::Text("hi".to_string())).await.unwrap(),
            Bytes::from_static(b"hi")
        );
        assert_eq!(
            collect(ResponseBody::Binary(Bytes::from_static(b"\x00\xff")))
                .await
                .unwrap(),
            Bytes::from_static(b"\x00\xff")
        );
    }

    #[tokio::test]
    async fn test_file_body_streams_contents() {
        let dir = std::env::temp_dir().join(format!("fetch_helper_body_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("data.bin");
        let data: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
        std::fs::write(&path, &data).unwrap();

        let collected = collect(ResponseBody::File(path)).await.unwrap();
        assert_eq!(collected.len(), data.len());
        assert_eq!(&collected[..], &data[..]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_file_body_open_error_is_reported_lazily() {
        let body = ResponseBody::File(PathBuf::from("/definitely/not/here.txt"));
        let err = collect(body).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_into_hyper_keeps_parts() {
        let mut response = Response::new(ResponseBody::Text("x".to_string()));
        *response.status_mut() = hyper::StatusCode::CREATED;
        response
            .headers_mut()
            .insert("x-test", hyper::header::HeaderValue::from_static("1"));

        let converted = into_hyper(response);
        assert_eq!(converted.status(), hyper::StatusCode::CREATED);
        assert_eq!(converted.headers()["x-test"], "1");
    }
}
