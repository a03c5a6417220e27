//! Typed request options and response records for each endpoint.
//!
//! Optional fields serialize as field omission, never as an explicit null;
//! the service treats a present-but-null field as a value.

pub mod batch;
pub mod common;
pub mod extract;
pub mod meta;
pub mod screenshot;
pub mod video;

pub use batch::{BatchItemResult, BatchOptions, BatchResult, BatchStatus};
pub use common::{Cookie, DevicePreset, Geolocation, HttpAuth, ProxyConfig};
pub use extract::{AnalyzeOptions, AnalyzeResult, ExtractOptions, ExtractResult, ExtractType};
pub use meta::{CapabilitiesResult, DeviceInfo, DevicesResult, PingResult, Usage};
pub use screenshot::{
    AsyncJob, ImageFormat, MetadataFields, PageMetadata, PdfDocumentOptions, PdfOptions,
    ResponseType, ScreenshotJobStatus, ScreenshotOptions, ScreenshotResult, ThumbnailOptions,
};
pub use video::{ScrollEasing, VideoOptions, VideoResult};

/// Serde helper: omit plain `bool` fields when false.
pub(crate) fn is_false(v: &bool) -> bool {
    !*v
}
