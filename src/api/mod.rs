mod client;
mod endpoint;
mod error;
mod notice;
mod transport;

pub use client::{ApiClient, SubmitOutcome};
pub use notice::{Notice, NoticeLevel};
pub use transport::{ReqwestTransport, Transport};

#[cfg(test)]
pub use endpoint::Endpoint;
#[cfg(test)]
pub use transport::{scripted::ScriptedTransport, RawResponse};
