//! Remote collaborators: the form-intake endpoints and static assets

mod client;
mod error;
mod traits;

pub use client::RemoteClient;
pub use error::SubmitError;
pub use traits::RemoteClientTrait;

#[cfg(test)]
pub use traits::MockRemoteClientTrait;
