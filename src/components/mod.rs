pub mod design_system;
pub mod note_editor_modal;
pub mod notes_page;
pub mod template_editor_modal;

use std::future::Future;
use std::pin::Pin;

use crate::api::ApiError;

/// Boxed future returned by the async callback props handed to the modals.
pub type HandlerFuture<T> = Pin<Box<dyn Future<Output = Result<T, ApiError>>>>;
