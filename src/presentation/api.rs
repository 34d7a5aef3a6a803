// Toast-reporting API wrappers - failures surface as error toasts
use crate::infrastructure::api_client::{ApiClient, ApiError};
use crate::presentation::toast::{ToastKind, ToastTray};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const GET_ERROR_MESSAGE: &str = "Failed to fetch data. Please try again.";
pub const POST_ERROR_MESSAGE: &str = "Failed to process request. Please try again.";

/// API client paired with the page's toast tray: every failure shows an
/// error toast and still propagates to the caller.
pub struct ApiSession {
    client: ApiClient,
    toasts: ToastTray,
}

impl ApiSession {
    pub fn new(client: ApiClient, toasts: ToastTray) -> Self {
        Self { client, toasts }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        match self.client.get_json(path).await {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!("API GET error: {e}");
                self.toasts.show(GET_ERROR_MESSAGE, ToastKind::Error);
                Err(e)
            }
        }
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        match self.client.post_json(path, body).await {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!("API POST error: {e}");
                self.toasts.show(POST_ERROR_MESSAGE, ToastKind::Error);
                Err(e)
            }
        }
    }

    pub fn toasts(&self) -> &ToastTray {
        &self.toasts
    }
}
