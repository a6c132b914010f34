//! Cloudflare HTTP request methods.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{CF_API_BASE, CloudflareProvider, CloudflareResponse};

impl CloudflareProvider {
    /// Unwrap the Cloudflare response envelope, mapping API-level errors.
    fn parse_envelope<T: for<'de> Deserialize<'de>>(
        &self,
        response_text: &str,
        context: ErrorContext,
    ) -> Result<CloudflareResponse<T>> {
        let cf_response: CloudflareResponse<T> =
            serde_json::from_str(response_text).map_err(|e| {
                log::error!("JSON parse failure: {e}");
                log::error!("Raw response: {response_text}");
                self.parse_error(e)
            })?;

        if !cf_response.success {
            let (code, message) = cf_response
                .errors
                .and_then(|errors| {
                    errors
                        .first()
                        .map(|e| (e.code.to_string(), e.message.clone()))
                })
                .unwrap_or_else(|| (String::new(), "Unknown error".to_string()));
            log::error!("API error: {message}");
            return Err(self.map_error(RawApiError::with_code(code, message), context));
        }

        Ok(cf_response)
    }

    /// Execute a GET request.
    pub(crate) async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        context: ErrorContext,
    ) -> Result<T> {
        let url = format!("{CF_API_BASE}{path}");
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        let response_text = response
            .text()
            .await
            .map_err(|e| self.network_error(format!("failed to read response: {e}")))?;

        let cf_response = self.parse_envelope::<T>(&response_text, context)?;
        cf_response
            .result
            .ok_or_else(|| self.parse_error("response is missing the result field"))
    }

    /// Execute a POST request.
    pub(crate) async fn post<T: for<'de> Deserialize<'de>, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<T> {
        let url = format!("{CF_API_BASE}{path}");
        log::debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(body)
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        let response_text = response
            .text()
            .await
            .map_err(|e| self.network_error(format!("failed to read response: {e}")))?;

        let cf_response = self.parse_envelope::<T>(&response_text, context)?;
        cf_response
            .result
            .ok_or_else(|| self.parse_error("response is missing the result field"))
    }

    /// Execute a PUT request (full-record replace).
    pub(crate) async fn put<T: for<'de> Deserialize<'de>, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<T> {
        let url = format!("{CF_API_BASE}{path}");
        log::debug!("PUT {url}");

        let response = self
            .client
            .put(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(body)
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        let response_text = response
            .text()
            .await
            .map_err(|e| self.network_error(format!("failed to read response: {e}")))?;

        let cf_response = self.parse_envelope::<T>(&response_text, context)?;
        cf_response
            .result
            .ok_or_else(|| self.parse_error("response is missing the result field"))
    }

    /// Execute a DELETE request.
    pub(crate) async fn delete(&self, path: &str, context: ErrorContext) -> Result<()> {
        let url = format!("{CF_API_BASE}{path}");
        log::debug!("DELETE {url}");

        let response = self
            .client
            .delete(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        let response_text = response
            .text()
            .await
            .map_err(|e| self.network_error(format!("failed to read response: {e}")))?;

        self.parse_envelope::<serde_json::Value>(&response_text, context)?;
        Ok(())
    }
}
