use serde::{Serialize, de::DeserializeOwned};

use crate::{Client, ClientError, ClientResult};

/// Making requests to the Swing Music API.
impl Client {
    /// Make a `GET` request to `endpoint` with the given query parameters and
    /// deserialize the JSON body as `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the response is not valid.
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        parameters: &[(&str, String)],
    ) -> ClientResult<T> {
        let request = self
            .client
            .get(self.url(endpoint))
            .bearer_auth(&self.access_token)
            .query(parameters);

        Self::parse_response(Self::send(request).await?)
    }

    /// Make a `POST` request to `endpoint` with a JSON body and deserialize
    /// the JSON response as `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the response is not valid.
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ClientResult<T> {
        Self::parse_response(self.post_raw(endpoint, body).await?)
    }

    /// Make a `POST` request and return the raw response body. Used for
    /// endpoints whose body carries nothing we need.
    pub(crate) async fn post_raw<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ClientResult<Vec<u8>> {
        let request = self
            .client
            .post(self.url(endpoint))
            .bearer_auth(&self.access_token)
            .json(body);

        Self::send(request).await
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    async fn send(request: reqwest::RequestBuilder) -> ClientResult<Vec<u8>> {
        let response = request.send().await?;
        let status = response.status();
        let bytes: Vec<u8> = response.bytes().await?.into();
        Self::check_status(status.as_u16(), bytes)
    }

    /// Turn a non-success status into a [`ClientError::StatusError`], keeping
    /// the body as the message when it is readable.
    pub(crate) fn check_status(code: u16, bytes: Vec<u8>) -> ClientResult<Vec<u8>> {
        if (200..300).contains(&code) {
            return Ok(bytes);
        }

        let message = String::from_utf8(bytes)
            .ok()
            .map(|body| body.trim().to_string())
            .filter(|body| !body.is_empty());
        Err(ClientError::StatusError { code, message })
    }

    pub(crate) fn parse_response<T: DeserializeOwned>(bytes: Vec<u8>) -> ClientResult<T> {
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status() {
        assert!(Client::check_status(200, b"{}".to_vec()).is_ok());

        match Client::check_status(401, b"  token expired \n".to_vec()) {
            Err(ClientError::StatusError { code, message }) => {
                assert_eq!(code, 401);
                assert_eq!(message.as_deref(), Some("token expired"));
            }
            other => panic!("unexpected result: {other:?}"),
        }

        match Client::check_status(503, vec![]) {
            Err(ClientError::StatusError { code, message }) => {
                assert_eq!(code, 503);
                assert_eq!(message, None);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_url_joins_endpoint() {
        let client = Client::new("http://localhost:1970", "token");
        assert_eq!(client.url("/getall/albums"), "http://localhost:1970/getall/albums");
        assert_eq!(client.url("album"), "http://localhost:1970/album");
    }
}
