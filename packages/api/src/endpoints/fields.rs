use crate::cancel::CancelToken;
use crate::models::{Field, FieldInput};
use crate::transport::Transport;
use crate::{ApiClient, ApiError};

const FIELDS: &str = "/api/v1/fields/";

fn field_path(id: &str) -> String {
    format!("{FIELDS}{id}/")
}

pub struct FieldApi<'a, T> {
    pub(super) client: &'a ApiClient<T>,
}

impl<T: Transport> FieldApi<'_, T> {
    pub async fn list(&self, cancel: &CancelToken) -> Result<Vec<Field>, ApiError> {
        self.client.get(FIELDS, &[], cancel).await
    }

    pub async fn get(&self, id: &str, cancel: &CancelToken) -> Result<Field, ApiError> {
        self.client.get(&field_path(id), &[], cancel).await
    }

    pub async fn create(&self, input: &FieldInput, cancel: &CancelToken) -> Result<Field, ApiError> {
        self.client.post(FIELDS, input, cancel).await
    }

    pub async fn update(
        &self,
        id: &str,
        input: &FieldInput,
        cancel: &CancelToken,
    ) -> Result<Field, ApiError> {
        self.client.put(&field_path(id), input, cancel).await
    }

    pub async fn delete(&self, id: &str, cancel: &CancelToken) -> Result<(), ApiError> {
        self.client.delete(&field_path(id), cancel).await
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::MockTransport;
    use crate::transport::Method;
    use crate::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_update_puts_to_item_path() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Put,
            "/api/v1/fields/5/",
            200,
            json!({"id": 5, "name": "South", "area": 3.5, "crop_type": "rice"}),
        );
        let client = ApiClient::new(mock.clone(), "http://farm.test");

        let input = FieldInput {
            name: "South".into(),
            area: 3.5,
            crop_type: "rice".into(),
            ..Default::default()
        };
        let field = client
            .fields()
            .update("5", &input, &CancelToken::new())
            .await
            .unwrap();

        assert_eq!(field.id, "5");
        let sent = &mock.requests()[0];
        assert_eq!(sent.url, "http://farm.test/api/v1/fields/5/");
        assert_eq!(sent.json().unwrap()["crop_type"], "rice");
        assert!(sent.json().unwrap().get("latitude").is_none());
    }
}
