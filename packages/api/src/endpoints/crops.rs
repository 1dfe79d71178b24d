use crate::cancel::CancelToken;
use crate::models::crop::RecommendationList;
use crate::models::{
    Crop, CropRecommendation, DiseaseResult, PestResult, RecommendationRequest, YieldPrediction,
    YieldRequest,
};
use crate::transport::{FilePart, Transport};
use crate::{ApiClient, ApiError};

const CROPS: &str = "/api/v1/crops/";
const RECOMMENDATIONS: &str = "/api/v1/crops/recommendations/";
const DISEASE_DETECTION: &str = "/api/v1/crops/disease-detection/";
const PEST_DETECTION: &str = "/api/v1/crops/pest-detection/";
const YIELD_PREDICTION: &str = "/api/v1/crops/yield-prediction/";

/// Multipart field name the detection endpoints read the image from.
pub const IMAGE_FIELD: &str = "image";

pub struct CropApi<'a, T> {
    pub(super) client: &'a ApiClient<T>,
}

impl<T: Transport> CropApi<'_, T> {
    pub async fn list_crops(&self, cancel: &CancelToken) -> Result<Vec<Crop>, ApiError> {
        self.client.get(CROPS, &[], cancel).await
    }

    pub async fn recommend(
        &self,
        request: &RecommendationRequest,
        cancel: &CancelToken,
    ) -> Result<Vec<CropRecommendation>, ApiError> {
        let list: RecommendationList = self.client.post(RECOMMENDATIONS, request, cancel).await?;
        Ok(list.recommendations)
    }

    /// Upload one image for disease classification.
    ///
    /// `crop_type` is forwarded as a form field when known.
    pub async fn detect_disease(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
        crop_type: Option<&str>,
        cancel: &CancelToken,
    ) -> Result<DiseaseResult, ApiError> {
        let file = image_part(file_name, content_type, bytes);
        self.client
            .upload(DISEASE_DETECTION, file, extra_fields(crop_type), cancel)
            .await
    }

    pub async fn detect_pest(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
        crop_type: Option<&str>,
        cancel: &CancelToken,
    ) -> Result<PestResult, ApiError> {
        let file = image_part(file_name, content_type, bytes);
        self.client
            .upload(PEST_DETECTION, file, extra_fields(crop_type), cancel)
            .await
    }

    pub async fn predict_yield(
        &self,
        request: &YieldRequest,
        cancel: &CancelToken,
    ) -> Result<YieldPrediction, ApiError> {
        self.client.post(YIELD_PREDICTION, request, cancel).await
    }
}

fn image_part(file_name: &str, content_type: &str, bytes: Vec<u8>) -> FilePart {
    FilePart {
        field: IMAGE_FIELD.to_string(),
        file_name: file_name.to_string(),
        content_type: content_type.to_string(),
        bytes,
    }
}

fn extra_fields(crop_type: Option<&str>) -> Vec<(String, String)> {
    crop_type
        .map(|crop| vec![("crop_type".to_string(), crop.to_string())])
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use crate::testing::MockTransport;
    use crate::transport::{Method, RequestBody};
    use crate::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_detect_disease_sends_multipart_image() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Post,
            "/api/v1/crops/disease-detection/",
            200,
            json!({"is_healthy": false, "disease": "Blight", "confidence": 0.91}),
        );
        let client = ApiClient::new(mock.clone(), "http://farm.test");

        let result = client
            .crops()
            .detect_disease("leaf.jpg", "image/jpeg", vec![1, 2, 3], Some("tomato"), &CancelToken::new())
            .await
            .unwrap();
        assert_eq!(result.headline(), "Blight");

        match &mock.requests()[0].body {
            RequestBody::Multipart { file, fields } => {
                assert_eq!(file.field, "image");
                assert_eq!(file.file_name, "leaf.jpg");
                assert_eq!(file.content_type, "image/jpeg");
                assert_eq!(file.bytes, vec![1, 2, 3]);
                assert_eq!(fields, &vec![("crop_type".to_string(), "tomato".to_string())]);
            }
            other => panic!("expected multipart body, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_crops() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Get,
            "/api/v1/crops/",
            200,
            json!([{"id": 1, "name": "Wheat", "season": "Rabi", "durationDays": 120},
                   {"id": "2", "name": "Rice"}]),
        );
        let client = ApiClient::new(mock.clone(), "http://farm.test");

        let crops = client.crops().list_crops(&CancelToken::new()).await.unwrap();

        assert_eq!(crops.len(), 2);
        assert_eq!(crops[0].id, "1");
        assert_eq!(crops[0].duration_days, Some(120));
        assert_eq!(crops[1].season, None);
        let sent = &mock.requests()[0];
        assert_eq!(sent.method, Method::Get);
        assert_eq!(sent.url, "http://farm.test/api/v1/crops/");
    }

    #[tokio::test]
    async fn test_recommend_unwraps_envelope() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Post,
            "/api/v1/crops/recommendations/",
            200,
            json!({"recommendations": [{"crop": "rice", "confidence": 0.8}, {"crop": "maize", "confidence": 0.6}]}),
        );
        let client = ApiClient::new(mock.clone(), "http://farm.test");
        let recs = client
            .crops()
            .recommend(&RecommendationRequest::default(), &CancelToken::new())
            .await
            .unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].crop, "rice");
        assert_eq!(recs[1].confidence_percent(), 60);
    }
}
